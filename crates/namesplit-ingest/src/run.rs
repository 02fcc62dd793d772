//! End-to-end roster split: read, locate the name column, split, write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, info_span};

use crate::csv::{NameColumn, find_name_column, read_csv_table, write_csv_table};
use crate::error::{Result, SplitError};
use crate::transform::{SplitExample, split_table};

/// Input roster, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "db/universe.users.trimmed.csv";
/// Output roster, written next to the input.
pub const DEFAULT_OUTPUT_PATH: &str = "db/universe.users.trimmed.modified.csv";
/// Number of sample splits kept for the report.
pub const DEFAULT_EXAMPLE_LIMIT: usize = 10;

/// Options for a single split run.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub example_limit: usize,
    /// Transform and report without writing the output file.
    pub dry_run: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            example_limit: DEFAULT_EXAMPLE_LIMIT,
            dry_run: false,
        }
    }
}

impl SplitOptions {
    /// Create options for explicit input and output paths.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    /// Set how many sample splits are kept.
    #[must_use]
    pub fn with_example_limit(mut self, limit: usize) -> Self {
        self.example_limit = limit;
        self
    }

    /// Enable or disable dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, enable: bool) -> Self {
        self.dry_run = enable;
        self
    }
}

/// What a completed run did.
#[derive(Debug, Clone)]
pub struct SplitReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub name_column: NameColumn,
    pub original_headers: Vec<String>,
    pub headers: Vec<String>,
    pub rows_processed: usize,
    pub rows_skipped: usize,
    pub examples: Vec<SplitExample>,
    /// False for dry runs.
    pub written: bool,
}

/// Runs the split from `options.input` to `options.output`.
///
/// # Errors
///
/// Returns [`SplitError::InputNotFound`] or [`SplitError::MissingNameColumn`]
/// before anything is written, and I/O or CSV errors from reading and writing.
pub fn run(options: &SplitOptions) -> Result<SplitReport> {
    let input = options.input.as_path();
    let output = options.output.as_path();
    let span = info_span!(
        "split",
        input = %input.display(),
        output = %output.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_csv_table(input)?;
    info!(headers = ?table.headers, rows = table.rows.len(), "read input");

    let name_column = locate_name_column(input, &table.headers)?;
    info!(
        name_index = name_column.index,
        header = %name_column.header,
        "found name column"
    );

    let outcome = split_table(&table, name_column, options.example_limit);
    debug!(headers = ?outcome.headers, "split header");

    let written = if options.dry_run {
        info!("dry run, output not written");
        false
    } else {
        write_csv_table(output, &outcome.headers, &outcome.rows)?;
        true
    };

    info!(
        rows_processed = outcome.rows.len(),
        rows_skipped = outcome.skipped,
        duration_ms = start.elapsed().as_millis(),
        "split complete"
    );

    Ok(SplitReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        name_column: outcome.name_column,
        original_headers: outcome.original_headers,
        headers: outcome.headers,
        rows_processed: outcome.rows.len(),
        rows_skipped: outcome.skipped,
        examples: outcome.examples,
        written,
    })
}

fn locate_name_column(path: &Path, headers: &[String]) -> Result<NameColumn> {
    find_name_column(headers).ok_or_else(|| SplitError::MissingNameColumn {
        path: path.to_path_buf(),
        headers: headers.to_vec(),
    })
}
