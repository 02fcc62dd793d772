//! CSV output with atomic replacement of the target file.

use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tempfile::NamedTempFile;

use crate::error::{Result, SplitError};

/// Writes a header and rows to `path`.
///
/// Records are written to a temporary file beside `path` and moved over it
/// once everything is flushed, so a failed write never leaves a partial file.
/// Quoting follows standard CSV rules and records end with CRLF.
pub fn write_csv_table(path: &Path, headers: &[String], rows: &[Vec<String>]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| file_write_error(path, e))?;
    let temp_file = NamedTempFile::new_in(dir).map_err(|e| file_write_error(path, e))?;

    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_writer(temp_file);
    writer
        .write_record(headers)
        .map_err(|e| csv_write_error(path, e))?;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| csv_write_error(path, e))?;
    }

    let temp_file = writer
        .into_inner()
        .map_err(|e| file_write_error(path, e.into_error()))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| file_write_error(path, e))?;
    temp_file
        .persist(path)
        .map_err(|e| file_write_error(path, e.error))?;

    tracing::debug!(
        path = %path.display(),
        rows = rows.len(),
        "wrote CSV table"
    );
    Ok(())
}

fn file_write_error(path: &Path, source: std::io::Error) -> SplitError {
    SplitError::FileWrite {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_write_error(path: &Path, source: csv::Error) -> SplitError {
    SplitError::CsvWrite {
        path: path.to_path_buf(),
        source,
    }
}
