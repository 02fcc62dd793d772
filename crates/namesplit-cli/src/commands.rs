use anyhow::{Context, Result};
use tracing::{debug, info_span, warn};

use namesplit_ingest::{SplitError, SplitOptions, SplitReport, run};

use crate::logging::redact_value;

/// Outcome of a split command that did not fail.
#[derive(Debug)]
pub enum SplitRun {
    Completed(SplitReport),
    /// Missing input or missing name column: reported, nothing written.
    Terminated(SplitError),
}

pub fn run_split(options: &SplitOptions) -> Result<SplitRun> {
    let span = info_span!("split_names", dry_run = options.dry_run);
    let _guard = span.enter();

    let report = match run(options) {
        Ok(report) => report,
        Err(error) if error.is_early_termination() => {
            warn!(%error, "split stopped early");
            return Ok(SplitRun::Terminated(error));
        }
        Err(error) => {
            return Err(error).with_context(|| {
                format!(
                    "split names: {} -> {}",
                    options.input.display(),
                    options.output.display()
                )
            });
        }
    };

    for (number, example) in report.examples.iter().enumerate() {
        debug!(
            example = number + 1,
            original = redact_value(&example.original),
            first_name = redact_value(&example.first_name),
            last_name = redact_value(&example.last_name),
            "split example"
        );
    }
    Ok(SplitRun::Completed(report))
}

/// Process exit code for a split outcome.
pub fn exit_code(outcome: &SplitRun) -> i32 {
    match outcome {
        SplitRun::Completed(_) => 0,
        SplitRun::Terminated(_) => 1,
    }
}
