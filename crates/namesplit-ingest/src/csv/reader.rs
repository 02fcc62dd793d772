//! CSV file reading into an in-memory table.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{Result, SplitError};

use super::header::normalize_header;

/// Decoded CSV contents: the header record and every following record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Check that the input exists as a file before opening it.
pub fn check_input_exists(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(()),
        Ok(_) => Err(SplitError::InputNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(SplitError::InputNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(SplitError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Reads a CSV file, treating the first record as the header.
///
/// Records may have any number of fields; nothing is padded or truncated.
/// Field values are kept verbatim, only a BOM on the first header field is removed.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    check_input_exists(path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_read_error(path, e))?;

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => {
            let record = record.map_err(|e| csv_read_error(path, e))?;
            record
                .iter()
                .enumerate()
                .map(|(idx, value)| {
                    if idx == 0 {
                        normalize_header(value)
                    } else {
                        value.to_string()
                    }
                })
                .collect()
        }
        None => {
            return Err(SplitError::EmptyInput {
                path: path.to_path_buf(),
            });
        }
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|e| csv_read_error(path, e))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read CSV table"
    );
    Ok(CsvTable { headers, rows })
}

fn csv_read_error(path: &Path, source: csv::Error) -> SplitError {
    if let csv::ErrorKind::Io(io) = source.kind() {
        if io.kind() == std::io::ErrorKind::NotFound {
            return SplitError::InputNotFound {
                path: path.to_path_buf(),
            };
        }
    }
    SplitError::CsvRead {
        path: path.to_path_buf(),
        source,
    }
}
