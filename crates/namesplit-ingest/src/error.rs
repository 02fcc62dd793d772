//! Error types for roster ingestion and name splitting.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while splitting a roster file.
#[derive(Debug, Error)]
pub enum SplitError {
    // === Early Terminations ===
    /// Input CSV file does not exist.
    #[error("{path} not found!")]
    InputNotFound { path: PathBuf },

    /// Header has no column named `name` (case-insensitive).
    #[error("'name' column not found in {path}!")]
    MissingNameColumn { path: PathBuf, headers: Vec<String> },

    // === File System Errors ===
    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create, flush, or persist the output file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// CSV file has no header record.
    #[error("CSV file is empty: {path}")]
    EmptyInput { path: PathBuf },

    /// Failed to decode a CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to encode a CSV record.
    #[error("failed to write CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl SplitError {
    /// Returns true for the expected stops that are reported without a failure trace.
    pub fn is_early_termination(&self) -> bool {
        matches!(
            self,
            Self::InputNotFound { .. } | Self::MissingNameColumn { .. }
        )
    }
}

/// Result type for name splitting operations.
pub type Result<T> = std::result::Result<T, SplitError>;
