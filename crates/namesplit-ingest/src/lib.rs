//! User roster ingestion and name splitting.
//!
//! This crate reads a roster CSV, finds its `name` column, splits every name
//! into `first_name` and `last_name` on the first space, and writes the result
//! as a new CSV.
//!
//! # Features
//!
//! - **CSV Loading**: Read the whole file into memory, first record as header
//! - **Name Splitting**: Trim, then split on the first space only
//! - **CSV Output**: Standard quoting, atomic replacement of the target file
//!
//! # Example
//!
//! ```ignore
//! use namesplit_ingest::{SplitOptions, run};
//!
//! let report = run(&SplitOptions::new("users.csv", "users.split.csv"))?;
//! println!("Processed {} rows", report.rows_processed);
//! ```

mod csv;
mod error;
mod name;
mod run;
mod transform;

// === Error Types ===
pub use error::{Result, SplitError};

// === CSV Reading and Writing ===
pub use self::csv::{
    CsvTable, FIRST_NAME_COLUMN, LAST_NAME_COLUMN, NAME_COLUMN, NameColumn, check_input_exists,
    find_name_column, is_name_header, read_csv_table, split_headers, write_csv_table,
};

// === Splitting ===
pub use name::split_name;
pub use transform::{SplitExample, SplitOutcome, split_row, split_table};

// === Run ===
pub use run::{
    DEFAULT_EXAMPLE_LIMIT, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, SplitOptions, SplitReport, run,
};
