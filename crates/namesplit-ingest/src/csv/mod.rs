//! CSV reading, header handling, and writing.

mod header;
mod reader;
mod writer;

pub use header::{
    FIRST_NAME_COLUMN, LAST_NAME_COLUMN, NAME_COLUMN, NameColumn, find_name_column,
    is_name_header, split_headers,
};
pub use reader::{CsvTable, check_input_exists, read_csv_table};
pub use writer::write_csv_table;
