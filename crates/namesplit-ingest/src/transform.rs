//! In-memory transformation of a roster table.

use crate::csv::{CsvTable, NameColumn, split_headers};
use crate::name::split_name;

/// One sampled name split, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitExample {
    pub original: String,
    pub first_name: String,
    pub last_name: String,
}

/// Result of splitting the name column of a table.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    pub name_column: NameColumn,
    /// Header as read from the input.
    pub original_headers: Vec<String>,
    /// Header with `first_name` and `last_name` in place of the name column.
    pub headers: Vec<String>,
    /// Transformed rows, in input order.
    pub rows: Vec<Vec<String>>,
    /// The first `example_limit` splits.
    pub examples: Vec<SplitExample>,
    /// Rows dropped because they end before the name column.
    pub skipped: usize,
}

/// Splits the name field of a single row.
///
/// Returns `None` when the row has no value at `index`. Every other field
/// keeps its value and relative order.
pub fn split_row(row: &[String], index: usize) -> Option<Vec<String>> {
    let name = row.get(index)?;
    let (first, last) = split_name(name);
    let mut split = Vec::with_capacity(row.len() + 1);
    split.extend_from_slice(&row[..index]);
    split.push(first.to_string());
    split.push(last.to_string());
    split.extend_from_slice(&row[index + 1..]);
    Some(split)
}

/// Splits the name column of every row in `table`.
pub fn split_table(
    table: &CsvTable,
    name_column: NameColumn,
    example_limit: usize,
) -> SplitOutcome {
    let index = name_column.index;
    let headers = split_headers(&table.headers, index);
    let mut rows = Vec::with_capacity(table.rows.len());
    let mut examples = Vec::new();
    let mut skipped = 0usize;

    for (row_number, row) in table.rows.iter().enumerate() {
        let Some(split) = split_row(row, index) else {
            skipped += 1;
            tracing::trace!(row = row_number + 1, fields = row.len(), "skipping short row");
            continue;
        };
        if examples.len() < example_limit {
            examples.push(SplitExample {
                original: row[index].clone(),
                first_name: split[index].clone(),
                last_name: split[index + 1].clone(),
            });
        }
        rows.push(split);
    }

    SplitOutcome {
        name_column,
        original_headers: table.headers.clone(),
        headers,
        rows,
        examples,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::find_name_column;
    use proptest::prelude::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable {
            headers: strings(headers),
            rows: rows.iter().map(|row| strings(row)).collect(),
        }
    }

    #[test]
    fn test_split_row_scenarios() {
        assert_eq!(
            split_row(&strings(&["1", "Jane Doe", "30"]), 1).unwrap(),
            vec!["1", "Jane", "Doe", "30"]
        );
        assert_eq!(
            split_row(&strings(&["2", "Prince", "40"]), 1).unwrap(),
            vec!["2", "Prince", "", "40"]
        );
        assert_eq!(
            split_row(&strings(&["3", "", "25"]), 1).unwrap(),
            vec!["3", "", "", "25"]
        );
        assert_eq!(
            split_row(&strings(&["4", "  Mary   Jane Watson  ", "22"]), 1).unwrap(),
            vec!["4", "Mary", "  Jane Watson", "22"]
        );
    }

    #[test]
    fn test_split_row_too_short() {
        assert!(split_row(&strings(&["5"]), 1).is_none());
        assert!(split_row(&[], 0).is_none());
    }

    #[test]
    fn test_split_row_name_last() {
        assert_eq!(
            split_row(&strings(&["1", "Ann Lee"]), 1).unwrap(),
            vec!["1", "Ann", "Lee"]
        );
    }

    #[test]
    fn test_split_table_counts_and_examples() {
        let input = table(
            &["id", "name", "age"],
            &[
                &["1", "Jane Doe", "30"],
                &["5"],
                &["2", "Prince", "40"],
                &["3", "", "25"],
            ],
        );
        let name_column = find_name_column(&input.headers).unwrap();

        let outcome = split_table(&input, name_column, 2);

        assert_eq!(outcome.headers, vec!["id", "first_name", "last_name", "age"]);
        assert_eq!(outcome.original_headers, vec!["id", "name", "age"]);
        assert_eq!(outcome.rows.len(), 3);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.rows[1], vec!["2", "Prince", "", "40"]);
        assert_eq!(
            outcome.examples,
            vec![
                SplitExample {
                    original: "Jane Doe".to_string(),
                    first_name: "Jane".to_string(),
                    last_name: "Doe".to_string(),
                },
                SplitExample {
                    original: "Prince".to_string(),
                    first_name: "Prince".to_string(),
                    last_name: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_split_table_without_examples() {
        let input = table(&["name"], &[&["Ann Lee"]]);
        let name_column = find_name_column(&input.headers).unwrap();

        let outcome = split_table(&input, name_column, 0);

        assert!(outcome.examples.is_empty());
        assert_eq!(outcome.rows, vec![strings(&["Ann", "Lee"])]);
    }

    proptest! {
        #[test]
        fn prop_split_row_preserves_other_fields(
            row in proptest::collection::vec(".*", 0..8),
            index in 0usize..8,
        ) {
            match split_row(&row, index) {
                None => prop_assert!(row.len() <= index),
                Some(split) => {
                    prop_assert_eq!(split.len(), row.len() + 1);
                    prop_assert_eq!(&split[..index], &row[..index]);
                    prop_assert_eq!(&split[index + 2..], &row[index + 1..]);
                    let (first, last) = split_name(&row[index]);
                    prop_assert_eq!(split[index].as_str(), first);
                    prop_assert_eq!(split[index + 1].as_str(), last);
                }
            }
        }
    }
}
