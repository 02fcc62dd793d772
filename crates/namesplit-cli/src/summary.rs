use std::io::{self, Write};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use namesplit_ingest::{SplitError, SplitExample, SplitReport};

pub fn print_summary(out: &mut impl Write, report: &SplitReport) -> io::Result<()> {
    writeln!(out, "Original header: {:?}", report.original_headers)?;
    writeln!(
        out,
        "Name column found at index: {}",
        report.name_column.index
    )?;
    writeln!(out, "New header: {:?}", report.headers)?;
    if let Some(table) = examples_table(&report.examples) {
        writeln!(out, "{table}")?;
    }
    writeln!(out)?;
    writeln!(out, "Processing complete!")?;
    writeln!(
        out,
        "Processed {} rows ({} skipped)",
        report.rows_processed, report.rows_skipped
    )?;
    if report.written {
        writeln!(out, "Output saved to: {}", report.output.display())
    } else {
        writeln!(
            out,
            "Dry run: output not written to {}",
            report.output.display()
        )
    }
}

/// Report an early termination.
pub fn print_termination(out: &mut impl Write, error: &SplitError) -> io::Result<()> {
    if let SplitError::MissingNameColumn { headers, .. } = error {
        writeln!(out, "Original header: {headers:?}")?;
    }
    writeln!(out, "Error: {error}")
}

/// Table of sampled splits, `None` when there are no samples.
pub fn examples_table(examples: &[SplitExample]) -> Option<Table> {
    if examples.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Name"),
        header_cell("First name"),
        header_cell("Last name"),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (number, example) in examples.iter().enumerate() {
        table.add_row(vec![
            Cell::new(number + 1),
            value_cell(&example.original),
            value_cell(&example.first_name),
            value_cell(&example.last_name),
        ]);
    }
    Some(table)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

// Quoted so leading and interior spaces stay visible.
fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        Cell::new("''").fg(Color::DarkGrey)
    } else {
        Cell::new(format!("'{value}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(original: &str, first: &str, last: &str) -> SplitExample {
        SplitExample {
            original: original.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    #[test]
    fn test_examples_table_empty() {
        assert!(examples_table(&[]).is_none());
    }

    #[test]
    fn test_examples_table_rows() {
        let table = examples_table(&[
            example("Jane Doe", "Jane", "Doe"),
            example("Prince", "Prince", ""),
        ])
        .unwrap();

        assert_eq!(table.row_iter().count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("'Jane'"));
        assert!(rendered.contains("'Prince'"));
        assert!(rendered.contains("Last name"));
    }
}
