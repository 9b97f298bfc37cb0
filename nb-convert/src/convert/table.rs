//! Pipe-table rendering.

use super::tags;
use crate::notebook::Cell;
use crate::tree::nodes::{Row, Table};

/// Renders a table as one markdown cell holding a pipe-delimited table.
///
/// The header row falls back to the first body row when the table has no
/// explicit head rows. Separator dash runs match the header cell text widths.
/// Footnote rows are emitted after the body rows. A table with no rows at all
/// yields an empty result; that is a valid outcome, not an error.
pub(crate) fn convert_table(table: &Table) -> Vec<Cell> {
    let mut head: Vec<&Row> = table.head.iter().collect();
    let mut body: Vec<&Row> = table.body.iter().chain(table.foot.iter()).collect();
    if head.is_empty() && body.is_empty() {
        return Vec::new();
    }

    let header = if head.is_empty() {
        body.remove(0)
    } else {
        head.remove(0)
    };

    let mut lines = vec!["\n".to_string()];
    lines.push(format_row(header));
    let separator = header
        .iter()
        .map(|cell| "-".repeat(cell.chars().count()))
        .collect::<Vec<_>>()
        .join(" | ");
    lines.push(format!("| {separator} |\n"));
    for row in head {
        lines.push(format_row(row));
    }
    for row in body {
        lines.push(format_row(row));
    }
    lines.push("\n".to_string());

    vec![Cell::markdown_tagged(tags::TABLE, lines)]
}

fn format_row(row: &[String]) -> String {
    let mut line = String::from("| ");
    for cell in row {
        line.push_str(cell);
        line.push_str(" | ");
    }
    format!("{}\n", line.trim_end())
}
