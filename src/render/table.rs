//! Markdown pipe tables.

use crate::model::{Table, TableRow};

/// Convert a table to a Markdown pipe table.
///
/// The first row is the header; a `---` separator with the same cell count
/// follows it. Cell text is trimmed and `|` escaped. The result ends with
/// one newline.
pub fn convert_table(table: &Table) -> String {
    let mut lines = Vec::with_capacity(table.row_count() + 1);

    for (i, row) in table.rows.iter().enumerate() {
        let cells = escaped_cells(row);
        lines.push(format_row(&cells));

        if i == 0 {
            let separator = vec!["---"; cells.len()];
            lines.push(format_row(&separator));
        }
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn escaped_cells(row: &TableRow) -> Vec<String> {
    row.cells
        .iter()
        .map(|cell| escape_cell(cell.trim()))
        .collect()
}

/// Escape pipe characters so they do not split the cell.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn format_row<S: AsRef<str>>(cells: &[S]) -> String {
    let joined = cells
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(" | ");
    format!("| {} |", joined)
}
