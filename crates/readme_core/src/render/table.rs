//! Pipe-table helpers shared by every table-shaped output.
//!
//! # Invariants
//! - Every row emitted by one table has exactly as many cells as its header
//!   and separator rows. Short rows are padded with empty cells; long rows
//!   lose their excess cells. The separator is never shortened.

use crate::model::element::TableBlock;

/// Column alignment written into a separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Default,
    Center,
}

impl Align {
    fn marker(self) -> &'static str {
        match self {
            Self::Default => "---",
            Self::Center => ":---:",
        }
    }
}

/// Joins cells into `| a | b |`.
pub fn pipe_row<S: AsRef<str>>(cells: &[S]) -> String {
    let joined = cells
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" | ");
    format!("| {joined} |")
}

/// Separator row for `columns` columns.
pub fn separator_row(columns: usize, align: Align) -> String {
    pipe_row(&vec![align.marker(); columns])
}

/// Pads or truncates `row` to exactly `columns` cells.
pub fn fit_row<S: AsRef<str>>(row: &[S], columns: usize) -> Vec<String> {
    let mut fitted: Vec<String> = row
        .iter()
        .take(columns)
        .map(|cell| cell.as_ref().to_string())
        .collect();
    fitted.resize(columns, String::new());
    fitted
}

/// Escapes text so it stays inside one cell.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

/// Counts the pipe-delimited cells of one table line, ignoring `\|`.
///
/// Returns `0` for lines that are not table rows.
pub fn cell_count(line: &str) -> usize {
    let line = line.trim();
    if !line.starts_with('|') || !line.ends_with('|') || line.len() < 2 {
        return 0;
    }

    let mut pipes: usize = 0;
    let mut escaped = false;
    for ch in line.chars() {
        match ch {
            '\\' if !escaped => escaped = true,
            '|' if !escaped => pipes += 1,
            _ => escaped = false,
        }
    }
    pipes.saturating_sub(1)
}

/// Renders a table element as a markdown pipe table.
///
/// `headers.len()` fixes the column count. A table without headers renders
/// nothing.
pub fn render_table(block: &TableBlock) -> String {
    let columns = block.headers.len();
    if columns == 0 {
        return String::new();
    }

    let mut lines = Vec::with_capacity(block.rows.len() + 2);
    let headers: Vec<String> = block.headers.iter().map(|cell| escape_cell(cell)).collect();
    lines.push(pipe_row(&headers));
    lines.push(separator_row(columns, Align::Default));
    for row in &block.rows {
        let cells: Vec<String> = fit_row(row, columns)
            .iter()
            .map(|cell| escape_cell(cell))
            .collect();
        lines.push(pipe_row(&cells));
    }

    format!("{}\n\n", lines.join("\n"))
}

/// Lays `cells` out in rows of at most `max_columns`, under a blank centred
/// header.
///
/// The column count is `min(max_columns, cells.len())`; the last row is
/// padded. Returns an empty string for no cells.
pub fn centered_grid(cells: &[String], max_columns: usize) -> String {
    let columns = cells.len().min(max_columns.max(1));
    if columns == 0 {
        return String::new();
    }

    let mut lines = Vec::with_capacity(cells.len() / columns + 3);
    lines.push(pipe_row(&vec![""; columns]));
    lines.push(separator_row(columns, Align::Center));
    for chunk in cells.chunks(columns) {
        lines.push(pipe_row(&fit_row(chunk, columns)));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{cell_count, centered_grid, fit_row, pipe_row};

    #[test]
    fn pipe_row_keeps_empty_cells_visible() {
        assert_eq!(pipe_row(&["1", ""]), "| 1 |  |");
    }

    #[test]
    fn fit_row_pads_and_truncates() {
        assert_eq!(fit_row(&["a"], 3), vec!["a", "", ""]);
        assert_eq!(fit_row(&["a", "b", "c"], 2), vec!["a", "b"]);
    }

    #[test]
    fn cell_count_ignores_escaped_pipes() {
        assert_eq!(cell_count("| a \\| b | c |"), 2);
        assert_eq!(cell_count("|  |  |"), 2);
        assert_eq!(cell_count("not a row"), 0);
    }

    #[test]
    fn centered_grid_pads_last_row() {
        let cells: Vec<String> = ["a", "b", "c", "d"].iter().map(|c| c.to_string()).collect();
        let grid = centered_grid(&cells, 3);
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines[0], "|  |  |  |");
        assert_eq!(lines[1], "| :---: | :---: | :---: |");
        assert_eq!(lines[3], "| d |  |  |");
        assert!(lines.iter().all(|line| cell_count(line) == 3));
    }
}
