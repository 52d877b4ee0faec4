//! Minimal RFC 4180 style cell quoting for the CSV store.

use std::borrow::Cow;

/// Quote a cell if it contains a comma, double quote or line break.
///
/// Interior double quotes are doubled. Cells that need no quoting are
/// returned borrowed.
pub fn escape_cell(cell: &str) -> Cow<'_, str> {
    if !cell.contains([',', '"', '\n', '\r']) {
        return Cow::Borrowed(cell);
    }
    Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
}

/// Join escaped cells with commas. No trailing newline.
pub fn format_row(cells: &[&str]) -> String {
    cells
        .iter()
        .map(|c| escape_cell(c))
        .collect::<Vec<_>>()
        .join(",")
}

/// Split one CSV record (without its terminating newline) back into cells.
///
/// Inverse of [`format_row`]. Returns `None` when a quoted cell is left
/// unterminated.
pub fn parse_row(row: &str) -> Option<Vec<String>> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            ('"', true) => in_quotes = false,
            ('"', false) if current.is_empty() => in_quotes = true,
            (',', false) => cells.push(std::mem::take(&mut current)),
            (other, _) => current.push(other),
        }
    }

    if in_quotes {
        return None;
    }
    cells.push(current);
    Some(cells)
}
