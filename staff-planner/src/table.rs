/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Format-agnostic tabular data exchanged with the I/O adapter.
//!
//! ```text
//! xlsx / csv ──(adapter)──►  Table  ──(input)──►  People / Projects
//!                                                     │
//! xlsx / csv ◄──(adapter)──  Table  ◄──(report)── Reports
//! ```
//!
//! The planner never sees a file format: the adapter turns whatever it reads
//! into [`Table`]s, and every report turns itself back into a [`Table`].

use std::fmt;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A single typed cell value.
///
/// Spreadsheets deliver real numbers, CSV files deliver text only.  Numeric
/// columns therefore accept both representations via [`Cell::as_number`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Build a text cell; whitespace-only input becomes [`Cell::Empty`].
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Cell::Empty
        } else if trimmed.len() == value.len() {
            Cell::Text(value)
        } else {
            Cell::Text(trimmed.to_string())
        }
    }

    /// `true` for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Numeric value of the cell, parsing text when needed.
    ///
    /// Returns `None` for blank cells, unparsable text, and non-finite
    /// numbers (NaN / ±∞ never count as a value).
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Cell::Empty => return None,
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        n.is_finite().then_some(n)
    }

    /// Display text of the cell, trimmed.  Blank cells yield `""`.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Text(s) => s.trim().to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            // f64 Display is the shortest round-trip form: 3.0 → "3", 33.3 → "33.3"
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::text(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Number(f64::from(value))
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Number(value as f64)
    }
}

// ── Table ─────────────────────────────────────────────────────────────────────

static EMPTY_CELL: Cell = Cell::Empty;

/// A named grid with one header row.
///
/// Rows may be shorter than the header (ragged CSV, trailing empty Excel
/// cells); missing positions read as [`Cell::Empty`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// Sheet name on output; the source sheet or file stem on input.
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Empty table with the given header row.
    pub fn new<S: Into<String>>(name: impl Into<String>, headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Position of the column whose trimmed header equals `header`.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == header)
    }

    /// Cell at `(row, col)`, or [`Cell::Empty`] when out of range.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    /// `true` if every cell in `row` is blank.
    pub fn is_blank_row(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .map_or(true, |r| r.iter().all(Cell::is_blank))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_cell_trims_and_collapses_blank() {
        assert_eq!(Cell::text("  Dev "), Cell::Text("Dev".into()));
        assert_eq!(Cell::text("   "), Cell::Empty);
        assert!(Cell::text("").is_blank());
    }

    #[test]
    fn as_number_parses_text_and_rejects_garbage() {
        assert_eq!(Cell::Number(4.5).as_number(), Some(4.5));
        assert_eq!(Cell::text(" 12 ").as_number(), Some(12.0));
        assert_eq!(Cell::text("twelve").as_number(), None);
        assert_eq!(Cell::Empty.as_number(), None);
        assert_eq!(Cell::Number(f64::NAN).as_number(), None);
    }

    #[test]
    fn number_display_drops_trailing_zero_fraction() {
        assert_eq!(Cell::from(3_i64).to_string(), "3");
        assert_eq!(Cell::from(33.3).to_string(), "33.3");
        assert_eq!(Cell::Empty.to_string(), "");
    }

    #[test]
    fn cell_lookup_tolerates_ragged_rows() {
        let mut t = Table::new("People", ["Name", "Roles"]);
        t.push_row(vec![Cell::text("Ann")]);
        assert_eq!(t.cell(0, 0), &Cell::Text("Ann".into()));
        assert_eq!(t.cell(0, 1), &Cell::Empty);
        assert_eq!(t.cell(5, 0), &Cell::Empty);
    }

    #[test]
    fn column_index_ignores_header_whitespace() {
        let t = Table::new("Projects", [" Project ", "Priority"]);
        assert_eq!(t.column_index("Project"), Some(0));
        assert_eq!(t.column_index("Dev"), None);
    }

    #[test]
    fn blank_row_detection() {
        let mut t = Table::new("People", ["Name"]);
        t.push_row(vec![Cell::Empty, Cell::text(" ")]);
        t.push_row(vec![Cell::text("Ann")]);
        assert!(t.is_blank_row(0));
        assert!(!t.is_blank_row(1));
    }
}
