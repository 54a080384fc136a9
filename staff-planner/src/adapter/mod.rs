/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! File I/O at the edges of a planning run.
//!
//! Reading turns a `.csv` file or one worksheet of a spreadsheet into a
//! [`Table`](crate::table::Table).  Writing turns the report tables into an
//! `.xlsx` workbook or a directory of CSV files.  Nothing in here knows
//! about people, projects or allocation.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::AdapterError;
pub use reader::read_table;
pub use writer::write_reports;

use std::path::Path;

/// Input file formats, chosen by extension (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    /// `.xlsx`, `.xlsm` or `.xls`, read through `calamine`.
    Spreadsheet,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self, AdapterError> {
        let extension = extension_of(path);
        match extension.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "xlsx" | "xlsm" | "xls" => Ok(FileFormat::Spreadsheet),
            _ => Err(AdapterError::UnsupportedFormat {
                path: path.display().to_string(),
                extension,
            }),
        }
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}
