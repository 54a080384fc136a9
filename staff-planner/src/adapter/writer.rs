/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Report writers.
//!
//! An output path ending in `.xlsx` receives one workbook, one worksheet per
//! table in the order given.  Any other path is treated as a directory that
//! receives one CSV file per table, named after the sheet
//! (`Project Gaps & Summary` → `project_gaps_summary.csv`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};
use tracing::{debug, info};

use crate::table::{Cell, Table};

/// Where the reports ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLocation {
    Workbook(PathBuf),
    /// Directory plus the CSV files written into it.
    CsvDirectory(PathBuf, Vec<PathBuf>),
}

impl std::fmt::Display for OutputLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputLocation::Workbook(path) => write!(f, "{}", path.display()),
            OutputLocation::CsvDirectory(dir, files) => {
                write!(f, "{} ({} CSV files)", dir.display(), files.len())
            }
        }
    }
}

/// Write `tables` to `path`, choosing the format from the extension.
pub fn write_reports(path: &Path, tables: &[Table]) -> Result<OutputLocation> {
    let is_workbook = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xlsx"));

    let location = if is_workbook {
        write_workbook(path, tables)?
    } else {
        write_csv_directory(path, tables)?
    };
    info!("Wrote {} report(s) to {}", tables.len(), location);
    Ok(location)
}

fn write_workbook(path: &Path, tables: &[Table]) -> Result<OutputLocation> {
    let header = Format::new().set_bold();
    let mut workbook = Workbook::new();

    for table in tables {
        let sheet = workbook.add_worksheet();
        sheet
            .set_name(table.name.as_str())
            .with_context(|| format!("Invalid worksheet name '{}'", table.name))?;

        for (col, title) in table.headers.iter().enumerate() {
            sheet
                .write_string_with_format(0, column(col)?, title.as_str(), &header)
                .with_context(|| format!("Failed to write header of '{}'", table.name))?;
        }

        for (idx, row) in table.rows.iter().enumerate() {
            let r = u32::try_from(idx + 1).context("Too many rows for a worksheet")?;
            for (col, cell) in row.iter().enumerate() {
                let c = column(col)?;
                match cell {
                    Cell::Empty => {}
                    Cell::Number(n) => {
                        sheet.write_number(r, c, *n)?;
                    }
                    Cell::Text(s) => {
                        sheet.write_string(r, c, s.as_str())?;
                    }
                }
            }
        }
        sheet.autofit();
        debug!(sheet = %table.name, rows = table.len(), "Worksheet written");
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save workbook {}", path.display()))?;
    Ok(OutputLocation::Workbook(path.to_path_buf()))
}

fn column(idx: usize) -> Result<u16> {
    u16::try_from(idx).context("Too many columns for a worksheet")
}

fn write_csv_directory(dir: &Path, tables: &[Table]) -> Result<OutputLocation> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut files = Vec::with_capacity(tables.len());
    for table in tables {
        let path = dir.join(csv_file_name(&table.name));
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row.iter().map(|c| c.to_string()))?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;

        debug!(file = %path.display(), rows = table.len(), "CSV report written");
        files.push(path);
    }
    Ok(OutputLocation::CsvDirectory(dir.to_path_buf(), files))
}

/// `"Project Gaps & Summary"` → `"project_gaps_summary.csv"`.
fn csv_file_name(sheet: &str) -> String {
    let slug = sheet
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_");
    format!("{}.csv", slug)
}
