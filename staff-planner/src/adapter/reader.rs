/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Table readers for CSV files and spreadsheet worksheets.
//!
//! The first row is the header row; header text is trimmed.  Data rows are
//! kept as they are, blank ones included, so row numbers in input errors
//! line up with what the user sees in the file.  The `csv` crate drops empty
//! lines, so CSV rows are re-padded from each record's line number.

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::table::{Cell, Table};

use super::{AdapterError, FileFormat};

/// Read one table from `path`.
///
/// For spreadsheets `sheet` selects the worksheet.  For CSV files the whole
/// file is the table and `sheet` only names it.
pub fn read_table(path: &Path, sheet: &str) -> Result<Table> {
    let table = match FileFormat::from_path(path)? {
        FileFormat::Csv => read_csv(path, sheet)?,
        FileFormat::Spreadsheet => read_worksheet(path, sheet)?,
    };
    info!(
        "Read '{}' from {}: {} column(s), {} row(s)",
        table.name,
        path.display(),
        table.headers.len(),
        table.len()
    );
    Ok(table)
}

fn read_csv(path: &Path, name: &str) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header row of {}", path.display()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut table = Table::new(name, headers);
    for (idx, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("Failed to read CSV record {} of {}", idx + 1, path.display()))?;
        if let Some(pos) = record.position() {
            // file line L holds data row L - 2 (header on line 1)
            let data_row = usize::try_from(pos.line()).unwrap_or(usize::MAX).saturating_sub(2);
            while table.len() < data_row {
                table.push_row(Vec::new());
            }
        }
        table.push_row(record.iter().map(Cell::text).collect());
    }
    Ok(table)
}

fn read_worksheet(path: &Path, sheet: &str) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook {}", path.display()))?;

    let names = workbook.sheet_names();
    if !names.iter().any(|n| n == sheet) {
        return Err(AdapterError::SheetNotFound {
            path: path.display().to_string(),
            sheet: sheet.to_string(),
            available: names.join(", "),
        }
        .into());
    }

    let range = workbook
        .worksheet_range(sheet)
        .with_context(|| format!("Failed to read sheet '{}' of {}", sheet, path.display()))?;
    debug!(sheet, start = ?range.start(), size = ?range.get_size(), "Worksheet range");

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(|c| c.to_string().trim().to_string()).collect())
        .unwrap_or_default();

    let mut table = Table::new(sheet, headers);
    for row in rows {
        table.push_row(row.iter().map(to_cell).collect());
    }
    Ok(table)
}

/// Map a worksheet value onto the planner's cell model.
fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::text(s.as_str()),
        other => Cell::text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, TempDir};

    fn csv_file(content: &str) -> tempfile::NamedTempFile {
        let mut f = Builder::new().suffix(".csv").tempfile().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn csv_headers_are_trimmed_and_cells_typed_as_text() {
        let f = csv_file(" Name , CapacityDays,VacationDays,Roles\nAnn,10,2,\"Dev, QA\"\n");
        let table = read_table(f.path(), "People").unwrap();

        assert_eq!(table.name, "People");
        assert_eq!(table.headers, vec!["Name", "CapacityDays", "VacationDays", "Roles"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, 0).as_text(), "Ann");
        assert_eq!(table.cell(0, 1).as_number(), Some(10.0));
        assert_eq!(table.cell(0, 3).as_text(), "Dev, QA");
    }

    #[test]
    fn csv_short_rows_read_as_blank_cells() {
        let f = csv_file("Project,Priority,Dev,QA\nX,1\n");
        let table = read_table(f.path(), "Projects").unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.cell(0, 3).is_blank());
    }

    #[test]
    fn csv_empty_lines_keep_file_line_numbers() {
        let f = csv_file("Name,CapacityDays,VacationDays,Roles\nAnn,5,0,Dev\n\n,5,0,QA\n");
        let table = read_table(f.path(), "People").unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.is_blank_row(1));

        let err = crate::input::build_people(&table).unwrap_err();
        assert_eq!(
            err,
            crate::input::InputError::MissingIdentity {
                table: "People",
                row: 4,
                column: "Name",
            }
        );
    }

    #[test]
    fn unsupported_extension_is_an_adapter_error() {
        let f = Builder::new().suffix(".txt").tempfile().unwrap();
        let err = read_table(f.path(), "People").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AdapterError>(),
            Some(AdapterError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn missing_csv_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(read_table(&dir.path().join("absent.csv"), "People").is_err());
    }

    #[test]
    fn worksheet_is_read_by_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.xlsx");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let people = workbook.add_worksheet();
        people.set_name("People").unwrap();
        people.write_string(0, 0, "Name").unwrap();
        people.write_string(0, 1, "CapacityDays").unwrap();
        people.write_string(1, 0, "Ann").unwrap();
        people.write_number(1, 1, 10.0).unwrap();
        let other = workbook.add_worksheet();
        other.set_name("Notes").unwrap();
        other.write_string(0, 0, "ignored").unwrap();
        workbook.save(&path).unwrap();

        let table = read_table(&path, "People").unwrap();
        assert_eq!(table.headers, vec!["Name", "CapacityDays"]);
        assert_eq!(table.cell(0, 0).as_text(), "Ann");
        assert_eq!(table.cell(0, 1), &Cell::Number(10.0));
    }

    #[test]
    fn missing_worksheet_is_reported_with_available_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.xlsx");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.add_worksheet().set_name("Team").unwrap();
        workbook.save(&path).unwrap();

        let err = read_table(&path, "People").unwrap_err();
        match err.downcast_ref::<AdapterError>() {
            Some(AdapterError::SheetNotFound {
                sheet, available, ..
            }) => {
                assert_eq!(sheet, "People");
                assert_eq!(available, "Team");
            }
            other => panic!("expected SheetNotFound, got {:?}", other),
        }
    }

    #[test]
    fn worksheet_values_map_to_cells() {
        assert_eq!(to_cell(&Data::Empty), Cell::Empty);
        assert_eq!(to_cell(&Data::Int(4)), Cell::Number(4.0));
        assert_eq!(to_cell(&Data::Float(2.5)), Cell::Number(2.5));
        assert_eq!(to_cell(&Data::String("  ".into())), Cell::Empty);
        assert_eq!(to_cell(&Data::Bool(true)), Cell::Text("true".into()));
    }
}
