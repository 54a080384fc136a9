/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use thiserror::Error;

/// File-level problems the adapter detects itself.
///
/// I/O and parse failures from `csv`, `calamine` and `rust_xlsxwriter` are
/// passed through as `anyhow` context chains instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    #[error("unsupported file format '{extension}' for {path} (expected .csv, .xlsx, .xlsm or .xls)")]
    UnsupportedFormat { path: String, extension: String },

    #[error("sheet '{sheet}' not found in {path} (available: {available})")]
    SheetNotFound {
        path: String,
        sheet: String,
        available: String,
    },
}
