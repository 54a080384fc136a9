/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error type for the input model builder.
//!
//! Every variant is fatal: the run aborts before any allocation.  Each one
//! names the table, and where relevant the spreadsheet row (header = row 1)
//! and column, so the user can fix the input without further digging.
//!
//! Coverage problems are **not** errors; they surface as
//! [`PlanNotice`](crate::notice::PlanNotice)s instead.

use thiserror::Error;

/// Why the raw input tables could not be turned into a planning model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A required header is absent from the table.
    #[error("{table} table is missing required column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    /// A data row has a blank identity cell (`Name` / `Project`).
    #[error("{table} table row {row}: '{column}' is blank")]
    MissingIdentity {
        table: &'static str,
        row: usize,
        column: &'static str,
    },

    /// The identity value already appeared on an earlier row.
    #[error("{table} table row {row}: duplicate {column} '{value}' (first seen on row {first_row})")]
    DuplicateKey {
        table: &'static str,
        row: usize,
        first_row: usize,
        column: &'static str,
        value: String,
    },

    /// A numeric column holds text that is not a number.
    #[error("{table} table row {row}: '{column}' value '{value}' is not a number")]
    InvalidNumber {
        table: &'static str,
        row: usize,
        column: String,
        value: String,
    },
}
