/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Input model builder: raw [`Table`]s → [`InputModel`].
//!
//! # People table
//! | Column | Rule |
//! |---|---|
//! | `Name` | required, unique, non-blank |
//! | `CapacityDays` / `VacationDays` | required columns; blank cell = 0; fractions truncated |
//! | `Roles` | required column; free text, blank = no roles |
//!
//! # Projects table
//! | Column | Rule |
//! |---|---|
//! | `Project` | required, unique, non-blank |
//! | `Priority` | optional column; whole numbers; absent or blank → configured default + notice |
//! | anything else | one role-demand column each, left to right; labels must be unique |
//!
//! Demand cells are lenient: blank or non-numeric text is "no demand", numbers
//! are truncated toward zero, and only results above zero are kept.

pub mod error;

pub use error::InputError;

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::config::PlannerConfig;
use crate::model::{InputModel, Person, Project, RoleDemand};
use crate::notice::PlanNotice;
use crate::table::Table;

// ── Column names ──────────────────────────────────────────────────────────────

pub const PEOPLE_TABLE: &str = "People";
pub const PROJECTS_TABLE: &str = "Projects";

pub const COL_NAME: &str = "Name";
pub const COL_CAPACITY: &str = "CapacityDays";
pub const COL_VACATION: &str = "VacationDays";
pub const COL_ROLES: &str = "Roles";
pub const COL_PROJECT: &str = "Project";
pub const COL_PRIORITY: &str = "Priority";

/// Column label used in errors about the role headers themselves.
pub const COL_ROLE_HEADER: &str = "role header";

/// Spreadsheet row of the header.
const HEADER_ROW: usize = 1;

// ── Output of the projects pass ───────────────────────────────────────────────

/// Result of [`build_projects`].
#[derive(Debug, Clone, Default)]
pub struct ParsedProjects {
    /// Projects in input order.
    pub projects: Vec<Project>,
    /// Role-demand columns in declared order.
    pub role_columns: Vec<String>,
    /// Priority notices raised while parsing.
    pub notices: Vec<PlanNotice>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Build the full planning model from the two raw tables.
///
/// Returns the model plus every notice raised along the way.
///
/// # Errors
/// Any [`InputError`]; nothing is allocated when this fails.
pub fn build_model(
    people: &Table,
    projects: &Table,
    config: &PlannerConfig,
) -> Result<(InputModel, Vec<PlanNotice>), InputError> {
    let people = build_people(people)?;
    let parsed = build_projects(projects, config.default_priority)?;

    let model = InputModel {
        people,
        projects: parsed.projects,
        role_columns: parsed.role_columns,
    };
    Ok((model, parsed.notices))
}

/// Parse the People table.
pub fn build_people(table: &Table) -> Result<Vec<Person>, InputError> {
    let name_col = require_column(table, PEOPLE_TABLE, COL_NAME)?;
    let capacity_col = require_column(table, PEOPLE_TABLE, COL_CAPACITY)?;
    let vacation_col = require_column(table, PEOPLE_TABLE, COL_VACATION)?;
    let roles_col = require_column(table, PEOPLE_TABLE, COL_ROLES)?;

    let mut people = Vec::with_capacity(table.len());
    let mut seen: HashMap<String, usize> = HashMap::new();

    for idx in 0..table.len() {
        if table.is_blank_row(idx) {
            continue;
        }
        let row = sheet_row(idx);

        let name = identity(table, PEOPLE_TABLE, idx, name_col, COL_NAME)?;
        if let Some(&first_row) = seen.get(&name) {
            return Err(InputError::DuplicateKey {
                table: PEOPLE_TABLE,
                row,
                first_row,
                column: COL_NAME,
                value: name,
            });
        }
        seen.insert(name.clone(), row);

        let capacity = whole_days(table, PEOPLE_TABLE, idx, capacity_col)?;
        let vacation = whole_days(table, PEOPLE_TABLE, idx, vacation_col)?;
        let roles = table.cell(idx, roles_col).as_text();

        let person = Person::new(name, capacity, vacation, roles);
        debug!(
            name = %person.name,
            capacity = person.capacity_days,
            vacation = person.vacation_days,
            effective = person.effective_capacity(),
            roles = %person.roles,
            "person parsed"
        );
        people.push(person);
    }

    info!(count = people.len(), "People loaded");
    Ok(people)
}

/// Parse the Projects table.
///
/// `default_priority` is applied to every project when the `Priority` column
/// is absent, and to individual projects whose priority cell is blank.
pub fn build_projects(table: &Table, default_priority: i64) -> Result<ParsedProjects, InputError> {
    let project_col = require_column(table, PROJECTS_TABLE, COL_PROJECT)?;
    let priority_col = table.column_index(COL_PRIORITY);

    let mut notices = Vec::new();
    if priority_col.is_none() {
        let notice = PlanNotice::MissingPriorityColumn { default_priority };
        warn!("{}", notice);
        notices.push(notice);
    }

    // Every other non-empty header is a role column, in declared order.
    let role_cols: Vec<(usize, String)> = table
        .headers
        .iter()
        .enumerate()
        .filter(|&(c, _)| c != project_col && Some(c) != priority_col)
        .filter_map(|(c, h)| {
            let label = h.trim();
            if label.is_empty() {
                debug!(column = c, "ignoring column with empty header");
                None
            } else {
                Some((c, label.to_string()))
            }
        })
        .collect();

    // Demand and grants are keyed by role label, so each label may appear once.
    let mut seen_roles: HashMap<&str, usize> = HashMap::new();
    for (c, role) in &role_cols {
        if let Some(&first_col) = seen_roles.get(role.as_str()) {
            debug!(first_col, dup_col = c, role = %role, "duplicate role header");
            return Err(InputError::DuplicateKey {
                table: PROJECTS_TABLE,
                row: HEADER_ROW,
                first_row: HEADER_ROW,
                column: COL_ROLE_HEADER,
                value: role.clone(),
            });
        }
        seen_roles.insert(role.as_str(), *c);
    }

    let mut projects = Vec::with_capacity(table.len());
    let mut seen: HashMap<String, usize> = HashMap::new();

    for idx in 0..table.len() {
        if table.is_blank_row(idx) {
            continue;
        }
        let row = sheet_row(idx);

        let name = identity(table, PROJECTS_TABLE, idx, project_col, COL_PROJECT)?;
        if let Some(&first_row) = seen.get(&name) {
            return Err(InputError::DuplicateKey {
                table: PROJECTS_TABLE,
                row,
                first_row,
                column: COL_PROJECT,
                value: name,
            });
        }
        seen.insert(name.clone(), row);

        let priority = match priority_col {
            None => default_priority,
            Some(c) => {
                let cell = table.cell(idx, c);
                if cell.is_blank() {
                    let notice = PlanNotice::BlankPriority {
                        project: name.clone(),
                        default_priority,
                    };
                    warn!("{}", notice);
                    notices.push(notice);
                    default_priority
                } else {
                    // whole numbers only: truncating 1.2 and 1.5 would tie them
                    let value = cell
                        .as_number()
                        .filter(|n| n.fract() == 0.0)
                        .ok_or_else(|| InputError::InvalidNumber {
                            table: PROJECTS_TABLE,
                            row,
                            column: COL_PRIORITY.to_string(),
                            value: cell.as_text(),
                        })?;
                    value as i64
                }
            }
        };

        let demand: Vec<RoleDemand> = role_cols
            .iter()
            .filter_map(|(c, role)| {
                let days = table.cell(idx, *c).as_number()?.trunc();
                (days >= 1.0).then(|| RoleDemand {
                    role: role.clone(),
                    days: if days >= f64::from(u32::MAX) {
                        u32::MAX
                    } else {
                        days as u32
                    },
                })
            })
            .collect();

        debug!(
            project = %name,
            priority = priority,
            roles = demand.len(),
            "project parsed"
        );
        projects.push(Project {
            name,
            priority,
            demand,
        });
    }

    let role_columns: Vec<String> = role_cols.into_iter().map(|(_, r)| r).collect();
    info!(
        count = projects.len(),
        roles = ?role_columns,
        "Projects loaded"
    );

    Ok(ParsedProjects {
        projects,
        role_columns,
        notices,
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Spreadsheet row number of data row `idx` (the header is row 1).
fn sheet_row(idx: usize) -> usize {
    idx + 2
}

fn require_column(
    table: &Table,
    label: &'static str,
    column: &'static str,
) -> Result<usize, InputError> {
    table
        .column_index(column)
        .ok_or(InputError::MissingColumn {
            table: label,
            column,
        })
}

fn identity(
    table: &Table,
    label: &'static str,
    idx: usize,
    col: usize,
    column: &'static str,
) -> Result<String, InputError> {
    let value = table.cell(idx, col).as_text();
    if value.is_empty() {
        return Err(InputError::MissingIdentity {
            table: label,
            row: sheet_row(idx),
            column,
        });
    }
    Ok(value)
}

/// Whole-day value of a capacity cell: blank = 0, fractions truncated.
fn whole_days(table: &Table, label: &'static str, idx: usize, col: usize) -> Result<i64, InputError> {
    let cell = table.cell(idx, col);
    if cell.is_blank() {
        return Ok(0);
    }
    cell.as_number()
        .map(|n| n.trunc() as i64)
        .ok_or_else(|| InputError::InvalidNumber {
            table: label,
            row: sheet_row(idx),
            column: table.headers[col].trim().to_string(),
            value: cell.as_text(),
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
