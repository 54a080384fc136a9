/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Aggregated reports derived from the raw grant ledger.
//!
//! Four independent reports, each a pure function of the ledger and the
//! input model.  None of them feeds back into allocation, so building them
//! twice from the same ledger yields identical output.
//!
//! | Sheet | Module | Grain |
//! |---|---|---|
//! | Assignments | [`assignments`] | (Project, Person, Role) |
//! | Utilization Summary | [`utilization`] | person |
//! | Project Gaps & Summary | [`gaps`] | (Project, Role) + per-project TOTAL |
//! | Utilization by Role | [`roles`] | role column |

pub mod assignments;
pub mod gaps;
pub mod roles;
pub mod utilization;

pub use assignments::AssignmentRow;
pub use gaps::ProjectGapRow;
pub use roles::RoleUtilization;
pub use utilization::PersonUtilization;

use crate::config::PlannerConfig;
use crate::model::{Grant, InputModel};
use crate::table::Table;

// ── Sheet names (output order) ────────────────────────────────────────────────

pub const SHEET_ASSIGNMENTS: &str = "Assignments";
pub const SHEET_UTILIZATION: &str = "Utilization Summary";
pub const SHEET_PROJECT_GAPS: &str = "Project Gaps & Summary";
pub const SHEET_ROLE_UTILIZATION: &str = "Utilization by Role";

// ── Reports ───────────────────────────────────────────────────────────────────

/// All four reports of one planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct Reports {
    pub assignments: Vec<AssignmentRow>,
    pub utilization: Vec<PersonUtilization>,
    pub project_gaps: Vec<ProjectGapRow>,
    pub role_utilization: Vec<RoleUtilization>,
}

impl Reports {
    /// Build every report from the raw ledger.
    pub fn build(model: &InputModel, grants: &[Grant], config: &PlannerConfig) -> Self {
        Self {
            assignments: assignments::build(grants),
            utilization: utilization::build(&model.people, grants),
            project_gaps: gaps::build(&model.projects, grants, &config.total_label),
            role_utilization: roles::build(model, grants, config.demand_supply_sentinel),
        }
    }

    /// The reports as output tables, in sheet order.
    pub fn to_tables(&self) -> Vec<Table> {
        vec![
            assignments::to_table(&self.assignments),
            utilization::to_table(&self.utilization),
            gaps::to_table(&self.project_gaps),
            roles::to_table(&self.role_utilization),
        ]
    }

    /// Total days granted across everyone.
    pub fn total_days_assigned(&self) -> u64 {
        self.utilization.iter().map(|u| u.days_used).sum()
    }

    /// Unmet days summed over the detail rows (TOTAL rows excluded).
    pub fn total_days_missing(&self) -> u64 {
        self.project_gaps
            .iter()
            .filter(|r| !r.is_total)
            .map(|r| r.missing_days)
            .sum()
    }
}

// ── Shared arithmetic ─────────────────────────────────────────────────────────

/// `part / whole × 100`, rounded to one decimal.
///
/// Callers guard `whole > 0`; the percentage sentinels differ per report.
pub(crate) fn percent(part: f64, whole: f64) -> f64 {
    round1(part / whole * 100.0)
}

/// Round to one decimal, ties to even.
pub(crate) fn round1(value: f64) -> f64 {
    let r = (value * 10.0).round_ties_even() / 10.0;
    // never emit -0.0
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
