/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! End-to-end planning run.
//!
//! [`StaffPlanner::plan`] chains the pipeline stages strictly forward:
//!
//! ```text
//! Table ×2 ──► input::build_model ──► sequencer::work_items
//!          ──► GreedyAllocator::allocate ──► audit_capacity ──► Reports::build
//! ```
//!
//! Only the first stage can fail.  Everything after it records problems as
//! [`PlanNotice`]s and always produces a complete (if partial) plan.

use std::sync::Arc;

use tracing::info;

use crate::allocator::audit::audit_capacity;
use crate::allocator::GreedyAllocator;
use crate::config::PlannerConfig;
use crate::input::{self, InputError};
use crate::model::{Grant, InputModel};
use crate::notice::PlanNotice;
use crate::report::Reports;
use crate::sequencer;
use crate::table::Table;

// ── Plan ──────────────────────────────────────────────────────────────────────

/// Everything one planning run produced.
#[derive(Debug, Clone)]
pub struct Plan {
    pub model: InputModel,

    /// Raw ledger of one-day grants, in grant order.
    pub grants: Vec<Grant>,

    pub reports: Reports,

    /// Input, allocation and audit notices, in the order they were raised.
    pub notices: Vec<PlanNotice>,
}

/// Headline numbers logged at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub assignment_lines: usize,
    pub days_assigned: u64,
    pub days_missing: u64,
}

impl Plan {
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            assignment_lines: self.reports.assignments.len(),
            days_assigned: self.reports.total_days_assigned(),
            days_missing: self.reports.total_days_missing(),
        }
    }
}

// ── StaffPlanner ──────────────────────────────────────────────────────────────

/// Runs the planning pipeline under a shared configuration.
///
/// Holds no per-run state, so one planner can serve any number of runs.
pub struct StaffPlanner {
    config: Arc<PlannerConfig>,
}

impl StaffPlanner {
    pub fn new(config: Arc<PlannerConfig>) -> Self {
        Self { config }
    }

    /// Plan from the raw People and Projects tables.
    ///
    /// # Errors
    /// Returns an [`InputError`] when either table is malformed; no
    /// allocation is attempted in that case.
    pub fn plan(&self, people: &Table, projects: &Table) -> Result<Plan, InputError> {
        let (model, mut notices) = input::build_model(people, projects, &self.config)?;

        let items = sequencer::work_items(&model.projects);
        let allocation = GreedyAllocator::new(&model.people).allocate(&items);
        notices.extend(allocation.notices);

        notices.extend(audit_capacity(&model.people, &allocation.grants));

        let reports = Reports::build(&model, &allocation.grants, &self.config);

        let plan = Plan {
            model,
            grants: allocation.grants,
            reports,
            notices,
        };

        let summary = plan.summary();
        info!(
            assignment_lines = summary.assignment_lines,
            days_assigned = summary.days_assigned,
            days_missing = summary.days_missing,
            notices = plan.notices.len(),
            "=== Planning complete ==="
        );
        Ok(plan)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
