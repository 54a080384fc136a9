/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Non-fatal planning notices.
//!
//! Every notice is emitted as a `warn!` event at the point it is detected and
//! also collected into [`crate::planner::Plan::notices`], so callers can
//! inspect them without a tracing subscriber.  Notices never change computed
//! results; shortfalls are reflected numerically in the reports.

use std::fmt;

/// A diagnostic raised while building the model, allocating, or auditing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanNotice {
    /// The Projects table has no `Priority` column; every project received
    /// `default_priority` and is processed in file order.
    MissingPriorityColumn { default_priority: i64 },

    /// A project's `Priority` cell was blank.
    BlankPriority {
        project: String,
        default_priority: i64,
    },

    /// Nobody's roles field matches `role`; the whole demand stays unmet.
    NoCandidates {
        project: String,
        role: String,
        priority: i64,
        needed: u32,
    },

    /// Every candidate ran out of capacity before the demand was met.
    InsufficientCapacity {
        project: String,
        role: String,
        still_needed: u32,
    },

    /// Post-allocation audit: a person received more days than available.
    PersonOvercommitted {
        person: String,
        assigned: u64,
        available: i64,
    },

    /// Post-allocation audit: a role received more days than its capable
    /// people can supply.
    RoleOvercommitted {
        role: String,
        assigned: u64,
        available: i64,
    },
}

impl PlanNotice {
    /// `true` for the two coverage shortfall variants.
    pub fn is_shortfall(&self) -> bool {
        matches!(
            self,
            PlanNotice::NoCandidates { .. } | PlanNotice::InsufficientCapacity { .. }
        )
    }
}

impl fmt::Display for PlanNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanNotice::MissingPriorityColumn { default_priority } => write!(
                f,
                "no 'Priority' column, assigning in file order (priority {})",
                default_priority
            ),

            PlanNotice::BlankPriority {
                project,
                default_priority,
            } => write!(
                f,
                "project '{}' has no priority, using {}",
                project, default_priority
            ),

            PlanNotice::NoCandidates {
                project,
                role,
                priority,
                needed,
            } => write!(
                f,
                "no one has role '{}', {} days unassigned for '{}' (priority {})",
                role, needed, project, priority
            ),

            PlanNotice::InsufficientCapacity {
                project,
                role,
                still_needed,
            } => write!(
                f,
                "not enough capacity left for '{}' on '{}', {} days still needed",
                role, project, still_needed
            ),

            PlanNotice::PersonOvercommitted {
                person,
                assigned,
                available,
            } => write!(
                f,
                "person '{}' assigned {} days but only {} available",
                person, assigned, available
            ),

            PlanNotice::RoleOvercommitted {
                role,
                assigned,
                available,
            } => write!(
                f,
                "role '{}' assigned {} days but capable people only have {}",
                role, assigned, available
            ),
        }
    }
}
