/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Priority sequencer: projects → ordered work items.
//!
//! Projects are ordered by priority ascending with a **stable** sort, so
//! projects sharing a priority keep their input order.  Within a project the
//! roles keep their declared column order.

use tracing::info;

use crate::model::Project;

/// One demand to satisfy: `required_days` of `role` on `project`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkItem<'a> {
    pub project: &'a str,
    pub priority: i64,
    pub role: &'a str,
    pub required_days: u32,
}

/// Projects sorted by priority (lowest number first), ties in input order.
pub fn order_projects(projects: &[Project]) -> Vec<&Project> {
    let mut ordered: Vec<&Project> = projects.iter().collect();
    // sort_by_key is stable
    ordered.sort_by_key(|p| p.priority);
    ordered
}

/// Flatten `projects` into the work items the allocator processes, in order.
///
/// Only positive demand ever reaches a [`Project`], so every item returned
/// has `required_days > 0`.
pub fn work_items(projects: &[Project]) -> Vec<WorkItem<'_>> {
    let ordered = order_projects(projects);

    info!("Assigning projects in this order (lowest number = highest priority):");
    for p in &ordered {
        info!("  {:>3} → {}", p.priority, p.name);
    }

    ordered
        .into_iter()
        .flat_map(|p| {
            p.demand
                .iter()
                .filter(|d| d.days > 0)
                .map(move |d| WorkItem {
                    project: &p.name,
                    priority: p.priority,
                    role: &d.role,
                    required_days: d.days,
                })
        })
        .collect()
}
