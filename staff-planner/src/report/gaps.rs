/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Project Gaps & Summary sheet: coverage per (Project, Role).
//!
//! Detail rows come first, sorted by (Priority, Project, Role).  One TOTAL row
//! per project follows them, ordered by project name, with Coverage %
//! recomputed from the summed days rather than averaged.

use std::collections::{BTreeMap, HashMap};

use crate::model::{Grant, Project};
use crate::table::{Cell, Table};

use super::{percent, SHEET_PROJECT_GAPS};

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectGapRow {
    pub project: String,
    pub priority: i64,
    /// Role label, or the configured total label on TOTAL rows.
    pub role: String,
    pub required_days: u64,
    pub assigned_days: u64,
    pub missing_days: u64,
    pub coverage_pct: f64,
    pub is_total: bool,
}

/// Build the detail rows followed by the per-project TOTAL rows.
pub fn build(projects: &[Project], grants: &[Grant], total_label: &str) -> Vec<ProjectGapRow> {
    let mut assigned: HashMap<(&str, &str), u64> = HashMap::new();
    for g in grants {
        *assigned
            .entry((g.project.as_str(), g.role.as_str()))
            .or_default() += u64::from(g.days);
    }

    let mut rows: Vec<ProjectGapRow> = projects
        .iter()
        .flat_map(|p| p.demand.iter().map(move |d| (p, d)))
        .filter(|(_, d)| d.days > 0)
        .map(|(p, d)| {
            let required_days = u64::from(d.days);
            let assigned_days = assigned
                .get(&(p.name.as_str(), d.role.as_str()))
                .copied()
                .unwrap_or(0);
            gap_row(&p.name, p.priority, &d.role, required_days, assigned_days, false)
        })
        .collect();

    rows.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.project.cmp(&b.project))
            .then_with(|| a.role.cmp(&b.role))
    });

    // (project, priority) → (required, assigned)
    let mut totals: BTreeMap<(&str, i64), (u64, u64)> = BTreeMap::new();
    for r in &rows {
        let t = totals.entry((r.project.as_str(), r.priority)).or_default();
        t.0 += r.required_days;
        t.1 += r.assigned_days;
    }
    let total_rows: Vec<ProjectGapRow> = totals
        .into_iter()
        .map(|((project, priority), (required, assigned))| {
            gap_row(project, priority, total_label, required, assigned, true)
        })
        .collect();

    rows.extend(total_rows);
    rows
}

fn gap_row(
    project: &str,
    priority: i64,
    role: &str,
    required_days: u64,
    assigned_days: u64,
    is_total: bool,
) -> ProjectGapRow {
    let coverage_pct = if required_days > 0 {
        percent(assigned_days as f64, required_days as f64)
    } else {
        0.0
    };
    ProjectGapRow {
        project: project.to_string(),
        priority,
        role: role.to_string(),
        required_days,
        assigned_days,
        missing_days: required_days.saturating_sub(assigned_days),
        coverage_pct,
        is_total,
    }
}

pub fn to_table(rows: &[ProjectGapRow]) -> Table {
    let mut table = Table::new(
        SHEET_PROJECT_GAPS,
        [
            "Project",
            "Priority",
            "Role",
            "RequiredDays",
            "AssignedDays",
            "MissingDays",
            "Coverage %",
        ],
    );
    for r in rows {
        table.push_row(vec![
            Cell::from(r.project.as_str()),
            Cell::from(r.priority),
            Cell::from(r.role.as_str()),
            Cell::from(r.required_days),
            Cell::from(r.assigned_days),
            Cell::from(r.missing_days),
            Cell::from(r.coverage_pct),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RoleDemand;

    fn project(name: &str, priority: i64, demand: &[(&str, u32)]) -> Project {
        Project {
            name: name.into(),
            priority,
            demand: demand
                .iter()
                .map(|&(role, days)| RoleDemand {
                    role: role.into(),
                    days,
                })
                .collect(),
        }
    }

    #[test]
    fn detail_rows_then_totals() {
        let projects = vec![
            project("Beta", 2, &[("QA", 4), ("Dev", 2)]),
            project("Alpha", 1, &[("Dev", 3)]),
        ];
        let grants = vec![
            Grant::one_day("Alpha", "Ann", "Dev"),
            Grant::one_day("Alpha", "Ann", "Dev"),
            Grant::one_day("Beta", "Bob", "Dev"),
            Grant::one_day("Beta", "Bob", "Dev"),
            Grant::one_day("Beta", "Cy", "QA"),
        ];
        let rows = build(&projects, &grants, "TOTAL");
        let keys: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.project.as_str(), r.role.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Alpha", "Dev"),
                ("Beta", "Dev"),
                ("Beta", "QA"),
                ("Alpha", "TOTAL"),
                ("Beta", "TOTAL"),
            ]
        );

        let alpha_dev = &rows[0];
        assert_eq!(alpha_dev.required_days, 3);
        assert_eq!(alpha_dev.assigned_days, 2);
        assert_eq!(alpha_dev.missing_days, 1);
        assert_eq!(alpha_dev.coverage_pct, 66.7);

        let beta_total = &rows[4];
        assert!(beta_total.is_total);
        assert_eq!(beta_total.priority, 2);
        assert_eq!(beta_total.required_days, 6);
        assert_eq!(beta_total.assigned_days, 3);
        assert_eq!(beta_total.missing_days, 3);
        assert_eq!(beta_total.coverage_pct, 50.0);
    }

    #[test]
    fn unstaffed_role_is_fully_missing() {
        let projects = vec![project("Y", 1, &[("QA", 5)])];
        let rows = build(&projects, &[], "TOTAL");
        assert_eq!(rows[0].role, "QA");
        assert_eq!(rows[0].assigned_days, 0);
        assert_eq!(rows[0].missing_days, rows[0].required_days);
        assert_eq!(rows[0].coverage_pct, 0.0);
    }

    #[test]
    fn project_without_demand_has_no_rows() {
        let projects = vec![project("Idle", 1, &[]), project("Busy", 2, &[("Dev", 1)])];
        let rows = build(&projects, &[], "TOTAL");
        assert!(rows.iter().all(|r| r.project == "Busy"));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn total_label_is_configurable() {
        let projects = vec![project("X", 1, &[("Dev", 1)])];
        let rows = build(&projects, &[], "ALL");
        assert_eq!(rows.last().unwrap().role, "ALL");
    }

    #[test]
    fn priority_sorts_before_project_name() {
        let projects = vec![
            project("Aaa", 5, &[("Dev", 1)]),
            project("Zzz", 1, &[("Dev", 1)]),
        ];
        let rows = build(&projects, &[], "TOTAL");
        assert_eq!(rows[0].project, "Zzz");
        assert_eq!(rows[1].project, "Aaa");
    }
}
