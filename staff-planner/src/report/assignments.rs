/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Assignments sheet: the ledger summed per (Project, Person, Role).

use std::collections::BTreeMap;

use crate::model::Grant;
use crate::table::{Cell, Table};

use super::SHEET_ASSIGNMENTS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRow {
    pub project: String,
    pub person: String,
    pub role: String,
    pub days: u64,
}

/// Group `grants` by (Project, Person, Role) and sum their days.
///
/// Rows are sorted by (Project, Role, Person).  The `BTreeMap` key is laid
/// out in that order, so the result does not depend on grant order.
pub fn build(grants: &[Grant]) -> Vec<AssignmentRow> {
    let mut totals: BTreeMap<(&str, &str, &str), u64> = BTreeMap::new();
    for g in grants {
        *totals
            .entry((g.project.as_str(), g.role.as_str(), g.person.as_str()))
            .or_default() += u64::from(g.days);
    }

    totals
        .into_iter()
        .map(|((project, role, person), days)| AssignmentRow {
            project: project.to_string(),
            person: person.to_string(),
            role: role.to_string(),
            days,
        })
        .collect()
}

pub fn to_table(rows: &[AssignmentRow]) -> Table {
    let mut table = Table::new(SHEET_ASSIGNMENTS, ["Project", "Person", "Role", "Days"]);
    for r in rows {
        table.push_row(vec![
            Cell::from(r.project.as_str()),
            Cell::from(r.person.as_str()),
            Cell::from(r.role.as_str()),
            Cell::from(r.days),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_are_summed_per_key() {
        let grants = vec![
            Grant::one_day("X", "Ann", "Dev"),
            Grant::one_day("X", "Ann", "Dev"),
            Grant::one_day("X", "Ann", "QA"),
        ];
        let rows = build(&grants);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].role, "Dev");
        assert_eq!(rows[0].days, 2);
        assert_eq!(rows[1].role, "QA");
        assert_eq!(rows[1].days, 1);
    }

    #[test]
    fn rows_sorted_by_project_role_person() {
        let grants = vec![
            Grant::one_day("B", "Zed", "Dev"),
            Grant::one_day("A", "Zed", "QA"),
            Grant::one_day("A", "Bob", "QA"),
            Grant::one_day("A", "Zed", "Dev"),
        ];
        let keys: Vec<(String, String, String)> = build(&grants)
            .into_iter()
            .map(|r| (r.project, r.role, r.person))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("A".into(), "Dev".into(), "Zed".into()),
                ("A".into(), "QA".into(), "Bob".into()),
                ("A".into(), "QA".into(), "Zed".into()),
                ("B".into(), "Dev".into(), "Zed".into()),
            ]
        );
    }

    #[test]
    fn empty_ledger_gives_header_only_table() {
        let table = to_table(&build(&[]));
        assert_eq!(table.headers, vec!["Project", "Person", "Role", "Days"]);
        assert!(table.is_empty());
    }
}
