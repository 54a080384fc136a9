/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Utilization Summary sheet: days used per person.

use std::collections::HashMap;

use crate::model::{Grant, Person};
use crate::table::{Cell, Table};

use super::{percent, SHEET_UTILIZATION};

/// Utilization reported for people with no effective capacity.
pub const NO_CAPACITY_UTILIZATION: f64 = 0.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PersonUtilization {
    pub name: String,
    pub effective_capacity: i64,
    pub days_used: u64,
    /// `days_used / effective_capacity × 100`, one decimal, or
    /// [`NO_CAPACITY_UTILIZATION`] when effective capacity ≤ 0.
    pub utilization_pct: f64,
}

/// One row per person, in roster order.
pub fn build(people: &[Person], grants: &[Grant]) -> Vec<PersonUtilization> {
    let mut used: HashMap<&str, u64> = HashMap::new();
    for g in grants {
        *used.entry(g.person.as_str()).or_default() += u64::from(g.days);
    }

    people
        .iter()
        .map(|p| {
            let effective_capacity = p.effective_capacity();
            let days_used = used.get(p.name.as_str()).copied().unwrap_or(0);
            let utilization_pct = if effective_capacity > 0 {
                percent(days_used as f64, effective_capacity as f64)
            } else {
                NO_CAPACITY_UTILIZATION
            };
            PersonUtilization {
                name: p.name.clone(),
                effective_capacity,
                days_used,
                utilization_pct,
            }
        })
        .collect()
}

pub fn to_table(rows: &[PersonUtilization]) -> Table {
    let mut table = Table::new(
        SHEET_UTILIZATION,
        ["Name", "EffectiveCapacity", "DaysUsed", "Utilization %"],
    );
    for r in rows {
        table.push_row(vec![
            Cell::from(r.name.as_str()),
            Cell::from(r.effective_capacity),
            Cell::from(r.days_used),
            Cell::from(r.utilization_pct),
        ]);
    }
    table
}
