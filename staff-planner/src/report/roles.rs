/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Utilization by Role sheet: supply versus demand per role column.
//!
//! | Column | Definition |
//! |---|---|
//! | People Capable | people whose roles field matches the role |
//! | Total Available Days | Σ EffectiveCapacity of those people |
//! | Total Required Days | Σ positive demand for the role |
//! | Days Assigned | Σ grants in the role |
//! | Remaining Capacity | Available − Assigned |
//! | Shortfall Days | Assigned − Available |
//! | Utilization % | Assigned / Available × 100, `0` if Available ≤ 0 |
//! | Demand vs Supply % | Required / Available × 100, sentinel if Available ≤ 0 |
//!
//! Rows are sorted by Shortfall Days ascending (stable, so ties keep
//! role-column order).  Capable people are counted per role, so one person
//! contributes to every role their roles field matches.

use std::collections::HashMap;

use crate::model::{Grant, InputModel};
use crate::table::{Cell, Table};

use super::{percent, SHEET_ROLE_UTILIZATION};

#[derive(Debug, Clone, PartialEq)]
pub struct RoleUtilization {
    pub role: String,
    pub people_capable: usize,
    pub available_days: i64,
    pub required_days: u64,
    pub assigned_days: u64,
    pub remaining_capacity: i64,
    pub shortfall_days: i64,
    pub utilization_pct: f64,
    pub demand_supply_pct: f64,
}

/// One row per role column.
///
/// `demand_supply_sentinel` is reported as Demand vs Supply % for roles
/// nobody can supply.
pub fn build(model: &InputModel, grants: &[Grant], demand_supply_sentinel: f64) -> Vec<RoleUtilization> {
    let mut assigned: HashMap<&str, u64> = HashMap::new();
    for g in grants {
        *assigned.entry(g.role.as_str()).or_default() += u64::from(g.days);
    }

    let mut rows: Vec<RoleUtilization> = model
        .role_columns
        .iter()
        .map(|role| {
            let (people_capable, available_days) = model
                .capable_people(role)
                .fold((0usize, 0i64), |(n, days), p| (n + 1, days + p.effective_capacity()));
            let required_days = model.total_required_days(role);
            let assigned_days = assigned.get(role.as_str()).copied().unwrap_or(0);
            let assigned_signed = i64::try_from(assigned_days).unwrap_or(i64::MAX);

            let (utilization_pct, demand_supply_pct) = if available_days > 0 {
                (
                    percent(assigned_days as f64, available_days as f64),
                    percent(required_days as f64, available_days as f64),
                )
            } else {
                (0.0, demand_supply_sentinel)
            };

            RoleUtilization {
                role: role.clone(),
                people_capable,
                available_days,
                required_days,
                assigned_days,
                remaining_capacity: available_days - assigned_signed,
                shortfall_days: assigned_signed - available_days,
                utilization_pct,
                demand_supply_pct,
            }
        })
        .collect();

    // stable: equal shortfall keeps column order
    rows.sort_by_key(|r| r.shortfall_days);
    rows
}

pub fn to_table(rows: &[RoleUtilization]) -> Table {
    let mut table = Table::new(
        SHEET_ROLE_UTILIZATION,
        [
            "Role",
            "People Capable",
            "Total Available Days",
            "Total Required Days",
            "Days Assigned",
            "Remaining Capacity",
            "Shortfall Days",
            "Utilization %",
            "Demand vs Supply %",
        ],
    );
    for r in rows {
        table.push_row(vec![
            Cell::from(r.role.as_str()),
            Cell::from(r.people_capable),
            Cell::from(r.available_days),
            Cell::from(r.required_days),
            Cell::from(r.assigned_days),
            Cell::from(r.remaining_capacity),
            Cell::from(r.shortfall_days),
            Cell::from(r.utilization_pct),
            Cell::from(r.demand_supply_pct),
        ]);
    }
    table
}
