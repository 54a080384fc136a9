/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Post-allocation capacity audit.
//!
//! # Status: warning only
//!
//! The allocator never grants a day to a person whose remaining capacity is
//! ≤ 0, so both checks below are expected to pass on every run.  The audit
//! re-derives the totals from the raw ledger, independently of the
//! allocator's own bookkeeping, and reports any violation as a
//! [`PlanNotice`].  The allocation itself is never modified.
//!
//! | Check | Bound |
//! |---|---|
//! | days granted to a person | `max(EffectiveCapacity, 0)` |
//! | days granted in a role | Σ `max(EffectiveCapacity, 0)` over people capable of that role |
//!
//! The role bound deliberately uses floored capacity: the Utilization by Role
//! report sums raw effective capacity, which a person with more vacation than
//! capacity can pull below what was legitimately assigned.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::model::{Grant, Person};
use crate::notice::PlanNotice;

/// Audit `grants` against the roster.  Returns one notice per violation,
/// people first (roster order), then roles (alphabetical).
pub fn audit_capacity(people: &[Person], grants: &[Grant]) -> Vec<PlanNotice> {
    let mut by_person: HashMap<&str, u64> = HashMap::new();
    let mut by_role: BTreeMap<&str, u64> = BTreeMap::new();
    for g in grants {
        *by_person.entry(g.person.as_str()).or_default() += u64::from(g.days);
        *by_role.entry(g.role.as_str()).or_default() += u64::from(g.days);
    }

    let mut findings = Vec::new();

    for person in people {
        let assigned = by_person.get(person.name.as_str()).copied().unwrap_or(0);
        let available = person.available_days();
        if exceeds(assigned, available) {
            findings.push(PlanNotice::PersonOvercommitted {
                person: person.name.clone(),
                assigned,
                available,
            });
        }
    }

    for (role, assigned) in by_role {
        let available: i64 = people
            .iter()
            .filter(|p| p.has_role(role))
            .map(Person::available_days)
            .sum();
        if exceeds(assigned, available) {
            findings.push(PlanNotice::RoleOvercommitted {
                role: role.to_string(),
                assigned,
                available,
            });
        }
    }

    if findings.is_empty() {
        debug!(grants = grants.len(), "capacity audit passed");
    }
    for f in &findings {
        warn!("capacity audit failed: {}; check allocator bookkeeping", f);
    }
    findings
}

fn exceeds(assigned: u64, available: i64) -> bool {
    i128::from(assigned) > i128::from(available)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_ledger_has_no_findings() {
        let people = vec![Person::new("A", 2, 0, "Dev")];
        let grants = vec![Grant::one_day("X", "A", "Dev"), Grant::one_day("X", "A", "Dev")];
        assert!(audit_capacity(&people, &grants).is_empty());
    }

    #[test]
    fn overcommitted_person_and_role_are_reported() {
        let people = vec![Person::new("A", 1, 0, "Dev")];
        let grants = vec![Grant::one_day("X", "A", "Dev"), Grant::one_day("Y", "A", "Dev")];
        let findings = audit_capacity(&people, &grants);
        assert_eq!(
            findings,
            vec![
                PlanNotice::PersonOvercommitted {
                    person: "A".into(),
                    assigned: 2,
                    available: 1,
                },
                PlanNotice::RoleOvercommitted {
                    role: "Dev".into(),
                    assigned: 2,
                    available: 1,
                },
            ]
        );
    }

    #[test]
    fn negative_capacity_does_not_shrink_role_bound() {
        // B has more vacation than capacity; A's legitimate days still fit.
        let people = vec![Person::new("A", 3, 0, "Dev"), Person::new("B", 1, 5, "Dev")];
        let grants = vec![Grant::one_day("X", "A", "Dev"); 3];
        assert!(audit_capacity(&people, &grants).is_empty());
    }
}
