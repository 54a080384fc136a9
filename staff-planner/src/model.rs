/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core planning data structures.
//!
//! ```text
//! People table ──►  Person  ─┐
//!                            ├──(allocator)──►  Grant (one day)  ──(report)──►  tables
//! Projects table ──► Project ┘
//! ```
//!
//! # Ownership model
//! [`Person`] and [`Project`] are built once by the input module and are
//! read-only from then on.  The only mutable planning state, remaining
//! capacity, lives inside one allocator run and is never stored here.

// ── Person ────────────────────────────────────────────────────────────────────

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Unique name; also the key used in the assignment ledger.
    pub name: String,

    /// Total days the person can work in the planning window.
    pub capacity_days: i64,

    /// Days of vacation inside the planning window.
    pub vacation_days: i64,

    /// Free-text roles field, e.g. `"Dev, QA lead"`.
    pub roles: String,

    /// Lower-cased copy of `roles`, used for role matching.
    roles_folded: String,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        capacity_days: i64,
        vacation_days: i64,
        roles: impl Into<String>,
    ) -> Self {
        let roles = roles.into();
        Self {
            name: name.into(),
            capacity_days,
            vacation_days,
            roles_folded: roles.to_lowercase(),
            roles,
        }
    }

    /// `CapacityDays − VacationDays`.  May be zero or negative.
    pub fn effective_capacity(&self) -> i64 {
        self.capacity_days.saturating_sub(self.vacation_days)
    }

    /// Days the allocator may grant: effective capacity floored at zero.
    pub fn available_days(&self) -> i64 {
        self.effective_capacity().max(0)
    }

    /// `true` if `role` occurs anywhere in the roles field, ignoring case.
    ///
    /// This is a literal substring test: `"QA"` also matches `"Aqua team"`.
    /// Report candidate counts depend on it, so it is not tokenised.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles_folded.contains(&role.to_lowercase())
    }
}

// ── Project ───────────────────────────────────────────────────────────────────

/// Positive demand for one role on one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDemand {
    pub role: String,
    pub days: u32,
}

/// One row of the Projects table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Unique project name.
    pub name: String,

    /// Lower number = higher priority.
    pub priority: i64,

    /// Positive demands only, in role-column order (left to right).
    pub demand: Vec<RoleDemand>,
}

impl Project {
    /// Required days for `role`, `0` when the project has no demand for it.
    pub fn required_days(&self, role: &str) -> u32 {
        self.demand
            .iter()
            .find(|d| d.role == role)
            .map_or(0, |d| d.days)
    }

}

// ── Grant ─────────────────────────────────────────────────────────────────────

/// One ledger entry: a single day of `person` granted to `project` in `role`.
///
/// The allocator only ever produces grants with `days == 1`; the field exists
/// so the ledger can be summed without knowing that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grant {
    pub project: String,
    pub person: String,
    pub role: String,
    pub days: u32,
}

impl Grant {
    pub fn one_day(
        project: impl Into<String>,
        person: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            person: person.into(),
            role: role.into(),
            days: 1,
        }
    }
}

// ── InputModel ────────────────────────────────────────────────────────────────

/// Normalised planning input produced by [`crate::input::build_model`].
#[derive(Debug, Clone, Default)]
pub struct InputModel {
    /// Roster in input order.
    pub people: Vec<Person>,

    /// Projects in input order (not yet priority-sorted).
    pub projects: Vec<Project>,

    /// Every Projects column except `Project` and `Priority`, left to right.
    pub role_columns: Vec<String>,
}

impl InputModel {
    /// People whose roles field matches `role`, in roster order.
    pub fn capable_people<'a>(&'a self, role: &'a str) -> impl Iterator<Item = &'a Person> + 'a {
        self.people.iter().filter(move |p| p.has_role(role))
    }

    /// Sum of positive demand for `role` across all projects.
    pub fn total_required_days(&self, role: &str) -> u64 {
        self.projects
            .iter()
            .map(|p| u64::from(p.required_days(role)))
            .sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_capacity_subtracts_vacation() {
        let p = Person::new("Ann", 20, 5, "Dev");
        assert_eq!(p.effective_capacity(), 15);
        assert_eq!(p.available_days(), 15);
    }

    #[test]
    fn vacation_exceeding_capacity_floors_availability() {
        let p = Person::new("Bob", 5, 8, "Dev");
        assert_eq!(p.effective_capacity(), -3);
        assert_eq!(p.available_days(), 0);
    }

    #[test]
    fn role_match_is_case_insensitive_substring() {
        let p = Person::new("Cid", 10, 0, "Senior DEVELOPER, qa");
        assert!(p.has_role("Dev"));
        assert!(p.has_role("developer"));
        assert!(p.has_role("QA"));
        assert!(!p.has_role("PM"));
    }

    #[test]
    fn role_match_keeps_literal_false_positives() {
        // "aqua" contains "qa"; matching stays literal.
        let p = Person::new("Dee", 10, 0, "Aqua team");
        assert!(p.has_role("QA"));
        assert!(!Person::new("Eve", 10, 0, "Squad lead").has_role("QA"));
    }

    #[test]
    fn project_required_days_defaults_to_zero() {
        let proj = Project {
            name: "X".into(),
            priority: 1,
            demand: vec![RoleDemand {
                role: "Dev".into(),
                days: 6,
            }],
        };
        assert_eq!(proj.required_days("Dev"), 6);
        assert_eq!(proj.required_days("QA"), 0);
    }

    #[test]
    fn grant_is_always_a_single_day() {
        let g = Grant::one_day("X", "Ann", "Dev");
        assert_eq!(g.days, 1);
    }
}
