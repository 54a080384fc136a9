/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Greedy person-day allocator.
//!
//! [`GreedyAllocator`] walks the priority-ordered [`WorkItem`]s and hands out
//! one day at a time to the eligible person with the **least** remaining
//! capacity.  The result is an [`Allocation`]: a raw ledger of one-day
//! [`Grant`]s plus the shortfall notices raised on the way.
//!
//! # Algorithm (per work item)
//! 1. Candidates = people whose roles field contains the role
//!    (case-insensitive substring).  None → `NoCandidates`, item left unmet.
//! 2. While days are still needed:
//!    * drop candidates with remaining capacity ≤ 0
//!      (none left → `InsufficientCapacity`, stop this item);
//!    * sort the rest by remaining capacity **ascending**, ties in roster order;
//!    * walk that order granting exactly one day per person until the demand
//!      is met;
//!    * re-read remaining capacity and re-sort before the next pass.
//!
//! Each pass grants at least one day, so every item terminates.
//!
//! # State
//! Remaining capacity is a plain `Vec<i64>` indexed like the roster.  It is
//! created inside [`GreedyAllocator::allocate`], threaded by `&mut` through
//! the helpers, and dropped at the end of the run: the allocator itself holds
//! no mutable state.
//!
//! # Example
//! ```rust,ignore
//! let items = sequencer::work_items(&model.projects);
//! let allocation = GreedyAllocator::new(&model.people).allocate(&items);
//! ```

pub mod audit;

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::model::{Grant, Person};
use crate::notice::PlanNotice;
use crate::sequencer::WorkItem;

/// Per-run remaining capacity: roster index → days left (may be ≤ 0).
type RemainingCapacity = Vec<i64>;

// ── Allocation ────────────────────────────────────────────────────────────────

/// Outcome of one allocation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Allocation {
    /// Raw ledger, one entry per granted day, in grant order.
    pub grants: Vec<Grant>,

    /// Remaining capacity per person after the run.
    pub remaining: BTreeMap<String, i64>,

    /// `NoCandidates` / `InsufficientCapacity` notices in processing order.
    pub notices: Vec<PlanNotice>,
}

// ── GreedyAllocator ───────────────────────────────────────────────────────────

/// The greedy least-loaded allocator.
///
/// Borrows the roster for its lifetime; all per-run state is local to
/// [`allocate`](Self::allocate), so repeated calls are independent.
pub struct GreedyAllocator<'a> {
    people: &'a [Person],
}

impl<'a> GreedyAllocator<'a> {
    pub fn new(people: &'a [Person]) -> Self {
        Self { people }
    }

    // ── Public entry point ────────────────────────────────────────────────────

    /// Allocate `items` in the order given.
    ///
    /// Never fails: shortfalls are recorded as notices and the remaining
    /// items are still processed.
    pub fn allocate(&self, items: &[WorkItem<'_>]) -> Allocation {
        let mut remaining: RemainingCapacity =
            self.people.iter().map(Person::effective_capacity).collect();
        let mut grants = Vec::new();
        let mut notices = Vec::new();

        info!(
            work_items = items.len(),
            people = self.people.len(),
            "=== GreedyAllocator::allocate() ==="
        );

        for item in items {
            if let Some(notice) = self.allocate_item(item, &mut remaining, &mut grants) {
                warn!("{}", notice);
                notices.push(notice);
            }
        }

        info!(
            grants = grants.len(),
            shortfalls = notices.len(),
            "=== Allocation complete ==="
        );

        let remaining = self
            .people
            .iter()
            .zip(remaining)
            .map(|(p, left)| (p.name.clone(), left))
            .collect();

        Allocation {
            grants,
            remaining,
            notices,
        }
    }

    // ── Per-item loop ─────────────────────────────────────────────────────────

    /// Satisfy one work item as far as capacity allows.
    ///
    /// Returns the shortfall notice when the item could not be fully met.
    fn allocate_item(
        &self,
        item: &WorkItem<'_>,
        remaining: &mut RemainingCapacity,
        grants: &mut Vec<Grant>,
    ) -> Option<PlanNotice> {
        let candidates = self.candidates_for(item.role);
        if candidates.is_empty() {
            return Some(PlanNotice::NoCandidates {
                project: item.project.to_string(),
                role: item.role.to_string(),
                priority: item.priority,
                needed: item.required_days,
            });
        }

        let mut needed = item.required_days;
        while needed > 0 {
            let order = least_loaded_order(&candidates, remaining);
            if order.is_empty() {
                return Some(PlanNotice::InsufficientCapacity {
                    project: item.project.to_string(),
                    role: item.role.to_string(),
                    still_needed: needed,
                });
            }

            for idx in order {
                if needed == 0 {
                    break;
                }
                if remaining[idx] > 0 {
                    self.grant_day(item, idx, remaining, grants);
                    needed -= 1;
                }
            }
        }

        debug!(
            project = %item.project,
            role    = %item.role,
            days    = item.required_days,
            "✓ demand covered"
        );
        None
    }

    /// Roster indices of everyone matching `role`, in roster order.
    fn candidates_for(&self, role: &str) -> Vec<usize> {
        self.people
            .iter()
            .enumerate()
            .filter(|(_, p)| p.has_role(role))
            .map(|(i, _)| i)
            .collect()
    }

    /// Record one day for roster entry `idx` and charge it to their capacity.
    fn grant_day(
        &self,
        item: &WorkItem<'_>,
        idx: usize,
        remaining: &mut RemainingCapacity,
        grants: &mut Vec<Grant>,
    ) {
        let person = &self.people[idx];
        remaining[idx] -= 1;
        grants.push(Grant::one_day(item.project, person.name.as_str(), item.role));

        debug!(
            project = %item.project,
            role    = %item.role,
            person  = %person.name,
            left    = remaining[idx],
            "day granted"
        );
    }
}

/// Candidates that still have capacity, least remaining capacity first.
///
/// The sort is stable, so equal remaining capacity keeps roster order.
/// Ascending order is deliberate: the person closest to fully booked is
/// drained first.
pub fn least_loaded_order(candidates: &[usize], remaining: &[i64]) -> Vec<usize> {
    let mut order: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&i| remaining[i] > 0)
        .collect();
    order.sort_by_key(|&i| remaining[i]);
    order
}

// ── Tests ─────────────────────────────────────────────────────────────────────
