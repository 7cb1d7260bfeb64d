// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: sort by rank, cap, done.
//!
//! The sort is stable. Equal ranks keep the order the engine produced them in:
//! first-contribution order for topics, category-then-record order for the
//! scanner. No hidden tiebreakers, so both engines stay reproducible.

use std::cmp::Ordering;

use crate::types::ResultItem;

/// Compare two results for ranking: higher rank first, otherwise equal.
///
/// Returning `Equal` on ties is deliberate; combined with a stable sort it
/// preserves engine order.
pub fn compare_results(a: &ResultItem, b: &ResultItem) -> Ordering {
    b.rank.total_cmp(&a.rank)
}

/// Sorts and truncates either engine's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranker {
    limit: usize,
}

impl Ranker {
    pub fn new(limit: usize) -> Self {
        Ranker { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn rank(&self, mut items: Vec<ResultItem>) -> Vec<ResultItem> {
        items.sort_by(compare_results);
        items.truncate(self.limit);
        items
    }
}
