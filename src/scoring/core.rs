// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! # Topic scoring
//!
//! Every posting carries a static weight by source kind. A query token that
//! equals an index term earns `weight × EXACT_MULTIPLIER` per posting; a token
//! that is merely a substring of a longer term earns `weight × PARTIAL_MULTIPLIER`.
//! Contributions are summed per node across all query tokens.
//!
//! | Source        | Weight | Exact | Partial |
//! |---------------|--------|-------|---------|
//! | Title         | 3      | 6     | 3       |
//! | Chapter title | 2      | 4     | 2       |
//! | Content       | 1      | 2     | 1       |
//! | Case title    | 1      | 2     | 1       |
//!
//! # Record scoring
//!
//! Records don't get a computed score. The category decides the tier and the
//! tier decides the rank: High = 3, Medium = 2, Low = 1.
//!
//! Whether the flat tiers are a deliberate simplification or an unfinished port
//! of the weighted model is an open question; both are kept behind the same
//! strategy trait so either can change without touching callers.

use crate::types::{Category, RelevanceTier};

/// Weight of a posting from a module or section title.
pub const TITLE_WEIGHT: u32 = 3;

/// Weight of a posting from a chapter title.
pub const CHAPTER_TITLE_WEIGHT: u32 = 2;

/// Weight of every other posting (content, case titles).
pub const BASE_WEIGHT: u32 = 1;

/// Multiplier when the query token equals the index term.
pub const EXACT_MULTIPLIER: u32 = 2;

/// Multiplier when the query token is a proper substring of the index term.
pub const PARTIAL_MULTIPLIER: u32 = 1;

/// Cap on topic results.
pub const TOPIC_RESULT_LIMIT: usize = 20;

/// Cap on federated record results.
pub const RECORD_RESULT_LIMIT: usize = 50;

/// Queries shorter than this (after trimming, in characters) return nothing.
pub const MIN_QUERY_CHARS: usize = 2;

/// Contribution of one posting to its node's score.
#[inline]
pub fn posting_contribution(weight: u32, exact: bool) -> u32 {
    let multiplier = if exact {
        EXACT_MULTIPLIER
    } else {
        PARTIAL_MULTIPLIER
    };
    weight * multiplier
}

/// Numeric rank of a relevance tier.
pub fn tier_rank(tier: RelevanceTier) -> f64 {
    match tier {
        RelevanceTier::High => 3.0,
        RelevanceTier::Medium => 2.0,
        RelevanceTier::Low => 1.0,
    }
}

/// Turns one engine's evidence into the shared `rank` number.
pub trait ScoringStrategy {
    type Evidence;

    fn rank(&self, evidence: &Self::Evidence) -> f64;
}

/// Topic engine: the accumulated occurrence-weighted score is the rank.
#[derive(Debug, Clone, Copy, Default)]
pub struct OccurrenceWeighted;

impl ScoringStrategy for OccurrenceWeighted {
    type Evidence = u32;

    fn rank(&self, score: &u32) -> f64 {
        f64::from(*score)
    }
}

/// Record scanner: the category's fixed tier is the rank.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryTier;

impl ScoringStrategy for CategoryTier {
    type Evidence = Category;

    fn rank(&self, category: &Category) -> f64 {
        tier_rank(category.tier())
    }
}
