// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted query scoring over the topic index.
//!
//! For each query token `q`:
//!
//! - **Exact**: every posting under term `q` adds `weight × 2` to its node.
//! - **Partial**: every posting under a term `t ≠ q` that contains `q` adds
//!   `weight × 1` to its node.
//!
//! Contributions sum across tokens. Nodes are ranked by descending score; ties
//! keep the order in which the node first received a contribution.
//!
//! # Cost
//!
//! The partial pass is a linear scan over the whole vocabulary per query token.
//! That's fine at curriculum scale (a few tens of thousands of terms). A corpus
//! with a much larger vocabulary would want a substring structure here, such as
//! the suffix arrays in the index crates this one grew out of.

use tracing::debug;

use crate::inverted::SearchIndex;
use crate::scoring::{posting_contribution, OccurrenceWeighted, Ranker, ScoringStrategy};
use crate::search::utils::{find_char_index, make_snippet, parse_query, QueryOptions, ScoreAccumulator};
use crate::types::{Category, ResultItem};

/// Score a query against the topic index with default options (≤20 results).
pub fn score_query(query: &str, index: &SearchIndex) -> Vec<ResultItem> {
    score_query_with(query, index, &QueryOptions::topics())
}

/// Score a query against the topic index.
pub fn score_query_with(query: &str, index: &SearchIndex, options: &QueryOptions) -> Vec<ResultItem> {
    if !options.accepts(query) {
        return Vec::new();
    }

    let tokens = parse_query(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let scores = accumulate_scores(&tokens, index);
    let matched = scores.len();

    let strategy = OccurrenceWeighted;
    let items: Vec<ResultItem> = scores
        .into_ordered()
        .into_iter()
        .filter_map(|(ordinal, score)| {
            let node = index.node(ordinal)?;
            let focus = tokens
                .iter()
                .find_map(|token| find_char_index(&node.body, token));
            Some(ResultItem {
                id: node.id.clone(),
                category: Category::Topics,
                title: node.title.clone(),
                snippet: make_snippet(&node.body, focus, options.snippet_chars),
                path: None,
                rank: strategy.rank(&score),
                tier: None,
                matched_field: None,
            })
        })
        .collect();

    let ranked = Ranker::new(options.limit).rank(items);
    debug!(
        query,
        tokens = tokens.len(),
        matched,
        returned = ranked.len(),
        "scored topic query"
    );
    ranked
}

/// Raw per-node scores, keyed by node ordinal, in first-contribution order.
///
/// Exposed for tests and tooling that want the numbers without result shaping.
pub fn accumulate_scores(tokens: &[String], index: &SearchIndex) -> ScoreAccumulator {
    let mut scores = ScoreAccumulator::new();

    for token in tokens {
        if let Some(postings) = index.postings(token) {
            for posting in postings {
                scores.add(posting.node, posting_contribution(posting.weight, true));
            }
        }

        for list in index.terms() {
            if list.term != *token && list.term.contains(token.as_str()) {
                for posting in &list.postings {
                    scores.add(posting.node, posting_contribution(posting.weight, false));
                }
            }
        }
    }

    scores
}
