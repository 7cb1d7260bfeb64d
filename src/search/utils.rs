// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for both search engines.
//!
//! Query parsing, the short-query threshold, per-query options, insertion-ordered
//! score accumulation, and snippet extraction. Extracted here so the weighted
//! scorer and the record scanner can't drift apart on the basics.

use std::collections::HashMap;

use crate::config::SearchConfig;
use crate::normalize::{tokenize, trimmed_len, visible_text};
use crate::scoring::{MIN_QUERY_CHARS, RECORD_RESULT_LIMIT, TOPIC_RESULT_LIMIT};

/// Default snippet length, in characters.
pub const SNIPPET_CHARS: usize = 160;

const ELLIPSIS: char = '…';

/// Per-call knobs shared by both engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub limit: usize,
    pub min_query_chars: usize,
    pub snippet_chars: usize,
}

impl QueryOptions {
    /// Topic search defaults: 20 results.
    pub fn topics() -> Self {
        QueryOptions {
            limit: TOPIC_RESULT_LIMIT,
            min_query_chars: MIN_QUERY_CHARS,
            snippet_chars: SNIPPET_CHARS,
        }
    }

    /// Record scan defaults: 50 results.
    pub fn records() -> Self {
        QueryOptions {
            limit: RECORD_RESULT_LIMIT,
            ..QueryOptions::topics()
        }
    }

    pub fn topics_from(config: &SearchConfig) -> Self {
        QueryOptions {
            limit: config.topic_limit,
            min_query_chars: config.min_query_chars,
            snippet_chars: config.snippet_chars,
        }
    }

    pub fn records_from(config: &SearchConfig) -> Self {
        QueryOptions {
            limit: config.record_limit,
            ..QueryOptions::topics_from(config)
        }
    }

    /// Is the query long enough to run at all?
    pub fn accepts(&self, query: &str) -> bool {
        trimmed_len(query) >= self.min_query_chars
    }
}

/// Split a query into normalized tokens, same rules as the index side.
///
/// # Example
///
/// ```ignore
/// assert_eq!(parse_query("Falls RISK of"), vec!["falls", "risk"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    tokenize(query)
}

/// Sums scores per key while remembering the order keys first appeared in.
///
/// The order is what makes tie handling reproducible: a stable sort over
/// `into_ordered()` keeps first-contribution order among equal scores.
#[derive(Debug, Default)]
pub struct ScoreAccumulator {
    slots: HashMap<usize, usize>,
    entries: Vec<(usize, u32)>,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        ScoreAccumulator::default()
    }

    pub fn add(&mut self, key: usize, amount: u32) {
        match self.slots.get(&key) {
            Some(&slot) => self.entries[slot].1 += amount,
            None => {
                self.slots.insert(key, self.entries.len());
                self.entries.push((key, amount));
            }
        }
    }

    pub fn get(&self, key: usize) -> Option<u32> {
        self.slots.get(&key).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(key, score)` pairs in first-contribution order.
    pub fn into_ordered(self) -> Vec<(usize, u32)> {
        self.entries
    }
}

/// Character index of the first case-insensitive occurrence of `needle_lower`.
///
/// `needle_lower` must already be lowercased. The result indexes chars of
/// `haystack` itself: some letters lowercase to more than one char (`İ`), so
/// each lowered byte remembers the original char it came from.
pub fn find_char_index(haystack: &str, needle_lower: &str) -> Option<usize> {
    if needle_lower.is_empty() {
        return None;
    }
    let mut lowered = String::with_capacity(haystack.len());
    let mut origin: Vec<usize> = Vec::with_capacity(haystack.len());
    for (index, c) in haystack.chars().enumerate() {
        lowered.extend(c.to_lowercase());
        origin.resize(lowered.len(), index);
    }
    let byte = lowered.find(needle_lower)?;
    origin.get(byte).copied()
}

/// Cut a snippet of at most `max_chars` characters of visible text.
///
/// When `focus` (a character index into the visible text) is given, the window
/// starts a little before it so the match isn't flush against the edge.
/// Ellipses mark trimmed ends and count toward the budget.
pub fn make_snippet(visible: &str, focus: Option<usize>, max_chars: usize) -> String {
    let chars: Vec<char> = visible.chars().collect();
    if chars.len() <= max_chars {
        return visible.to_string();
    }
    if max_chars < 3 {
        return chars[..max_chars].iter().collect();
    }

    let lead = max_chars / 4;
    let focus = focus.unwrap_or(0).min(chars.len());
    let mut start = focus.saturating_sub(lead);
    // Leave room for the leading and trailing ellipsis
    let budget = max_chars - 2;
    if start + budget > chars.len() {
        start = chars.len().saturating_sub(budget);
    }
    let end = (start + budget).min(chars.len());

    let mut snippet = String::with_capacity(max_chars * 2);
    if start > 0 {
        snippet.push(ELLIPSIS);
    }
    snippet.extend(&chars[start..end]);
    if end < chars.len() {
        snippet.push(ELLIPSIS);
    }
    snippet
}

/// Snippet for raw field text: strip markup, then center on the first match.
pub fn snippet_for(raw: &str, needle_lower: &str, max_chars: usize) -> String {
    let visible = visible_text(raw);
    let focus = find_char_index(&visible, needle_lower);
    make_snippet(&visible, focus, max_chars)
}
