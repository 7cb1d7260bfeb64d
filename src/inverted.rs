// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction over the topic tree.
//!
//! The index is built exactly once per corpus snapshot and is read-only
//! afterwards. There is no incremental update: changing the corpus means
//! [`SearchIndex::rebuild`], which throws the old mapping away.
//!
//! # Invariants (DO NOT VIOLATE)
//!
//! 1. **ONE_POSTING_PER_OCCURRENCE**: a field mentioning a term twice yields two
//!    postings. Repetition is a relevance signal, not a dedup bug.
//! 2. **APPEND_ORDER**: postings appear in the order the builder met them
//!    (pre-order node walk, then field order within a node).
//! 3. **VOCABULARY_ORDER**: terms are stored in first-seen order, so the
//!    partial-match scan in the scorer is deterministic.
//! 4. **NON_EMPTY**: every term has at least one posting.
//! 5. **POSTING_WELLFORMED**: `node < nodes.len()` and `weight == source.weight()`.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::corpus::Corpus;
use crate::normalize::tokenize;
use crate::types::{NodeLevel, Posting, PostingList, SourceKind};

/// What the index remembers about each node, for building results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedNode {
    pub id: String,
    pub level: NodeLevel,
    pub title: String,
    pub hebrew_title: Option<String>,
    /// Visible text of all content leaves, for snippets.
    pub body: String,
}

/// Term → postings mapping plus the node table postings point into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    nodes: Vec<IndexedNode>,
    terms: Vec<PostingList>,
    lookup: HashMap<String, usize>,
}

/// Counts for `clinisearch index` and for log lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub nodes: usize,
    pub terms: usize,
    pub postings: usize,
    pub title_postings: usize,
    pub chapter_title_postings: usize,
    pub content_postings: usize,
    pub case_title_postings: usize,
}

impl SearchIndex {
    /// Postings for an exact term, if the term was indexed.
    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.lookup
            .get(term)
            .map(|&slot| self.terms[slot].postings.as_slice())
    }

    /// All posting lists in first-seen term order.
    pub fn terms(&self) -> &[PostingList] {
        &self.terms
    }

    pub fn nodes(&self) -> &[IndexedNode] {
        &self.nodes
    }

    pub fn node(&self, ordinal: usize) -> Option<&IndexedNode> {
        self.nodes.get(ordinal)
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Discard the current mapping and build a fresh one from `corpus`.
    pub fn rebuild(&mut self, corpus: &Corpus) {
        *self = build_index(corpus);
    }

    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            nodes: self.nodes.len(),
            terms: self.terms.len(),
            ..IndexStats::default()
        };
        for posting in self.terms.iter().flat_map(|list| &list.postings) {
            stats.postings += 1;
            match posting.source {
                SourceKind::Title => stats.title_postings += 1,
                SourceKind::ChapterTitle => stats.chapter_title_postings += 1,
                SourceKind::Content => stats.content_postings += 1,
                SourceKind::CaseTitle => stats.case_title_postings += 1,
            }
        }
        stats
    }

    fn push(&mut self, term: String, posting: Posting) {
        match self.lookup.get(&term) {
            Some(&slot) => self.terms[slot].postings.push(posting),
            None => {
                self.lookup.insert(term.clone(), self.terms.len());
                self.terms.push(PostingList {
                    term,
                    postings: vec![posting],
                });
            }
        }
    }
}

/// Build the inverted index from a corpus snapshot.
///
/// Walks every node exactly once. For each indexable field (title, Hebrew
/// title, each content leaf, each nested case title) the text is normalized and
/// one posting is appended per token. Empty fields contribute nothing.
///
/// Deterministic: the same corpus always yields an identical index.
pub fn build_index(corpus: &Corpus) -> SearchIndex {
    let mut index = SearchIndex::default();

    for (ordinal, node) in corpus.nodes().into_iter().enumerate() {
        for (source, text) in node.indexable_fields() {
            for token in tokenize(text) {
                index.push(token, Posting::new(ordinal, source));
            }
        }

        index.nodes.push(IndexedNode {
            body: node.body_text(),
            id: node.id,
            level: node.level,
            title: node.node.title.clone(),
            hebrew_title: node.node.hebrew_title.clone(),
        });
    }

    debug_assert!(check_index_well_formed(&index));

    let stats = index.stats();
    debug!(
        nodes = stats.nodes,
        terms = stats.terms,
        postings = stats.postings,
        "built topic index"
    );
    index
}

/// Check the structural invariants listed in the module docs.
pub fn check_index_well_formed(index: &SearchIndex) -> bool {
    if index.lookup.len() != index.terms.len() {
        return false;
    }

    for (slot, list) in index.terms.iter().enumerate() {
        if index.lookup.get(&list.term) != Some(&slot) {
            return false;
        }
        if list.postings.is_empty() {
            return false;
        }
        for posting in &list.postings {
            if posting.node >= index.nodes.len() {
                return false;
            }
            if posting.weight != posting.source.weight() {
                return false;
            }
        }
    }

    true
}
