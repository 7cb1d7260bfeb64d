// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by both search engines.
//!
//! Postings and source kinds belong to the weighted topic engine; categories
//! and relevance tiers belong to the federated record scanner. `ResultItem` is
//! the one shape both engines hand back, so callers never need to know which
//! engine produced a hit.
//!
//! # Invariants
//!
//! - **Posting**: `weight == source.weight()`. Weights are static per source kind,
//!   never computed from text.
//! - **ResultItem**: `rank` is the only sort key. Larger is better.
//! - **Category**: the scan order in [`Category::RECORDS`] is also the order
//!   results appear within a relevance tier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

// =============================================================================
// TOPIC INDEX TYPES
// =============================================================================

/// Which field of a content node produced a posting.
///
/// **Gotcha**: the derived `Ord` is declaration order, not weight order. Use
/// [`SourceKind::weight`] for anything score related.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SourceKind {
    Title,
    ChapterTitle,
    Content,
    CaseTitle,
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Title,
        SourceKind::ChapterTitle,
        SourceKind::Content,
        SourceKind::CaseTitle,
    ];

    /// Static weight: title 3, chapter title 2, everything else 1.
    pub fn weight(self) -> u32 {
        match self {
            SourceKind::Title => crate::scoring::TITLE_WEIGHT,
            SourceKind::ChapterTitle => crate::scoring::CHAPTER_TITLE_WEIGHT,
            SourceKind::Content | SourceKind::CaseTitle => crate::scoring::BASE_WEIGHT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Title => "title",
            SourceKind::ChapterTitle => "chapterTitle",
            SourceKind::Content => "content",
            SourceKind::CaseTitle => "caseTitle",
        }
    }
}

/// Depth of a node in the topic tree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeLevel {
    Module,
    Chapter,
    Section,
}

impl NodeLevel {
    /// Depth 0 is a module, depth 1 a chapter, anything deeper a section.
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 => NodeLevel::Module,
            1 => NodeLevel::Chapter,
            _ => NodeLevel::Section,
        }
    }

    /// The source kind a node's own title is indexed under.
    ///
    /// Chapter titles carry the chapter weight; module and section titles carry
    /// the full title weight.
    pub fn title_kind(self) -> SourceKind {
        match self {
            NodeLevel::Chapter => SourceKind::ChapterTitle,
            NodeLevel::Module | NodeLevel::Section => SourceKind::Title,
        }
    }
}

/// One token occurrence inside the inverted index.
///
/// The term itself is the key of the posting list that holds this posting, so
/// it isn't repeated here. `node` is an ordinal into the index's node table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub node: usize,
    pub source: SourceKind,
    pub weight: u32,
}

impl Posting {
    pub fn new(node: usize, source: SourceKind) -> Self {
        Posting {
            node,
            source,
            weight: source.weight(),
        }
    }
}

/// All postings for one term, in the order they were appended during the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingList {
    pub term: String,
    pub postings: Vec<Posting>,
}

// =============================================================================
// RECORD CATEGORIES
// =============================================================================

/// Where a result came from.
///
/// `Topics` is the hierarchical corpus (weighted engine). Everything else is a
/// flat record collection scanned by the federated engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Topics,
    Drugs,
    Questions,
    Chapters,
    Guidelines,
    Translations,
    Cases,
}

impl Category {
    /// Record categories in scan order.
    pub const RECORDS: [Category; 6] = [
        Category::Drugs,
        Category::Questions,
        Category::Chapters,
        Category::Guidelines,
        Category::Translations,
        Category::Cases,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Topics => "topics",
            Category::Drugs => "drugs",
            Category::Questions => "questions",
            Category::Chapters => "chapters",
            Category::Guidelines => "guidelines",
            Category::Translations => "translations",
            Category::Cases => "cases",
        }
    }

    /// Static relevance tier for federated matches in this category.
    pub fn tier(self) -> RelevanceTier {
        match self {
            Category::Drugs | Category::Chapters | Category::Topics => RelevanceTier::High,
            Category::Questions | Category::Guidelines | Category::Cases => RelevanceTier::Medium,
            Category::Translations => RelevanceTier::Low,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Category::Topics => 0,
            Category::Drugs => 1,
            Category::Questions => 1 << 1,
            Category::Chapters => 1 << 2,
            Category::Guidelines => 1 << 3,
            Category::Translations => 1 << 4,
            Category::Cases => 1 << 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SearchError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "topics" => Ok(Category::Topics),
            "drugs" => Ok(Category::Drugs),
            "questions" => Ok(Category::Questions),
            "chapters" => Ok(Category::Chapters),
            "guidelines" => Ok(Category::Guidelines),
            "translations" => Ok(Category::Translations),
            "cases" => Ok(Category::Cases),
            other => Err(SearchError::input(format!(
                "unknown category: {other} (expected drugs|questions|chapters|guidelines|translations|cases)"
            ))),
        }
    }
}

/// The set of record categories a caller is allowed to scan.
///
/// Comes from the access-control layer. A category missing from the set is
/// never scanned at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategorySet(u8);

impl CategorySet {
    pub fn all() -> Self {
        Category::RECORDS
            .iter()
            .fold(CategorySet::none(), |set, &category| set.with(category))
    }

    pub fn none() -> Self {
        CategorySet(0)
    }

    pub fn only(category: Category) -> Self {
        CategorySet::none().with(category)
    }

    #[must_use]
    pub fn with(self, category: Category) -> Self {
        CategorySet(self.0 | category.bit())
    }

    #[must_use]
    pub fn without(self, category: Category) -> Self {
        CategorySet(self.0 & !category.bit())
    }

    pub fn contains(self, category: Category) -> bool {
        let bit = category.bit();
        bit != 0 && self.0 & bit == bit
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled categories, in scan order.
    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::RECORDS
            .into_iter()
            .filter(move |category| self.contains(*category))
    }

    /// Parse a list of category names. `topics` is rejected: it isn't a record
    /// collection and can't be scanned.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, SearchError> {
        let mut set = CategorySet::none();
        for name in names {
            let category: Category = name.as_ref().parse()?;
            if category == Category::Topics {
                return Err(SearchError::input(
                    "topics is not a record category; use the topic search instead",
                ));
            }
            set = set.with(category);
        }
        Ok(set)
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        CategorySet::all()
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CategorySet::none(), |set, category| set.with(category))
    }
}

/// Coarse, category-fixed relevance label used by the federated scanner.
///
/// Declared best-first so the derived `Ord` sorts High before Low.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceTier {
    High,
    Medium,
    Low,
}

impl RelevanceTier {
    pub fn as_str(self) -> &'static str {
        match self {
            RelevanceTier::High => "high",
            RelevanceTier::Medium => "medium",
            RelevanceTier::Low => "low",
        }
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// What callers get back from either engine.
///
/// `rank` is the unified ranking contract: the accumulated weight for topic
/// hits, the tier's numeric rank for record hits. `tier` is only set for
/// record hits, `path` only for nested chapter content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub rank: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<RelevanceTier>,
    /// Name of the record field that matched (record hits only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_field: Option<String>,
}
