// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Flat record collections: formulary, question bank, textbook chapters,
//! guidelines, translation pairs, case entries.
//!
//! These are never indexed. The federated scanner walks them on demand, so
//! each shape only has to say which of its fields are searchable and in what
//! order. Optional fields that are absent are skipped; the record stays
//! eligible through its other fields.

use serde::{Deserialize, Serialize};

use crate::corpus::{entries_from_json, entries_to_json, ContentEntry};
use crate::types::Category;

/// One searchable field of a record: its wire name and its text, if present.
pub type SearchableField<'a> = (&'static str, Option<&'a str>);

/// A record shape the federated scanner knows how to search.
pub trait SearchableRecord {
    const CATEGORY: Category;

    fn record_id(&self) -> &str;

    /// Label shown as the result title.
    fn display_title(&self) -> &str;

    /// Declared searchable fields, in match-priority order.
    fn searchable_fields(&self) -> Vec<SearchableField<'_>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drug {
    pub id: String,
    pub generic_name: String,
    /// Brand name as marketed locally.
    #[serde(default)]
    pub local_name: Option<String>,
    #[serde(default)]
    pub hebrew_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl SearchableRecord for Drug {
    const CATEGORY: Category = Category::Drugs;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> &str {
        &self.generic_name
    }

    fn searchable_fields(&self) -> Vec<SearchableField<'_>> {
        vec![
            ("genericName", Some(self.generic_name.as_str())),
            ("localName", self.local_name.as_deref()),
            ("hebrewName", self.hebrew_name.as_deref()),
            ("category", self.category.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamQuestion {
    pub id: String,
    pub stem: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl SearchableRecord for ExamQuestion {
    const CATEGORY: Category = Category::Questions;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> &str {
        self.topic.as_deref().unwrap_or(&self.stem)
    }

    fn searchable_fields(&self) -> Vec<SearchableField<'_>> {
        vec![
            ("stem", Some(self.stem.as_str())),
            ("topic", self.topic.as_deref()),
            ("explanation", self.explanation.as_deref()),
        ]
    }
}

/// A textbook chapter with arbitrarily nested content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub hebrew_title: Option<String>,
    #[serde(
        default,
        deserialize_with = "entries_from_json",
        serialize_with = "entries_to_json"
    )]
    pub content: Vec<ContentEntry>,
}

impl SearchableRecord for ChapterRecord {
    const CATEGORY: Category = Category::Chapters;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> &str {
        &self.title
    }

    fn searchable_fields(&self) -> Vec<SearchableField<'_>> {
        vec![
            ("title", Some(self.title.as_str())),
            ("hebrewTitle", self.hebrew_title.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidelineEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub hebrew_title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Issuing body, e.g. a ministry or professional society.
    #[serde(default)]
    pub source: Option<String>,
}

impl SearchableRecord for GuidelineEntry {
    const CATEGORY: Category = Category::Guidelines;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> &str {
        &self.title
    }

    fn searchable_fields(&self) -> Vec<SearchableField<'_>> {
        vec![
            ("title", Some(self.title.as_str())),
            ("hebrewTitle", self.hebrew_title.as_deref()),
            ("summary", self.summary.as_deref()),
            ("source", self.source.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationPair {
    pub id: String,
    pub english: String,
    pub hebrew: String,
    #[serde(default)]
    pub context: Option<String>,
}

impl SearchableRecord for TranslationPair {
    const CATEGORY: Category = Category::Translations;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> &str {
        &self.english
    }

    fn searchable_fields(&self) -> Vec<SearchableField<'_>> {
        vec![
            ("english", Some(self.english.as_str())),
            ("hebrew", Some(self.hebrew.as_str())),
            ("context", self.context.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub hebrew_title: Option<String>,
    #[serde(default)]
    pub presentation: Option<String>,
}

impl SearchableRecord for CaseEntry {
    const CATEGORY: Category = Category::Cases;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> &str {
        &self.title
    }

    fn searchable_fields(&self) -> Vec<SearchableField<'_>> {
        vec![
            ("title", Some(self.title.as_str())),
            ("hebrewTitle", self.hebrew_title.as_deref()),
            ("presentation", self.presentation.as_deref()),
        ]
    }
}

/// All flat collections, each independently named.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCollections {
    #[serde(default)]
    pub drugs: Vec<Drug>,
    #[serde(default)]
    pub questions: Vec<ExamQuestion>,
    #[serde(default)]
    pub chapters: Vec<ChapterRecord>,
    #[serde(default)]
    pub guidelines: Vec<GuidelineEntry>,
    #[serde(default)]
    pub translations: Vec<TranslationPair>,
    #[serde(default)]
    pub cases: Vec<CaseEntry>,
}

impl RecordCollections {
    /// Number of records in one category's collection.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Topics => 0,
            Category::Drugs => self.drugs.len(),
            Category::Questions => self.questions.len(),
            Category::Chapters => self.chapters.len(),
            Category::Guidelines => self.guidelines.len(),
            Category::Translations => self.translations.len(),
            Category::Cases => self.cases.len(),
        }
    }

    pub fn total(&self) -> usize {
        Category::RECORDS.iter().map(|&c| self.count(c)).sum()
    }
}
