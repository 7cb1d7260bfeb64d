// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Federated scan over the flat record collections.
//!
//! No index here. Every enabled collection is walked on each call and each
//! declared field is tested for a case-insensitive substring match against the
//! trimmed raw query. Rank comes from the category's fixed tier, not from how
//! well the record matched.
//!
//! Chapters get one extra pass: their nested content is walked leaf by leaf,
//! and every matching leaf becomes its own result labelled with the path that
//! leads to it (`Cardiology > Arrhythmias > Atrial fibrillation`).
//!
//! Categories not in the enabled set are skipped before scanning, so they cost
//! nothing and can never leak into the output.

use tracing::debug;

use crate::normalize::strip_markup;
use crate::records::{ChapterRecord, RecordCollections, SearchableRecord};
use crate::scoring::{CategoryTier, Ranker, ScoringStrategy};
use crate::search::utils::{snippet_for, QueryOptions};
use crate::types::{Category, CategorySet, ResultItem};

const PATH_SEPARATOR: &str = " > ";

/// Scan all enabled collections with default options (≤50 results).
pub fn scan_records(query: &str, collections: &RecordCollections, enabled: &CategorySet) -> Vec<ResultItem> {
    scan_records_with(query, collections, enabled, &QueryOptions::records())
}

/// Scan all enabled collections.
pub fn scan_records_with(
    query: &str,
    collections: &RecordCollections,
    enabled: &CategorySet,
    options: &QueryOptions,
) -> Vec<ResultItem> {
    if !options.accepts(query) {
        return Vec::new();
    }

    let needle = query.trim().to_lowercase();
    let mut items = Vec::new();

    for category in enabled.iter() {
        let before = items.len();
        match category {
            Category::Topics => {}
            Category::Drugs => scan_collection(&collections.drugs, &needle, options, &mut items),
            Category::Questions => scan_collection(&collections.questions, &needle, options, &mut items),
            Category::Chapters => {
                for chapter in &collections.chapters {
                    scan_record(chapter, &needle, options, &mut items);
                    scan_chapter_content(chapter, &needle, options, &mut items);
                }
            }
            Category::Guidelines => scan_collection(&collections.guidelines, &needle, options, &mut items),
            Category::Translations => scan_collection(&collections.translations, &needle, options, &mut items),
            Category::Cases => scan_collection(&collections.cases, &needle, options, &mut items),
        }
        debug!(category = %category, hits = items.len() - before, "scanned collection");
    }

    let matched = items.len();
    let ranked = Ranker::new(options.limit).rank(items);
    debug!(query, matched, returned = ranked.len(), "scanned records");
    ranked
}

fn scan_collection<R: SearchableRecord>(
    records: &[R],
    needle: &str,
    options: &QueryOptions,
    out: &mut Vec<ResultItem>,
) {
    for record in records {
        scan_record(record, needle, options, out);
    }
}

/// Emit one result if any declared field of the record contains the needle.
fn scan_record<R: SearchableRecord>(record: &R, needle: &str, options: &QueryOptions, out: &mut Vec<ResultItem>) {
    let hit = record
        .searchable_fields()
        .into_iter()
        .find_map(|(name, text)| text.filter(|text| field_matches(text, needle)).map(|text| (name, text)));

    if let Some((field, text)) = hit {
        out.push(ResultItem {
            id: record.record_id().to_string(),
            category: R::CATEGORY,
            title: record.display_title().to_string(),
            snippet: snippet_for(text, needle, options.snippet_chars),
            path: None,
            rank: CategoryTier.rank(&R::CATEGORY),
            tier: Some(R::CATEGORY.tier()),
            matched_field: Some(field.to_string()),
        });
    }
}

/// One result per nested chapter leaf whose visible text contains the needle.
fn scan_chapter_content(
    chapter: &ChapterRecord,
    needle: &str,
    options: &QueryOptions,
    out: &mut Vec<ResultItem>,
) {
    let category = Category::Chapters;
    let mut path: Vec<&str> = Vec::new();

    for entry in &chapter.content {
        path.push(&entry.label);
        entry.value.for_each_leaf(&mut path, &mut |labels, text| {
            if !field_matches(text, needle) {
                return;
            }
            let mut id = chapter.id.clone();
            let mut label = chapter.title.clone();
            for segment in labels {
                id.push('/');
                id.push_str(segment);
                label.push_str(PATH_SEPARATOR);
                label.push_str(segment);
            }
            out.push(ResultItem {
                id,
                category,
                title: chapter.title.clone(),
                snippet: snippet_for(text, needle, options.snippet_chars),
                path: Some(label),
                rank: CategoryTier.rank(&category),
                tier: Some(category.tier()),
                matched_field: Some("content".to_string()),
            });
        });
        path.pop();
    }
}

/// Case-insensitive containment. Markup is stripped first so tag names and
/// attributes never match. Whitespace is compared as written, with or without
/// markup around it.
fn field_matches(text: &str, needle: &str) -> bool {
    strip_markup(text).to_lowercase().contains(needle)
}
