// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so every test agrees on what "the falls
//! corpus" or "the warfarin collections" look like.

#![doc(hidden)]

use crate::corpus::{ContentEntry, Corpus, TopicNode};
use crate::records::{
    CaseEntry, ChapterRecord, Drug, ExamQuestion, GuidelineEntry, RecordCollections,
    TranslationPair,
};

/// Create a drug with only the required fields set.
pub fn make_drug(id: &str, generic_name: &str) -> Drug {
    Drug {
        id: id.to_string(),
        generic_name: generic_name.to_string(),
        local_name: None,
        hebrew_name: None,
        category: None,
    }
}

/// Create an exam question with only a stem.
pub fn make_question(id: &str, stem: &str) -> ExamQuestion {
    ExamQuestion {
        id: id.to_string(),
        stem: stem.to_string(),
        topic: None,
        explanation: None,
    }
}

pub fn make_guideline(id: &str, title: &str) -> GuidelineEntry {
    GuidelineEntry {
        id: id.to_string(),
        title: title.to_string(),
        hebrew_title: None,
        summary: None,
        source: None,
    }
}

pub fn make_translation(id: &str, english: &str, hebrew: &str) -> TranslationPair {
    TranslationPair {
        id: id.to_string(),
        english: english.to_string(),
        hebrew: hebrew.to_string(),
        context: None,
    }
}

pub fn make_case(id: &str, title: &str) -> CaseEntry {
    CaseEntry {
        id: id.to_string(),
        title: title.to_string(),
        hebrew_title: None,
        presentation: None,
    }
}

pub fn make_chapter(id: &str, title: &str, content: Vec<ContentEntry>) -> ChapterRecord {
    ChapterRecord {
        id: id.to_string(),
        title: title.to_string(),
        hebrew_title: None,
        content,
    }
}

/// Section A titled "Falls Risk Assessment", section B mentioning "falls"
/// twice in content, both under one chapter of one module.
///
/// Querying `falls` must rank A (6) above B (4).
pub fn falls_corpus() -> Corpus {
    Corpus::new(vec![TopicNode::new("Nursing Fundamentals").with_child(
        TopicNode::new("Patient Safety")
            .with_key("safety")
            .with_child(TopicNode::new("Falls Risk Assessment").with_key("a"))
            .with_child(
                TopicNode::new("Mobility")
                    .with_key("b")
                    .with_field("body", "Assess falls history; repeated falls raise concern."),
            ),
    )])
}

/// A drug Warfarin (brand Coumadin) and a question mentioning warfarin.
///
/// Querying `WARF` must return the drug (High) before the question (Medium).
pub fn warfarin_collections() -> RecordCollections {
    RecordCollections {
        drugs: vec![Drug {
            local_name: Some("Coumadin".to_string()),
            hebrew_name: Some("וורפרין".to_string()),
            category: Some("Anticoagulant".to_string()),
            ..make_drug("drug-warfarin", "Warfarin")
        }],
        questions: vec![ExamQuestion {
            topic: Some("Anticoagulation".to_string()),
            ..make_question("q-17", "A patient on warfarin has an INR of 5.2. What next?")
        }],
        ..RecordCollections::default()
    }
}

/// A small bilingual corpus spanning two modules, used by benches and
/// integration tests that want more than one scenario at a time.
pub fn clinical_corpus() -> Corpus {
    Corpus::new(vec![
        TopicNode::new("Medical-Surgical Nursing")
            .with_hebrew_title("סיעוד פנימי-כירורגי")
            .with_child(
                TopicNode::new("Cardiology")
                    .with_hebrew_title("קרדיולוגיה")
                    .with_child(
                        TopicNode::new("Heart Failure")
                            .with_hebrew_title("אי ספיקת לב")
                            .with_field("overview", "<p>Heart failure reduces cardiac output.</p>")
                            .with_entry(ContentEntry::group(
                                "Management",
                                vec![
                                    ContentEntry::leaf("Diuretics", "Furosemide for congestion"),
                                    ContentEntry::leaf("Monitoring", "Daily weights and fluid balance"),
                                ],
                            ))
                            .with_case("Decompensated heart failure"),
                    )
                    .with_child(
                        TopicNode::new("Anticoagulation")
                            .with_field("body", "Warfarin requires INR monitoring; heparin requires aPTT."),
                    ),
            )
            .with_child(
                TopicNode::new("Endocrinology").with_child(
                    TopicNode::new("Diabetic Ketoacidosis")
                        .with_field("body", "Insulin infusion, fluids, potassium replacement."),
                ),
            ),
        TopicNode::new("Fundamentals").with_child(
            TopicNode::new("Patient Safety").with_child(
                TopicNode::new("Falls Prevention")
                    .with_hebrew_title("מניעת נפילות")
                    .with_field("body", "Bed alarms and non-slip footwear reduce falls."),
            ),
        ),
    ])
}

/// One record in every category, all mentioning insulin somewhere.
pub fn insulin_collections() -> RecordCollections {
    RecordCollections {
        drugs: vec![make_drug("d-insulin", "Insulin glargine")],
        questions: vec![make_question("q-insulin", "When is insulin held before surgery?")],
        chapters: vec![make_chapter(
            "ch-endo",
            "Endocrinology",
            vec![ContentEntry::group(
                "Diabetes",
                vec![ContentEntry::leaf("Type 1", "Lifelong insulin therapy")],
            )],
        )],
        guidelines: vec![GuidelineEntry {
            summary: Some("Basal-bolus insulin for inpatients".to_string()),
            ..make_guideline("g-glycemic", "Inpatient glycemic control")
        }],
        translations: vec![make_translation("t-insulin", "Insulin", "אינסולין")],
        cases: vec![make_case("c-hypo", "Insulin-induced hypoglycemia")],
    }
}
