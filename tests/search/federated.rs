//! Federated record scanning against the shared fixtures.

use clinisearch::{
    scan_records, scan_records_with, Category, CategorySet, ContentEntry, QueryOptions,
    RecordCollections, RelevanceTier,
};

use crate::common::{
    assert_sorted_by_rank, ids, insulin_collections, make_chapter, make_drug, warfarin_collections,
};

#[test]
fn test_warfarin_drug_before_question() {
    let results = scan_records("WARF", &warfarin_collections(), &CategorySet::all());
    assert_eq!(ids(&results), vec!["drug-warfarin", "q-17"]);
    assert_eq!(results[0].tier, Some(RelevanceTier::High));
    assert_eq!(results[1].tier, Some(RelevanceTier::Medium));
}

#[test]
fn test_hebrew_drug_name() {
    let results = scan_records("וורפרין", &warfarin_collections(), &CategorySet::all());
    assert_eq!(ids(&results), vec!["drug-warfarin"]);
    assert_eq!(results[0].matched_field.as_deref(), Some("hebrewName"));
}

#[test]
fn test_all_categories_merge_by_tier() {
    let results = scan_records("insulin", &insulin_collections(), &CategorySet::all());
    assert_eq!(
        ids(&results),
        vec![
            "d-insulin",
            "ch-endo/Diabetes/Type 1",
            "q-insulin",
            "g-glycemic",
            "c-hypo",
            "t-insulin",
        ]
    );
    assert_sorted_by_rank(&results);
}

#[test]
fn test_guideline_matches_through_summary() {
    let results = scan_records(
        "basal-bolus",
        &insulin_collections(),
        &CategorySet::only(Category::Guidelines),
    );
    assert_eq!(ids(&results), vec!["g-glycemic"]);
    assert_eq!(results[0].matched_field.as_deref(), Some("summary"));
}

#[test]
fn test_each_disabled_category_contributes_nothing() {
    let collections = insulin_collections();
    for category in Category::RECORDS {
        let enabled = CategorySet::all().without(category);
        let results = scan_records("insulin", &collections, &enabled);
        assert!(results.iter().all(|r| r.category != category), "{category} leaked");
        assert_eq!(results.len(), 5);
    }
}

#[test]
fn test_single_category() {
    let results = scan_records(
        "insulin",
        &insulin_collections(),
        &CategorySet::only(Category::Translations),
    );
    assert_eq!(ids(&results), vec!["t-insulin"]);
    assert_eq!(results[0].tier, Some(RelevanceTier::Low));
}

#[test]
fn test_chapter_path_labels() {
    let results = scan_records(
        "lifelong",
        &insulin_collections(),
        &CategorySet::only(Category::Chapters),
    );
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path.as_deref(), Some("Endocrinology > Diabetes > Type 1"));
    assert_eq!(results[0].title, "Endocrinology");
}

#[test]
fn test_deeply_nested_chapter_content() {
    let collections = RecordCollections {
        chapters: vec![make_chapter(
            "ch-resp",
            "Respiratory",
            vec![ContentEntry::group(
                "Asthma",
                vec![ContentEntry::group(
                    "Acute",
                    vec![ContentEntry::leaf("Rescue", "Salbutamol via spacer")],
                )],
            )],
        )],
        ..RecordCollections::default()
    };
    let results = scan_records("salbutamol", &collections, &CategorySet::all());
    assert_eq!(ids(&results), vec!["ch-resp/Asthma/Acute/Rescue"]);
    assert_eq!(
        results[0].path.as_deref(),
        Some("Respiratory > Asthma > Acute > Rescue")
    );
}

#[test]
fn test_chapter_json_arrays_label_by_position() {
    let collections: RecordCollections = serde_json::from_str(
        r#"{"chapters": [{
            "id": "ch-neuro",
            "title": "Neurology",
            "content": {"Stroke signs": ["Facial droop", "Arm weakness", "Speech difficulty"]}
        }]}"#,
    )
    .unwrap();
    let results = scan_records("weakness", &collections, &CategorySet::all());
    assert_eq!(ids(&results), vec!["ch-neuro/Stroke signs/2"]);
}

#[test]
fn test_cap_fifty_keeps_scan_order() {
    let collections = RecordCollections {
        drugs: (0..60).map(|i| make_drug(&format!("d{i:02}"), "Amoxicillin")).collect(),
        ..RecordCollections::default()
    };
    let results = scan_records("amox", &collections, &CategorySet::all());
    assert_eq!(results.len(), 50);
    assert_eq!(results[49].id, "d49");
}

#[test]
fn test_custom_record_limit() {
    let options = QueryOptions {
        limit: 2,
        ..QueryOptions::records()
    };
    let results = scan_records_with("insulin", &insulin_collections(), &CategorySet::all(), &options);
    assert_eq!(ids(&results), vec!["d-insulin", "ch-endo/Diabetes/Type 1"]);
}

#[test]
fn test_short_and_blank_queries() {
    let collections = insulin_collections();
    assert!(scan_records("", &collections, &CategorySet::all()).is_empty());
    assert!(scan_records("i", &collections, &CategorySet::all()).is_empty());
    assert!(scan_records("    ", &collections, &CategorySet::all()).is_empty());
}

#[test]
fn test_two_char_query_is_a_substring_test() {
    // The scanner has no token length floor, only the 2-char query threshold
    let results = scan_records("in", &insulin_collections(), &CategorySet::only(Category::Drugs));
    assert_eq!(ids(&results), vec!["d-insulin"]);
}
