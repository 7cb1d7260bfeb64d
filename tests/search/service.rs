//! The service facade over a data directory on disk.

use clinisearch::{load_dataset, SearchConfig, SearchError, SearchService};
use serde_json::json;

use crate::common::write_dataset;

const CORPUS: &str = r#"{
    "modules": [{
        "title": "Pharmacology",
        "hebrewTitle": "פרמקולוגיה",
        "children": [{
            "key": "anticoag",
            "title": "Anticoagulants",
            "children": [{
                "key": "warfarin",
                "title": "Warfarin",
                "fields": {"dosing": "<p>Titrate to INR 2-3.</p>"}
            }]
        }]
    }]
}"#;

const FORMULARY: &str = r#"{"drugs": [
    {"id": "d1", "genericName": "Warfarin", "localName": "Coumadin"},
    {"id": "d2", "genericName": "Enoxaparin"}
]}"#;

const QUESTIONS: &str = r#"{"questions": [
    {"id": "q1", "stem": "Antidote for warfarin?", "explanation": "Vitamin K"}
]}"#;

fn service() -> SearchService {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(
        dir.path(),
        Some(CORPUS),
        &[("formulary.json", FORMULARY), ("questions.json", QUESTIONS)],
    );
    let dataset = load_dataset(dir.path()).unwrap();
    SearchService::new(&dataset.corpus, dataset.collections, SearchConfig::default())
}

#[test]
fn test_request_hits_both_engines() {
    let response = service()
        .handle_request(&json!({"query": "warfarin"}))
        .unwrap();
    let topic_ids: Vec<&str> = response.topics.iter().map(|r| r.id.as_str()).collect();
    let record_ids: Vec<&str> = response.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(topic_ids, vec!["0.anticoag.warfarin"]);
    assert_eq!(record_ids, vec!["d1", "q1"]);
}

#[test]
fn test_request_category_filter() {
    let response = service()
        .handle_request(&json!({"query": "warfarin", "categories": ["drugs"]}))
        .unwrap();
    assert_eq!(response.records.len(), 1);
    assert_eq!(response.records[0].id, "d1");
}

#[test]
fn test_request_body_string() {
    let response = service()
        .handle_request_str(r#"{"query": "vitamin"}"#)
        .unwrap();
    assert!(response.topics.is_empty());
    assert_eq!(response.records[0].matched_field.as_deref(), Some("explanation"));
}

#[test]
fn test_malformed_requests() {
    let service = service();
    for request in [
        json!({"query": ["warfarin"]}),
        json!({"query": null}),
        json!("warfarin"),
        json!({"query": "warfarin", "categories": "drugs"}),
        json!({"query": "warfarin", "categories": [1]}),
        json!({"query": "warfarin", "categories": ["topics"]}),
    ] {
        assert!(
            matches!(service.handle_request(&request), Err(SearchError::Input(_))),
            "{request}"
        );
    }
}

#[test]
fn test_response_serializes_camel_case() {
    let response = service()
        .handle_request(&json!({"query": "coumadin"}))
        .unwrap();
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["records"][0]["matchedField"], "localName");
    assert_eq!(value["records"][0]["tier"], "high");
}
