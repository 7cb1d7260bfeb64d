//! JSON loaders and data-directory manifests.

use std::fs;

use clinisearch::{
    build_index, load_collections, load_corpus, load_dataset, score_query, ContentValue,
    SearchError,
};

use crate::common::write_dataset;

const CORPUS: &str = r#"{
    "modules": [{
        "title": "Critical Care",
        "children": [{
            "title": "Shock",
            "fields": {
                "Types": {"Septic": "Vasodilation", "Cardiogenic": "Pump failure"},
                "Steps": ["Fluids", "Vasopressors"],
                "weight": 3
            },
            "cases": [{"title": "Septic shock after surgery", "hebrewTitle": "הלם ספטי"}]
        }]
    }]
}"#;

#[test]
fn test_load_corpus_keeps_nested_content_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corpus.json");
    fs::write(&path, CORPUS).unwrap();

    let corpus = load_corpus(&path).unwrap();
    let shock = &corpus.modules[0].children[0];
    let labels: Vec<&str> = shock.fields.iter().map(|f| f.label.as_str()).collect();
    // The number is dropped; text, objects and arrays survive in authored order
    assert_eq!(labels, vec!["Types", "Steps"]);
    match &shock.fields[1].value {
        ContentValue::Group(items) => {
            let positions: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
            assert_eq!(positions, vec!["1", "2"]);
        }
        ContentValue::Leaf(_) => panic!("expected a group"),
    }
    assert_eq!(shock.cases[0].hebrew_title.as_deref(), Some("הלם ספטי"));
}

#[test]
fn test_loaded_corpus_is_searchable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corpus.json");
    fs::write(&path, CORPUS).unwrap();

    let index = build_index(&load_corpus(&path).unwrap());
    // Chapter title (2×2) + case title (1×2); the "Septic" label isn't indexed
    let results = score_query("shock", &index);
    assert_eq!(results[0].id, "0.0");
    assert_eq!(results[0].rank, 6.0);
}

#[test]
fn test_load_collections_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.json");
    fs::write(&path, r#"{"cases": [{"id": "c1", "title": "Chest pain in the ED"}]}"#).unwrap();

    let collections = load_collections(&path).unwrap();
    assert_eq!(collections.cases.len(), 1);
    assert_eq!(collections.total(), 1);
}

#[test]
fn test_dataset_merges_in_manifest_order() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(
        dir.path(),
        Some(CORPUS),
        &[
            ("b.json", r#"{"drugs": [{"id": "b1", "genericName": "Norepinephrine"}]}"#),
            ("a.json", r#"{"drugs": [{"id": "a1", "genericName": "Vasopressin"}]}"#),
        ],
    );
    let dataset = load_dataset(dir.path()).unwrap();
    let ids: Vec<&str> = dataset.collections.drugs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["b1", "a1"]);
    assert_eq!(dataset.corpus.modules.len(), 1);
}

#[test]
fn test_dataset_without_corpus() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path(), None, &[]);
    let dataset = load_dataset(dir.path()).unwrap();
    assert!(dataset.corpus.modules.is_empty());
    assert_eq!(dataset.collections.total(), 0);
}

#[test]
fn test_dataset_missing_collection_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{"version": 1, "collections": ["absent.json"]}"#,
    )
    .unwrap();
    assert!(matches!(load_dataset(dir.path()), Err(SearchError::Io(_))));
}

#[test]
fn test_scalar_top_level_content_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corpus.json");
    fs::write(&path, r#"{"modules": [{"title": "X", "fields": 42}]}"#).unwrap();
    assert!(matches!(load_corpus(&path), Err(SearchError::Json(_))));
}
