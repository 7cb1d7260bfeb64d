//! Weighted topic scoring against the shared fixtures.

use clinisearch::{build_index, score_query, score_query_with, Corpus, QueryOptions, TopicNode};

use crate::common::{assert_sorted_by_rank, clinical_index, falls_corpus, ids, ranked};

#[test]
fn test_falls_title_beats_repeated_content() {
    let results = score_query("falls", &build_index(&falls_corpus()));
    assert_eq!(ranked(&results), vec![("0.safety.a", 6.0), ("0.safety.b", 4.0)]);
}

#[test]
fn test_every_source_of_a_node_adds_up() {
    // Title, overview content and case title all mention both words
    let results = score_query("heart failure", &clinical_index());
    assert_eq!(ranked(&results), vec![("0.0.0", 20.0)]);
}

#[test]
fn test_chapter_title_weight() {
    let results = score_query("cardiology", &clinical_index());
    assert_eq!(ranked(&results), vec![("0.0", 4.0)]);
}

#[test]
fn test_partial_matches_rank_by_source_weight() {
    // "card" is inside "cardiology" (chapter title) and "cardiac" (content)
    let results = score_query("card", &clinical_index());
    assert_eq!(ranked(&results), vec![("0.0", 2.0), ("0.0.0", 1.0)]);
}

#[test]
fn test_title_and_body_hit_same_node() {
    let results = score_query("falls", &clinical_index());
    assert_eq!(ranked(&results), vec![("1.0.0", 8.0)]);
}

#[test]
fn test_hebrew_title_query() {
    let results = score_query("נפילות", &clinical_index());
    assert_eq!(ranked(&results), vec![("1.0.0", 6.0)]);
}

#[test]
fn test_group_labels_are_not_indexed() {
    // "Monitoring" is a group label under Heart Failure; only the
    // anticoagulation body actually says it
    let results = score_query("monitoring", &clinical_index());
    assert_eq!(ids(&results), vec!["0.0.1"]);
}

#[test]
fn test_markup_never_matches() {
    assert!(score_query("<p>", &clinical_index()).is_empty());
    assert_eq!(ids(&score_query("output", &clinical_index())), vec!["0.0.0"]);
}

#[test]
fn test_short_tokens_dropped_from_query() {
    // "of" can't be a token; "INR" can
    assert_eq!(ids(&score_query("of INR", &clinical_index())), vec!["0.0.1"]);
}

#[test]
fn test_title_outranks_content_for_same_token() {
    let index = build_index(&Corpus::new(vec![
        TopicNode::new("Overview").with_field("body", "pain scales"),
        TopicNode::new("Pain"),
    ]));
    let results = score_query("pain", &index);
    assert_eq!(ranked(&results), vec![("1", 6.0), ("0", 2.0)]);
}

#[test]
fn test_repetition_rewards() {
    let index = build_index(&Corpus::new(vec![
        TopicNode::new("Once").with_field("body", "sepsis"),
        TopicNode::new("Thrice").with_field("body", "sepsis sepsis sepsis"),
    ]));
    let results = score_query("sepsis", &index);
    assert_eq!(ranked(&results), vec![("1", 6.0), ("0", 2.0)]);
}

#[test]
fn test_results_sorted_and_capped() {
    let modules = (0..40)
        .map(|i| TopicNode::new("Hypertension").with_field("body", "hypertension ".repeat(i % 5)))
        .collect();
    let results = score_query("hypertension", &build_index(&Corpus::new(modules)));
    assert_eq!(results.len(), 20);
    assert_sorted_by_rank(&results);
    assert_eq!(results[0].rank, 14.0);
}

#[test]
fn test_custom_limit_and_threshold() {
    let options = QueryOptions {
        limit: 1,
        min_query_chars: 6,
        ..QueryOptions::topics()
    };
    assert!(score_query_with("falls", &clinical_index(), &options).is_empty());
    assert_eq!(score_query_with("cardiology", &clinical_index(), &options).len(), 1);
}

#[test]
fn test_snippet_is_visible_text() {
    let results = score_query("output", &clinical_index());
    let snippet = &results[0].snippet;
    assert!(snippet.contains("cardiac output"));
    assert!(!snippet.contains('<'));
}
