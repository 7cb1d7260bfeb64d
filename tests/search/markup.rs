//! Comparison signs in clinical text are content, not markup.

use clinisearch::{
    build_index, scan_records, score_query, CategorySet, ContentEntry, Corpus, RecordCollections,
    TopicNode,
};

use crate::common::{ids, make_chapter, make_question, ranked};

const RENAL_RULE: &str = "Hold metformin if eGFR <30; restart when stable";

fn renal_corpus() -> Corpus {
    Corpus::new(vec![TopicNode::new("Endocrinology").with_child(
        TopicNode::new("Diabetes").with_child(
            TopicNode::new("Metformin").with_field("body", format!("<p>{RENAL_RULE}</p>")),
        ),
    )])
}

fn renal_collections() -> RecordCollections {
    RecordCollections {
        questions: vec![make_question("q-metformin", RENAL_RULE)],
        chapters: vec![make_chapter(
            "ch-renal",
            "Renal dosing",
            vec![ContentEntry::leaf("Metformin", format!("<p>{RENAL_RULE}</p>"))],
        )],
        ..RecordCollections::default()
    }
}

#[test]
fn test_words_after_less_than_are_indexed() {
    let index = build_index(&renal_corpus());
    assert_eq!(ranked(&score_query("restart", &index)), vec![("0.0.0", 2.0)]);
    assert_eq!(ranked(&score_query("stable", &index)), vec![("0.0.0", 2.0)]);
}

#[test]
fn test_words_after_less_than_are_scanned() {
    let collections = renal_collections();
    let results = scan_records("restart", &collections, &CategorySet::all());
    assert_eq!(ids(&results), vec!["ch-renal/Metformin", "q-metformin"]);
    assert!(results.iter().all(|r| r.snippet.contains("restart")));
}

#[test]
fn test_less_than_itself_is_searchable() {
    let results = scan_records("<30", &renal_collections(), &CategorySet::all());
    assert_eq!(ids(&results), vec!["ch-renal/Metformin", "q-metformin"]);
}
