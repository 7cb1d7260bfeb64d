//! Generators shared by the property modules.

use clinisearch::{Corpus, Drug, ExamQuestion, RecordCollections, TopicNode, TranslationPair};
use proptest::prelude::*;

/// Lowercase word-like strings long enough to be tokens.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{3,8}").unwrap()
}

/// A mix of English and Hebrew words.
pub fn bilingual_word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => word_strategy(),
        1 => prop::sample::select(vec![
            "נפילות".to_string(),
            "סוכרת".to_string(),
            "לחץ".to_string(),
            "אינסולין".to_string(),
        ]),
    ]
}

pub fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(bilingual_word_strategy(), 0..12).prop_map(|words| words.join(" "))
}

fn leaf_node_strategy() -> impl Strategy<Value = TopicNode> {
    (text_strategy(), text_strategy()).prop_map(|(title, body)| TopicNode::new(title).with_field("body", body))
}

/// Modules with up to two levels of children.
pub fn corpus_strategy() -> impl Strategy<Value = Corpus> {
    let chapter = (text_strategy(), prop::collection::vec(leaf_node_strategy(), 0..4)).prop_map(
        |(title, sections)| {
            sections
                .into_iter()
                .fold(TopicNode::new(title), |node, section| node.with_child(section))
        },
    );
    let module = (text_strategy(), prop::collection::vec(chapter, 0..3)).prop_map(|(title, chapters)| {
        chapters
            .into_iter()
            .fold(TopicNode::new(title), |node, chapter| node.with_child(chapter))
    });
    prop::collection::vec(module, 0..4).prop_map(Corpus::new)
}

pub fn collections_strategy() -> impl Strategy<Value = RecordCollections> {
    let drugs = prop::collection::vec((word_strategy(), prop::option::of(word_strategy())), 0..8);
    let questions = prop::collection::vec(text_strategy(), 0..8);
    let translations = prop::collection::vec((word_strategy(), bilingual_word_strategy()), 0..8);

    (drugs, questions, translations).prop_map(|(drugs, questions, translations)| RecordCollections {
        drugs: drugs
            .into_iter()
            .enumerate()
            .map(|(i, (generic_name, local_name))| Drug {
                id: format!("d{i}"),
                generic_name,
                local_name,
                hebrew_name: None,
                category: None,
            })
            .collect(),
        questions: questions
            .into_iter()
            .enumerate()
            .map(|(i, stem)| ExamQuestion {
                id: format!("q{i}"),
                stem,
                topic: None,
                explanation: None,
            })
            .collect(),
        translations: translations
            .into_iter()
            .enumerate()
            .map(|(i, (english, hebrew))| TranslationPair {
                id: format!("t{i}"),
                english,
                hebrew,
                context: None,
            })
            .collect(),
        ..RecordCollections::default()
    })
}
