//! Index build is deterministic and every posting is well-formed.

use clinisearch::{build_index, check_index_well_formed, tokenize};
use proptest::prelude::*;

use crate::strategies::corpus_strategy;

proptest! {
    #[test]
    fn prop_build_is_idempotent(corpus in corpus_strategy()) {
        prop_assert_eq!(build_index(&corpus), build_index(&corpus));
    }

    #[test]
    fn prop_index_well_formed(corpus in corpus_strategy()) {
        prop_assert!(check_index_well_formed(&build_index(&corpus)));
    }

    #[test]
    fn prop_one_node_per_corpus_node(corpus in corpus_strategy()) {
        let index = build_index(&corpus);
        let flattened = corpus.nodes();
        prop_assert_eq!(index.nodes().len(), flattened.len());
        for (indexed, node) in index.nodes().iter().zip(&flattened) {
            prop_assert_eq!(&indexed.id, &node.id);
        }
    }

    /// Every title token is findable and points back at its node.
    #[test]
    fn prop_title_tokens_are_indexed(corpus in corpus_strategy()) {
        let index = build_index(&corpus);
        for (ordinal, node) in corpus.nodes().iter().enumerate() {
            for token in tokenize(&node.node.title) {
                let postings = index.postings(&token);
                prop_assert!(postings.is_some(), "missing {}", token);
                prop_assert!(postings.unwrap_or_default().iter().any(|p| p.node == ordinal));
            }
        }
    }

    /// Total postings equal total tokens across all indexable fields.
    #[test]
    fn prop_one_posting_per_occurrence(corpus in corpus_strategy()) {
        let expected: usize = corpus
            .nodes()
            .iter()
            .flat_map(|node| node.indexable_fields())
            .map(|(_, text)| tokenize(text).len())
            .sum();
        prop_assert_eq!(build_index(&corpus).stats().postings, expected);
    }
}
