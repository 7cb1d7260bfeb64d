// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory search for a bilingual (English/Hebrew) clinical-education corpus.
//!
//! Two engines answer queries over two kinds of data:
//!
//! - The **weighted query scorer** tokenizes the query and scores nodes of the
//!   hierarchical topic corpus through a prebuilt inverted index. Title hits
//!   outweigh content hits; exact term matches outweigh partial ones; repeated
//!   mentions add up.
//! - The **federated record scanner** walks the flat collections (formulary,
//!   question bank, chapters, guidelines, translations, cases) with a plain
//!   case-insensitive substring test, ranking by a fixed per-category tier.
//!
//! Both emit [`ResultItem`]s carrying a single numeric `rank` and go through the
//! same [`Ranker`]. A [`QueryController`] sits in front for interactive callers
//! and debounces keystrokes.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐   ┌──────────────┐   ┌────────┐
//! │  corpus.rs   │──▶│ inverted.rs │──▶│  weighted.rs │──▶│        │
//! │ (TopicNode)  │   │ (build_index)   │ (score_query)│   │ Ranker │──▶ ResultItem
//! └──────────────┘   └─────────────┘   └──────────────┘   │        │
//! ┌──────────────┐                     ┌──────────────┐   │        │
//! │  records.rs  │────────────────────▶│ federated.rs │──▶│        │
//! └──────────────┘                     │(scan_records)│   └────────┘
//!                                      └──────────────┘
//! ```
//!
//! Everything is synchronous and single-threaded. The index is built once and
//! then only read; a corpus change means a full [`SearchIndex::rebuild`].
//!
//! # Usage
//!
//! ```
//! use clinisearch::{build_index, scan_records, score_query, CategorySet, Corpus, TopicNode};
//! use clinisearch::testing::warfarin_collections;
//!
//! let corpus = Corpus::new(vec![TopicNode::new("Falls Risk Assessment")]);
//! let index = build_index(&corpus);
//! let topics = score_query("falls", &index);
//! assert_eq!(topics[0].rank, 6.0);
//!
//! let records = scan_records("WARF", &warfarin_collections(), &CategorySet::all());
//! assert_eq!(records.len(), 2);
//! ```

pub mod build;
pub mod config;
pub mod controller;
pub mod corpus;
pub mod error;
pub mod inverted;
pub mod normalize;
pub mod records;
pub mod scoring;
pub mod search;
pub mod service;
pub mod testing;
pub mod types;

pub use build::{load_collections, load_corpus, load_dataset, Dataset};
pub use config::SearchConfig;
pub use controller::{ControllerState, QueryController, QueryEngine, QueryOutcome};
pub use corpus::{CaseRef, ContentEntry, ContentNode, ContentValue, Corpus, TopicNode};
pub use error::{Result, SearchError};
pub use inverted::{build_index, check_index_well_formed, IndexStats, IndexedNode, SearchIndex};
pub use normalize::{normalize_token, strip_markup, tokenize};
pub use records::{
    CaseEntry, ChapterRecord, Drug, ExamQuestion, GuidelineEntry, RecordCollections,
    SearchableRecord, TranslationPair,
};
pub use scoring::{Ranker, ScoringStrategy};
pub use search::{scan_records, scan_records_with, score_query, score_query_with, QueryOptions};
pub use service::{SearchRequest, SearchResponse, SearchService};
pub use types::{
    Category, CategorySet, NodeLevel, Posting, PostingList, RelevanceTier, ResultItem, SourceKind,
};
