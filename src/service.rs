// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One handle over both engines.
//!
//! [`SearchService`] owns the topic index, the record collections and the
//! resolved config, and answers JSON requests of the form
//!
//! ```json
//! { "query": "warf", "categories": ["drugs", "questions"] }
//! ```
//!
//! `categories` is optional and defaults to every record category. The topic
//! engine always runs; categories only gate the record scan.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::config::SearchConfig;
use crate::controller::QueryEngine;
use crate::corpus::Corpus;
use crate::error::{Result, SearchError};
use crate::inverted::{build_index, IndexStats, SearchIndex};
use crate::records::RecordCollections;
use crate::search::{scan_records_with, score_query_with, QueryOptions};
use crate::types::{CategorySet, ResultItem};

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub categories: CategorySet,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        SearchRequest {
            query: query.into(),
            categories: CategorySet::all(),
        }
    }

    /// Validate an untyped request. A missing or non-string `query` and an
    /// unknown category name are both input errors.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| SearchError::input("request must be a JSON object"))?;

        let query = match object.get("query") {
            Some(Value::String(query)) => query.clone(),
            Some(other) => {
                return Err(SearchError::input(format!(
                    "query must be a string, got {}",
                    json_kind(other)
                )))
            }
            None => return Err(SearchError::input("request is missing \"query\"")),
        };

        let categories = match object.get("categories") {
            None | Some(Value::Null) => CategorySet::all(),
            Some(Value::Array(items)) => {
                let names = items
                    .iter()
                    .map(|item| {
                        item.as_str().ok_or_else(|| {
                            SearchError::input(format!(
                                "category names must be strings, got {}",
                                json_kind(item)
                            ))
                        })
                    })
                    .collect::<Result<Vec<&str>>>()?;
                CategorySet::from_names(&names)?
            }
            Some(other) => {
                return Err(SearchError::input(format!(
                    "categories must be an array, got {}",
                    json_kind(other)
                )))
            }
        };

        Ok(SearchRequest { query, categories })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub topics: Vec<ResultItem>,
    pub records: Vec<ResultItem>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty() && self.records.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct SearchService {
    index: SearchIndex,
    collections: RecordCollections,
    config: SearchConfig,
}

impl SearchService {
    pub fn new(corpus: &Corpus, collections: RecordCollections, config: SearchConfig) -> Self {
        let index = build_index(corpus);
        info!(
            nodes = index.nodes().len(),
            terms = index.term_count(),
            records = collections.total(),
            "search service ready"
        );
        SearchService {
            index,
            collections,
            config,
        }
    }

    pub fn search_topics(&self, query: &str) -> Vec<ResultItem> {
        score_query_with(query, &self.index, &QueryOptions::topics_from(&self.config))
    }

    pub fn search_records(&self, query: &str, categories: &CategorySet) -> Vec<ResultItem> {
        scan_records_with(
            query,
            &self.collections,
            categories,
            &QueryOptions::records_from(&self.config),
        )
    }

    pub fn search(&self, request: &SearchRequest) -> SearchResponse {
        SearchResponse {
            topics: self.search_topics(&request.query),
            records: self.search_records(&request.query, &request.categories),
        }
    }

    pub fn handle_request(&self, request: &Value) -> Result<SearchResponse> {
        let request = SearchRequest::from_json(request)?;
        Ok(self.search(&request))
    }

    /// Parse and answer a raw JSON request body.
    pub fn handle_request_str(&self, body: &str) -> Result<SearchResponse> {
        let value: Value = serde_json::from_str(body)?;
        self.handle_request(&value)
    }

    /// Replace the topic index with one built from `corpus`.
    pub fn rebuild(&mut self, corpus: &Corpus) {
        self.index.rebuild(corpus);
        info!(nodes = self.index.nodes().len(), "topic index rebuilt");
    }

    pub fn replace_collections(&mut self, collections: RecordCollections) {
        self.collections = collections;
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn collections(&self) -> &RecordCollections {
        &self.collections
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Drives the topic engine, so a service can sit behind a [`QueryController`](crate::controller::QueryController).
impl QueryEngine for SearchService {
    fn execute(&self, query: &str) -> Vec<ResultItem> {
        self.search_topics(query)
    }
}
