// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two search engines.
//!
//! - [`weighted`]: tokenized, occurrence-weighted scoring over the topic index.
//! - [`federated`]: linear substring scan over the flat record collections.
//!
//! They share query parsing, the short-query threshold and snippet building
//! ([`utils`]), and both hand their results to the same [`Ranker`](crate::scoring::Ranker).

pub mod federated;
pub mod utils;
pub mod weighted;

pub use federated::{scan_records, scan_records_with};
pub use utils::{parse_query, QueryOptions};
pub use weighted::{accumulate_scores, score_query, score_query_with};
