// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Two engines, two kinds of evidence. The topic engine accumulates
//! occurrence-weighted scores; the record scanner knows only which category a
//! hit came from. Both reduce their evidence to one number, `ResultItem::rank`,
//! through a [`ScoringStrategy`], and both go through the same [`Ranker`].

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{compare_results, Ranker};
