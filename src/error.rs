// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for the search subsystem.
//!
//! Almost nothing in here can fail: queries, index builds, and record scans are
//! in-memory and deterministic. The variants exist for contract violations
//! (a query that isn't text, an unknown category) and for the loader/config
//! edges that touch the filesystem.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The caller handed us something that isn't a usable query or filter.
    #[error("invalid input: {0}")]
    Input(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl SearchError {
    pub(crate) fn input(message: impl Into<String>) -> Self {
        SearchError::Input(message.into())
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        SearchError::Config(message.into())
    }
}
