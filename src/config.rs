// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime knobs for both engines and the query controller.
//!
//! Resolution order: built-in defaults, then an optional TOML file, then
//! `CLINISEARCH_*` environment variables. Missing keys in the file keep their
//! defaults. A value that doesn't parse, or parses to something unusable
//! (a zero limit), is a configuration error rather than a silent fallback.
//!
//! ```toml
//! topic_limit = 20
//! record_limit = 50
//! min_query_chars = 2
//! debounce_ms = 300
//! snippet_chars = 160
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SearchError};
use crate::scoring::{MIN_QUERY_CHARS, RECORD_RESULT_LIMIT, TOPIC_RESULT_LIMIT};
use crate::search::utils::SNIPPET_CHARS;

/// Default debounce delay between the last keystroke and query execution.
pub const DEBOUNCE_MS: u64 = 300;

const ENV_PREFIX: &str = "CLINISEARCH_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub topic_limit: usize,
    pub record_limit: usize,
    pub min_query_chars: usize,
    pub debounce_ms: u64,
    pub snippet_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            topic_limit: TOPIC_RESULT_LIMIT,
            record_limit: RECORD_RESULT_LIMIT,
            min_query_chars: MIN_QUERY_CHARS,
            debounce_ms: DEBOUNCE_MS,
            snippet_chars: SNIPPET_CHARS,
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: SearchConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, overlaid with `path` if given, overlaid with the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path)?;
                debug!(path = %path.display(), "loading search config");
                SearchConfig::from_toml_str(&raw)?
            }
            None => SearchConfig::default(),
        };
        config.apply_env_from(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply `CLINISEARCH_*` overrides using `lookup` to read variables.
    ///
    /// Taking the lookup as a closure keeps tests off the process environment.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| -> Option<(String, String)> {
            let name = format!("{ENV_PREFIX}{key}");
            lookup(&name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(|value| (name, value))
        };

        if let Some((name, value)) = read("TOPIC_LIMIT") {
            self.topic_limit = parse_env(&name, &value)?;
        }
        if let Some((name, value)) = read("RECORD_LIMIT") {
            self.record_limit = parse_env(&name, &value)?;
        }
        if let Some((name, value)) = read("MIN_QUERY_CHARS") {
            self.min_query_chars = parse_env(&name, &value)?;
        }
        if let Some((name, value)) = read("DEBOUNCE_MS") {
            self.debounce_ms = parse_env(&name, &value)?;
        }
        if let Some((name, value)) = read("SNIPPET_CHARS") {
            self.snippet_chars = parse_env(&name, &value)?;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if self.topic_limit == 0 {
            return Err(SearchError::config("topic_limit must be at least 1"));
        }
        if self.record_limit == 0 {
            return Err(SearchError::config("record_limit must be at least 1"));
        }
        if self.min_query_chars == 0 {
            return Err(SearchError::config("min_query_chars must be at least 1"));
        }
        if self.snippet_chars < 3 {
            return Err(SearchError::config("snippet_chars must be at least 3"));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| SearchError::config(format!("{name}: not a valid number: {value:?}")))
}
