// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

/// `manifest.json` at the root of a data directory.
///
/// ```json
/// {
///   "version": 1,
///   "corpus": "corpus.json",
///   "collections": ["formulary.json", "questions.json"]
/// }
/// ```
///
/// Collection files are merged in listed order, so record order (and therefore
/// tie order in the scanner) follows the manifest.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DataManifest {
    pub version: u32,
    #[serde(default)]
    pub corpus: Option<String>,
    #[serde(default)]
    pub collections: Vec<String>,
}

pub const MANIFEST_VERSION: u32 = 1;
