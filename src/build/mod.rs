// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading corpus and record collections from JSON on disk.
//!
//! This is the only I/O in the crate and it sits outside the search core: the
//! engines only ever see already-parsed [`Corpus`] and [`RecordCollections`]
//! values. The CLI and tests use these loaders; an embedding application is
//! free to build the same values however it likes.

pub mod manifest;

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

use crate::corpus::Corpus;
use crate::error::{Result, SearchError};
use crate::records::RecordCollections;

pub use manifest::*;

/// A fully loaded data directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub corpus: Corpus,
    pub collections: RecordCollections,
}

/// Read a corpus file: `{"modules": [...]}`.
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let content = fs::read_to_string(path)?;
    let corpus: Corpus = serde_json::from_str(&content)?;
    debug!(path = %path.display(), modules = corpus.modules.len(), "loaded corpus");
    Ok(corpus)
}

/// Read one collections file. Missing categories default to empty.
pub fn load_collections(path: &Path) -> Result<RecordCollections> {
    let content = fs::read_to_string(path)?;
    let collections: RecordCollections = serde_json::from_str(&content)?;
    debug!(path = %path.display(), records = collections.total(), "loaded collections");
    Ok(collections)
}

/// Append every collection of `other` onto `into`, keeping order.
pub fn merge_collections(into: &mut RecordCollections, other: RecordCollections) {
    into.drugs.extend(other.drugs);
    into.questions.extend(other.questions);
    into.chapters.extend(other.chapters);
    into.guidelines.extend(other.guidelines);
    into.translations.extend(other.translations);
    into.cases.extend(other.cases);
}

/// Load a data directory described by its `manifest.json`.
///
/// Collection files are parsed in parallel when the `parallel` feature is on,
/// then merged in manifest order.
pub fn load_dataset(dir: &Path) -> Result<Dataset> {
    let manifest_path = dir.join("manifest.json");
    let manifest: DataManifest = serde_json::from_str(&fs::read_to_string(&manifest_path)?)?;
    if manifest.version != MANIFEST_VERSION {
        return Err(SearchError::input(format!(
            "{}: unsupported manifest version {} (expected {})",
            manifest_path.display(),
            manifest.version,
            MANIFEST_VERSION
        )));
    }

    let corpus = match &manifest.corpus {
        Some(file) => load_corpus(&dir.join(file))?,
        None => Corpus::default(),
    };

    #[cfg(feature = "parallel")]
    let files = manifest.collections.par_iter();
    #[cfg(not(feature = "parallel"))]
    let files = manifest.collections.iter();

    let parsed = files
        .map(|file| load_collections(&dir.join(file)))
        .collect::<Result<Vec<RecordCollections>>>()?;

    let mut collections = RecordCollections::default();
    for part in parsed {
        merge_collections(&mut collections, part);
    }

    info!(
        dir = %dir.display(),
        modules = corpus.modules.len(),
        records = collections.total(),
        "loaded dataset"
    );
    Ok(Dataset {
        corpus,
        collections,
    })
}
