// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the clinisearch command-line interface.
//!
//! Four subcommands over a data directory (a `manifest.json` naming a corpus
//! file and any number of record collection files): `index` builds the topic
//! index and prints its stats, `search` runs the weighted topic engine, `scan`
//! runs the federated record scanner, and `query` answers a raw JSON request
//! the way an embedding application would.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "clinisearch",
    about = "Weighted and federated search over a bilingual clinical corpus",
    version
)]
pub struct Cli {
    /// Optional TOML config file (limits, thresholds, debounce)
    #[arg(short, long, global = true, env = "CLINISEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the topic index and print its statistics
    Index {
        /// Data directory containing manifest.json
        #[arg(short, long)]
        data: PathBuf,

        /// Print stats as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search the topic corpus (weighted scoring)
    Search {
        /// Data directory containing manifest.json
        #[arg(short, long)]
        data: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results (defaults to the configured topic limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scan the record collections (tiered substring match)
    Scan {
        /// Data directory containing manifest.json
        #[arg(short, long)]
        data: PathBuf,

        /// Search query
        query: String,

        /// Restrict to these categories (comma-separated, e.g. drugs,questions)
        #[arg(short = 'C', long, value_delimiter = ',')]
        categories: Vec<String>,

        /// Maximum number of results (defaults to the configured record limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Answer a JSON request: {"query": "...", "categories": [...]}
    Query {
        /// Data directory containing manifest.json
        #[arg(short, long)]
        data: PathBuf,

        /// Request body; reads stdin when omitted
        request: Option<String>,
    },
}
