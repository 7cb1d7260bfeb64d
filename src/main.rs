// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinisearch::{load_dataset, CategorySet, SearchConfig, SearchService};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinisearch=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = SearchConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Commands::Index { data, json } => {
            let service = open_service(&data, config)?;
            let stats = service.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                display::print_stats(&stats);
            }
        }
        Commands::Search {
            data,
            query,
            limit,
            json,
        } => {
            let config = SearchConfig {
                topic_limit: limit.unwrap_or(config.topic_limit),
                ..config
            };
            config.validate()?;
            let service = open_service(&data, config)?;
            let results = service.search_topics(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                display::print_results("TOPICS", &results);
            }
        }
        Commands::Scan {
            data,
            query,
            categories,
            limit,
            json,
        } => {
            let enabled = if categories.is_empty() {
                CategorySet::all()
            } else {
                CategorySet::from_names(&categories)?
            };
            let config = SearchConfig {
                record_limit: limit.unwrap_or(config.record_limit),
                ..config
            };
            config.validate()?;
            let service = open_service(&data, config)?;
            let results = service.search_records(&query, &enabled);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                display::print_results("RECORDS", &results);
            }
        }
        Commands::Query { data, request } => {
            let body = match request {
                Some(body) => body,
                None => {
                    let mut body = String::new();
                    std::io::stdin()
                        .read_to_string(&mut body)
                        .context("failed to read request from stdin")?;
                    body
                }
            };
            let service = open_service(&data, config)?;
            let response = service.handle_request_str(&body)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

fn open_service(data: &Path, config: SearchConfig) -> Result<SearchService> {
    let dataset = load_dataset(data)
        .with_context(|| format!("failed to load data directory {}", data.display()))?;
    Ok(SearchService::new(
        &dataset.corpus,
        dataset.collections,
        config,
    ))
}
