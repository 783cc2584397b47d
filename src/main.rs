// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use quickfind::{
    load_index, normalize_query, ConfigError, DocumentId, Event, Index, LoadError, ResultsView,
    SearchConfig, SearchMode, SearchSession,
};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `render` and `--json` output stay pipeable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "quickfind=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };

    match cli.command {
        Commands::Search {
            index,
            query,
            passive,
            limit,
            json,
        } => run_search(&index, &query, passive, limit, json, config),
        Commands::Render {
            index,
            query,
            passive,
        } => {
            let session = session_for(&index, &query, passive, config)?;
            println!("{}", session.results_html());
            Ok(())
        }
        Commands::Inspect { index } => {
            let docs = load_index(&index)?;
            inspect_index(&index, &docs);
            Ok(())
        }
    }
}

fn session_for(
    index: &Path,
    query: &str,
    passive: bool,
    config: SearchConfig,
) -> Result<SearchSession, CliError> {
    let docs = load_index(index)?;
    let mut session = SearchSession::new(docs, config, SearchMode::from_search_page(passive));
    session.handle(Event::Input(query.to_string()));
    Ok(session)
}

fn run_search(
    index: &Path,
    query: &str,
    passive: bool,
    limit: Option<usize>,
    json: bool,
    mut config: SearchConfig,
) -> Result<(), CliError> {
    if let Some(limit) = limit {
        config.live_limit = limit;
        config.passive_limit = limit;
        config.validate()?;
    }

    let session = session_for(index, query, passive, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(session.view())?);
        return Ok(());
    }

    let term = normalize_query(query);
    section_top("SEARCH");
    field_row("query", &format!("{:?}", term));
    field_row("mode", &mode_label(passive));
    field_row("documents", &session.engine().len().to_string());
    field_row(
        "threshold",
        &format!("{:.2}", session.engine().options().threshold),
    );

    match session.view() {
        ResultsView::Results { heading, items, .. } => {
            section_mid(&heading.to_uppercase());
            // Same ranking the view was built from; the view keeps only the cap.
            let ranked = session.engine().search(&term);
            for (rank, (item, hit)) in items.iter().zip(&ranked).enumerate() {
                row(&format!(
                    "  {:>2}. {} {}  {}",
                    rank + 1,
                    order_badge(item.order),
                    score_value(hit.score),
                    themed(BRIGHT_GREEN, &[BOLD], &truncate(&item.title, 50)),
                ));
                row(&format!("               {}", dim(&truncate(&item.href, 64))));
                if let Some(excerpt) = &item.excerpt {
                    row(&format!("               {}", dim(&truncate(excerpt, 64))));
                }
            }
            if ranked.len() > items.len() {
                row(&themed(
                    GRAY,
                    &[],
                    &format!("  … {} more not shown", ranked.len() - items.len()),
                ));
            }
        }
        ResultsView::Placeholder { text, .. } | ResultsView::NoMatches { text } => {
            section_mid("RESULTS");
            row(&format!("  {}", themed(YELLOW, &[], text)));
        }
        ResultsView::Cleared => {}
    }
    section_bot();
    Ok(())
}

fn inspect_index(path: &Path, docs: &Index) {
    let numeric_ids = docs
        .iter()
        .filter(|doc| matches!(doc.id, DocumentId::Number(_)))
        .count();
    let untitled = docs.iter().filter(|doc| doc.title.trim().is_empty()).count();
    let unlinked = docs.iter().filter(|doc| doc.link.trim().is_empty()).count();

    let mut seen = HashSet::new();
    let duplicate_links = docs
        .iter()
        .filter(|doc| !doc.link.is_empty() && !seen.insert(doc.link.as_str()))
        .count();

    let body_chars: usize = docs.iter().map(|doc| doc.body.chars().count()).sum();
    let average = if docs.is_empty() {
        0
    } else {
        body_chars / docs.len()
    };
    let longest = docs.iter().max_by_key(|doc| doc.body.chars().count());

    section_top("INDEX");
    field_row("file", &truncate(&path.display().to_string(), 60));
    field_row("documents", &docs.len().to_string());
    field_row(
        "ids",
        &format!("{} numeric, {} text", numeric_ids, docs.len() - numeric_ids),
    );
    section_mid("FIELDS");
    field_row("body chars", &format!("{} total, {} avg", body_chars, average));
    if let Some(doc) = longest {
        field_row("longest", &truncate(&doc.title, 60));
    }
    field_row("untitled", &warn_count(untitled));
    field_row("no link", &warn_count(unlinked));
    field_row("dup links", &warn_count(duplicate_links));
    section_bot();
}

fn warn_count(count: usize) -> String {
    if count == 0 {
        themed(GREEN, &[], "0")
    } else {
        themed(RED, &[BOLD], &count.to_string())
    }
}
