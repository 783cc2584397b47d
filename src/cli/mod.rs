// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the quickfind command-line interface.
//!
//! Three subcommands: `search` runs a query the way the site would and shows
//! the ranking, `render` prints the markup the results region would get, and
//! `inspect` summarizes an index. All of them read the same `index.json` the
//! site ships.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quickfind",
    about = "Incremental fuzzy search for static documentation sites",
    version
)]
pub struct Cli {
    /// JSON search configuration (threshold, caps, labels)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log engine decisions to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index and display ranked results
    Search {
        /// Path to index.json
        index: PathBuf,

        /// Search query, as typed
        query: String,

        /// Search as the dedicated search page does (12 results, excerpts)
        #[arg(long)]
        passive: bool,

        /// Override the mode's result cap
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the results region as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the results-region HTML for a query
    Render {
        /// Path to index.json
        index: PathBuf,

        /// Search query, as typed
        query: String,

        /// Render the search-page variant
        #[arg(long)]
        passive: bool,
    },

    /// Summarize an index file
    Inspect {
        /// Path to index.json
        index: PathBuf,
    },
}
