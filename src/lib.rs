// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental fuzzy search for static documentation sites.
//!
//! A site generator writes its pages to `index.json`. This crate loads that
//! index, ranks pages against what the visitor types, and describes what the
//! results region should show. The same session runs in the browser (through
//! the `wasm` feature) and on the command line.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  loader.rs  │────▶│  search/     │────▶│  session.rs  │────▶│  render/    │
//! │ (index.json)│     │ (MatchEngine)│     │ (events,     │     │ (ResultsView│
//! │             │     │              │     │  effects)    │     │  , html)    │
//! └─────────────┘     └──────────────┘     └──────────────┘     └─────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌─────────────┐      ┌─────────────┐
//!                     │  fuzzy/     │      │  links.rs   │
//!                     │  scoring/   │      │ highlight.rs│
//!                     └─────────────┘      └─────────────┘
//! ```
//!
//! # Modes
//!
//! | Mode      | Where                | Cap | Extras                        |
//! |-----------|----------------------|-----|-------------------------------|
//! | `Live`    | any content page     | 8   | Enter goes to the search page |
//! | `Passive` | the search page      | 12  | excerpts, body highlighting   |
//!
//! # Usage
//!
//! ```
//! use quickfind::{Event, SearchConfig, SearchMode, SearchSession};
//!
//! let index = quickfind::parse_index(br#"[
//!     {"id": 1, "title": "Routing", "link": "/routing/", "body": "Declare routes"}
//! ]"#).unwrap();
//!
//! let mut session = SearchSession::new(index, SearchConfig::default(), SearchMode::Live);
//! session.handle(Event::Input("rout".to_string()));
//! assert_eq!(session.view().items()[0].href, "/routing/?query=rout");
//! ```

mod config;
mod error;
pub mod fuzzy;
pub mod highlight;
pub mod links;
mod loader;
pub mod render;
pub mod scoring;
mod search;
mod session;
mod types;
mod utils;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{
    Labels, MatchOptions, SearchConfig, DEFAULT_EXCERPT_CHARS, DEFAULT_LIVE_LIMIT,
    DEFAULT_PASSIVE_LIMIT, DEFAULT_THRESHOLD,
};
pub use error::{ConfigError, LoadError};
pub use highlight::{highlight, highlight_html, Segment};
pub use links::{query_param, result_href, search_page_url, QUERY_PARAM};
pub use loader::{index_from_value, load_index, load_index_or_empty, parse_index, INDEX_PATH};
pub use render::{build_view, excerpt, render_html, PlaceholderKind, ResultItem, ResultsView};
pub use search::MatchEngine;
pub use session::{Effect, Event, SearchSession};
pub use types::{Document, DocumentId, Index, MatchResult, SearchKey, SearchMode};
pub use utils::{min_query_len, normalize_query};
