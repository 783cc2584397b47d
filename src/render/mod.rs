// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the results region shows.
//!
//! [`ResultsView`] is a typed description of the region, built from ranked
//! matches and the query. Turning it into markup is [`html::render_html`]'s
//! job; the wasm bindings and the CLI can also hand it out as JSON.
//!
//! # View states
//!
//! | State         | When                                           |
//! |---------------|------------------------------------------------|
//! | `Cleared`     | Escape, outside click, before any input        |
//! | `Placeholder` | query empty or below the minimum length        |
//! | `NoMatches`   | query long enough, engine found nothing        |
//! | `Results`     | at least one match, capped per mode            |

pub mod html;

use crate::config::SearchConfig;
use crate::links::result_href;
use crate::types::{MatchResult, SearchMode};
use crate::utils::find_ignore_case;
use serde::Serialize;

pub use html::render_html;

/// Why no search ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceholderKind {
    TypeToSearch,
    QueryTooShort,
}

/// One rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub href: String,
    pub title: String,
    /// CSS `order` bucket, see [`MatchResult::display_order`].
    pub order: i64,
    /// Body excerpt, passive mode only.
    pub excerpt: Option<String>,
}

/// The results region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ResultsView {
    Cleared,
    Placeholder {
        kind: PlaceholderKind,
        text: String,
    },
    NoMatches {
        text: String,
    },
    Results {
        mode: SearchMode,
        heading: String,
        items: Vec<ResultItem>,
    },
}

impl ResultsView {
    pub fn placeholder(kind: PlaceholderKind, config: &SearchConfig) -> Self {
        let text = match kind {
            PlaceholderKind::TypeToSearch => &config.labels.type_to_search,
            PlaceholderKind::QueryTooShort => &config.labels.short_search_query,
        };
        ResultsView::Placeholder {
            kind,
            text: text.clone(),
        }
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, ResultsView::Cleared)
    }

    /// Rendered results, empty for every other state.
    pub fn items(&self) -> &[ResultItem] {
        match self {
            ResultsView::Results { items, .. } => items,
            _ => &[],
        }
    }
}

/// Build the view for a query that met the minimum length.
///
/// `results` must already be ranked; only the first `result_limit(mode)` are
/// rendered.
pub fn build_view(
    results: &[MatchResult<'_>],
    query: &str,
    mode: SearchMode,
    config: &SearchConfig,
) -> ResultsView {
    if results.is_empty() {
        return ResultsView::NoMatches {
            text: config.labels.no_matches.clone(),
        };
    }

    let heading = match mode {
        SearchMode::Live => config.labels.quick_links.clone(),
        SearchMode::Passive => config.labels.search_results.clone(),
    };

    let items = results
        .iter()
        .take(config.result_limit(mode))
        .map(|result| ResultItem {
            href: result_href(&result.item.link, query),
            title: result.item.title.clone(),
            order: result.display_order(),
            excerpt: mode
                .is_passive()
                .then(|| excerpt(&result.item.body, query, config.excerpt_chars)),
        })
        .collect();

    ResultsView::Results {
        mode,
        heading,
        items,
    }
}

/// A window of `max_chars` body characters centred on the first
/// case-insensitive occurrence of `query`, as `... text ...`.
///
/// A fuzzy match need not contain the query literally; the window then
/// starts at the beginning of the body.
pub fn excerpt(body: &str, query: &str, max_chars: usize) -> String {
    let chars: Vec<char> = body.chars().collect();
    let total = chars.len();
    let width = max_chars.min(total);

    let start = match find_ignore_case(body, query) {
        Some((byte_start, byte_end)) => {
            let hit_start = body[..byte_start].chars().count();
            let hit_len = body[byte_start..byte_end].chars().count();
            let lead = width.saturating_sub(hit_len) / 2;
            hit_start.saturating_sub(lead).min(total - width)
        }
        None => 0,
    };

    let window: String = chars[start..start + width].iter().collect();
    format!("... {} ...", window.trim())
}
