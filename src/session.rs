// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search session: one object per page that owns everything search needs.
//!
//! The browser forwards DOM events as [`Event`]s. The session updates its
//! input and results state and answers with [`Effect`]s for the parts of the
//! page it doesn't own (the input element, the page body, navigation).
//!
//! ```text
//!            Input / PageLoad(?query=)
//!   Cleared ───────────────────────────▶ Placeholder | NoMatches | Results
//!      ▲                                            │
//!      └────── Escape (any mode) ───────────────────┤
//!      └────── Click outside (live mode only) ──────┘
//! ```
//!
//! Each event runs to completion before the next is handled, and every render
//! replaces the whole region, so there is never a stale result list to merge.

use crate::config::SearchConfig;
use crate::links::{query_param, search_page_url};
use crate::render::{build_view, render_html, PlaceholderKind, ResultsView};
use crate::search::MatchEngine;
use crate::types::{Index, SearchMode};
use crate::utils::{char_len, min_query_len, normalize_query};
use serde::{Deserialize, Serialize};

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Event {
    /// The page finished loading at this URL.
    PageLoad(String),
    /// The search field's value changed.
    Input(String),
    /// The search field was submitted (Enter, or the clear button of a
    /// `type="search"` field).
    Submit(String),
    Escape,
    Click { inside_search: bool },
}

/// Something the page must do in response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Effect {
    /// Empty the search field.
    ClearInput,
    /// Mark this term in the page body.
    Highlight(String),
    /// Go to this URL.
    Navigate(String),
}

/// Search state for one page.
#[derive(Debug, Clone)]
pub struct SearchSession {
    engine: MatchEngine,
    config: SearchConfig,
    mode: SearchMode,
    input: String,
    view: ResultsView,
}

impl SearchSession {
    pub fn new(index: Index, config: SearchConfig, mode: SearchMode) -> Self {
        let engine = MatchEngine::new(index, config.matching.clone());
        tracing::debug!(docs = engine.len(), ?mode, "search session ready");
        Self {
            engine,
            config,
            mode,
            input: String::new(),
            view: ResultsView::Cleared,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Current value of the search field, as last reported.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn view(&self) -> &ResultsView {
        &self.view
    }

    pub fn results_html(&self) -> String {
        render_html(&self.view)
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::PageLoad(url) => self.on_page_load(&url),
            Event::Input(value) => self.on_input(value),
            Event::Submit(value) => self.on_submit(&value),
            Event::Escape => self.on_escape(),
            Event::Click { inside_search } => self.on_click(inside_search),
        }
    }

    fn on_page_load(&mut self, url: &str) -> Vec<Effect> {
        let query = query_param(url).unwrap_or_default();
        if self.mode.is_passive() {
            self.run_query(&query);
        }

        let term = normalize_query(&query);
        if term.is_empty() {
            Vec::new()
        } else {
            vec![Effect::Highlight(term)]
        }
    }

    fn on_input(&mut self, value: String) -> Vec<Effect> {
        let term = self.run_query(&value);
        self.input = value;
        match self.mode {
            SearchMode::Passive => vec![Effect::Highlight(term)],
            SearchMode::Live => Vec::new(),
        }
    }

    fn on_submit(&mut self, value: &str) -> Vec<Effect> {
        let term = normalize_query(value);
        if self.mode.is_passive() || term.is_empty() {
            return Vec::new();
        }
        let url = search_page_url(&self.config.root_url, &self.config.search_page, &term);
        vec![Effect::Navigate(url)]
    }

    fn on_escape(&mut self) -> Vec<Effect> {
        self.view = ResultsView::Cleared;
        self.input.clear();
        vec![Effect::ClearInput]
    }

    fn on_click(&mut self, inside_search: bool) -> Vec<Effect> {
        if !inside_search && !self.mode.is_passive() {
            self.view = ResultsView::Cleared;
        }
        Vec::new()
    }

    /// Normalize `raw`, update the view, and return the normalized term.
    fn run_query(&mut self, raw: &str) -> String {
        let term = normalize_query(raw);
        let len = char_len(&term);

        self.view = if len == 0 {
            ResultsView::placeholder(PlaceholderKind::TypeToSearch, &self.config)
        } else if len < min_query_len(&term) {
            ResultsView::placeholder(PlaceholderKind::QueryTooShort, &self.config)
        } else {
            let results = self.engine.search(&term);
            build_view(&results, &term, self.mode, &self.config)
        };
        term
    }
}
