// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Everything has a default, so `{}` is a valid config. The CLI reads this
//! from a JSON file, the browser passes it as a plain object.

use crate::error::ConfigError;
use crate::types::{SearchKey, SearchMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Results shown in the popover.
pub const DEFAULT_LIVE_LIMIT: usize = 8;
/// Results shown on the dedicated search page.
pub const DEFAULT_PASSIVE_LIMIT: usize = 12;
/// Characters of body text in a passive-mode excerpt.
pub const DEFAULT_EXCERPT_CHARS: usize = 200;
/// Fraction of the pattern that may be edited and still match.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Fuzzy matching options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchOptions {
    /// Maximum accepted `errors / pattern_len`. 0.0 accepts exact substrings only.
    pub threshold: f64,
    /// Fields to search. Each gets an equal share of the weight.
    pub keys: Vec<SearchKey>,
    /// Fold "café" and "cafe" together.
    pub ignore_diacritics: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            keys: SearchKey::ALL.to_vec(),
            ignore_diacritics: false,
        }
    }
}

/// User-facing strings. Sites override these from their translation files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub quick_links: String,
    pub search_results: String,
    pub short_search_query: String,
    pub type_to_search: String,
    pub no_matches: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            quick_links: "Quick links".to_string(),
            search_results: "Search results".to_string(),
            short_search_query: "Query is too short".to_string(),
            type_to_search: "Type to search".to_string(),
            no_matches: "No matches found".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub matching: MatchOptions,
    pub live_limit: usize,
    pub passive_limit: usize,
    pub excerpt_chars: usize,
    pub labels: Labels,
    /// Site root. Submitting from the popover navigates to `search_page` under it.
    pub root_url: String,
    pub search_page: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            matching: MatchOptions::default(),
            live_limit: DEFAULT_LIVE_LIMIT,
            passive_limit: DEFAULT_PASSIVE_LIMIT,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            labels: Labels::default(),
            root_url: "/".to_string(),
            search_page: "search/".to_string(),
        }
    }
}

impl SearchConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.matching.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        if self.matching.keys.is_empty() {
            return Err(ConfigError::NoKeys);
        }
        if self.live_limit == 0 {
            return Err(ConfigError::ZeroLimit("live"));
        }
        if self.passive_limit == 0 {
            return Err(ConfigError::ZeroLimit("passive"));
        }
        Ok(())
    }

    /// Cap on rendered results for a mode.
    pub fn result_limit(&self, mode: SearchMode) -> usize {
        match mode {
            SearchMode::Live => self.live_limit,
            SearchMode::Passive => self.passive_limit,
        }
    }
}
