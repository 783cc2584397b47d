// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only reading the index or the config can fail. Searching and rendering are
//! total: once an index exists, every query produces some view.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the document index.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read index {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid index JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to read or validate a [`SearchConfig`](crate::SearchConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),

    #[error("at least one search key is required")]
    NoKeys,

    #[error("{0} result limit must be at least 1")]
    ZeroLimit(&'static str),
}
