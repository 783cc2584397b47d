// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! A bounded approximate-substring Levenshtein does the matching; `Pattern`
//! folds and chunks the query once per search.

mod levenshtein;
mod pattern;

pub use levenshtein::substring_distance_within;
pub use pattern::{Pattern, MAX_CHUNK_CHARS, MIN_SCORE, NO_MATCH_SCORE};
