// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A compiled query pattern.
//!
//! Long queries are split into chunks of at most [`MAX_CHUNK_CHARS`] so a
//! pasted sentence doesn't turn every field into an O(nm) DP over hundreds of
//! pattern chars. A field matches when any chunk does; its score is the mean
//! chunk score, with unmatched chunks counting as 1.

use super::levenshtein::substring_distance_within;
use crate::utils::fold;

/// Longest chunk matched in one DP pass.
pub const MAX_CHUNK_CHARS: usize = 64;

/// Floor for field scores. A perfect hit still has a non-zero score so the
/// per-field product stays meaningful.
pub const MIN_SCORE: f64 = 0.001;

/// Score of a field that did not match.
pub const NO_MATCH_SCORE: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Pattern {
    chunks: Vec<Chunk>,
}

#[derive(Debug, Clone)]
struct Chunk {
    chars: Vec<char>,
    max_errors: usize,
}

impl Pattern {
    /// Fold and chunk a query. `threshold` is the accepted `errors / len`.
    pub fn new(query: &str, threshold: f64, ignore_diacritics: bool) -> Self {
        let folded: Vec<char> = fold(query, ignore_diacritics).chars().collect();
        let chunks = folded
            .chunks(MAX_CHUNK_CHARS)
            .map(|chars| Chunk {
                chars: chars.to_vec(),
                max_errors: max_errors(threshold, chars.len()),
            })
            .collect();
        Self { chunks }
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Score a folded field, `None` if no chunk matches.
    pub fn score(&self, text: &[char]) -> Option<f64> {
        if self.chunks.is_empty() {
            return None;
        }

        let mut any_match = false;
        let mut total = 0.0;
        for chunk in &self.chunks {
            match substring_distance_within(&chunk.chars, text, chunk.max_errors) {
                Some(errors) => {
                    any_match = true;
                    total += (errors as f64 / chunk.chars.len() as f64).max(MIN_SCORE);
                }
                None => total += NO_MATCH_SCORE,
            }
        }

        any_match.then(|| total / self.chunks.len() as f64)
    }
}

/// Edits a pattern of `len` chars may absorb under `threshold`.
fn max_errors(threshold: f64, len: usize) -> usize {
    // Nudge past float noise: 0.29 * 100 must allow 29, not 28
    (threshold * len as f64 + 1e-9).floor() as usize
}
