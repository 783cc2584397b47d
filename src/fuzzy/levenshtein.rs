// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance of a pattern against the best-matching stretch of a text.
//!
//! This is Levenshtein with a free start and a free end on the text side
//! (Sellers' variant): the pattern may line up with any substring, so matching
//! "rout" inside "Getting started with routing" costs nothing. That is what
//! makes search location-agnostic.
//!
//! The key bound: `len(pattern) - len(text)` is a lower bound on the distance.
//! If the text is too short to host the pattern within the budget, skip the
//! O(nm) DP entirely.

/// Fewest edits turning `pattern` into some substring of `text`, if at most `max`.
///
/// Works on char slices so callers can fold and split a field once and match
/// it against many patterns.
pub fn substring_distance_within(pattern: &[char], text: &[char], max: usize) -> Option<usize> {
    let m = pattern.len();
    if m == 0 {
        return Some(0);
    }

    // Early-exit: every unmatched pattern char costs one edit
    if m > text.len() + max {
        return None;
    }

    // dp[i] = cost of aligning pattern[..i] with a substring ending at the current text char
    let mut dp: Vec<usize> = (0..=m).collect();
    let mut best = dp[m];

    for &tc in text {
        let mut diag = dp[0];
        dp[0] = 0;
        for i in 1..=m {
            let above = dp[i];
            let cost = usize::from(pattern[i - 1] != tc);
            dp[i] = (above + 1).min(dp[i - 1] + 1).min(diag + cost);
            diag = above;
        }

        if dp[m] < best {
            best = dp[m];
            if best == 0 {
                break;
            }
        }
    }

    (best <= max).then_some(best)
}
