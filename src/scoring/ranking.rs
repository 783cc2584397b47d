// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Ascending score, then index position. The second key makes the order total,
//! so the same index and query always render the same list.

use crate::types::MatchResult;
use std::cmp::Ordering;

/// Compare two search results for ranking.
///
/// Sort order:
/// 1. **Score** - ascending (lower is a better match)
/// 2. **Refindex** - ascending, the order the site emitted documents in
pub fn compare_results(a: &MatchResult<'_>, b: &MatchResult<'_>) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.refindex.cmp(&b.refindex))
}
