// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Each matching field contributes `field_score ^ (weight * norm)`:
//!
//! - `field_score` in `[MIN_SCORE, 1)` comes from the edit distance.
//! - `weight` is the key's share, `1 / key_count` with equal weighting.
//! - `norm = 1 / sqrt(tokens)` shrinks the exponent for long fields, pulling
//!   their factor towards 1. A hit in a three-word title is worth more than
//!   the same hit buried in a two-thousand-word body.
//!
//! # Key invariant
//!
//! Every factor lies in `(0, 1]`, so the product does too, and adding a
//! matching field never makes a document rank worse.

use crate::fuzzy::MIN_SCORE;

/// Decimal places kept in field norms. Keeps scores stable across platforms.
const NORM_DECIMALS: i32 = 3;

/// Multiplier mapping a score to its display bucket.
pub const DISPLAY_ORDER_SCALE: f64 = 50.0;

/// Length norm of a field: `1 / sqrt(tokens)`, rounded to three decimals.
///
/// Tokens are runs of non-space characters. Blank fields are never scored,
/// but return 1.0 rather than dividing by zero.
pub fn field_norm(text: &str) -> f64 {
    let tokens = text.split(' ').filter(|t| !t.is_empty()).count();
    if tokens == 0 {
        return 1.0;
    }
    let scale = 10f64.powi(NORM_DECIMALS);
    (scale / (tokens as f64).sqrt()).round() / scale
}

/// Equal weight per key, summing to 1.
pub fn key_weight(key_count: usize) -> f64 {
    if key_count == 0 {
        0.0
    } else {
        1.0 / key_count as f64
    }
}

/// Factor one matching field contributes to its document's score.
pub fn field_factor(field_score: f64, weight: f64, norm: f64) -> f64 {
    field_score.max(MIN_SCORE).powf(weight * norm)
}

/// Combine field factors into a document score. `None` if nothing matched.
pub fn combine<I>(factors: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    factors
        .into_iter()
        .fold(None, |acc, factor| Some(acc.unwrap_or(1.0) * factor))
}

/// Integer bucket for CSS `order`: `round(score * 50)`.
pub fn display_order(score: f64) -> i64 {
    (score * DISPLAY_ORDER_SCALE).round() as i64
}
