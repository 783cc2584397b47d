// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Scores run the other way from what you might expect: 0 is a perfect hit,
//! 1 is no hit at all. A document collects one factor per matching field and
//! multiplies them, so matching in more fields (or in shorter ones) pushes the
//! score down and the document up.

mod core;
pub mod ranking;

pub use core::*;
