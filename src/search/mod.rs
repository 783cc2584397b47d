// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the index meets the query.
//!
//! The engine knows nothing about the page. It takes a string and returns
//! every matching document with a score. Caps and placeholders belong to the
//! session, markup to the renderer.

mod engine;

pub use engine::MatchEngine;
