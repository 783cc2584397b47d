// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index parsing.
//!
//! Arbitrary bytes must either parse or produce an error, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quickfind::{parse_index, MatchEngine, MatchOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(docs) = parse_index(data) {
        let engine = MatchEngine::new(docs, MatchOptions::default());
        let _ = engine.search("ab");
    }
});
