// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for approximate substring matching.
//!
//! Checks the bounded DP against its own contract: a reported distance never
//! exceeds the bound, an exact substring is always distance 0, and raising the
//! bound never loses a match.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quickfind::fuzzy::substring_distance_within;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    pattern: String,
    text: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let pattern: Vec<char> = input.pattern.chars().take(64).collect();
    let text: Vec<char> = input.text.chars().take(512).collect();
    let max = (input.max % 16) as usize;

    let found = substring_distance_within(&pattern, &text, max);
    if let Some(distance) = found {
        assert!(distance <= max, "distance {} over bound {}", distance, max);
        assert_eq!(
            substring_distance_within(&pattern, &text, max + 1),
            Some(distance),
            "raising the bound changed the distance"
        );
    }

    if pattern.len() <= text.len() {
        let window = &text[..pattern.len()];
        assert_eq!(substring_distance_within(window, &text, 0), Some(0));
    }
});
