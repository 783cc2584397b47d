// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The match engine: a folded copy of the index plus the scoring loop.
//!
//! Folding (lowercasing, optional diacritic stripping), tokenizing and norm
//! computation happen once in [`MatchEngine::new`]. A search then only runs
//! the edit-distance DP per field.

use crate::config::MatchOptions;
use crate::fuzzy::Pattern;
use crate::scoring::{combine, field_factor, field_norm, key_weight, ranking::compare_results};
use crate::types::{Document, Index, MatchResult, SearchKey};
use crate::utils::fold;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One searchable field, pre-folded.
#[derive(Debug, Clone)]
struct IndexedField {
    chars: Vec<char>,
    norm: f64,
}

/// A document's searchable fields, one slot per configured key.
/// Blank fields are `None` and never match.
#[derive(Debug, Clone)]
struct IndexedRecord {
    fields: Vec<Option<IndexedField>>,
}

/// Fuzzy search over a fixed index.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    docs: Index,
    records: Vec<IndexedRecord>,
    options: MatchOptions,
    weight: f64,
}

impl MatchEngine {
    pub fn new(docs: Index, options: MatchOptions) -> Self {
        let records = docs
            .iter()
            .map(|doc| index_record(doc, &options))
            .collect();
        let weight = key_weight(options.keys.len());
        Self {
            docs,
            records,
            options,
            weight,
        }
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Every matching document, best first.
    ///
    /// Pure: the same engine and query always produce the same list. There is
    /// no cap here; callers truncate to what they display.
    pub fn search(&self, query: &str) -> Vec<MatchResult<'_>> {
        let pattern = Pattern::new(
            query,
            self.options.threshold,
            self.options.ignore_diacritics,
        );
        if pattern.is_empty() || self.records.is_empty() {
            return Vec::new();
        }

        #[cfg(feature = "parallel")]
        let scored = self.records.par_iter();
        #[cfg(not(feature = "parallel"))]
        let scored = self.records.iter();

        let mut results: Vec<MatchResult<'_>> = scored
            .enumerate()
            .filter_map(|(refindex, record)| {
                self.score_record(&pattern, record).map(|score| MatchResult {
                    item: &self.docs[refindex],
                    score,
                    refindex,
                })
            })
            .collect();

        results.sort_by(compare_results);

        tracing::debug!(
            query,
            matches = results.len(),
            docs = self.docs.len(),
            "search complete"
        );
        results
    }

    fn score_record(&self, pattern: &Pattern, record: &IndexedRecord) -> Option<f64> {
        combine(record.fields.iter().flatten().filter_map(|field| {
            pattern
                .score(&field.chars)
                .map(|score| field_factor(score, self.weight, field.norm))
        }))
    }
}

fn index_record(doc: &Document, options: &MatchOptions) -> IndexedRecord {
    let fields = options
        .keys
        .iter()
        .map(|&key| index_field(doc, key, options.ignore_diacritics))
        .collect();
    IndexedRecord { fields }
}

fn index_field(doc: &Document, key: SearchKey, ignore_diacritics: bool) -> Option<IndexedField> {
    let text = doc.field(key);
    if text.trim().is_empty() {
        return None;
    }
    Some(IndexedField {
        chars: fold(&text, ignore_diacritics).chars().collect(),
        norm: field_norm(&text),
    })
}
