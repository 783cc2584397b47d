//! Shared test utilities and fixtures.

#![allow(dead_code)]

use quickfind::{
    load_index, Document, Event, Index, MatchResult, SearchConfig, SearchMode, SearchSession,
};
use std::path::{Path, PathBuf};

// Re-export canonical test utilities from quickfind::testing
pub use quickfind::testing::{make_doc, make_index, make_matching_docs, make_session};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small documentation site: eight pages, mixed id types, one page with
/// no body and no id.
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/index.json")
}

pub fn fixture_index() -> Index {
    load_index(&fixture_path()).expect("fixture index should load")
}

pub fn fixture_session(mode: SearchMode) -> SearchSession {
    SearchSession::new(fixture_index(), SearchConfig::default(), mode)
}

/// Session after the user typed `query`.
pub fn typed(mode: SearchMode, query: &str) -> SearchSession {
    let mut session = fixture_session(mode);
    session.handle(Event::Input(query.to_string()));
    session
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Scores ascend; equal scores keep index order.
pub fn assert_ranked(results: &[MatchResult<'_>]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score < b.score || (a.score == b.score && a.refindex < b.refindex),
            "results out of order: {} (score {}, #{}) before {} (score {}, #{})",
            a.item.title,
            a.score,
            a.refindex,
            b.item.title,
            b.score,
            b.refindex
        );
    }
}

pub fn titles<'a>(results: &[MatchResult<'a>]) -> Vec<&'a str> {
    results.iter().map(|r| r.item.title.as_str()).collect()
}

pub fn find<'a>(docs: &'a [Document], title: &str) -> &'a Document {
    docs.iter()
        .find(|doc| doc.title == title)
        .unwrap_or_else(|| panic!("no document titled {:?}", title))
}
