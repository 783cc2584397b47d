//! Degenerate inputs: empty index, blank fields, long and odd queries.

use super::common::{fixture_index, titles};
use quickfind::{MatchEngine, MatchOptions, SearchKey};

#[test]
fn test_empty_index() {
    let engine = MatchEngine::new(Vec::new(), MatchOptions::default());
    assert!(engine.is_empty());
    assert!(engine.search("routing").is_empty());
}

#[test]
fn test_empty_query() {
    let engine = MatchEngine::new(fixture_index(), MatchOptions::default());
    assert!(engine.search("").is_empty());
}

#[test]
fn test_page_without_body_or_id_is_still_searchable() {
    let engine = MatchEngine::new(fixture_index(), MatchOptions::default());
    assert_eq!(titles(&engine.search("release notes")), vec!["Release notes"]);
}

#[test]
fn test_query_longer_than_one_chunk() {
    let engine = MatchEngine::new(fixture_index(), MatchOptions::default());
    let query = "declare routes with decorators such as get and post. path parameters are captured";
    assert!(query.chars().count() > quickfind::fuzzy::MAX_CHUNK_CHARS);
    assert_eq!(titles(&engine.search(query)).first(), Some(&"Routing"));
}

#[test]
fn test_restricted_keys() {
    let options = MatchOptions {
        keys: vec![SearchKey::Title],
        threshold: 0.0,
        ..MatchOptions::default()
    };
    let engine = MatchEngine::new(fixture_index(), options);
    assert!(engine.search("docker").is_empty());
    assert_eq!(titles(&engine.search("deployment")), vec!["Deployment"]);
}

#[test]
fn test_unicode_query_does_not_panic() {
    let engine = MatchEngine::new(fixture_index(), MatchOptions::default());
    for query in ["ünïcode", "日本語", "🦀🦀", "a\u{0301}b"] {
        let _ = engine.search(query);
    }
}
