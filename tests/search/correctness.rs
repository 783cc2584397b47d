//! What matches: exact hits, typos, numbers, ids, case.

use super::common::{find, fixture_index, make_index, titles};
use quickfind::{DocumentId, MatchEngine, MatchOptions};

fn engine() -> MatchEngine {
    MatchEngine::new(fixture_index(), MatchOptions::default())
}

// ============================================================================
// EXACT AND PARTIAL HITS
// ============================================================================

#[test]
fn test_exact_title_ranks_first() {
    let engine = engine();
    let results = engine.search("routing");
    assert_eq!(titles(&results).first(), Some(&"Routing"));
}

#[test]
fn test_partial_prefix_is_found() {
    let docs = make_index(&[("Routing", "...")]);
    let engine = MatchEngine::new(docs, MatchOptions::default());
    let results = engine.search("rout");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.title, "Routing");
}

#[test]
fn test_body_only_hit() {
    let engine = engine();
    let results = engine.search("docker");
    assert_eq!(titles(&results), vec!["Deployment"]);
}

// ============================================================================
// TYPO TOLERANCE
// ============================================================================

#[test]
fn test_single_typo_is_tolerated() {
    let engine = engine();
    let results = engine.search("midlewares");
    assert_eq!(titles(&results).first(), Some(&"Middlewares"));
}

#[test]
fn test_zero_threshold_requires_literal_substring() {
    let options = MatchOptions {
        threshold: 0.0,
        ..MatchOptions::default()
    };
    let engine = MatchEngine::new(fixture_index(), options);
    assert!(engine.search("midlewares").is_empty());
    assert_eq!(titles(&engine.search("middlewares")), vec!["Middlewares"]);
}

#[test]
fn test_lower_threshold_never_adds_matches() {
    let strict = MatchEngine::new(
        fixture_index(),
        MatchOptions {
            threshold: 0.1,
            ..MatchOptions::default()
        },
    );
    let loose = engine();
    for query in ["routes", "websocket", "pyhton", "robyn", "handler"] {
        let loose_titles = titles(&loose.search(query));
        for title in titles(&strict.search(query)) {
            assert!(
                loose_titles.contains(&title),
                "{:?} matched {:?} only at the lower threshold",
                query,
                title
            );
        }
    }
}

// ============================================================================
// IDS, NUMBERS, CASE
// ============================================================================

#[test]
fn test_numeric_query_matches_ids_and_text() {
    let engine = engine();
    let results = engine.search("3");
    let found = titles(&results);
    assert!(found.contains(&"Middlewares"), "id 3 should match: {:?}", found);
    assert!(found.contains(&"Frequently Asked Questions"), "3.12 should match: {:?}", found);
}

#[test]
fn test_text_ids_are_searchable() {
    let docs = fixture_index();
    assert_eq!(find(&docs, "Frequently Asked Questions").id, DocumentId::from("faq"));

    let engine = engine();
    let results = engine.search("faq");
    assert_eq!(titles(&results).first(), Some(&"Frequently Asked Questions"));
}

#[test]
fn test_case_insensitive() {
    let engine = engine();
    assert_eq!(titles(&engine.search("ROBYN")), titles(&engine.search("robyn")));
    assert!(!engine.search("ROBYN").is_empty());
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_diacritic_folding_is_opt_in() {
    let docs = make_index(&[("Café menu", "Espresso")]);
    let exact = MatchOptions {
        threshold: 0.0,
        ..MatchOptions::default()
    };
    let folded = MatchOptions {
        ignore_diacritics: true,
        ..exact.clone()
    };

    assert!(MatchEngine::new(docs.clone(), exact).search("cafe").is_empty());
    assert_eq!(MatchEngine::new(docs, folded).search("cafe").len(), 1);
}
