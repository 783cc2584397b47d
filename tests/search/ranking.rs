//! Ranking: score direction, field weighting, tie-breaks.

use super::common::{assert_ranked, fixture_index, make_doc, make_index, titles};
use quickfind::scoring::DISPLAY_ORDER_SCALE;
use quickfind::{MatchEngine, MatchOptions};

#[test]
fn test_results_sorted_by_score() {
    let engine = MatchEngine::new(fixture_index(), MatchOptions::default());
    for query in ["robyn", "routes", "python", "handler", "3", "web"] {
        assert_ranked(&engine.search(query));
    }
}

#[test]
fn test_scores_are_in_unit_interval() {
    let engine = MatchEngine::new(fixture_index(), MatchOptions::default());
    for result in engine.search("robyn") {
        assert!(result.score > 0.0 && result.score <= 1.0, "score {}", result.score);
    }
}

#[test]
fn test_exact_beats_typo() {
    let docs = make_index(&[("Rooting", "Plants"), ("Routing", "Paths")]);
    let engine = MatchEngine::new(docs, MatchOptions::default());
    let results = engine.search("routing");
    assert_eq!(titles(&results), vec!["Routing", "Rooting"]);
    assert!(results[0].score < results[1].score);
}

#[test]
fn test_short_field_beats_long_field() {
    let docs = make_index(&[
        ("Guide", "Everything about websockets and a great many other words too"),
        ("WebSockets", "Realtime"),
    ]);
    let engine = MatchEngine::new(docs, MatchOptions::default());
    assert_eq!(titles(&engine.search("websockets")), vec!["WebSockets", "Guide"]);
}

#[test]
fn test_ties_keep_index_order() {
    let docs = vec![
        make_doc(10, "Routing", "Same"),
        make_doc(11, "Routing", "Same"),
        make_doc(12, "Routing", "Same"),
    ];
    let engine = MatchEngine::new(docs, MatchOptions::default());
    let results = engine.search("routing");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].score, results[2].score);
    let order: Vec<usize> = results.iter().map(|r| r.refindex).collect();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn test_display_order_buckets_score() {
    let engine = MatchEngine::new(fixture_index(), MatchOptions::default());
    let results = engine.search("robyn");
    assert!(!results.is_empty());
    for result in &results {
        assert_eq!(
            result.display_order(),
            (result.score * DISPLAY_ORDER_SCALE).round() as i64
        );
    }
    let orders: Vec<i64> = results.iter().map(|r| r.display_order()).collect();
    assert!(orders.windows(2).all(|w| w[0] <= w[1]), "orders {:?}", orders);
}

#[test]
fn test_search_is_deterministic() {
    let engine = MatchEngine::new(fixture_index(), MatchOptions::default());
    let first: Vec<(usize, f64)> = engine.search("web").iter().map(|r| (r.refindex, r.score)).collect();
    let second: Vec<(usize, f64)> = engine.search("web").iter().map(|r| (r.refindex, r.score)).collect();
    assert_eq!(first, second);
}
