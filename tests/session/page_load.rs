//! The dedicated search page, seeded from `?query=`.

use super::common::{fixture_session, typed};
use quickfind::{Effect, Event, ResultsView, SearchMode};

#[test]
fn test_query_param_matches_typing() {
    for query in ["routing", "robyn", "3", "midlewares", "zzzzzzzz", "r"] {
        let mut loaded = fixture_session(SearchMode::Passive);
        loaded.handle(Event::PageLoad(format!("https://robyn.tech/search/?query={}", query)));
        let manual = typed(SearchMode::Passive, query);
        assert_eq!(loaded.view(), manual.view(), "query {:?}", query);
    }
}

#[test]
fn test_query_param_is_decoded_and_normalized() {
    let mut loaded = fixture_session(SearchMode::Passive);
    let effects = loaded.handle(Event::PageLoad("/search/?query=%20Python+3".to_string()));
    assert_eq!(effects, vec![Effect::Highlight("python 3".to_string())]);
    assert_eq!(loaded.view(), typed(SearchMode::Passive, "python 3").view());
}

#[test]
fn test_passive_results_have_excerpts() {
    let session = typed(SearchMode::Passive, "docker");
    match session.view() {
        ResultsView::Results { heading, items, .. } => {
            assert_eq!(heading, "Search results");
            assert_eq!(
                items[0].excerpt.as_deref(),
                Some("... Deploy behind a reverse proxy or inside a Docker container. ...")
            );
        }
        other => panic!("expected results, got {:?}", other),
    }
    let html = session.results_html();
    assert!(html.contains(r#"class="search_result passive""#));
    assert!(html.contains("<h3>Deployment</h3><p>... Deploy behind"));
}

#[test]
fn test_search_page_without_query() {
    let mut session = fixture_session(SearchMode::Passive);
    assert!(session.handle(Event::PageLoad("/search/".to_string())).is_empty());
    assert!(matches!(session.view(), ResultsView::Placeholder { .. }));
}

#[test]
fn test_content_page_only_highlights() {
    let mut session = fixture_session(SearchMode::Live);
    let effects = session.handle(Event::PageLoad("/documentation/routing/?query=routes".to_string()));
    assert_eq!(effects, vec![Effect::Highlight("routes".to_string())]);
    assert!(session.view().is_cleared());
}

#[test]
fn test_passive_typing_highlights_page() {
    let mut session = fixture_session(SearchMode::Passive);
    let effects = session.handle(Event::Input("Robyn".to_string()));
    assert_eq!(effects, vec![Effect::Highlight("robyn".to_string())]);
}
