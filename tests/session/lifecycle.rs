//! Escape, outside clicks, and submitting from the popover.

use super::common::{fixture_session, typed};
use quickfind::{Effect, Event, ResultsView, SearchMode};

#[test]
fn test_typing_shows_quick_links() {
    let session = typed(SearchMode::Live, "routing");
    match session.view() {
        ResultsView::Results { heading, items, .. } => {
            assert_eq!(heading, "Quick links");
            assert_eq!(items[0].title, "Routing");
            assert_eq!(items[0].href, "/documentation/routing/?query=routing");
            assert!(items[0].excerpt.is_none());
        }
        other => panic!("expected results, got {:?}", other),
    }
    let html = session.results_html();
    assert!(html.starts_with(r#"<h3 class="search_title">Quick links</h3>"#));
    assert!(html.contains(r#"<a href="/documentation/routing/?query=routing" class="search_result""#));
}

#[test]
fn test_escape_always_clears() {
    for mode in [SearchMode::Live, SearchMode::Passive] {
        for query in ["", "r", "routing", "zzzzzzzz"] {
            let mut session = typed(mode, query);
            assert_eq!(session.handle(Event::Escape), vec![Effect::ClearInput]);
            assert!(session.view().is_cleared());
            assert_eq!(session.input(), "");
            assert_eq!(session.results_html(), "");
        }
    }
}

#[test]
fn test_escape_before_any_input() {
    let mut session = fixture_session(SearchMode::Live);
    assert_eq!(session.handle(Event::Escape), vec![Effect::ClearInput]);
    assert!(session.view().is_cleared());
}

#[test]
fn test_click_inside_keeps_results() {
    let mut session = typed(SearchMode::Live, "routing");
    let before = session.view().clone();
    assert!(session.handle(Event::Click { inside_search: true }).is_empty());
    assert_eq!(session.view(), &before);
}

#[test]
fn test_click_outside_clears_popover() {
    let mut session = typed(SearchMode::Live, "routing");
    session.handle(Event::Click { inside_search: false });
    assert!(session.view().is_cleared());
}

#[test]
fn test_click_outside_on_search_page_is_ignored() {
    let mut session = typed(SearchMode::Passive, "routing");
    session.handle(Event::Click { inside_search: false });
    assert!(!session.view().items().is_empty());
}

#[test]
fn test_typing_after_clear_searches_again() {
    let mut session = typed(SearchMode::Live, "routing");
    session.handle(Event::Escape);
    session.handle(Event::Input("deploy".to_string()));
    assert_eq!(session.view().items()[0].title, "Deployment");
}

#[test]
fn test_submit_goes_to_search_page() {
    let mut session = fixture_session(SearchMode::Live);
    assert_eq!(
        session.handle(Event::Submit("Add Route".to_string())),
        vec![Effect::Navigate("/search/?query=add+route".to_string())]
    );
}

#[test]
fn test_submit_respects_root_url() {
    let mut config = quickfind::SearchConfig::default();
    config.root_url = "https://robyn.tech/".to_string();
    let mut session =
        quickfind::SearchSession::new(super::common::fixture_index(), config, SearchMode::Live);
    assert_eq!(
        session.handle(Event::Submit("routing".to_string())),
        vec![Effect::Navigate("https://robyn.tech/search/?query=routing".to_string())]
    );
}
