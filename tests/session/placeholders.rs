//! Which state the results region is in for a given query.

use super::common::{make_matching_docs, make_session, typed};
use quickfind::{Event, PlaceholderKind, ResultsView, SearchMode};

fn placeholder_kind(view: &ResultsView) -> Option<PlaceholderKind> {
    match view {
        ResultsView::Placeholder { kind, .. } => Some(*kind),
        _ => None,
    }
}

#[test]
fn test_empty_and_blank_queries_ask_for_input() {
    for query in ["", "   ", "\t"] {
        let session = typed(SearchMode::Live, query);
        assert_eq!(placeholder_kind(session.view()), Some(PlaceholderKind::TypeToSearch));
        assert_eq!(
            session.results_html(),
            r#"<label for="find" class="search_result">Type to search</label>"#
        );
    }
}

#[test]
fn test_single_letter_is_too_short() {
    for mode in [SearchMode::Live, SearchMode::Passive] {
        let session = typed(mode, "r");
        assert_eq!(placeholder_kind(session.view()), Some(PlaceholderKind::QueryTooShort));
        assert!(session.view().items().is_empty());
    }
}

#[test]
fn test_single_digit_searches() {
    let session = typed(SearchMode::Live, "3");
    assert!(!session.view().items().is_empty());
}

#[test]
fn test_zero_counts_as_number() {
    let session = typed(SearchMode::Live, "0");
    assert_eq!(placeholder_kind(session.view()), None);
}

#[test]
fn test_no_matches_message() {
    let session = typed(SearchMode::Live, "zzzzzzzz");
    assert_eq!(
        session.view(),
        &ResultsView::NoMatches {
            text: "No matches found".to_string()
        }
    );
    assert_eq!(
        session.results_html(),
        r#"<span class="search_result">No matches found</span>"#
    );
}

#[test]
fn test_caps_per_mode() {
    let mut live = make_session(make_matching_docs(30), SearchMode::Live);
    live.handle(Event::Input("page".to_string()));
    assert_eq!(live.view().items().len(), 8);

    let mut passive = make_session(make_matching_docs(30), SearchMode::Passive);
    passive.handle(Event::Input("page".to_string()));
    assert_eq!(passive.view().items().len(), 12);
}

#[test]
fn test_fewer_matches_than_cap() {
    let mut live = make_session(make_matching_docs(3), SearchMode::Live);
    live.handle(Event::Input("page".to_string()));
    assert_eq!(live.view().items().len(), 3);
}
