// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the search session.
//!
//! Drives a session with arbitrary event sequences over an arbitrary index and
//! checks the invariants the page relies on after every event.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quickfind::{
    Document, DocumentId, Effect, Event, ResultsView, SearchConfig, SearchMode, SearchSession,
};

#[derive(Debug, Arbitrary)]
struct Page {
    title: String,
    body: String,
}

#[derive(Debug, Arbitrary)]
enum Action {
    Type(String),
    Submit(String),
    Load(String),
    Escape,
    Click(bool),
}

#[derive(Debug, Arbitrary)]
struct SessionInput {
    pages: Vec<Page>,
    passive: bool,
    actions: Vec<Action>,
}

fuzz_target!(|input: SessionInput| {
    let docs: Vec<Document> = input
        .pages
        .into_iter()
        .take(32)
        .enumerate()
        .map(|(i, page)| Document {
            id: DocumentId::Number(i as i64),
            title: page.title.chars().take(64).collect(),
            link: format!("/page/{}/", i),
            body: page.body.chars().take(256).collect(),
        })
        .collect();

    let config = SearchConfig::default();
    let mode = SearchMode::from_search_page(input.passive);
    let cap = config.result_limit(mode);
    let mut session = SearchSession::new(docs, config, mode);

    for action in input.actions.into_iter().take(16) {
        let event = match action {
            Action::Type(text) => Event::Input(text.chars().take(32).collect()),
            Action::Submit(text) => Event::Submit(text.chars().take(32).collect()),
            Action::Load(url) => Event::PageLoad(url.chars().take(64).collect()),
            Action::Escape => Event::Escape,
            Action::Click(inside) => Event::Click { inside_search: inside },
        };
        let was_escape = matches!(event, Event::Escape);
        let effects = session.handle(event);

        assert!(session.view().items().len() <= cap);
        if was_escape {
            assert!(session.view().is_cleared());
            assert_eq!(effects, vec![Effect::ClearInput]);
        }
        if mode.is_passive() {
            assert!(!effects.iter().any(|e| matches!(e, Effect::Navigate(_))));
        }
        if let ResultsView::Results { items, .. } = session.view() {
            assert!(items.windows(2).all(|w| w[0].order <= w[1].order));
        }
        let _ = session.results_html();
    }
});
