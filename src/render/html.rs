// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markup for the results region.
//!
//! Class names match the theme stylesheet: `search_title` for the heading,
//! `search_result` for every entry, `passive` for search-page entries.
//! All document text is escaped; indexes are generated from user content.

use super::{ResultItem, ResultsView};
use crate::types::SearchMode;
use std::fmt::Write;

/// Render the results region. `Cleared` renders as the empty string.
pub fn render_html(view: &ResultsView) -> String {
    let mut html = String::new();
    match view {
        ResultsView::Cleared => {}
        ResultsView::Placeholder { text, .. } => {
            let _ = write!(
                html,
                r#"<label for="find" class="search_result">{}</label>"#,
                escape_html(text)
            );
        }
        ResultsView::NoMatches { text } => {
            let _ = write!(html, r#"<span class="search_result">{}</span>"#, escape_html(text));
        }
        ResultsView::Results {
            mode,
            heading,
            items,
        } => {
            let _ = write!(html, r#"<h3 class="search_title">{}</h3>"#, escape_html(heading));
            for item in items {
                render_item(&mut html, item, *mode);
            }
        }
    }
    html
}

fn render_item(html: &mut String, item: &ResultItem, mode: SearchMode) {
    let class = match mode {
        SearchMode::Live => "search_result",
        SearchMode::Passive => "search_result passive",
    };
    let _ = write!(
        html,
        r#"<a href="{}" class="{}" style="order: {}">"#,
        escape_html(&item.href),
        class,
        item.order
    );
    match (mode, &item.excerpt) {
        (SearchMode::Passive, Some(excerpt)) => {
            let _ = write!(
                html,
                "<h3>{}</h3><p>{}</p>",
                escape_html(&item.title),
                escape_html(excerpt)
            );
        }
        _ => html.push_str(&escape_html(&item.title)),
    }
    html.push_str("</a>");
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
