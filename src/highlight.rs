// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Marking query terms in page text.
//!
//! Result links carry `?query=`, and the landing page highlights the term in
//! its body. The browser glue feeds text nodes through [`highlight`] and
//! replaces any node that produced a mark.

use crate::render::html::escape_html;
use crate::utils::find_ignore_case_from;
use serde::Serialize;

/// A run of text, either plain or matching the term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment<'a> {
    Plain(&'a str),
    Mark(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain(text) | Segment::Mark(text) => text,
        }
    }

    pub fn is_mark(&self) -> bool {
        matches!(self, Segment::Mark(_))
    }
}

/// Split `text` at every case-insensitive, non-overlapping occurrence of `term`.
///
/// The segments concatenate back to `text`. A blank term yields one plain
/// segment; empty input yields none.
pub fn highlight<'a>(text: &'a str, term: &str) -> Vec<Segment<'a>> {
    let term = term.trim();
    let mut segments = Vec::new();
    let mut cursor = 0;

    if !term.is_empty() {
        while let Some((start, end)) = find_ignore_case_from(text, term, cursor) {
            if start > cursor {
                segments.push(Segment::Plain(&text[cursor..start]));
            }
            segments.push(Segment::Mark(&text[start..end]));
            cursor = end;
        }
    }

    if cursor < text.len() {
        segments.push(Segment::Plain(&text[cursor..]));
    }
    segments
}

/// [`highlight`] rendered as escaped HTML with `<mark>` around matches.
pub fn highlight_html(text: &str, term: &str) -> String {
    let mut html = String::with_capacity(text.len());
    for segment in highlight(text, term) {
        match segment {
            Segment::Plain(text) => html.push_str(&escape_html(text)),
            Segment::Mark(text) => {
                html.push_str("<mark>");
                html.push_str(&escape_html(text));
                html.push_str("</mark>");
            }
        }
    }
    html
}
