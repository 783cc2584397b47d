//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::config::SearchConfig;
use crate::session::SearchSession;
use crate::types::{Document, DocumentId, SearchMode};

/// Create a test document. The link is derived from the id.
pub fn make_doc(id: i64, title: &str, body: &str) -> Document {
    Document {
        id: DocumentId::Number(id),
        title: title.to_string(),
        link: format!("/doc/{}/", id),
        body: body.to_string(),
    }
}

/// Create an index from `(title, body)` pairs, ids counting from 0.
pub fn make_index(pages: &[(&str, &str)]) -> Vec<Document> {
    pages
        .iter()
        .enumerate()
        .map(|(id, (title, body))| make_doc(id as i64, title, body))
        .collect()
}

/// Create `count` documents that all match the query "page".
pub fn make_matching_docs(count: usize) -> Vec<Document> {
    (0..count)
        .map(|i| make_doc(i as i64, &format!("Page {}", i), "Every page mentions page"))
        .collect()
}

/// Session over `docs` with the default config.
pub fn make_session(docs: Vec<Document>, mode: SearchMode) -> SearchSession {
    SearchSession::new(docs, SearchConfig::default(), mode)
}
