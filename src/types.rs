// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search session.
//!
//! A site ships an array of [`Document`]s as `index.json`. The engine turns a
//! query into [`MatchResult`]s that borrow from that array; the session decides
//! what the results region shows depending on the [`SearchMode`].
//!
//! # Invariants
//!
//! - **Index**: read-only after construction. `MatchResult::refindex` always
//!   points at the document it borrows.
//! - **MatchResult**: `0 < score <= 1`, lower is better.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// Document identifier as it appears in the index.
///
/// Site generators emit either numbers or strings here. Anything else
/// (floats, booleans, `null`) is kept as its JSON text rather than rejected.
/// The identifier is searchable, which is why it renders to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DocumentId {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => match n.as_i64() {
                Some(n) => DocumentId::Number(n),
                None => DocumentId::Text(n.to_string()),
            },
            Value::String(s) => DocumentId::Text(s),
            Value::Null => DocumentId::default(),
            other => DocumentId::Text(other.to_string()),
        })
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        DocumentId::Text(String::new())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Number(n) => write!(f, "{}", n),
            DocumentId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for DocumentId {
    fn from(n: i64) -> Self {
        DocumentId::Number(n)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        DocumentId::Text(s.to_string())
    }
}

/// One indexed page or section.
///
/// Unknown JSON fields are ignored and missing ones default to empty, so a
/// sloppy generator template costs recall rather than the whole index.
/// Scalar fields are read as text, so `"body": null` is an empty body and
/// `"title": 2024` is the title "2024".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: DocumentId,
    #[serde(default, deserialize_with = "scalar_text")]
    pub title: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub link: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub body: String,
}

fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Array(_) => Err(de::Error::custom("expected text, found an array")),
        Value::Object(_) => Err(de::Error::custom("expected text, found an object")),
    }
}

impl Document {
    /// Text of a searchable field.
    pub fn field(&self, key: SearchKey) -> Cow<'_, str> {
        match key {
            SearchKey::Title => Cow::Borrowed(&self.title),
            SearchKey::Link => Cow::Borrowed(&self.link),
            SearchKey::Body => Cow::Borrowed(&self.body),
            SearchKey::Id => Cow::Owned(self.id.to_string()),
        }
    }
}

/// The loaded index: documents in the order the site emitted them.
pub type Index = Vec<Document>;

/// A searchable document field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKey {
    Title,
    Link,
    Body,
    Id,
}

impl SearchKey {
    /// Every key, in the order the theme configured them.
    pub const ALL: [SearchKey; 4] = [
        SearchKey::Title,
        SearchKey::Link,
        SearchKey::Body,
        SearchKey::Id,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SearchKey::Title => "title",
            SearchKey::Link => "link",
            SearchKey::Body => "body",
            SearchKey::Id => "id",
        }
    }
}

/// A ranked hit. Borrowed from the engine's index, recomputed per query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a> {
    pub item: &'a Document,
    /// Match quality in `(0, 1]`. Lower is better.
    pub score: f64,
    /// Position of `item` in the index. Breaks score ties.
    pub refindex: usize,
}

impl MatchResult<'_> {
    /// Integer rank bucket used for CSS `order` on rendered results.
    pub fn display_order(&self) -> i64 {
        crate::scoring::display_order(self.score)
    }
}

/// Where results are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Popover under the search field on ordinary pages.
    Live,
    /// Results region of the dedicated search page, seeded from `?query=`.
    Passive,
}

impl SearchMode {
    pub fn from_search_page(on_search_page: bool) -> Self {
        if on_search_page {
            SearchMode::Passive
        } else {
            SearchMode::Live
        }
    }

    pub fn is_passive(self) -> bool {
        self == SearchMode::Passive
    }
}
