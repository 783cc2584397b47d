// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index loading.
//!
//! The index is a JSON array of documents generated with the site. Search is
//! an enhancement, not a dependency: anything that goes wrong here is logged
//! and the page carries on with an empty index. There are no retries.

use crate::error::LoadError;
use crate::types::{Document, Index};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Default location of the index relative to the site root.
pub const INDEX_PATH: &str = "index.json";

/// Parse an index document.
///
/// A well-formed JSON value that is not an array (`{}`, `null`) yields an
/// empty index. Only malformed JSON is an error: an entry that is not a
/// document is skipped with a warning and the rest of the index loads.
pub fn parse_index(bytes: &[u8]) -> Result<Index, LoadError> {
    let value: Value = serde_json::from_slice(bytes)?;
    index_from_value(value)
}

/// Convert an already-parsed JSON value into an index.
pub fn index_from_value(value: Value) -> Result<Index, LoadError> {
    match value {
        Value::Array(entries) => Ok(entries
            .into_iter()
            .enumerate()
            .filter_map(|(position, entry)| match serde_json::from_value::<Document>(entry) {
                Ok(doc) => Some(doc),
                Err(err) => {
                    tracing::warn!(position, error = %err, "skipping malformed index entry");
                    None
                }
            })
            .collect()),
        other => {
            tracing::warn!(kind = json_kind(&other), "index is not an array; using empty index");
            Ok(Vec::new())
        }
    }
}

/// Read and parse an index file.
pub fn load_index(path: &Path) -> Result<Index, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let index = parse_index(&bytes)?;
    tracing::debug!(path = %path.display(), docs = index.len(), "index loaded");
    Ok(index)
}

/// Load an index, degrading any failure to an empty index.
pub fn load_index_or_empty(path: &Path) -> Index {
    load_index(path).unwrap_or_else(|err| {
        tracing::error!(error = %err, "search index unavailable; search disabled");
        Vec::new()
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_array() {
        let index = parse_index(br#"[{"id": 1, "title": "Routing", "link": "/r/", "body": "x"}]"#)
            .unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index[0].title, "Routing");
    }

    #[test]
    fn test_non_array_is_empty() {
        assert!(parse_index(b"{}").unwrap().is_empty());
        assert!(parse_index(b"null").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(parse_index(b"[{"), Err(LoadError::Parse(_))));
        assert!(matches!(parse_index(b"not json"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_bad_entries_are_skipped() {
        let index = parse_index(br#"[1, {"title": "Kept"}, "x", {"title": {"nested": 1}}]"#).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index[0].title, "Kept");
    }

    #[test]
    fn test_loose_entries_still_load() {
        let index = parse_index(
            br#"[
                {"id": 1, "title": "Routing", "link": "/routing/", "body": "Routes"},
                {"id": 2.5, "title": "Middlewares", "link": "/mw/", "body": null},
                {"id": null, "title": null, "link": "/empty/"}
            ]"#,
        )
        .unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index[1].id.to_string(), "2.5");
        assert!(index[1].body.is_empty());
        assert!(index[2].title.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "a", "title": "A"}}, {{"id": "b", "title": "B"}}]"#).unwrap();
        let index = load_index(file.path()).unwrap();
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let path = Path::new("/nonexistent/index.json");
        assert!(matches!(load_index(path), Err(LoadError::Io { .. })));
        assert!(load_index_or_empty(path).is_empty());
    }

    #[test]
    fn test_invalid_file_degrades_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(load_index_or_empty(file.path()).is_empty());
    }
}
