// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The URL side of search: reading `?query=` and writing links that carry it.

use url::{form_urlencoded, Url};

/// Query-string parameter carrying the search term between pages.
pub const QUERY_PARAM: &str = "query";

/// Base for resolving site-relative page URLs such as `/search/?query=x`.
const RELATIVE_BASE: &str = "http://localhost/";

/// The `query` parameter of a page URL, absolute or site-relative.
pub fn query_param(page_url: &str) -> Option<String> {
    let url = Url::parse(page_url)
        .or_else(|_| Url::parse(RELATIVE_BASE).and_then(|base| base.join(page_url)))
        .ok()?;
    url.query_pairs()
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Link to a result that tells the target page what to highlight.
///
/// Existing query strings are extended and fragments stay last:
/// `/routing/#params` → `/routing/?query=rout#params`.
pub fn result_href(link: &str, query: &str) -> String {
    let (path, fragment) = match link.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (link, None),
    };
    let separator = if path.contains('?') { '&' } else { '?' };

    let mut href = format!("{}{}{}={}", path, separator, QUERY_PARAM, encode(query));
    if let Some(fragment) = fragment {
        href.push('#');
        href.push_str(fragment);
    }
    href
}

/// Dedicated search page for `term`, under the site root.
pub fn search_page_url(root_url: &str, search_page: &str, term: &str) -> String {
    match Url::parse(root_url).and_then(|root| root.join(search_page)) {
        Ok(mut url) => {
            url.query_pairs_mut().clear().append_pair(QUERY_PARAM, term);
            url.to_string()
        }
        // Site-relative root such as "/" or "/docs/"
        Err(_) => format!(
            "{}/{}?{}={}",
            root_url.trim_end_matches('/'),
            search_page.trim_start_matches('/'),
            QUERY_PARAM,
            encode(term)
        ),
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
