//! WebAssembly bindings for the search session.
//!
//! The browser glue (`js/quickfind.js`) owns the DOM. It fetches the index,
//! constructs one [`QuickfindSession`] per page, forwards events, and applies
//! the returned effects:
//!
//! | Effect       | Glue action                                 |
//! |--------------|---------------------------------------------|
//! | `clearInput` | empty the `.search_field` input            |
//! | `highlight`  | mark the term in `main` via `highlightHtml` |
//! | `navigate`   | `window.location.href = value`              |
//!
//! After every call the glue replaces the results region with `resultsHtml()`.

use crate::config::SearchConfig;
use crate::highlight::{highlight, highlight_html as render_highlight};
use crate::loader::{parse_index, INDEX_PATH};
use crate::session::{Effect, Event, SearchSession};
use crate::types::{Index, SearchMode};
use js_sys::{Array, Function, Reflect};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// One page's search state.
#[wasm_bindgen]
pub struct QuickfindSession {
    inner: SearchSession,
}

#[wasm_bindgen]
impl QuickfindSession {
    /// Create a session from the fetched index text.
    ///
    /// `index_json` is `undefined` when the fetch failed. That, and an index
    /// that doesn't parse, are logged to the console and give an empty index.
    /// A malformed `config` is an error.
    #[wasm_bindgen(constructor)]
    pub fn new(
        index_json: Option<String>,
        config: JsValue,
        on_search_page: bool,
    ) -> Result<QuickfindSession, JsValue> {
        let config: SearchConfig = if config.is_undefined() || config.is_null() {
            SearchConfig::default()
        } else {
            from_value(config).map_err(|e| e.to_string())?
        };
        config.validate().map_err(|e| e.to_string())?;

        let mode = SearchMode::from_search_page(on_search_page);
        Ok(QuickfindSession {
            inner: SearchSession::new(read_index(index_json.as_deref()), config, mode),
        })
    }

    #[wasm_bindgen(js_name = pageLoad)]
    pub fn page_load(&mut self, url: &str) -> Result<Array, JsValue> {
        self.dispatch(Event::PageLoad(url.to_string()))
    }

    pub fn input(&mut self, value: &str) -> Result<Array, JsValue> {
        self.dispatch(Event::Input(value.to_string()))
    }

    pub fn submit(&mut self, value: &str) -> Result<Array, JsValue> {
        self.dispatch(Event::Submit(value.to_string()))
    }

    pub fn escape(&mut self) -> Result<Array, JsValue> {
        self.dispatch(Event::Escape)
    }

    /// A click anywhere on the page.
    pub fn click(&mut self, inside_search: bool) -> Result<Array, JsValue> {
        self.dispatch(Event::Click { inside_search })
    }

    /// Markup for the results region.
    #[wasm_bindgen(js_name = resultsHtml)]
    pub fn results_html(&self) -> String {
        self.inner.results_html()
    }

    /// The results region as a plain object, for custom rendering.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_value(self.inner.view()).map_err(|e| e.to_string().into())
    }

    #[wasm_bindgen(js_name = isPassive)]
    pub fn is_passive(&self) -> bool {
        self.inner.mode().is_passive()
    }

    #[wasm_bindgen(js_name = docCount)]
    pub fn doc_count(&self) -> usize {
        self.inner.engine().len()
    }

    fn dispatch(&mut self, event: Event) -> Result<Array, JsValue> {
        self.inner.handle(event).iter().map(effect_to_js).collect()
    }
}

/// Location of the index relative to the site root.
#[wasm_bindgen(js_name = indexPath)]
pub fn index_path() -> String {
    INDEX_PATH.to_string()
}

/// Escaped HTML for `text` with `<mark>` around every occurrence of `term`.
#[wasm_bindgen(js_name = highlightHtml)]
pub fn highlight_html(text: &str, term: &str) -> String {
    render_highlight(text, term)
}

/// `text` split into `{kind: "plain" | "mark", text}` runs.
#[wasm_bindgen(js_name = highlightSegments)]
pub fn highlight_segments(text: &str, term: &str) -> Result<JsValue, JsValue> {
    to_value(&highlight(text, term)).map_err(|e| e.to_string().into())
}

fn read_index(index_json: Option<&str>) -> Index {
    let Some(text) = index_json else {
        console_error("search index unavailable; search disabled");
        return Vec::new();
    };
    parse_index(text.as_bytes()).unwrap_or_else(|err| {
        console_error(&format!("search index unreadable: {}", err));
        Vec::new()
    })
}

fn effect_to_js(effect: &Effect) -> Result<JsValue, JsValue> {
    to_value(effect).map_err(|e| e.to_string().into())
}

/// `console.error(message)`, if the host has a console.
fn console_error(message: &str) {
    let Ok(console) = Reflect::get(&js_sys::global(), &JsValue::from_str("console")) else {
        return;
    };
    if let Ok(error) = Reflect::get(&console, &JsValue::from_str("error")) {
        if let Some(error) = error.dyn_ref::<Function>() {
            let _ = error.call1(&console, &JsValue::from_str(message));
        }
    }
}
