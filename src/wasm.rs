// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the blog search page.
//!
//! - `BlogSearch`: the index over the page's posts
//! - `similarWords` and `highlight`: the highlighting steps, callable on every
//!   keystroke
//!
//! Posts and configuration cross the boundary as plain JS objects.

use crate::config::IndexConfiguration;
use crate::highlight::{render_highlighted, similar_words};
use crate::index::SearchIndex;
use crate::types::Document;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    // json_compatible: documents become objects, not Maps
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string().into())
}

/// Search index over the posts handed over by the page.
#[wasm_bindgen]
pub struct BlogSearch {
    index: SearchIndex,
}

#[wasm_bindgen]
impl BlogSearch {
    /// Build from an array of posts and an optional configuration object
    /// (`indexBy`, `indexStrategy`, `searchSanitiser`, ...).
    #[wasm_bindgen(constructor)]
    pub fn new(posts: JsValue, options: JsValue) -> Result<BlogSearch, JsValue> {
        let posts: Vec<Document> = from_value(posts).map_err(|e| e.to_string())?;
        let config: IndexConfiguration = if options.is_undefined() || options.is_null() {
            IndexConfiguration::default()
        } else {
            from_value(options).map_err(|e| e.to_string())?
        };
        let index = SearchIndex::build(posts, config).map_err(|e| e.to_string())?;
        Ok(BlogSearch { index })
    }

    /// Matching posts, best first.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        to_js(&self.index.query(query))
    }

    /// Number of indexed posts.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.index.len()
    }
}

/// Words of `text` sharing a stem with `term`, longest first.
#[wasm_bindgen(js_name = similarWords)]
pub fn similar_words_js(term: &str, text: &str) -> js_sys::Array {
    similar_words(term, text)
        .iter()
        .map(|word| JsValue::from_str(word))
        .collect()
}

/// `[{ text, highlighted }]` spans for `text`.
#[wasm_bindgen(js_name = highlight)]
pub fn highlight_js(
    text: &str,
    targets: Vec<String>,
    term: &str,
    case_insensitive: bool,
) -> Result<JsValue, JsValue> {
    to_js(&render_highlighted(text, &targets, term, case_insensitive))
}
