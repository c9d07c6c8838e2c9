#![forbid(unsafe_code)]

//! `wasm-bindgen` export of [`WebSession`].
//!
//! ```js
//! const search = new DocSearch();
//! search.loadCatalog(await (await fetch('/search/terms.json')).text());
//! input.addEventListener('keyup', (e) => {
//!   const out = search.dispatch(JSON.stringify({ type: 'keyup', key: e.key, query: input.value, focus: 'search' }));
//!   if (out.prevent_default) e.preventDefault();
//!   out.commands.forEach(apply);
//! });
//! ```

use crate::session::WebSession;
use wasm_bindgen::prelude::*;

/// Search session handle for JavaScript.
#[wasm_bindgen]
pub struct DocSearch {
    inner: WebSession,
}

#[wasm_bindgen]
impl DocSearch {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: WebSession::new(),
        }
    }

    /// Install the catalog document; returns pending host commands.
    #[wasm_bindgen(js_name = loadCatalog)]
    pub fn load_catalog(&mut self, json: &str) -> Result<JsValue, JsValue> {
        let commands = self
            .inner
            .load_catalog_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let out =
            serde_json::to_string(&commands).map_err(|e| JsValue::from_str(&e.to_string()))?;
        js_sys::JSON::parse(&out)
    }

    /// Handle one input record; returns `{ prevent_default, commands }`.
    pub fn dispatch(&mut self, json: &str) -> Result<JsValue, JsValue> {
        let out = self
            .inner
            .dispatch_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        js_sys::JSON::parse(&out)
    }
}

impl Default for DocSearch {
    fn default() -> Self {
        Self::new()
    }
}
