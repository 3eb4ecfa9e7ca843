//! Errors raised while mounting onto a page.

use miette::Diagnostic;
use wasm_bindgen::{JsCast, JsValue};

#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum MountError {
    #[error("no global `window`")]
    #[diagnostic(code(sharecard::mount::no_window))]
    NoWindow,

    #[error("window has no document")]
    #[diagnostic(code(sharecard::mount::no_document))]
    NoDocument,

    #[error("required element `{0}` not found")]
    #[diagnostic(
        code(sharecard::mount::missing_element),
        help("check the ids passed under `ids` in the mount config")
    )]
    MissingElement(String),

    #[error("invalid config: {0}")]
    #[diagnostic(code(sharecard::mount::config))]
    InvalidConfig(String),

    #[error("DOM call failed: {0}")]
    #[diagnostic(code(sharecard::mount::dom))]
    Dom(String),
}

impl From<serde_wasm_bindgen::Error> for MountError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        MountError::InvalidConfig(err.to_string())
    }
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Dom(js_message(&value))
    }
}

/// Best-effort human readable text for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// The `name` property of a thrown DOMException or Error, e.g. `AbortError`.
pub fn js_error_name(value: &JsValue) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
}
