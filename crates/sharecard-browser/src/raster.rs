//! Rendering the content node through the `html-to-image` library.
//!
//! The library is loaded by the host page and exposes a global
//! `htmlToImage` namespace. If it is missing, calling into it throws a
//! `ReferenceError`, which surfaces as [`RenderError::Rejected`].

use js_sys::{ArrayBuffer, Promise, Uint8Array};
use sharecard_core::{Rasterizer, RenderConfig, RenderError};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, HtmlElement};

use crate::error::js_message;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = htmlToImage, js_name = toBlob, catch)]
    fn html_to_blob(node: &HtmlElement, options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(js_namespace = htmlToImage, js_name = toPng, catch)]
    fn html_to_png(node: &HtmlElement, options: &JsValue) -> Result<Promise, JsValue>;
}

/// Rasterizer bound to one content node.
pub struct HtmlToImage {
    node: HtmlElement,
}

impl HtmlToImage {
    pub fn new(node: HtmlElement) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &HtmlElement {
        &self.node
    }

    fn options(config: &RenderConfig) -> Result<JsValue, RenderError> {
        serde_wasm_bindgen::to_value(config).map_err(|e| RenderError::Rejected(e.to_string()))
    }
}

fn rejected(value: JsValue) -> RenderError {
    RenderError::Rejected(js_message(&value))
}

impl Rasterizer for HtmlToImage {
    async fn render_png(&self, config: &RenderConfig) -> Result<Vec<u8>, RenderError> {
        let options = Self::options(config)?;
        let promise = html_to_blob(&self.node, &options).map_err(rejected)?;
        let value = JsFuture::from(promise).await.map_err(rejected)?;
        if value.is_null() || value.is_undefined() {
            return Err(RenderError::Empty);
        }
        let blob: Blob = value
            .dyn_into()
            .map_err(|_| RenderError::Rejected("toBlob did not return a Blob".into()))?;

        let buffer = JsFuture::from(blob.array_buffer())
            .await
            .map_err(rejected)?
            .dyn_into::<ArrayBuffer>()
            .map_err(rejected)?;
        let bytes = Uint8Array::new(&buffer).to_vec();
        tracing::debug!(bytes = bytes.len(), "rendered content to png");
        Ok(bytes)
    }

    async fn render_data_url(&self, config: &RenderConfig) -> Result<String, RenderError> {
        let options = Self::options(config)?;
        let promise = html_to_png(&self.node, &options).map_err(rejected)?;
        let value = JsFuture::from(promise).await.map_err(rejected)?;
        match value.as_string() {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(RenderError::Empty),
        }
    }
}
