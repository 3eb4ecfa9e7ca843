//! Browser implementation of `SharePlatform`.
//!
//! `navigator.share`/`canShare` are reached through `Reflect` so a missing API
//! is a detectable absence rather than a hard binding error.

use js_sys::{Array, Object, Promise, Reflect, Uint8Array};
use sharecard_core::{OpenIn, PlatformReply, ShareError, SharePayload, SharePlatform};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, ClipboardItem, File, FilePropertyBag, HtmlAnchorElement, Window,
};

use crate::capability::method;
use crate::error::{js_error_name, js_message};

const PNG_MIME: &str = "image/png";

pub struct BrowserPlatform {
    window: Window,
}

impl BrowserPlatform {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn share_data(&self, payload: &SharePayload<'_>) -> Result<Object, JsValue> {
        let file = png_file(payload.png, payload.filename)?;
        let data = Object::new();
        Reflect::set(&data, &"title".into(), &payload.title.into())?;
        Reflect::set(&data, &"text".into(), &payload.text.into())?;
        Reflect::set(&data, &"files".into(), &Array::of1(&file))?;
        Ok(data)
    }
}

fn png_parts(png: &[u8]) -> Array {
    Array::of1(&Uint8Array::from(png))
}

fn png_blob(png: &[u8]) -> Result<Blob, JsValue> {
    let opts = BlobPropertyBag::new();
    opts.set_type(PNG_MIME);
    Blob::new_with_u8_array_sequence_and_options(&png_parts(png), &opts)
}

fn png_file(png: &[u8], filename: &str) -> Result<File, JsValue> {
    let opts = FilePropertyBag::new();
    opts.set_type(PNG_MIME);
    File::new_with_u8_array_sequence_and_options(&png_parts(png), filename, &opts)
}

impl SharePlatform for BrowserPlatform {
    fn can_share(&self, payload: &SharePayload<'_>) -> bool {
        let navigator = self.window.navigator();
        let Some(can_share) = method(&navigator, "canShare") else {
            return false;
        };
        let data = match self.share_data(payload) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("building share data failed: {}", js_message(&e));
                return false;
            }
        };
        can_share
            .call1(&navigator, &data)
            .map(|answer| answer.is_truthy())
            .unwrap_or(false)
    }

    async fn share(&self, payload: &SharePayload<'_>) -> Result<PlatformReply, ShareError> {
        let navigator = self.window.navigator();
        let share = method(&navigator, "share").ok_or(ShareError::Unsupported("navigator.share"))?;
        let data = self
            .share_data(payload)
            .map_err(|e| ShareError::rejected("navigator.share", js_message(&e)))?;

        let promise: Promise = share
            .call1(&navigator, &data)
            .and_then(|value| value.dyn_into())
            .map_err(|e| ShareError::rejected("navigator.share", js_message(&e)))?;

        match JsFuture::from(promise).await {
            Ok(_) => Ok(PlatformReply::Completed),
            Err(e) if js_error_name(&e).as_deref() == Some("AbortError") => {
                Ok(PlatformReply::Cancelled)
            }
            Err(e) => Err(ShareError::rejected("navigator.share", js_message(&e))),
        }
    }

    async fn write_clipboard_image(&self, png: &[u8]) -> Result<(), ShareError> {
        let to_err = |e: JsValue| ShareError::rejected("clipboard.write", js_message(&e));

        let blob = png_blob(png).map_err(to_err)?;
        let item_data = Object::new();
        Reflect::set(&item_data, &JsValue::from_str(PNG_MIME), &blob).map_err(to_err)?;
        let item = ClipboardItem::new_with_record_from_str_to_blob_promise(&item_data)
            .map_err(to_err)?;

        let clipboard = self.window.navigator().clipboard();
        JsFuture::from(clipboard.write(&Array::of1(&item)))
            .await
            .map_err(to_err)?;
        tracing::debug!("wrote {} bytes of png to clipboard", png.len());
        Ok(())
    }

    fn open_url(&self, url: &str, target: OpenIn) -> Result<(), ShareError> {
        match target {
            OpenIn::NewContext => {
                let opened = self
                    .window
                    .open_with_url_and_target(url, "_blank")
                    .map_err(|e| ShareError::rejected("window.open", js_message(&e)))?;
                if opened.is_none() {
                    tracing::warn!(url, "window.open returned no window; popup blocked?");
                }
                Ok(())
            }
            OpenIn::CurrentContext => self
                .window
                .location()
                .set_href(url)
                .map_err(|e| ShareError::rejected("location.href", js_message(&e))),
        }
    }

    fn download(&self, filename: &str, href: &str) -> Result<(), ShareError> {
        let to_err = |e: JsValue| ShareError::rejected("download", js_message(&e));
        let document = self
            .window
            .document()
            .ok_or(ShareError::Unsupported("document"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(to_err)?
            .dyn_into()
            .map_err(|_| ShareError::rejected("download", "created element is not an anchor"))?;
        anchor.set_href(href);
        anchor.set_download(filename);
        anchor.click();
        Ok(())
    }

    async fn sleep_ms(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}
