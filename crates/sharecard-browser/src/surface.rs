//! The share page's DOM: content text, dialogs, the preview modal and the
//! status line.

use sharecard_core::{
    LoadingIndicator, PageIds, PageSurface, Severity, ShareableContent, SocialMeta, StatusDisplay,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, Window};

use crate::error::{MountError, js_message};

const PREVIEW_ALT: &str = "Preview of content";

/// Look up a required element by id.
pub(crate) fn by_id(document: &Document, id: &str) -> Result<Element, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(id.to_string()))
}

pub(crate) fn by_selector(document: &Document, selector: &str) -> Result<Element, MountError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| MountError::MissingElement(selector.to_string()))
}

fn html(element: Element, name: &str) -> Result<HtmlElement, MountError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::Dom(format!("`{name}` is not an HTML element")))
}

pub struct DomSurface {
    window: Window,
    document: Document,
    content: HtmlElement,
    header: Element,
    body: Element,
    loading: Element,
    modal: HtmlElement,
    preview_container: Element,
    timestamp: Option<Element>,
    meta_info: Option<Element>,
}

impl DomSurface {
    /// Resolve every element the controller touches. The timestamp and meta
    /// panels are optional.
    pub fn locate(window: Window, ids: &PageIds) -> Result<Self, MountError> {
        let document = window.document().ok_or(MountError::NoDocument)?;
        let content = html(by_id(&document, &ids.content)?, &ids.content)?;
        let header = content
            .query_selector(&ids.header_selector)?
            .ok_or_else(|| MountError::MissingElement(ids.header_selector.clone()))?;
        let body = content
            .query_selector(&ids.body_selector)?
            .ok_or_else(|| MountError::MissingElement(ids.body_selector.clone()))?;
        let loading = by_id(&document, &ids.loading)?;
        let modal = html(by_id(&document, &ids.modal)?, &ids.modal)?;
        let preview_container = by_id(&document, &ids.preview_container)?;
        let timestamp = document.get_element_by_id(&ids.timestamp);
        let meta_info = document.get_element_by_id(&ids.meta_info);

        Ok(Self {
            window,
            document,
            content,
            header,
            body,
            loading,
            modal,
            preview_container,
            timestamp,
            meta_info,
        })
    }

    pub fn content_node(&self) -> &HtmlElement {
        &self.content
    }

    pub fn modal(&self) -> &HtmlElement {
        &self.modal
    }

    fn append_preview_image(&self, data_url: &str) -> Result<(), JsValue> {
        let img: HtmlImageElement = self.document.create_element("img")?.dyn_into()?;
        img.set_src(data_url);
        img.set_alt(PREVIEW_ALT);
        self.preview_container.append_child(&img)?;
        Ok(())
    }

    fn append_meta_lines(&self, target: &Element, meta: &SocialMeta) -> Result<(), JsValue> {
        for line in meta.display_lines() {
            let item = self.document.create_element("div")?;
            item.set_class_name("meta-tag");
            item.set_text_content(Some(&line));
            target.append_child(&item)?;
        }
        Ok(())
    }
}

impl LoadingIndicator for DomSurface {
    fn set_loading(&self, loading: bool) {
        let classes = self.loading.class_list();
        let result = if loading {
            classes.add_1("active")
        } else {
            classes.remove_1("active")
        };
        if let Err(e) = result {
            tracing::warn!("toggling loading indicator failed: {}", js_message(&e));
        }
    }
}

impl PageSurface for DomSurface {
    fn read_content(&self) -> ShareableContent {
        ShareableContent::new(
            self.header.text_content().unwrap_or_default().trim(),
            self.body.text_content().unwrap_or_default().trim(),
        )
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        self.window
            .prompt_with_message_and_default(message, default)
            .ok()
            .flatten()
    }

    fn set_content(&self, content: &ShareableContent) {
        self.header.set_text_content(Some(&content.header));
        self.body.set_text_content(Some(&content.body));
    }

    fn refresh_timestamp(&self) {
        if let Some(el) = &self.timestamp {
            let now = js_sys::Date::new_0().to_locale_string("default", &JsValue::UNDEFINED);
            el.set_text_content(Some(&String::from(now)));
        }
    }

    fn show_preview_image(&self, data_url: &str) {
        self.preview_container.set_inner_html("");
        if let Err(e) = self.append_preview_image(data_url) {
            tracing::warn!("inserting preview image failed: {}", js_message(&e));
        }
    }

    fn set_modal_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(e) = self.modal.style().set_property("display", display) {
            tracing::warn!("setting modal display failed: {}", js_message(&e));
        }
    }

    fn show_meta(&self, meta: &SocialMeta) {
        let Some(target) = &self.meta_info else {
            tracing::debug!("no meta panel on this page");
            return;
        };
        target.set_inner_html("");
        if let Err(e) = self.append_meta_lines(target, meta) {
            tracing::warn!("rendering meta panel failed: {}", js_message(&e));
        }
    }
}

/// The status line element.
pub struct DomStatus {
    element: Element,
}

impl DomStatus {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl StatusDisplay for DomStatus {
    fn show(&self, message: &str, severity: Severity) {
        self.element.set_text_content(Some(message));
        self.element
            .set_class_name(&format!("status-message show {}", severity.as_class()));
    }

    fn hide(&self) {
        if let Err(e) = self.element.class_list().remove_1("show") {
            tracing::warn!("hiding status failed: {}", js_message(&e));
        }
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}
