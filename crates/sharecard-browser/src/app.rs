//! ShareApp - the mounted controller exposed to JavaScript.

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use sharecard_core::{DismissSource, ShareConfig, ShareController, Shortcut};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::{Document, Event, KeyboardEvent};

use crate::capability::NavigatorProbe;
use crate::error::MountError;
use crate::events::{is_backdrop_click, key_input};
use crate::meta::read_social_meta;
use crate::platform::BrowserPlatform;
use crate::raster::HtmlToImage;
use crate::surface::{DomStatus, DomSurface, by_id, by_selector};

pub type BrowserController = ShareController<HtmlToImage, BrowserPlatform, DomSurface, DomStatus>;

/// A share controller mounted onto the page.
///
/// Holds the event listeners; dropping it (or calling `free()` from JS)
/// detaches them.
#[wasm_bindgen]
pub struct ShareApp {
    controller: Rc<BrowserController>,
    _listeners: Vec<EventListener>,
}

/// Mount onto the current page.
///
/// `config` is an optional object with any subset of the config fields in
/// camelCase; missing fields take their defaults.
#[wasm_bindgen]
pub fn mount(config: JsValue) -> Result<ShareApp, JsError> {
    let config = parse_config(config)?;
    Ok(ShareApp::mount_with(config)?)
}

pub fn parse_config(config: JsValue) -> Result<ShareConfig, MountError> {
    if config.is_undefined() || config.is_null() {
        return Ok(ShareConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(config)?)
}

impl ShareApp {
    pub fn mount_with(config: ShareConfig) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;

        let surface = DomSurface::locate(window.clone(), &config.ids)?;
        let status = DomStatus::new(by_id(&document, &config.ids.status)?);
        let rasterizer = HtmlToImage::new(surface.content_node().clone());
        let probe = NavigatorProbe::new(window.navigator());
        let platform = BrowserPlatform::new(window.clone());

        let controller = Rc::new(ShareController::new(
            config, rasterizer, platform, surface, probe, status,
        ));
        controller.announce(&read_social_meta(&document));

        let listeners = wire(&controller, &document)?;
        tracing::debug!(listeners = listeners.len(), "share page mounted");

        Ok(Self {
            controller,
            _listeners: listeners,
        })
    }

    pub fn controller(&self) -> &Rc<BrowserController> {
        &self.controller
    }
}

#[wasm_bindgen]
impl ShareApp {
    /// Run a share attempt. Resolves to the final state name.
    pub fn share(&self) -> js_sys::Promise {
        let controller = Rc::clone(&self.controller);
        future_to_promise(async move {
            let state = controller.share().await;
            Ok(JsValue::from_str(state.as_str()))
        })
    }

    #[wasm_bindgen(js_name = copyToClipboard)]
    pub fn copy_to_clipboard(&self) -> js_sys::Promise {
        let controller = Rc::clone(&self.controller);
        future_to_promise(async move {
            let state = controller.copy_to_clipboard().await;
            Ok(JsValue::from_str(state.as_str()))
        })
    }

    /// Resolves to whether the preview opened.
    pub fn preview(&self) -> js_sys::Promise {
        let controller = Rc::clone(&self.controller);
        future_to_promise(async move { Ok(JsValue::from_bool(controller.preview().await)) })
    }

    #[wasm_bindgen(js_name = closePreview)]
    pub fn close_preview(&self) -> bool {
        self.controller.close_preview(DismissSource::CloseButton)
    }

    pub fn download(&self) -> bool {
        self.controller.download()
    }

    pub fn customize(&self) -> bool {
        self.controller.customize()
    }

    /// Ask the environment again what it supports and return the share path
    /// the next attempt would take.
    #[wasm_bindgen(js_name = shareStrategy)]
    pub fn share_strategy(&self) -> String {
        sharecard_core::select_strategy(&self.controller.capabilities()).to_string()
    }
}

/// Attach a click listener to the element with `id`, if the page has one.
fn on_click<F>(document: &Document, id: &str, handler: F) -> Option<EventListener>
where
    F: FnMut(&Event) + 'static,
{
    match document.get_element_by_id(id) {
        Some(element) => Some(EventListener::new(&element, "click", handler)),
        None => {
            tracing::debug!(id, "button not on page, skipping");
            None
        }
    }
}

fn wire(
    controller: &Rc<BrowserController>,
    document: &Document,
) -> Result<Vec<EventListener>, MountError> {
    let ids = controller.config().ids.clone();
    let mut listeners = Vec::new();

    let c = Rc::clone(controller);
    listeners.extend(on_click(document, &ids.share_button, move |_| {
        let c = Rc::clone(&c);
        spawn_local(async move {
            c.share().await;
        });
    }));

    let c = Rc::clone(controller);
    listeners.extend(on_click(document, &ids.copy_button, move |_| {
        let c = Rc::clone(&c);
        spawn_local(async move {
            c.copy_to_clipboard().await;
        });
    }));

    let c = Rc::clone(controller);
    listeners.extend(on_click(document, &ids.preview_button, move |_| {
        let c = Rc::clone(&c);
        spawn_local(async move {
            c.preview().await;
        });
    }));

    let c = Rc::clone(controller);
    listeners.extend(on_click(document, &ids.customize_button, move |_| {
        c.customize();
    }));

    let c = Rc::clone(controller);
    listeners.extend(on_click(document, &ids.download_button, move |_| {
        c.download();
    }));

    let c = Rc::clone(controller);
    listeners.extend(on_click(document, &ids.modal_share_button, move |_| {
        let c = Rc::clone(&c);
        spawn_local(async move {
            c.share_from_preview().await;
        });
    }));

    match by_selector(document, &ids.modal_close_selector) {
        Ok(close) => {
            let c = Rc::clone(controller);
            listeners.push(EventListener::new(&close, "click", move |_| {
                c.close_preview(DismissSource::CloseButton);
            }));
        }
        Err(err) => tracing::debug!(%err, "no modal close control"),
    }

    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let modal = controller.surface().modal().clone();
    let c = Rc::clone(controller);
    listeners.push(EventListener::new(&window, "click", move |event| {
        if is_backdrop_click(event, &modal) {
            c.close_preview(DismissSource::Backdrop);
        }
    }));

    let c = Rc::clone(controller);
    listeners.push(EventListener::new_with_options(
        document,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(shortcut) = Shortcut::from_key(&key_input(key_event)) else {
                return;
            };
            if shortcut.prevents_default() {
                event.prevent_default();
            }
            match shortcut {
                Shortcut::ClosePreview => {
                    c.close_preview(DismissSource::Escape);
                }
                Shortcut::Share => {
                    let c = Rc::clone(&c);
                    spawn_local(async move {
                        c.share().await;
                    });
                }
                Shortcut::Preview => {
                    let c = Rc::clone(&c);
                    spawn_local(async move {
                        c.preview().await;
                    });
                }
            }
        },
    ));

    Ok(listeners)
}
