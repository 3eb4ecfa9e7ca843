//! Feature detection against the live `navigator`.

use js_sys::{Function, Reflect};
use sharecard_core::{CapabilityProbe, is_mobile_user_agent};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Navigator;

/// Probes `navigator` on every call; nothing is cached.
pub struct NavigatorProbe {
    navigator: Navigator,
}

impl NavigatorProbe {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

/// `target[name]` when it is a function.
pub(crate) fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

impl CapabilityProbe for NavigatorProbe {
    fn has_native_share(&self) -> bool {
        method(&self.navigator, "share").is_some() && method(&self.navigator, "canShare").is_some()
    }

    fn has_clipboard_write(&self) -> bool {
        let clipboard = match Reflect::get(&self.navigator, &JsValue::from_str("clipboard")) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return false,
        };
        method(&clipboard, "write").is_some()
            && Reflect::has(&js_sys::global(), &JsValue::from_str("ClipboardItem")).unwrap_or(false)
    }

    fn is_mobile(&self) -> bool {
        self.navigator
            .user_agent()
            .map(|ua| is_mobile_user_agent(&ua))
            .unwrap_or(false)
    }
}
