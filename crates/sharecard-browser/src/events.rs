//! Translating DOM events into controller inputs.

use sharecard_core::KeyInput;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, Node};

pub fn key_input(event: &KeyboardEvent) -> KeyInput {
    KeyInput {
        key: event.key(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
    }
}

/// A click landed on the modal's backdrop itself, not on its content.
pub fn is_backdrop_click(event: &Event, modal: &Node) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|node| node.is_same_node(Some(modal)))
}
