//! Browser layer for the sharecard share page.
//!
//! This crate binds `sharecard-core` to a real page. It assumes a
//! `wasm32-unknown-unknown` target environment and a host page that loads
//! the `html-to-image` library.
//!
//! # Architecture
//!
//! - `raster`: content node to PNG through `htmlToImage`
//! - `capability`: `navigator` feature detection
//! - `platform`: share sheet, clipboard, window navigation, downloads
//! - `surface`: page text, dialogs, preview modal, status line
//! - `meta`: `og:`/`twitter:` tags from the document head
//! - `app`: `mount()` and the listeners tying buttons and keys to the controller
//!
//! # Re-exports
//!
//! This crate re-exports `sharecard-core` for convenience.

pub use sharecard_core;

pub mod app;
pub mod capability;
pub mod error;
pub mod events;
pub mod meta;
pub mod platform;
pub mod raster;
pub mod surface;

pub use app::{BrowserController, ShareApp, mount, parse_config};
pub use capability::NavigatorProbe;
pub use error::MountError;
pub use events::{is_backdrop_click, key_input};
pub use meta::read_social_meta;
pub use platform::BrowserPlatform;
pub use raster::HtmlToImage;
pub use surface::{DomStatus, DomSurface};

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    init_tracing();
}

fn init_tracing() {
    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // Ignore the error if the embedding page already installed a subscriber.
    let _ = set_global_default(Registry::default().with(wasm_layer));
}
