//! sharecard-core: the share controller without any browser dependencies.
//!
//! This crate provides:
//! - `ShareController` - one page session's state and actions
//! - `CapabilityProbe` - environment probing, with a user-agent default
//! - `select_strategy` - the capability to share-path decision table
//! - `BitmapCache` - two-slot render cache guarded by a content version
//! - `StatusReporter`, `PreviewModal`, `Shortcut` - the small UI state machines
//!
//! Everything touching the DOM or `navigator` lives behind the traits in
//! [`platform`] and [`render`], so the whole controller runs natively in tests.

pub mod cache;
pub mod capability;
pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod keys;
pub mod links;
pub mod meta;
pub mod modal;
pub mod platform;
pub mod render;
pub mod status;
pub mod strategy;

pub use cache::{Bitmap, BitmapCache, RenderTicket, png_data_url};
pub use capability::{
    CapabilityFlags, CapabilityProbe, MOBILE_DEVICE_NAMES, StaticProbe, UserAgentProbe,
    is_mobile_user_agent,
};
pub use config::{PageIds, RenderConfig, ShareConfig};
pub use content::{ContentEdit, ShareableContent};
pub use controller::ShareController;
pub use error::{ControllerError, RenderError, ShareError};
pub use keys::{KeyInput, Shortcut};
pub use links::{app_link, compose_link, download_filename, encode_component};
pub use meta::{MetaTag, SocialMeta};
pub use modal::{DismissSource, ModalState, PreviewModal};
pub use platform::{OpenIn, PageSurface, PlatformReply, SharePayload, SharePlatform};
pub use render::{LoadingGuard, LoadingIndicator, Rasterizer};
pub use status::{Severity, StatusDisplay, StatusReporter, StatusTicket};
pub use strategy::{ShareFlow, ShareState, ShareStrategy, select_strategy};
