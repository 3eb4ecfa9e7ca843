//! Platform abstraction traits for share actions.
//!
//! These traits define the interface between the share controller and the
//! environment it runs in. `SharePlatform` covers the outward-facing APIs
//! (share sheet, clipboard, opening links, downloads, timers); `PageSurface`
//! covers the page itself (dialogs, the preview modal, the content text).

use crate::content::ShareableContent;
use crate::error::ShareError;
use crate::meta::SocialMeta;
use crate::render::LoadingIndicator;

/// Payload handed to the native share sheet.
#[derive(Debug, Clone, Copy)]
pub struct SharePayload<'a> {
    pub title: &'a str,
    pub text: &'a str,
    pub filename: &'a str,
    pub png: &'a [u8],
}

/// How a platform call that the user can back out of ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformReply {
    Completed,
    /// The user dismissed the dialog. Distinct from failure.
    Cancelled,
}

/// Where to open a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenIn {
    /// A new browsing context (tab/window).
    NewContext,
    /// Navigate the current page; used for app URL schemes.
    CurrentContext,
}

/// Outward platform APIs.
#[allow(async_fn_in_trait)]
pub trait SharePlatform {
    /// Whether the share sheet accepts this payload (`navigator.canShare`).
    fn can_share(&self, payload: &SharePayload<'_>) -> bool;

    /// Show the native share sheet.
    async fn share(&self, payload: &SharePayload<'_>) -> Result<PlatformReply, ShareError>;

    /// Put a PNG on the system clipboard as `image/png`.
    async fn write_clipboard_image(&self, png: &[u8]) -> Result<(), ShareError>;

    fn open_url(&self, url: &str, target: OpenIn) -> Result<(), ShareError>;

    /// Trigger a file download of `href` under `filename`.
    fn download(&self, filename: &str, href: &str) -> Result<(), ShareError>;

    async fn sleep_ms(&self, ms: u32);

    /// Wall clock in milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64 {
        web_time::SystemTime::now()
            .duration_since(web_time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }
}

/// The page the controller drives.
pub trait PageSurface: LoadingIndicator {
    /// Read the content text currently in the page.
    fn read_content(&self) -> ShareableContent;

    /// Blocking yes/no question (`window.confirm`).
    fn confirm(&self, message: &str) -> bool;

    /// Blocking text question (`window.prompt`). `None` when cancelled.
    fn prompt(&self, message: &str, default: &str) -> Option<String>;

    /// Write the content text back into the rendered node.
    fn set_content(&self, content: &ShareableContent);

    /// Set the displayed timestamp to now.
    fn refresh_timestamp(&self);

    /// Replace the preview with an image of `data_url`.
    fn show_preview_image(&self, data_url: &str);

    fn set_modal_visible(&self, visible: bool);

    /// Display the page's social-preview metadata.
    fn show_meta(&self, meta: &SocialMeta);
}
