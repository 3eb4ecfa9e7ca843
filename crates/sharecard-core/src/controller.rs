//! The share controller.
//!
//! One `ShareController` exists per page session. It owns the content text,
//! the bitmap cache, the preview modal and the status reporter, and talks to
//! the environment only through the platform traits. Every public action
//! catches its own failures, logs them and turns them into a status message;
//! none of them can leave the page unusable.
//!
//! Actions take `&self` so that overlapping actions (a second click while the
//! first is still rendering) are possible. No `RefCell` borrow is ever held
//! across an `.await`; the cache version guard sorts out the overlap.

use std::cell::RefCell;

use crate::cache::{Bitmap, BitmapCache};
use crate::capability::{CapabilityFlags, CapabilityProbe};
use crate::config::ShareConfig;
use crate::content::{ContentEdit, ShareableContent};
use crate::error::{ControllerError, RenderError, ShareError};
use crate::links::{app_link, compose_link, download_filename};
use crate::meta::SocialMeta;
use crate::modal::{DismissSource, PreviewModal};
use crate::platform::{OpenIn, PageSurface, PlatformReply, SharePayload, SharePlatform};
use crate::render::{LoadingGuard, Rasterizer};
use crate::status::{StatusDisplay, StatusReporter};
use crate::strategy::{ShareFlow, ShareState, ShareStrategy, select_strategy};

/// User-facing texts.
pub mod messages {
    pub const RENDER_FAILED: &str = "Failed to generate image. Please try again.";
    pub const PREVIEW_FAILED: &str = "Failed to generate preview";
    pub const SHARE_FAILED: &str = "Failed to share. Please try the preview and download option.";
    pub const SHARED: &str = "Image shared successfully! 🎉";
    pub const COPIED: &str = "Image copied to clipboard! You can paste it in WhatsApp now. 📋";
    pub const COPY_FAILED: &str = "Could not copy to clipboard. Please use download option.";
    pub const MANUAL_SHARE: &str = "Image downloaded! Please share manually on WhatsApp.";
    pub const SAVED_FOR_APP: &str = "Image downloaded! Attach it in WhatsApp once it opens.";
    pub const DOWNLOADED: &str = "Image downloaded successfully!";
    pub const DOWNLOAD_FAILED: &str = "Download failed. Please try again.";
    pub const GENERATE_FIRST: &str = "Please generate image first";
    pub const CONTENT_UPDATED: &str = "Content updated!";
    pub const CONFIRM_MANUAL: &str = "Direct sharing requires a mobile device.\n\n\
                                      Click OK to download the image and open WhatsApp.\n\
                                      Click Cancel to see preview options.";
    pub const HEADER_PROMPT: &str = "Enter new header text:";
    pub const BODY_PROMPT: &str = "Enter new body text:";
}

use messages::*;

pub struct ShareController<R, P, S, D> {
    config: ShareConfig,
    rasterizer: R,
    platform: P,
    surface: S,
    probe: Box<dyn CapabilityProbe>,
    status: StatusReporter<D>,
    content: RefCell<ShareableContent>,
    cache: RefCell<BitmapCache>,
    modal: RefCell<PreviewModal>,
}

impl<R, P, S, D> ShareController<R, P, S, D>
where
    R: Rasterizer,
    P: SharePlatform,
    S: PageSurface,
    D: StatusDisplay + 'static,
{
    pub fn new(
        mut config: ShareConfig,
        rasterizer: R,
        platform: P,
        surface: S,
        probe: impl CapabilityProbe + 'static,
        display: D,
    ) -> Self {
        config.render = config.render.sanitized();
        let content = surface.read_content();
        let status = StatusReporter::new(display, config.status_duration_ms);
        surface.refresh_timestamp();
        Self {
            config,
            rasterizer,
            platform,
            surface,
            probe: Box::new(probe),
            status,
            content: RefCell::new(content),
            cache: RefCell::new(BitmapCache::new()),
            modal: RefCell::new(PreviewModal::new()),
        }
    }

    // === Accessors ===

    pub fn config(&self) -> &ShareConfig {
        &self.config
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn status(&self) -> &StatusReporter<D> {
        &self.status
    }

    pub fn content(&self) -> ShareableContent {
        self.content.borrow().clone()
    }

    pub fn cached_bitmap(&self) -> Option<Bitmap> {
        self.cache.borrow().get()
    }

    pub fn content_version(&self) -> u64 {
        self.cache.borrow().version()
    }

    pub fn is_preview_open(&self) -> bool {
        self.modal.borrow().is_open()
    }

    /// Probe the environment. Never cached: every share attempt re-checks.
    pub fn capabilities(&self) -> CapabilityFlags {
        self.probe.flags()
    }

    /// Log what this environment supports and show the page's link preview data.
    pub fn announce(&self, meta: &SocialMeta) {
        let flags = self.capabilities();
        tracing::info!(
            native_share = flags.native_share,
            clipboard = flags.clipboard_write,
            mobile = flags.mobile,
            strategy = %select_strategy(&flags),
            "share controller ready"
        );
        if !meta.is_empty() {
            self.surface.show_meta(meta);
        }
    }

    // === Rendering ===

    /// Return the cached bitmap, rendering it first if the cache is empty.
    ///
    /// A render started before a content edit is handed back to its caller but
    /// not cached.
    async fn ensure_bitmap(&self) -> Result<Bitmap, RenderError> {
        if let Some(bitmap) = self.cache.borrow().get() {
            tracing::trace!("reusing cached bitmap");
            return Ok(bitmap);
        }

        let ticket = self.cache.borrow().ticket();
        let png = {
            let _loading = LoadingGuard::new(&self.surface);
            self.rasterizer.render_png(&self.config.render).await?
        };
        if png.is_empty() {
            return Err(RenderError::Empty);
        }

        let bitmap = Bitmap::from_png(png);
        if self.cache.borrow_mut().commit(ticket, &bitmap) {
            tracing::debug!(
                version = ticket.version(),
                bytes = bitmap.png().len(),
                "rendered bitmap"
            );
        } else {
            tracing::debug!(
                version = ticket.version(),
                "content changed during render, result not cached"
            );
        }
        Ok(bitmap)
    }

    // === Share ===

    /// Share the content through the best channel available.
    pub async fn share(&self) -> ShareState {
        self.surface.refresh_timestamp();

        let flags = self.capabilities();
        let strategy = select_strategy(&flags);
        tracing::debug!(?flags, %strategy, "share requested");

        let mut flow = ShareFlow::new();
        flow.set_strategy(strategy);
        flow.advance(ShareState::Rendering);

        let result: Result<ShareState, ControllerError> = async {
            let bitmap = self.ensure_bitmap().await?;
            flow.advance(ShareState::Dispatching);
            let state = match strategy {
                ShareStrategy::DeepLinkAndDownload => self.deep_link_and_download(&bitmap).await?,
                ShareStrategy::NativeShare => self.native_share(&bitmap).await?,
                ShareStrategy::ClipboardAndWebChat => self.clipboard_and_web_chat(&bitmap).await?,
                ShareStrategy::ManualDownload => self.manual_download(&bitmap)?,
            };
            Ok::<_, ControllerError>(state)
        }
        .await;

        match result {
            Ok(state) => {
                tracing::info!(%strategy, ?state, "share finished");
                flow.finish(state)
            }
            Err(ControllerError::Render(err)) => {
                tracing::error!(%err, "failed to render content for sharing");
                self.status.error(RENDER_FAILED);
                flow.finish(ShareState::Failed)
            }
            Err(ControllerError::Share(err)) => {
                tracing::error!(%err, %strategy, "share failed");
                self.status.error(SHARE_FAILED);
                flow.finish(ShareState::Failed)
            }
        }
    }

    async fn deep_link_and_download(&self, bitmap: &Bitmap) -> Result<ShareState, ShareError> {
        self.save(bitmap)?;
        self.status.success(SAVED_FOR_APP);

        self.platform.sleep_ms(self.config.mobile_open_delay_ms).await;

        let url = app_link(&self.config.app_scheme, &self.config.message);
        self.platform.open_url(&url, OpenIn::CurrentContext)?;
        Ok(ShareState::Succeeded)
    }

    async fn native_share(&self, bitmap: &Bitmap) -> Result<ShareState, ShareError> {
        let payload = SharePayload {
            title: &self.config.share_title,
            text: &self.config.share_text,
            filename: &self.config.share_filename,
            png: bitmap.png(),
        };

        let reply = if self.platform.can_share(&payload) {
            self.platform.share(&payload).await
        } else {
            Err(ShareError::Unsupported("sharing this image"))
        };

        match reply {
            Ok(PlatformReply::Completed) => {
                self.status.success(SHARED);
                Ok(ShareState::Succeeded)
            }
            Ok(PlatformReply::Cancelled) => {
                tracing::info!("share cancelled by user");
                Ok(ShareState::Cancelled)
            }
            Err(err) => {
                tracing::warn!(%err, "native share failed, falling back to compose link");
                self.compose_and_download(bitmap)
            }
        }
    }

    async fn clipboard_and_web_chat(&self, bitmap: &Bitmap) -> Result<ShareState, ShareError> {
        self.platform.write_clipboard_image(bitmap.png()).await?;
        self.status.success(COPIED);
        self.platform
            .open_url(&self.config.web_client_url, OpenIn::NewContext)?;
        Ok(ShareState::Succeeded)
    }

    fn manual_download(&self, bitmap: &Bitmap) -> Result<ShareState, ShareError> {
        if self.config.confirm_manual_fallback && !self.surface.confirm(CONFIRM_MANUAL) {
            tracing::debug!("manual fallback declined, opening preview");
            self.show_preview(bitmap);
            return Ok(ShareState::Cancelled);
        }
        self.compose_and_download(bitmap)
    }

    fn compose_and_download(&self, bitmap: &Bitmap) -> Result<ShareState, ShareError> {
        let url = compose_link(&self.config.compose_host, &self.config.message);
        self.platform.open_url(&url, OpenIn::NewContext)?;
        self.save(bitmap)?;
        self.status.success(MANUAL_SHARE);
        Ok(ShareState::Succeeded)
    }

    fn save(&self, bitmap: &Bitmap) -> Result<(), ShareError> {
        let filename = download_filename(self.platform.now_millis());
        self.platform.download(&filename, bitmap.data_url())?;
        tracing::info!(%filename, "image downloaded");
        Ok(())
    }

    // === Copy & Share ===

    /// Copy the image to the clipboard and open the web chat, whatever the
    /// share selector would have picked.
    pub async fn copy_to_clipboard(&self) -> ShareState {
        let mut flow = ShareFlow::new();
        flow.set_strategy(ShareStrategy::ClipboardAndWebChat);
        flow.advance(ShareState::Rendering);

        if !self.capabilities().clipboard_write {
            tracing::warn!("clipboard image write not supported");
            self.status.error(COPY_FAILED);
            return flow.finish(ShareState::Failed);
        }

        let bitmap = match self.ensure_bitmap().await {
            Ok(bitmap) => bitmap,
            Err(err) => {
                tracing::error!(%err, "failed to render content for clipboard");
                self.status.error(RENDER_FAILED);
                return flow.finish(ShareState::Failed);
            }
        };

        flow.advance(ShareState::Dispatching);
        match self.clipboard_and_web_chat(&bitmap).await {
            Ok(state) => flow.finish(state),
            Err(err) => {
                tracing::error!(%err, "failed to copy to clipboard");
                self.status.error(COPY_FAILED);
                flow.finish(ShareState::Failed)
            }
        }
    }

    // === Preview ===

    /// Render if needed and open the preview modal. Returns true if it opened.
    pub async fn preview(&self) -> bool {
        match self.ensure_bitmap().await {
            Ok(bitmap) => {
                self.show_preview(&bitmap);
                true
            }
            Err(err) => {
                tracing::error!(%err, "failed to render preview");
                self.status.error(PREVIEW_FAILED);
                false
            }
        }
    }

    fn show_preview(&self, bitmap: &Bitmap) {
        self.surface.show_preview_image(bitmap.data_url());
        if self.modal.borrow_mut().open() {
            self.surface.set_modal_visible(true);
        }
    }

    /// Close the preview. A no-op returning false when it is already hidden.
    pub fn close_preview(&self, source: DismissSource) -> bool {
        let closed = self.modal.borrow_mut().close(source);
        if closed {
            self.surface.set_modal_visible(false);
        }
        closed
    }

    /// The preview's own share button: close the modal, then share.
    pub async fn share_from_preview(&self) -> ShareState {
        self.close_preview(DismissSource::ShareButton);
        self.share().await
    }

    // === Download ===

    /// Download the cached image. Never renders.
    pub fn download(&self) -> bool {
        let Some(data_url) = self.cache.borrow().data_url() else {
            self.status.error(GENERATE_FIRST);
            return false;
        };

        let filename = download_filename(self.platform.now_millis());
        match self.platform.download(&filename, &data_url) {
            Ok(()) => {
                tracing::info!(%filename, "image downloaded");
                self.status.success(DOWNLOADED);
                true
            }
            Err(err) => {
                tracing::error!(%err, "download failed");
                self.status.error(DOWNLOAD_FAILED);
                false
            }
        }
    }

    // === Customize ===

    /// Prompt for new header and body text. Returns true if anything changed.
    ///
    /// Any accepted edit empties the bitmap cache.
    pub fn customize(&self) -> bool {
        let current = self.content();
        let edit = ContentEdit {
            header: self.surface.prompt(HEADER_PROMPT, &current.header),
            body: self.surface.prompt(BODY_PROMPT, &current.body),
        };

        if !self.content.borrow_mut().apply(edit) {
            tracing::debug!("customize left content unchanged");
            return false;
        }

        self.cache.borrow_mut().invalidate();
        self.surface.set_content(&self.content.borrow());
        self.surface.refresh_timestamp();
        tracing::debug!(version = self.content_version(), "content edited");
        self.status.success(CONTENT_UPDATED);
        true
    }
}
