//! Rasterizer abstraction and the loading indicator guard.

use crate::cache::png_data_url;
use crate::config::RenderConfig;
use crate::error::RenderError;

/// Something that can turn the content node into an image.
///
/// The browser implementation wraps the HTML-to-image library; the node is
/// owned by the implementation, so only the options travel per call.
#[allow(async_fn_in_trait)]
pub trait Rasterizer {
    /// Render the content to PNG bytes.
    async fn render_png(&self, config: &RenderConfig) -> Result<Vec<u8>, RenderError>;

    /// Render the content to a `data:image/png;base64,...` URL.
    async fn render_data_url(&self, config: &RenderConfig) -> Result<String, RenderError> {
        let png = self.render_png(config).await?;
        Ok(png_data_url(&png))
    }
}

/// A busy indicator shown while rendering.
pub trait LoadingIndicator {
    fn set_loading(&self, loading: bool);
}

/// Shows the loading indicator for as long as it is alive.
///
/// Dropping the guard hides the indicator, so it clears on every exit path of
/// the render, including `?` returns.
pub struct LoadingGuard<'a, L: LoadingIndicator + ?Sized> {
    indicator: &'a L,
}

impl<'a, L: LoadingIndicator + ?Sized> LoadingGuard<'a, L> {
    pub fn new(indicator: &'a L) -> Self {
        indicator.set_loading(true);
        Self { indicator }
    }
}

impl<L: LoadingIndicator + ?Sized> Drop for LoadingGuard<'_, L> {
    fn drop(&mut self) {
        self.indicator.set_loading(false);
    }
}
