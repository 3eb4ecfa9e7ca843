//! Controller configuration.
//!
//! Defaults reproduce the stock share page. The browser entry point accepts an
//! optional JS object with any subset of these fields (camelCase keys).

use serde::{Deserialize, Serialize};

/// Options passed through to the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Encoder fidelity, 0 to 1.
    pub quality: f64,
    /// Output scale factor (2 for retina-sharp output).
    pub pixel_ratio: f64,
    /// Defeat caching of embedded sub-resources.
    pub cache_bust: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            quality: 0.95,
            pixel_ratio: 2.0,
            cache_bust: true,
        }
    }
}

impl RenderConfig {
    /// Clamp quality into `0..=1` and replace unusable pixel ratios with 1.
    pub fn sanitized(self) -> Self {
        let quality = if self.quality.is_nan() {
            Self::default().quality
        } else {
            self.quality.clamp(0.0, 1.0)
        };
        let pixel_ratio = if self.pixel_ratio.is_finite() && self.pixel_ratio > 0.0 {
            self.pixel_ratio
        } else {
            1.0
        };
        Self {
            quality,
            pixel_ratio,
            cache_bust: self.cache_bust,
        }
    }
}

/// Element ids and selectors the browser layer binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageIds {
    pub content: String,
    pub header_selector: String,
    pub body_selector: String,
    pub share_button: String,
    pub copy_button: String,
    pub preview_button: String,
    pub customize_button: String,
    pub download_button: String,
    pub modal: String,
    pub modal_close_selector: String,
    pub modal_share_button: String,
    pub preview_container: String,
    pub loading: String,
    pub status: String,
    pub timestamp: String,
    pub meta_info: String,
}

impl Default for PageIds {
    fn default() -> Self {
        Self {
            content: "content-to-share".into(),
            header_selector: ".header h2".into(),
            body_selector: ".body > p".into(),
            share_button: "share-whatsapp-btn".into(),
            copy_button: "copy-clipboard-btn".into(),
            preview_button: "preview-btn".into(),
            customize_button: "customize-btn".into(),
            download_button: "download-btn".into(),
            modal: "preview-modal".into(),
            modal_close_selector: ".close".into(),
            modal_share_button: "modal-share-btn".into(),
            preview_container: "preview-container".into(),
            loading: "loading".into(),
            status: "status-message".into(),
            timestamp: "timestamp".into(),
            meta_info: "meta-info".into(),
        }
    }
}

/// Everything the controller needs to know that isn't a platform handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShareConfig {
    pub render: RenderConfig,
    /// Title of the native share sheet payload.
    pub share_title: String,
    /// Text of the native share sheet payload.
    pub share_text: String,
    /// Pre-filled chat message for the deep link and compose link.
    pub message: String,
    /// Filename attached to the native share payload.
    pub share_filename: String,
    /// Custom URL scheme of the installed chat app.
    pub app_scheme: String,
    /// Host serving the text-only compose link.
    pub compose_host: String,
    /// Web client opened after a clipboard copy.
    pub web_client_url: String,
    /// Delay between the download and the app deep link on mobile.
    pub mobile_open_delay_ms: u32,
    /// How long a status message stays visible.
    pub status_duration_ms: u32,
    /// Ask before falling back to compose link + download on desktop.
    pub confirm_manual_fallback: bool,
    pub ids: PageIds,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            share_title: "Check out this awesome content!".into(),
            share_text: "I created this with my awesome app! 🎨".into(),
            message: "Check out this awesome content I created! 🎨\n\n\
                      Please download the image below and share it manually."
                .into(),
            share_filename: "share-image.png".into(),
            app_scheme: "whatsapp".into(),
            compose_host: "api.whatsapp.com".into(),
            web_client_url: "https://web.whatsapp.com/".into(),
            mobile_open_delay_ms: 1500,
            status_duration_ms: 3000,
            confirm_manual_fallback: true,
            ids: PageIds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_clamps_quality() {
        let cfg = RenderConfig {
            quality: 1.7,
            pixel_ratio: 2.0,
            cache_bust: false,
        }
        .sanitized();
        assert_eq!(cfg.quality, 1.0);
        assert_eq!(cfg.pixel_ratio, 2.0);
        assert!(!cfg.cache_bust);
    }

    #[test]
    fn test_sanitize_bad_pixel_ratio() {
        for ratio in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let cfg = RenderConfig {
                pixel_ratio: ratio,
                ..RenderConfig::default()
            }
            .sanitized();
            assert_eq!(cfg.pixel_ratio, 1.0);
        }
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg: ShareConfig = serde_json::from_str(
            r#"{"mobileOpenDelayMs": 250, "render": {"pixelRatio": 3}, "ids": {"modal": "dlg"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.mobile_open_delay_ms, 250);
        assert_eq!(cfg.render.pixel_ratio, 3.0);
        assert_eq!(cfg.render.quality, 0.95);
        assert_eq!(cfg.ids.modal, "dlg");
        assert_eq!(cfg.ids.content, "content-to-share");
        assert_eq!(cfg.status_duration_ms, 3000);
    }

    #[test]
    fn test_render_config_serializes_camel_case() {
        let value = serde_json::to_value(RenderConfig::default()).unwrap();
        assert_eq!(value["pixelRatio"], 2.0);
        assert_eq!(value["cacheBust"], true);
    }
}
