//! Chat deep links and download filenames.
//!
//! Neither link form can carry an attachment; the image is always attached by
//! the user after the chat opens.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `text` the way `encodeURIComponent` does.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Deep link into the installed app: `<scheme>://send?text=<encoded>`.
pub fn app_link(scheme: &str, message: &str) -> String {
    format!("{}://send?text={}", scheme, encode_component(message))
}

/// Text-only compose link served over https: `https://<host>/send?text=<encoded>`.
pub fn compose_link(host: &str, message: &str) -> String {
    format!("https://{}/send?text={}", host, encode_component(message))
}

/// `share-image-<unix millis>.png`
pub fn download_filename(now_millis: u64) -> String {
    format!("share-image-{now_millis}.png")
}
