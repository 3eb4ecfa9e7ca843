//! Capability probing.
//!
//! The controller never asks the browser directly what it can do; it asks a
//! `CapabilityProbe`. The user-agent match is one implementation among others
//! (the browser crate layers a `navigator` probe on top of it), and tests use
//! `StaticProbe`.

/// Device names whose presence in a user agent marks it as mobile.
pub const MOBILE_DEVICE_NAMES: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Snapshot of what the environment offers for one share attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapabilityFlags {
    /// `navigator.share` and `navigator.canShare` are both present.
    pub native_share: bool,
    /// The async Clipboard API can write images.
    pub clipboard_write: bool,
    pub mobile: bool,
}

/// Environment probe. Implementations must be side-effect free.
pub trait CapabilityProbe {
    fn has_native_share(&self) -> bool;

    fn has_clipboard_write(&self) -> bool;

    fn is_mobile(&self) -> bool;

    fn flags(&self) -> CapabilityFlags {
        CapabilityFlags {
            native_share: self.has_native_share(),
            clipboard_write: self.has_clipboard_write(),
            mobile: self.is_mobile(),
        }
    }
}

/// Mobile detection by user-agent string.
///
/// Knows nothing about share or clipboard support and reports both absent.
#[derive(Debug, Clone, Default)]
pub struct UserAgentProbe {
    user_agent: String,
}

impl UserAgentProbe {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Case-insensitive match of `user_agent` against [`MOBILE_DEVICE_NAMES`].
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_DEVICE_NAMES.iter().any(|name| ua.contains(name))
}

impl CapabilityProbe for UserAgentProbe {
    fn has_native_share(&self) -> bool {
        false
    }

    fn has_clipboard_write(&self) -> bool {
        false
    }

    fn is_mobile(&self) -> bool {
        is_mobile_user_agent(&self.user_agent)
    }
}

/// Fixed capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticProbe(pub CapabilityFlags);

impl CapabilityProbe for StaticProbe {
    fn has_native_share(&self) -> bool {
        self.0.native_share
    }

    fn has_clipboard_write(&self) -> bool {
        self.0.clipboard_write
    }

    fn is_mobile(&self) -> bool {
        self.0.mobile
    }
}
