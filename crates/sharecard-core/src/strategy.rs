//! Share path selection and the per-action share state machine.

use crate::capability::CapabilityFlags;

/// Which channel a share action goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareStrategy {
    /// Download the image, then open the installed chat app by URL scheme.
    DeepLinkAndDownload,
    /// Native share sheet with the image attached.
    NativeShare,
    /// Copy the image to the clipboard, then open the web chat client.
    ClipboardAndWebChat,
    /// Text-only compose link plus a file download.
    ManualDownload,
}

impl ShareStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareStrategy::DeepLinkAndDownload => "deep-link+download",
            ShareStrategy::NativeShare => "native-share",
            ShareStrategy::ClipboardAndWebChat => "clipboard+web-chat",
            ShareStrategy::ManualDownload => "manual-download",
        }
    }
}

impl std::fmt::Display for ShareStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the share path for the given capabilities, in priority order.
pub fn select_strategy(flags: &CapabilityFlags) -> ShareStrategy {
    if flags.mobile {
        ShareStrategy::DeepLinkAndDownload
    } else if flags.native_share {
        ShareStrategy::NativeShare
    } else if flags.clipboard_write {
        ShareStrategy::ClipboardAndWebChat
    } else {
        ShareStrategy::ManualDownload
    }
}

/// State of a single share action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareState {
    Idle,
    Rendering,
    Dispatching,
    Succeeded,
    /// The user dismissed the share sheet or declined the fallback. Not an error.
    Cancelled,
    Failed,
}

impl ShareState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareState::Idle => "idle",
            ShareState::Rendering => "rendering",
            ShareState::Dispatching => "dispatching",
            ShareState::Succeeded => "succeeded",
            ShareState::Cancelled => "cancelled",
            ShareState::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ShareState::Succeeded | ShareState::Cancelled | ShareState::Failed
        )
    }

    fn can_move_to(&self, next: ShareState) -> bool {
        use ShareState::*;
        match (self, next) {
            (Idle, Rendering) => true,
            (Rendering, Dispatching) => true,
            // Rendering may fail, or a cached bitmap may be declined before dispatch.
            (Rendering, Failed | Cancelled) => true,
            (Dispatching, Succeeded | Cancelled | Failed) => true,
            _ => false,
        }
    }
}

/// Tracks one action through `Idle → Rendering → Dispatching → terminal`.
///
/// Illegal transitions are ignored and logged; once terminal the flow is frozen.
#[derive(Debug, Clone)]
pub struct ShareFlow {
    state: ShareState,
    strategy: Option<ShareStrategy>,
}

impl Default for ShareFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ShareFlow {
    pub fn new() -> Self {
        Self {
            state: ShareState::Idle,
            strategy: None,
        }
    }

    pub fn state(&self) -> ShareState {
        self.state
    }

    pub fn strategy(&self) -> Option<ShareStrategy> {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: ShareStrategy) {
        self.strategy = Some(strategy);
    }

    /// Move to `next`. Returns false (and stays put) if the move is illegal.
    pub fn advance(&mut self, next: ShareState) -> bool {
        if self.state.can_move_to(next) {
            tracing::trace!(from = ?self.state, to = ?next, "share flow transition");
            self.state = next;
            true
        } else {
            tracing::warn!(from = ?self.state, to = ?next, "illegal share flow transition");
            false
        }
    }

    /// Move to a terminal state and return it.
    pub fn finish(&mut self, outcome: ShareState) -> ShareState {
        debug_assert!(outcome.is_terminal());
        self.advance(outcome);
        self.state
    }
}
