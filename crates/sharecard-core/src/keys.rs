//! Keyboard shortcuts.

/// The parts of a keydown event the shortcuts care about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInput {
    /// `KeyboardEvent.key`
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
        }
    }

    pub fn ctrl(key: impl Into<String>) -> Self {
        Self {
            ctrl: true,
            ..Self::new(key)
        }
    }

    pub fn meta(key: impl Into<String>) -> Self {
        Self {
            meta: true,
            ..Self::new(key)
        }
    }

    /// Ctrl on most platforms, Cmd on Mac. Either counts.
    fn primary(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Escape: close the preview.
    ClosePreview,
    /// Ctrl/Cmd+S
    Share,
    /// Ctrl/Cmd+P
    Preview,
}

impl Shortcut {
    pub fn from_key(input: &KeyInput) -> Option<Self> {
        match input.key.as_str() {
            "Escape" => Some(Shortcut::ClosePreview),
            "s" if input.primary() => Some(Shortcut::Share),
            "p" if input.primary() => Some(Shortcut::Preview),
            _ => None,
        }
    }

    /// Whether the browser's own binding (save page, print) must be suppressed.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Shortcut::ClosePreview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            Shortcut::from_key(&KeyInput::new("Escape")),
            Some(Shortcut::ClosePreview)
        );
    }

    #[test]
    fn test_primary_modifier_shortcuts() {
        assert_eq!(
            Shortcut::from_key(&KeyInput::ctrl("s")),
            Some(Shortcut::Share)
        );
        assert_eq!(
            Shortcut::from_key(&KeyInput::meta("s")),
            Some(Shortcut::Share)
        );
        assert_eq!(
            Shortcut::from_key(&KeyInput::ctrl("p")),
            Some(Shortcut::Preview)
        );
    }

    #[test]
    fn test_plain_letters_ignored() {
        assert_eq!(Shortcut::from_key(&KeyInput::new("s")), None);
        assert_eq!(Shortcut::from_key(&KeyInput::new("p")), None);
        assert_eq!(Shortcut::from_key(&KeyInput::ctrl("x")), None);
    }

    #[test]
    fn test_prevent_default() {
        assert!(Shortcut::Share.prevents_default());
        assert!(Shortcut::Preview.prevents_default());
        assert!(!Shortcut::ClosePreview.prevents_default());
    }
}
