//! Preview modal state.
//!
//! Two states, two ways in, three ways out. All exits land in `Hidden` and
//! closing something already hidden changes nothing.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Open,
}

/// What asked the modal to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissSource {
    CloseButton,
    /// A click whose target is the backdrop itself, not the dialog content.
    Backdrop,
    Escape,
    /// The modal's own share button closes it before sharing.
    ShareButton,
}

#[derive(Debug, Clone, Default)]
pub struct PreviewModal {
    state: ModalState,
}

impl PreviewModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// Returns true if the modal was hidden before.
    pub fn open(&mut self) -> bool {
        let changed = self.state == ModalState::Hidden;
        self.state = ModalState::Open;
        changed
    }

    /// Returns true if the modal was open before.
    pub fn close(&mut self, source: DismissSource) -> bool {
        if self.state == ModalState::Hidden {
            return false;
        }
        tracing::trace!(?source, "closing preview");
        self.state = ModalState::Hidden;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_dismissals_converge() {
        for source in [
            DismissSource::CloseButton,
            DismissSource::Backdrop,
            DismissSource::Escape,
            DismissSource::ShareButton,
        ] {
            let mut modal = PreviewModal::new();
            modal.open();
            assert!(modal.close(source));
            assert_eq!(modal.state(), ModalState::Hidden);
        }
    }

    #[test]
    fn test_close_when_hidden_is_noop() {
        let mut modal = PreviewModal::new();
        assert!(!modal.close(DismissSource::Escape));
        assert!(!modal.close(DismissSource::CloseButton));
        assert_eq!(modal.state(), ModalState::Hidden);
    }

    #[test]
    fn test_open_idempotent() {
        let mut modal = PreviewModal::new();
        assert!(modal.open());
        assert!(!modal.open());
        assert!(modal.is_open());
    }
}
