//! Transient status notifications.
//!
//! Every message gets a ticket. Its dismiss timer only hides the display if
//! no newer message arrived in the meantime: the newest message always stays
//! up for its full duration and an older timer can never cut it short.

use std::cell::Cell;
use std::rc::Rc;

/// Severity of a status message; doubles as its CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn as_class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

/// Identifies one posted status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StatusTicket(u64);

/// Where status messages are drawn and how their timers run.
pub trait StatusDisplay {
    fn show(&self, message: &str, severity: Severity);

    fn hide(&self);

    /// Run `task` once after `delay_ms`.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

pub struct StatusReporter<D> {
    display: Rc<D>,
    latest: Rc<Cell<u64>>,
    duration_ms: u32,
}

impl<D> StatusReporter<D>
where
    D: StatusDisplay + 'static,
{
    pub fn new(display: D, duration_ms: u32) -> Self {
        Self {
            display: Rc::new(display),
            latest: Rc::new(Cell::new(0)),
            duration_ms,
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Ticket of the most recent message, if any was posted.
    pub fn latest(&self) -> Option<StatusTicket> {
        match self.latest.get() {
            0 => None,
            n => Some(StatusTicket(n)),
        }
    }

    pub fn is_current(&self, ticket: StatusTicket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Show `message` and arm its dismiss timer.
    pub fn report(&self, message: &str, severity: Severity) -> StatusTicket {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);

        match severity {
            Severity::Error => tracing::debug!(ticket, %message, "status (error)"),
            _ => tracing::trace!(ticket, %message, "status"),
        }
        self.display.show(message, severity);

        let latest = Rc::clone(&self.latest);
        let display = Rc::clone(&self.display);
        self.display.schedule(
            self.duration_ms,
            Box::new(move || {
                if latest.get() == ticket {
                    display.hide();
                }
            }),
        );

        StatusTicket(ticket)
    }

    pub fn success(&self, message: &str) -> StatusTicket {
        self.report(message, Severity::Success)
    }

    pub fn error(&self, message: &str) -> StatusTicket {
        self.report(message, Severity::Error)
    }

    pub fn info(&self, message: &str) -> StatusTicket {
        self.report(message, Severity::Info)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct FakeDisplay {
        visible: Cell<bool>,
        text: RefCell<String>,
        timers: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
    }

    impl FakeDisplay {
        fn fire_next(&self) {
            let (_, task) = self.timers.borrow_mut().remove(0);
            task();
        }
    }

    impl StatusDisplay for FakeDisplay {
        fn show(&self, message: &str, _severity: Severity) {
            *self.text.borrow_mut() = message.to_string();
            self.visible.set(true);
        }

        fn hide(&self) {
            self.visible.set(false);
        }

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            self.timers.borrow_mut().push((delay_ms, task));
        }
    }

    #[test]
    fn test_message_auto_dismisses() {
        let status = StatusReporter::new(FakeDisplay::default(), 3000);
        status.success("Saved");
        assert!(status.display().visible.get());
        assert_eq!(status.display().timers.borrow()[0].0, 3000);

        status.display().fire_next();
        assert!(!status.display().visible.get());
    }

    #[test]
    fn test_old_timer_does_not_hide_newer_message() {
        let status = StatusReporter::new(FakeDisplay::default(), 3000);
        let first = status.info("first");
        let second = status.error("second");
        assert!(!status.is_current(first));
        assert!(status.is_current(second));

        // First message's timer fires while the second is showing.
        status.display().fire_next();
        assert!(status.display().visible.get());
        assert_eq!(*status.display().text.borrow(), "second");

        // Second message's own timer hides it.
        status.display().fire_next();
        assert!(!status.display().visible.get());
    }

    #[test]
    fn test_latest_ticket() {
        let status = StatusReporter::new(FakeDisplay::default(), 10);
        assert_eq!(status.latest(), None);
        let t = status.success("x");
        assert_eq!(status.latest(), Some(t));
    }

    #[test]
    fn test_severity_classes() {
        assert_eq!(Severity::Success.as_class(), "success");
        assert_eq!(Severity::Error.as_class(), "error");
        assert_eq!(Severity::Info.as_class(), "info");
    }
}
