//! Observer that records every notification it receives.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use switchyard_core::WidgetId;
use switchyard_widgets::ObserverRef;

/// One recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    /// Toggle that notified
    pub id: WidgetId,
    /// Value it reported
    pub checked: bool,
}

/// Recording observer.
///
/// Hand [`ObserverRecorder::handle`] to a toggle and inspect the calls later.
/// Every handle from the same recorder shares one log, and handles compare
/// equal for removal.
#[derive(Clone)]
pub struct ObserverRecorder {
    calls: Rc<RefCell<Vec<Notification>>>,
    handle: ObserverRef,
}

impl ObserverRecorder {
    /// Create a recorder with an empty log.
    pub fn new() -> Self {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let handle: ObserverRef = Rc::new(move |id: WidgetId, checked: bool| {
            sink.borrow_mut().push(Notification { id, checked });
        });
        Self { calls, handle }
    }

    /// Observer handle writing into this recorder.
    pub fn handle(&self) -> ObserverRef {
        Rc::clone(&self.handle)
    }

    /// Every notification so far, oldest first.
    pub fn calls(&self) -> Vec<Notification> {
        self.calls.borrow().clone()
    }

    /// Reported values, oldest first.
    pub fn values(&self) -> Vec<bool> {
        self.calls.borrow().iter().map(|n| n.checked).collect()
    }

    /// Number of notifications.
    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Most recent notification.
    pub fn last(&self) -> Option<Notification> {
        self.calls.borrow().last().copied()
    }

    /// Forget recorded notifications.
    pub fn reset(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Assert the reported values match `expected` exactly.
    pub fn assert_values(&self, expected: &[bool]) {
        let actual = self.values();
        assert_eq!(
            actual, expected,
            "observer saw {actual:?}, expected {expected:?}"
        );
    }

    /// Assert no notification was received.
    pub fn assert_silent(&self) {
        assert_eq!(self.count(), 0, "observer was notified: {:?}", self.calls());
    }
}

impl fmt::Debug for ObserverRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRecorder")
            .field("calls", &self.calls.borrow())
            .finish_non_exhaustive()
    }
}
