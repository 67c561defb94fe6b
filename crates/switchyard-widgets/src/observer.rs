//! Check-state observers.

use std::fmt;
use std::rc::Rc;
use switchyard_core::WidgetId;

/// Receives check-state changes from a toggle.
pub trait SwitchObserver {
    /// Called synchronously with the toggle's identity and its new state.
    fn on_check_state_change(&self, id: WidgetId, checked: bool);
}

impl<F: Fn(WidgetId, bool)> SwitchObserver for F {
    fn on_check_state_change(&self, id: WidgetId, checked: bool) {
        self(id, checked);
    }
}

/// Shared handle to an observer. The toggle holds a clone and never owns the
/// state behind it.
pub type ObserverRef = Rc<dyn SwitchObserver>;

/// Ordered list of observers.
///
/// Duplicates are allowed. Storage is allocated on the first registration.
#[derive(Default, Clone)]
pub struct ObserverRegistry {
    observers: Option<Vec<ObserverRef>>,
}

impl ObserverRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { observers: None }
    }

    /// Append an observer.
    pub fn add(&mut self, observer: ObserverRef) {
        self.observers.get_or_insert_with(Vec::new).push(observer);
    }

    /// Remove the first entry pointing at the same observer.
    ///
    /// Returns `false` if it was not registered.
    pub fn remove(&mut self, observer: &ObserverRef) -> bool {
        let Some(observers) = self.observers.as_mut() else {
            return false;
        };
        match observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(index) => {
                observers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every observer.
    pub fn clear(&mut self) {
        if let Some(observers) = self.observers.as_mut() {
            observers.clear();
        }
    }

    /// Whether `observer` is registered at least once.
    #[must_use]
    pub fn contains(&self, observer: &ObserverRef) -> bool {
        self.iter().any(|o| Rc::ptr_eq(o, observer))
    }

    /// Number of registrations, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.as_ref().map_or(0, Vec::len)
    }

    /// Whether no observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether storage has been allocated by a registration.
    #[must_use]
    pub const fn is_allocated(&self) -> bool {
        self.observers.is_some()
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ObserverRef> {
        self.observers.iter().flatten()
    }

    /// Invoke every observer in registration order. Panics propagate.
    pub fn notify(&self, id: WidgetId, checked: bool) {
        for observer in self.iter() {
            observer.on_check_state_change(id, checked);
        }
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<(u64, bool)>>>, ObserverRef) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let observer: ObserverRef = Rc::new(move |id: WidgetId, checked: bool| {
            sink.borrow_mut().push((id.0, checked));
        });
        (log, observer)
    }

    #[test]
    fn test_registry_is_lazy() {
        let mut registry = ObserverRegistry::new();
        assert!(!registry.is_allocated());
        assert!(registry.is_empty());

        let (_, observer) = recorder();
        registry.add(observer);
        assert!(registry.is_allocated());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_notify_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        for tag in 0..3 {
            let order = Rc::clone(&order);
            registry.add(Rc::new(move |_: WidgetId, _: bool| order.borrow_mut().push(tag)));
        }
        registry.notify(WidgetId::new(1), true);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_duplicates_notified_and_removed_one_at_a_time() {
        let (log, observer) = recorder();
        let mut registry = ObserverRegistry::new();
        registry.add(Rc::clone(&observer));
        registry.add(Rc::clone(&observer));

        registry.notify(WidgetId::new(9), false);
        assert_eq!(log.borrow().len(), 2);

        assert!(registry.remove(&observer));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&observer));
        assert!(registry.remove(&observer));
        assert!(!registry.contains(&observer));
    }

    #[test]
    fn test_remove_unregistered_is_noop() {
        let (_, registered) = recorder();
        let (_, stranger) = recorder();
        let mut registry = ObserverRegistry::new();
        assert!(!registry.remove(&stranger));
        assert!(!registry.is_allocated());

        registry.add(registered);
        assert!(!registry.remove(&stranger));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_clear_keeps_storage() {
        let (log, observer) = recorder();
        let mut registry = ObserverRegistry::new();
        registry.add(observer);
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.is_allocated());

        registry.notify(WidgetId::new(1), true);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_debug_shows_len() {
        let registry = ObserverRegistry::new();
        assert_eq!(format!("{registry:?}"), "ObserverRegistry { len: 0 }");
    }
}
