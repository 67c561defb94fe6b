//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-event cycle driven by the host:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Accept the bounds the host allocated
//! 3. **Event**: React to input inside those bounds
//!
//! Painting is not part of the trait: widgets push their visuals into a
//! [`RenderSurface`](crate::RenderSurface) whenever their state changes.
//!
//! # Examples
//!
//! ```
//! use switchyard_core::WidgetId;
//!
//! let id = WidgetId::new(42);
//! assert_eq!(id.0, 42);
//! assert_eq!(id.to_string(), "#42");
//! ```

use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Create a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait the host drives.
pub trait Widget {
    /// Get the identity of this widget instance.
    fn id(&self) -> WidgetId;

    /// Compute intrinsic size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Handle input events, optionally emitting a message.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any>>;

    /// Check if this widget is interactive (can receive focus/events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Button
    Button,
    /// Checkbox
    Checkbox,
    /// On/off switch
    Switch,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inert(Rect);

    impl Widget for Inert {
        fn id(&self) -> WidgetId {
            WidgetId::new(0)
        }

        fn measure(&self, constraints: Constraints) -> Size {
            constraints.constrain(Size::new(10.0, 10.0))
        }

        fn layout(&mut self, bounds: Rect) -> LayoutResult {
            self.0 = bounds;
            LayoutResult {
                size: bounds.size(),
            }
        }

        fn event(&mut self, _event: &Event) -> Option<Box<dyn Any>> {
            None
        }
    }

    #[test]
    fn test_widget_id_eq() {
        assert_eq!(WidgetId::new(1), WidgetId::new(1));
        assert_ne!(WidgetId::new(1), WidgetId::new(2));
    }

    #[test]
    fn test_widget_defaults() {
        let mut w = Inert(Rect::default());
        assert!(!w.is_interactive());
        assert!(!w.is_focusable());
        assert_eq!(w.accessible_name(), None);
        assert_eq!(w.accessible_role(), AccessibleRole::Generic);
        assert_eq!(w.test_id(), None);
        assert_eq!(w.bounds(), Rect::default());
        assert!(w.event(&Event::FocusIn).is_none());
        let result = w.layout(Rect::new(0.0, 0.0, 5.0, 6.0));
        assert_eq!(result.size, Size::new(5.0, 6.0));
    }

    #[test]
    fn test_accessible_role_default() {
        assert_eq!(AccessibleRole::default(), AccessibleRole::Generic);
    }
}
