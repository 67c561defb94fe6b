//! Animated binary toggle for Switchyard.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use switchyard_core::{RecordingSurface, ResourceTable, WidgetId};
//! use switchyard_widgets::Switch;
//!
//! let mut switch = Switch::new(WidgetId::new(1), RecordingSurface::new(), ResourceTable::new());
//! switch.add_observer(Rc::new(|id: WidgetId, checked: bool| {
//!     println!("{id} is now {checked}");
//! }));
//! switch.toggle();
//! assert!(switch.is_checked());
//! ```

mod observer;
pub mod persist;
mod renderer;
mod style;
mod switch;

pub use observer::{ObserverRef, ObserverRegistry, SwitchObserver};
pub use renderer::AppearanceRenderer;
pub use style::{cascade, PartialStyle, StyleConfig, DISABLED_ALPHA};
pub use switch::{Switch, SwitchChanged, STANDARD_ASPECT_RATIO, STANDARD_SIZE};
