#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::new_without_default)]
#![allow(clippy::must_use_candidate)]
//! Testing harness for Switchyard widgets.
//!
//! ```
//! use switchyard_test::{fixture, ObserverRecorder};
//!
//! let recorder = ObserverRecorder::new();
//! let mut switch = fixture::switch();
//! switch.add_observer(recorder.handle());
//! switch.toggle();
//! recorder.assert_values(&[true]);
//! ```

pub mod fixture;
mod recorder;
mod trace;

pub use recorder::{Notification, ObserverRecorder};
pub use trace::init_tracing;
