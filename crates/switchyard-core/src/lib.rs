//! Core types and collaborator traits for the Switchyard toggle widget.
//!
//! This crate provides foundational types used throughout Switchyard:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Constraints`]
//! - Color representation: [`Color`] with packed ARGB conversion
//! - Layer visuals: [`Drawable`], [`CrossFade`], [`Visual`]
//! - Collaborator seams: [`RenderSurface`], [`ResourceResolver`],
//!   [`AttributeSource`], [`PersistenceStore`]

mod alignment;
mod attributes;
mod color;
mod constraints;
mod event;
mod geometry;
mod resource;
mod store;
mod surface;
mod theme;
mod visual;
pub mod widget;

pub use alignment::{AlignmentRules, HandleRule};
pub use attributes::{AttrKey, AttrValue, AttributeError, AttributeSet, AttributeSource};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use resource::{Image, ResourceId, ResourceResolver, ResourceTable};
pub use store::{Bundle, BundleValue, PersistenceStore, SnapshotError};
pub use surface::{RecordingSurface, RenderSurface, SurfaceOp};
pub use theme::Palette;
pub use visual::{CrossFade, Drawable, LayerSlot, Visual, ANIMATION_DURATION};
pub use widget::{AccessibleRole, LayoutResult, Widget, WidgetId};
