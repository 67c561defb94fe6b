//! The rendering surface a toggle draws into.

use crate::alignment::AlignmentRules;
use crate::visual::{LayerSlot, Visual};
use std::collections::BTreeMap;
use std::time::Duration;

/// Host-side view tree of a toggle: three layer slots, the handle's
/// alignment rules and a widget-wide opacity.
///
/// The host's compositor owns animation timing. The toggle only stores a
/// crossfade in a slot and triggers it.
pub trait RenderSurface {
    /// Current content of a slot, `None` before the first render.
    fn layer(&self, slot: LayerSlot) -> Option<&Visual>;

    /// Replace the content of a slot.
    fn set_layer(&mut self, slot: LayerSlot, visual: Visual);

    /// Trigger the crossfade held by a slot. A static slot ignores this.
    fn start_transition(&mut self, slot: LayerSlot, duration: Duration);

    /// Alignment rules currently applied to the handle.
    fn handle_rules(&self) -> AlignmentRules;

    /// Apply a new set of alignment rules to the handle.
    fn set_handle_rules(&mut self, rules: AlignmentRules);

    /// Set the opacity of the whole widget.
    fn set_opacity(&mut self, opacity: f32);
}

/// A surface operation, as recorded by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    /// [`RenderSurface::set_layer`]
    SetLayer {
        /// Target slot
        slot: LayerSlot,
        /// New content
        visual: Visual,
    },
    /// [`RenderSurface::start_transition`]
    StartTransition {
        /// Target slot
        slot: LayerSlot,
        /// Requested duration
        duration: Duration,
    },
    /// [`RenderSurface::set_handle_rules`]
    SetHandleRules(AlignmentRules),
    /// [`RenderSurface::set_opacity`]
    SetOpacity(f32),
}

/// A surface that keeps its state in memory and records every operation.
///
/// Intended for tests. The operation log grows on every render until
/// [`RecordingSurface::take_ops`] drains it; layer state is kept either way.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    layers: BTreeMap<LayerSlot, Visual>,
    rules: AlignmentRules,
    opacity: f32,
    ops: Vec<SurfaceOp>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            layers: BTreeMap::new(),
            rules: AlignmentRules::new(),
            opacity: 1.0,
            ops: Vec::new(),
        }
    }
}

impl RecordingSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Take the recorded operations, leaving the surface state intact.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Current widget opacity.
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Number of `StartTransition` operations recorded for `slot`.
    #[must_use]
    pub fn transitions_started(&self, slot: LayerSlot) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::StartTransition { slot: s, .. } if *s == slot))
            .count()
    }

    /// Collapse every finished crossfade to its end frame, as a compositor
    /// does once the animation completes.
    pub fn settle(&mut self) {
        let layers = std::mem::take(&mut self.layers);
        self.layers = layers
            .into_iter()
            .map(|(slot, visual)| (slot, Visual::Static(visual.settle())))
            .collect();
    }
}

impl RenderSurface for RecordingSurface {
    fn layer(&self, slot: LayerSlot) -> Option<&Visual> {
        self.layers.get(&slot)
    }

    fn set_layer(&mut self, slot: LayerSlot, visual: Visual) {
        self.ops.push(SurfaceOp::SetLayer {
            slot,
            visual: visual.clone(),
        });
        self.layers.insert(slot, visual);
    }

    fn start_transition(&mut self, slot: LayerSlot, duration: Duration) {
        if let Some(Visual::Transitioning(fade)) = self.layers.get_mut(&slot) {
            fade.start(duration);
        }
        self.ops.push(SurfaceOp::StartTransition { slot, duration });
    }

    fn handle_rules(&self) -> AlignmentRules {
        self.rules
    }

    fn set_handle_rules(&mut self, rules: AlignmentRules) {
        self.rules = rules;
        self.ops.push(SurfaceOp::SetHandleRules(rules));
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
        self.ops.push(SurfaceOp::SetOpacity(opacity));
    }
}
