//! State-to-appearance rendering.
//!
//! For each of the three layers the renderer computes the target frame from
//! the style and checked state, then crossfades to it from whatever the
//! layer currently settles on. The first render of a layer sets the target
//! directly.

use crate::style::StyleConfig;
use std::time::Duration;
use switchyard_core::{
    Drawable, HandleRule, LayerSlot, RenderSurface, ResourceResolver, Visual, ANIMATION_DURATION,
};

/// Renders a toggle's layers, handle alignment and opacity onto a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppearanceRenderer {
    duration: Duration,
}

impl Default for AppearanceRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl AppearanceRenderer {
    /// Renderer using [`ANIMATION_DURATION`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            duration: ANIMATION_DURATION,
        }
    }

    /// Set the crossfade duration.
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Crossfade duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Target frame of each layer for `checked`, in paint order.
    pub fn targets<R: ResourceResolver + ?Sized>(
        &self,
        style: &StyleConfig,
        checked: bool,
        resources: &R,
    ) -> [(LayerSlot, Drawable); 3] {
        let icon = style
            .toggle_image(checked)
            .get()
            .and_then(|id| resources.resolve(id));
        [
            (LayerSlot::TrackBackground, Drawable::Fill(style.bkg_color(checked))),
            (
                LayerSlot::HandleBackground,
                Drawable::Fill(style.toggle_color(checked)),
            ),
            (LayerSlot::HandleIcon, Drawable::from(icon)),
        ]
    }

    /// Render every layer, move the handle and apply the opacity.
    pub fn render<S, R>(&self, surface: &mut S, resources: &R, style: &StyleConfig, checked: bool)
    where
        S: RenderSurface + ?Sized,
        R: ResourceResolver + ?Sized,
    {
        for (slot, target) in self.targets(style, checked, resources) {
            self.render_layer(surface, slot, target);
        }
        Self::align_handle(surface, checked);
        surface.set_opacity(style.opacity());
    }

    /// Transition one layer to `target`.
    pub fn render_layer<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        slot: LayerSlot,
        target: Drawable,
    ) {
        let Some(previous) = surface.layer(slot) else {
            tracing::trace!(?slot, "first render, no transition");
            surface.set_layer(slot, Visual::Static(target));
            return;
        };

        tracing::trace!(
            ?slot,
            superseding = previous.is_transitioning(),
            "crossfading layer"
        );
        let fade = previous.fade_to(target).with_cross_fade(true);
        surface.set_layer(slot, Visual::Transitioning(fade));
        surface.start_transition(slot, self.duration);
    }

    /// Pin the handle to the edge for `checked` and drop the opposite rule.
    pub fn align_handle<S: RenderSurface + ?Sized>(surface: &mut S, checked: bool) {
        let rule = HandleRule::for_checked(checked);
        let mut rules = surface.handle_rules();
        rules.add(rule);
        rules.remove(rule.opposite());
        surface.set_handle_rules(rules);
    }
}
