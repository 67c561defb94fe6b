//! Animated on/off toggle.

use crate::observer::{ObserverRef, ObserverRegistry};
use crate::renderer::AppearanceRenderer;
use crate::style::{PartialStyle, StyleConfig};
use std::any::Any;
use switchyard_core::{
    widget::{AccessibleRole, LayoutResult},
    AttributeSource, Color, Constraints, Event, MouseButton, Palette, Rect, RenderSurface,
    ResourceId, ResourceResolver, Size, Widget, WidgetId,
};

/// Width-to-height ratio enforced when the aspect-ratio lock is on.
pub const STANDARD_ASPECT_RATIO: f32 = 2.2;

/// Preferred size before constraints are applied.
pub const STANDARD_SIZE: Size = Size::new(44.0, 20.0);

/// Message emitted when user input flips the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchChanged {
    /// The toggle that changed
    pub id: WidgetId,
    /// The new checked state
    pub checked: bool,
}

/// Binary toggle with crossfading appearance and check-state observers.
///
/// `S` is the surface the layers are rendered into and `R` resolves handle
/// icons. Every change to the checked state or the style re-renders
/// immediately; only [`Switch::toggle`] and restoration notify observers.
#[derive(Debug)]
pub struct Switch<S, R> {
    id: WidgetId,
    palette: Palette,
    style: StyleConfig,
    checked: bool,
    observers: ObserverRegistry,
    renderer: AppearanceRenderer,
    surface: S,
    resources: R,
    bounds: Rect,
    needs_layout: bool,
    accessible_name_value: Option<String>,
    test_id_value: Option<String>,
}

impl<S: RenderSurface, R: ResourceResolver> Switch<S, R> {
    /// Create an unstyled toggle using the default palette.
    pub fn new(id: WidgetId, surface: S, resources: R) -> Self {
        Self::from_style(id, &PartialStyle::default(), Palette::default(), surface, resources)
    }

    /// Create a toggle configured from declarative attributes.
    pub fn from_attributes<A: AttributeSource + ?Sized>(
        id: WidgetId,
        attributes: &A,
        palette: Palette,
        surface: S,
        resources: R,
    ) -> Self {
        let partial = PartialStyle::from_attributes(attributes);
        Self::from_style(id, &partial, palette, surface, resources)
    }

    /// Create a toggle from explicit style values, applying the defaults.
    pub fn from_style(
        id: WidgetId,
        partial: &PartialStyle,
        palette: Palette,
        surface: S,
        resources: R,
    ) -> Self {
        let mut switch = Self {
            id,
            palette,
            style: partial.resolve(&palette),
            checked: false,
            observers: ObserverRegistry::new(),
            renderer: AppearanceRenderer::new(),
            surface,
            resources,
            bounds: Rect::default(),
            needs_layout: true,
            accessible_name_value: None,
            test_id_value: None,
        };
        switch.set_checked(partial.resolve_checked());
        switch
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Replace the renderer used for later renders.
    #[must_use]
    pub const fn with_renderer(mut self, renderer: AppearanceRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Reconfigure from declarative attributes without notifying observers.
    pub fn configure<A: AttributeSource + ?Sized>(&mut self, attributes: &A) {
        self.apply_style(&PartialStyle::from_attributes(attributes));
    }

    /// Replace the whole style and checked state from explicit values,
    /// apply the defaults and re-render. Observers are not notified.
    pub fn apply_style(&mut self, partial: &PartialStyle) {
        self.style = partial.resolve(&self.palette);
        self.needs_layout = true;
        tracing::debug!(id = %self.id, style = ?self.style, "style configured");
        self.set_checked(partial.resolve_checked());
    }

    /// Identity passed to observers.
    #[must_use]
    pub const fn id(&self) -> WidgetId {
        self.id
    }

    // ===== Checked state =====

    /// Set the checked state and re-render. Never notifies observers.
    pub fn set_checked(&mut self, checked: bool) {
        tracing::debug!(id = %self.id, checked, "set checked");
        self.checked = checked;
        self.refresh();
    }

    /// Flip the checked state, re-render and notify every observer.
    pub fn toggle(&mut self) {
        tracing::debug!(id = %self.id, checked = !self.checked, "toggle");
        self.set_checked(!self.checked);
        self.notify_observers();
    }

    /// Current checked state.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    pub(crate) fn notify_observers(&self) {
        self.observers.notify(self.id, self.checked);
    }

    fn refresh(&mut self) {
        self.renderer
            .render(&mut self.surface, &self.resources, &self.style, self.checked);
    }

    // ===== Style =====

    /// Set the track color when checked. Color setters snap to packed ARGB.
    pub fn set_bkg_checked_color(&mut self, color: Color) {
        self.style.bkg_checked_color = color.quantized();
        self.refresh();
    }

    /// Set the track color when unchecked.
    pub fn set_bkg_not_checked_color(&mut self, color: Color) {
        self.style.bkg_not_checked_color = color.quantized();
        self.refresh();
    }

    /// Set the handle color when checked.
    pub fn set_toggle_checked_color(&mut self, color: Color) {
        self.style.toggle_checked_color = color.quantized();
        self.refresh();
    }

    /// Set the handle color when unchecked.
    pub fn set_toggle_not_checked_color(&mut self, color: Color) {
        self.style.toggle_not_checked_color = color.quantized();
        self.refresh();
    }

    /// Set the handle icon when checked. [`ResourceId::NONE`] removes it.
    pub fn set_toggle_checked_image(&mut self, image: ResourceId) {
        self.style.toggle_checked_image = image;
        self.refresh();
    }

    /// Set the handle icon when unchecked. [`ResourceId::NONE`] removes it.
    pub fn set_toggle_not_checked_image(&mut self, image: ResourceId) {
        self.style.toggle_not_checked_image = image;
        self.refresh();
    }

    /// Enable or disable user interaction. Disabled toggles are dimmed.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.style.enabled = enabled;
        self.refresh();
    }

    /// Turn the aspect-ratio lock on or off.
    pub fn set_force_aspect_ratio(&mut self, force: bool) {
        self.style.force_aspect_ratio = force;
        self.needs_layout = true;
    }

    /// Track color when checked.
    #[must_use]
    pub const fn bkg_checked_color(&self) -> Color {
        self.style.bkg_checked_color
    }

    /// Track color when unchecked.
    #[must_use]
    pub const fn bkg_not_checked_color(&self) -> Color {
        self.style.bkg_not_checked_color
    }

    /// Handle color when checked.
    #[must_use]
    pub const fn toggle_checked_color(&self) -> Color {
        self.style.toggle_checked_color
    }

    /// Handle color when unchecked.
    #[must_use]
    pub const fn toggle_not_checked_color(&self) -> Color {
        self.style.toggle_not_checked_color
    }

    /// Handle icon when checked.
    #[must_use]
    pub const fn toggle_checked_image(&self) -> ResourceId {
        self.style.toggle_checked_image
    }

    /// Handle icon when unchecked.
    #[must_use]
    pub const fn toggle_not_checked_image(&self) -> ResourceId {
        self.style.toggle_not_checked_image
    }

    /// Whether user interaction is permitted.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.style.enabled
    }

    /// Whether the aspect-ratio lock is on.
    #[must_use]
    pub const fn is_force_aspect_ratio(&self) -> bool {
        self.style.force_aspect_ratio
    }

    /// The full resolved style.
    #[must_use]
    pub const fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Palette the defaults are drawn from.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Width-to-height ratio used by the aspect-ratio lock.
    #[must_use]
    pub const fn aspect_ratio(&self) -> f32 {
        STANDARD_ASPECT_RATIO
    }

    /// Whether a style change is waiting for the host to lay out again.
    #[must_use]
    pub const fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    // ===== Observers =====

    /// Register an observer. Registering the same observer twice notifies
    /// it twice.
    pub fn add_observer(&mut self, observer: ObserverRef) {
        self.observers.add(observer);
    }

    /// Remove the first registration of `observer`. Unknown observers are
    /// ignored.
    pub fn remove_observer(&mut self, observer: &ObserverRef) {
        self.observers.remove(observer);
    }

    /// Remove every observer.
    pub fn remove_all_observers(&mut self) {
        self.observers.clear();
    }

    /// Registered observers.
    #[must_use]
    pub const fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    // ===== Collaborators =====

    /// Surface the layers are rendered into.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, for hosts that advance animations.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Icon resolver.
    #[must_use]
    pub const fn resources(&self) -> &R {
        &self.resources
    }
}

impl<S: RenderSurface, R: ResourceResolver> Widget for Switch<S, R> {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let size = constraints.constrain(STANDARD_SIZE);
        if !self.style.force_aspect_ratio {
            return size;
        }
        let height = size.width / STANDARD_ASPECT_RATIO;
        if height > constraints.max_height {
            Size::new(constraints.max_height * STANDARD_ASPECT_RATIO, constraints.max_height)
        } else {
            Size::new(size.width, height)
        }
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.needs_layout = false;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any>> {
        if !self.style.enabled {
            return None;
        }

        let activated = match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => self.bounds.contains_point(position),
            Event::KeyDown { key } => key.is_activation(),
            _ => false,
        };
        if !activated {
            return None;
        }

        self.toggle();
        Some(Box::new(SwitchChanged {
            id: self.id,
            checked: self.checked,
        }))
    }

    fn is_interactive(&self) -> bool {
        self.style.enabled
    }

    fn is_focusable(&self) -> bool {
        self.style.enabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
