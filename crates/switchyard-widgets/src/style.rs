//! Style configuration and the default cascade.
//!
//! Every field resolves in a fixed order: the explicit value, then a related
//! field, then a hardcoded or palette default. [`PartialStyle`] holds the
//! explicit values; [`PartialStyle::resolve`] produces a complete
//! [`StyleConfig`].

use serde::{Deserialize, Serialize};
use switchyard_core::{AttrKey, AttributeSource, Color, Palette, ResourceId};

/// Widget opacity while disabled.
pub const DISABLED_ALPHA: f32 = 0.6;

/// Pick the first value that is set, or `fallback`.
#[must_use]
pub fn cascade<T>(explicit: Option<T>, related: Option<T>, fallback: T) -> T {
    explicit.or(related).unwrap_or(fallback)
}

/// Fully resolved visual parameters of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Track color when checked
    pub bkg_checked_color: Color,
    /// Track color when unchecked
    pub bkg_not_checked_color: Color,
    /// Handle color when checked
    pub toggle_checked_color: Color,
    /// Handle color when unchecked
    pub toggle_not_checked_color: Color,
    /// Handle icon when checked, [`ResourceId::NONE`] for no icon
    pub toggle_checked_image: ResourceId,
    /// Handle icon when unchecked, [`ResourceId::NONE`] for no icon
    pub toggle_not_checked_image: ResourceId,
    /// Lock width to height at the standard ratio
    pub force_aspect_ratio: bool,
    /// Whether user interaction is permitted
    pub enabled: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::defaults(&Palette::default())
    }
}

impl StyleConfig {
    /// Style with every field at its default for `palette`.
    #[must_use]
    pub fn defaults(palette: &Palette) -> Self {
        PartialStyle::default().resolve(palette)
    }

    /// Track color for a checked state.
    #[must_use]
    pub const fn bkg_color(&self, checked: bool) -> Color {
        if checked {
            self.bkg_checked_color
        } else {
            self.bkg_not_checked_color
        }
    }

    /// Handle color for a checked state.
    #[must_use]
    pub const fn toggle_color(&self, checked: bool) -> Color {
        if checked {
            self.toggle_checked_color
        } else {
            self.toggle_not_checked_color
        }
    }

    /// Handle icon for a checked state.
    #[must_use]
    pub const fn toggle_image(&self, checked: bool) -> ResourceId {
        if checked {
            self.toggle_checked_image
        } else {
            self.toggle_not_checked_image
        }
    }

    /// Widget-wide opacity derived from the enabled flag.
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        if self.enabled {
            1.0
        } else {
            DISABLED_ALPHA
        }
    }
}

/// Explicitly supplied style values, before defaults are applied.
///
/// Resolved colors are snapped to packed ARGB so a saved style restores
/// unchanged.
///
/// `Some(ResourceId::NONE)` is an explicit "no icon" and stops the cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialStyle {
    /// Initial checked state
    pub checked: Option<bool>,
    /// Aspect-ratio lock
    pub force_aspect_ratio: Option<bool>,
    /// Enabled flag
    pub enabled: Option<bool>,
    /// Track color when checked
    pub bkg_checked_color: Option<Color>,
    /// Track color when unchecked
    pub bkg_not_checked_color: Option<Color>,
    /// Handle color when checked
    pub toggle_checked_color: Option<Color>,
    /// Handle color when unchecked
    pub toggle_not_checked_color: Option<Color>,
    /// Handle icon when checked
    pub toggle_checked_image: Option<ResourceId>,
    /// Handle icon when unchecked
    pub toggle_not_checked_image: Option<ResourceId>,
}

impl PartialStyle {
    /// Read every explicit value from a declarative attribute source.
    pub fn from_attributes<A: AttributeSource + ?Sized>(source: &A) -> Self {
        Self {
            checked: source.read_bool(AttrKey::Checked),
            force_aspect_ratio: source.read_bool(AttrKey::ForceAspectRatio),
            enabled: source.read_bool(AttrKey::Enabled),
            bkg_checked_color: source.read_color(AttrKey::BkgCheckedColor),
            bkg_not_checked_color: source.read_color(AttrKey::BkgNotCheckedColor),
            toggle_checked_color: source.read_color(AttrKey::ToggleCheckedColor),
            toggle_not_checked_color: source.read_color(AttrKey::ToggleNotCheckedColor),
            toggle_checked_image: source.read_resource(AttrKey::ToggleCheckedImage),
            toggle_not_checked_image: source.read_resource(AttrKey::ToggleNotCheckedImage),
        }
    }

    /// Apply the default cascade to every field.
    #[must_use]
    pub fn resolve(&self, palette: &Palette) -> StyleConfig {
        StyleConfig {
            bkg_checked_color: self.resolve_bkg_checked_color(palette),
            bkg_not_checked_color: self.resolve_bkg_not_checked_color(palette),
            toggle_checked_color: self.resolve_toggle_checked_color(palette),
            toggle_not_checked_color: self.resolve_toggle_not_checked_color(),
            toggle_checked_image: self.resolve_toggle_checked_image(),
            toggle_not_checked_image: self.resolve_toggle_not_checked_image(),
            force_aspect_ratio: self.resolve_force_aspect_ratio(),
            enabled: self.resolve_enabled(),
        }
    }

    /// Checked state: explicit, else unchecked.
    #[must_use]
    pub fn resolve_checked(&self) -> bool {
        cascade(self.checked, None, false)
    }

    /// Aspect-ratio lock: explicit, else on.
    #[must_use]
    pub fn resolve_force_aspect_ratio(&self) -> bool {
        cascade(self.force_aspect_ratio, None, true)
    }

    /// Enabled flag: explicit, else enabled.
    #[must_use]
    pub fn resolve_enabled(&self) -> bool {
        cascade(self.enabled, None, true)
    }

    /// Checked track color: explicit, else the palette track color.
    #[must_use]
    pub fn resolve_bkg_checked_color(&self, palette: &Palette) -> Color {
        cascade(self.bkg_checked_color, None, palette.track).quantized()
    }

    /// Unchecked track color: explicit, else the resolved checked track color.
    #[must_use]
    pub fn resolve_bkg_not_checked_color(&self, palette: &Palette) -> Color {
        cascade(
            self.bkg_not_checked_color,
            None,
            self.resolve_bkg_checked_color(palette),
        )
        .quantized()
    }

    /// Checked handle color: explicit, else the palette accent.
    #[must_use]
    pub fn resolve_toggle_checked_color(&self, palette: &Palette) -> Color {
        cascade(self.toggle_checked_color, None, palette.accent).quantized()
    }

    /// Unchecked handle color: explicit, else an explicit checked handle
    /// color, else white.
    #[must_use]
    pub fn resolve_toggle_not_checked_color(&self) -> Color {
        cascade(
            self.toggle_not_checked_color,
            self.toggle_checked_color,
            Color::WHITE,
        )
        .quantized()
    }

    /// Checked icon: explicit, else an explicit unchecked icon, else none.
    #[must_use]
    pub fn resolve_toggle_checked_image(&self) -> ResourceId {
        cascade(
            self.toggle_checked_image,
            self.toggle_not_checked_image,
            ResourceId::NONE,
        )
    }

    /// Unchecked icon: explicit, else the resolved checked icon.
    #[must_use]
    pub fn resolve_toggle_not_checked_image(&self) -> ResourceId {
        cascade(
            self.toggle_not_checked_image,
            None,
            self.resolve_toggle_checked_image(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use switchyard_core::AttributeSet;

    fn red() -> Color {
        Color::rgb(1.0, 0.0, 0.0)
    }

    // ===== Cascade Tests =====

    #[test]
    fn test_cascade_order() {
        assert_eq!(cascade(Some(1), Some(2), 3), 1);
        assert_eq!(cascade(None, Some(2), 3), 2);
        assert_eq!(cascade(None::<i32>, None, 3), 3);
    }

    #[test]
    fn test_empty_style_uses_palette_and_hardcoded_defaults() {
        let palette = Palette::dark();
        let style = PartialStyle::default().resolve(&palette);
        assert_eq!(style.bkg_checked_color, palette.track);
        assert_eq!(style.bkg_not_checked_color, palette.track);
        assert_eq!(style.toggle_checked_color, palette.accent);
        assert_eq!(style.toggle_not_checked_color, Color::WHITE);
        assert_eq!(style.toggle_checked_image, ResourceId::NONE);
        assert_eq!(style.toggle_not_checked_image, ResourceId::NONE);
        assert!(style.force_aspect_ratio);
        assert!(style.enabled);
        assert!(!PartialStyle::default().resolve_checked());
    }

    #[test]
    fn test_resolved_colors_are_argb_exact() {
        let odd = Color::rgb(0.123, 0.456, 0.789);
        let partial = PartialStyle {
            bkg_checked_color: Some(odd),
            toggle_checked_color: Some(odd),
            ..PartialStyle::default()
        };
        let palette = Palette::light().with_track(odd).with_accent(odd);
        let style = partial.resolve(&palette);
        for color in [
            style.bkg_checked_color,
            style.bkg_not_checked_color,
            style.toggle_checked_color,
            style.toggle_not_checked_color,
        ] {
            assert_eq!(color, odd.quantized());
            assert_eq!(Color::from_argb(color.to_argb()), color);
        }
        assert_eq!(PartialStyle::default().resolve(&palette).bkg_checked_color, odd.quantized());
    }

    #[test]
    fn test_bkg_not_checked_follows_checked() {
        let partial = PartialStyle {
            bkg_checked_color: Some(red()),
            ..PartialStyle::default()
        };
        let style = partial.resolve(&Palette::light());
        assert_eq!(style.bkg_not_checked_color, red());
    }

    #[test]
    fn test_toggle_not_checked_follows_explicit_checked() {
        let partial = PartialStyle {
            toggle_checked_color: Some(red()),
            ..PartialStyle::default()
        };
        assert_eq!(partial.resolve_toggle_not_checked_color(), red());
    }

    #[test]
    fn test_toggle_not_checked_ignores_palette_accent() {
        let palette = Palette::light().with_accent(red());
        let style = PartialStyle::default().resolve(&palette);
        assert_eq!(style.toggle_checked_color, red());
        assert_eq!(style.toggle_not_checked_color, Color::WHITE);
    }

    #[test]
    fn test_icons_default_together() {
        let only_checked = PartialStyle {
            toggle_checked_image: Some(ResourceId::new(7)),
            ..PartialStyle::default()
        };
        let style = only_checked.resolve(&Palette::default());
        assert_eq!(style.toggle_checked_image, ResourceId::new(7));
        assert_eq!(style.toggle_not_checked_image, ResourceId::new(7));

        let only_unchecked = PartialStyle {
            toggle_not_checked_image: Some(ResourceId::new(8)),
            ..PartialStyle::default()
        };
        let style = only_unchecked.resolve(&Palette::default());
        assert_eq!(style.toggle_checked_image, ResourceId::new(8));
        assert_eq!(style.toggle_not_checked_image, ResourceId::new(8));
    }

    #[test]
    fn test_explicit_none_icon_stops_cascade() {
        let partial = PartialStyle {
            toggle_checked_image: Some(ResourceId::new(3)),
            toggle_not_checked_image: Some(ResourceId::NONE),
            ..PartialStyle::default()
        };
        let style = partial.resolve(&Palette::default());
        assert_eq!(style.toggle_checked_image, ResourceId::new(3));
        assert_eq!(style.toggle_not_checked_image, ResourceId::NONE);
    }

    #[test]
    fn test_from_attributes_reads_every_key() {
        let attrs = AttributeSet::new()
            .with_bool(AttrKey::Checked, true)
            .with_bool(AttrKey::Enabled, false)
            .with_color(AttrKey::ToggleNotCheckedColor, red())
            .with_resource(AttrKey::ToggleNotCheckedImage, ResourceId::new(4));
        let partial = PartialStyle::from_attributes(&attrs);
        assert_eq!(partial.checked, Some(true));
        assert_eq!(partial.enabled, Some(false));
        assert_eq!(partial.force_aspect_ratio, None);
        assert_eq!(partial.toggle_not_checked_color, Some(red()));
        assert_eq!(partial.toggle_not_checked_image, Some(ResourceId::new(4)));
    }

    // ===== StyleConfig Tests =====

    #[test]
    fn test_style_per_state_accessors() {
        let style = StyleConfig {
            bkg_checked_color: red(),
            toggle_not_checked_image: ResourceId::new(2),
            ..StyleConfig::default()
        };
        assert_eq!(style.bkg_color(true), red());
        assert_eq!(style.toggle_color(false), Color::WHITE);
        assert_eq!(style.toggle_image(false), ResourceId::new(2));
        assert_eq!(style.toggle_image(true), ResourceId::NONE);
    }

    #[test]
    fn test_opacity_follows_enabled() {
        let mut style = StyleConfig::default();
        assert_eq!(style.opacity(), 1.0);
        style.enabled = false;
        assert_eq!(style.opacity(), DISABLED_ALPHA);
    }

    #[test]
    fn test_style_serde_roundtrip() {
        let style = StyleConfig::defaults(&Palette::dark());
        let json = serde_json::to_string(&style).unwrap();
        let back: StyleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }

    proptest! {
        #[test]
        fn prop_bkg_not_checked_equals_checked_when_only_checked_set(argb in any::<u32>()) {
            let color = Color::from_argb(argb);
            let partial = PartialStyle { bkg_checked_color: Some(color), ..PartialStyle::default() };
            let style = partial.resolve(&Palette::default());
            prop_assert_eq!(style.bkg_not_checked_color, style.bkg_checked_color);
        }

        #[test]
        fn prop_icons_agree_when_one_supplied(raw in 1u32.., checked_side in any::<bool>()) {
            let id = Some(ResourceId::new(raw));
            let partial = if checked_side {
                PartialStyle { toggle_checked_image: id, ..PartialStyle::default() }
            } else {
                PartialStyle { toggle_not_checked_image: id, ..PartialStyle::default() }
            };
            let style = partial.resolve(&Palette::default());
            prop_assert_eq!(style.toggle_checked_image, style.toggle_not_checked_image);
        }
    }
}
