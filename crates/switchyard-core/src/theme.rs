//! Host palette: the colors a toggle falls back to when unstyled.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Colors supplied by the hosting application's theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Accent color, used for the checked handle
    pub accent: Color,
    /// Default track color, used for the checked track
    pub track: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

impl Palette {
    /// Light palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            accent: Color::from_argb(0xFF33_78F5), // Blue
            track: Color::from_argb(0xFFE0_E0E0),  // Light gray
        }
    }

    /// Dark palette.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            accent: Color::from_argb(0xFF82_B5FF), // Light blue
            track: Color::from_argb(0xFF42_4242),  // Dark gray
        }
    }

    /// Override the accent color.
    #[must_use]
    pub const fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Override the default track color.
    #[must_use]
    pub const fn with_track(mut self, track: Color) -> Self {
        self.track = track;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_default_is_light() {
        assert_eq!(Palette::default(), Palette::light());
    }

    #[test]
    fn test_presets_are_exact_argb() {
        for palette in [Palette::light(), Palette::dark()] {
            assert_eq!(palette.accent.quantized(), palette.accent);
            assert_eq!(palette.track.quantized(), palette.track);
        }
    }

    #[test]
    fn test_palette_overrides() {
        let p = Palette::light()
            .with_accent(Color::BLACK)
            .with_track(Color::TRANSPARENT);
        assert_eq!(p.accent, Color::BLACK);
        assert_eq!(p.track, Color::TRANSPARENT);
    }

    #[test]
    fn test_palette_serde_roundtrip() {
        let json = serde_json::to_string(&Palette::dark()).unwrap();
        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Palette::dark());
    }
}
