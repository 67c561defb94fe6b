//! Layer contents and crossfade transitions.
//!
//! A layer holds either a static frame or a two-frame crossfade. Building a
//! new transition from a crossfade reads only its end frame, so transitions
//! never nest no matter how quickly appearance recomputations arrive.

use crate::color::Color;
use crate::resource::Image;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Duration of every appearance crossfade.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(150);

/// The three independently addressable layers of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LayerSlot {
    /// Stationary track background
    TrackBackground,
    /// Fill behind the handle icon
    HandleBackground,
    /// Optional icon drawn on the handle
    HandleIcon,
}

impl LayerSlot {
    /// All slots, in paint order.
    pub const ALL: [Self; 3] = [
        Self::TrackBackground,
        Self::HandleBackground,
        Self::HandleIcon,
    ];
}

/// A single frame a layer can show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Drawable {
    /// Rounded-border shape filled with a color
    Fill(Color),
    /// Image from the resource store
    Image(Image),
    /// Nothing is drawn
    Empty,
}

impl Drawable {
    /// Whether this frame draws nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Fill color, if this is a fill.
    #[must_use]
    pub const fn fill_color(&self) -> Option<Color> {
        match self {
            Self::Fill(color) => Some(*color),
            _ => None,
        }
    }

    /// Image, if this is an image.
    #[must_use]
    pub const fn image(&self) -> Option<&Image> {
        match self {
            Self::Image(image) => Some(image),
            _ => None,
        }
    }
}

impl From<Option<Image>> for Drawable {
    fn from(image: Option<Image>) -> Self {
        image.map_or(Self::Empty, Self::Image)
    }
}

/// A two-frame timed transition.
///
/// With cross-fade blending the source fades out while the target fades in.
/// Without it the source stays opaque underneath the incoming target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossFade<V = Drawable> {
    from: V,
    to: V,
    cross_fade: bool,
    duration: Option<Duration>,
}

impl<V> CrossFade<V> {
    /// Create an unstarted transition between two frames.
    #[must_use]
    pub const fn new(from: V, to: V) -> Self {
        Self {
            from,
            to,
            cross_fade: false,
            duration: None,
        }
    }

    /// Enable or disable cross-fade blending.
    #[must_use]
    pub const fn with_cross_fade(mut self, enabled: bool) -> Self {
        self.cross_fade = enabled;
        self
    }

    /// Trigger the transition.
    pub fn start(&mut self, duration: Duration) {
        self.duration = Some(duration);
    }

    /// Source frame.
    #[must_use]
    pub const fn source(&self) -> &V {
        &self.from
    }

    /// End frame.
    #[must_use]
    pub const fn target(&self) -> &V {
        &self.to
    }

    /// Whether cross-fade blending is enabled.
    #[must_use]
    pub const fn is_cross_fade(&self) -> bool {
        self.cross_fade
    }

    /// Duration passed to [`CrossFade::start`], if started.
    #[must_use]
    pub const fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Whether [`CrossFade::start`] has been called.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.duration.is_some()
    }

    /// Opacity of `(from, to)` after `elapsed` time since start.
    #[must_use]
    pub fn opacities_at(&self, elapsed: Duration) -> (f32, f32) {
        let Some(duration) = self.duration else {
            return (1.0, 0.0);
        };
        let t = if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0) as f32
        };
        if self.cross_fade {
            (1.0 - t, t)
        } else {
            (1.0, t)
        }
    }

    /// Whether the transition has run to completion at `elapsed`.
    #[must_use]
    pub fn is_finished_at(&self, elapsed: Duration) -> bool {
        self.duration.is_some_and(|d| elapsed >= d)
    }
}

/// Content of one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Visual<V = Drawable> {
    /// A single frame
    Static(V),
    /// A crossfade between two frames
    Transitioning(CrossFade<V>),
}

impl<V> Visual<V> {
    /// The frame this layer settles on: the frame itself, or a crossfade's
    /// end frame.
    #[must_use]
    pub const fn end_frame(&self) -> &V {
        match self {
            Self::Static(frame) => frame,
            Self::Transitioning(fade) => fade.target(),
        }
    }

    /// Whether this layer holds a crossfade.
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        matches!(self, Self::Transitioning(_))
    }

    /// The crossfade, if any.
    #[must_use]
    pub const fn cross_fade(&self) -> Option<&CrossFade<V>> {
        match self {
            Self::Transitioning(fade) => Some(fade),
            Self::Static(_) => None,
        }
    }

    /// Collapse to the end frame, as a finished transition does.
    #[must_use]
    pub fn settle(self) -> V {
        match self {
            Self::Static(frame) => frame,
            Self::Transitioning(fade) => fade.to,
        }
    }
}

impl<V: Clone> Visual<V> {
    /// Build a crossfade from this layer's end frame to `target`.
    #[must_use]
    pub fn fade_to(&self, target: V) -> CrossFade<V> {
        CrossFade::new(self.end_frame().clone(), target)
    }
}

impl Visual<Drawable> {
    /// Frames to draw after `elapsed` since the last transition started,
    /// bottom first, with their opacity. Empty frames and fully transparent
    /// frames are omitted.
    #[must_use]
    pub fn frames_at(&self, elapsed: Duration) -> Vec<(&Drawable, f32)> {
        let frames = match self {
            Self::Static(frame) => vec![(frame, 1.0)],
            Self::Transitioning(fade) => {
                let (from_alpha, to_alpha) = fade.opacities_at(elapsed);
                vec![(fade.source(), from_alpha), (fade.target(), to_alpha)]
            }
        };
        frames
            .into_iter()
            .filter(|(frame, alpha)| !frame.is_empty() && *alpha > 0.0)
            .collect()
    }
}
