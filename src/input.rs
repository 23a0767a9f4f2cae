//! Input trackers: the pointer gesture and the device-orientation stream.
//!
//! [`PointerTracker`] carries the context of the active gesture between
//! press and release — the anchor where the gesture started and the running
//! offset from it. [`OrientationTracker`] turns raw `(beta, gamma)` readings
//! into a baseline-relative offset, remapping axes for the device's physical
//! orientation and clamping the result so flat layer art never slides past
//! its edges. Both are browser-free; the DOM wiring in [`crate::boot`] feeds
//! them.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::MOTION_MAX_DEG;
use crate::geom::Vec2;

/// Tracks the active press/touch gesture and its offset from the anchor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    anchor: Vec2,
    offset: Vec2,
    active: bool,
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a gesture at `position`. The offset is left untouched until the
    /// first move re-derives it, so a snap-back interrupted mid-flight holds
    /// its current value rather than jumping.
    pub fn begin(&mut self, position: Vec2) {
        self.anchor = position;
        self.active = true;
    }

    /// Update the offset from a move event. Ignored when no gesture is
    /// active (the button isn't down / no finger on the screen).
    pub fn move_to(&mut self, position: Vec2) {
        if self.active {
            self.offset = position.delta_from(self.anchor);
        }
    }

    /// End the gesture. The offset keeps its final value; the snap-back
    /// tween animates it home from there.
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Overwrite the offset directly. Used by the tween while it owns the
    /// offset between gesture end and rest.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Current offset from the gesture anchor, in pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// The device's physical orientation, which decides how gyroscope axes map
/// onto screen axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Right-side up portrait.
    #[default]
    Portrait,
    /// Landscape, lying on its left side.
    LandscapeLeft,
    /// Landscape, lying on its right side.
    LandscapeRight,
    /// Upside-down portrait.
    PortraitFlipped,
}

impl Orientation {
    /// Map a `screen.orientation.angle` value onto the four cases. Unknown
    /// angles fall back to portrait.
    #[must_use]
    pub fn from_angle(angle: u16) -> Self {
        match angle {
            90 => Self::LandscapeLeft,
            270 => Self::LandscapeRight,
            180 => Self::PortraitFlipped,
            _ => Self::Portrait,
        }
    }
}

/// Gyroscope baseline, captured from the first reading after load.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Baseline {
    beta: f64,
    gamma: f64,
}

/// Turns raw orientation readings into the clamped motion offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrientationTracker {
    baseline: Option<Baseline>,
    offset: Vec2,
}

impl OrientationTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one orientation reading.
    ///
    /// The first reading becomes the baseline and therefore yields a zero
    /// offset. Subsequent readings produce the baseline-relative delta,
    /// remapped for `orientation` and clamped per-axis to ±23°.
    pub fn observe(&mut self, orientation: Orientation, beta: f64, gamma: f64) {
        let base = *self.baseline.get_or_insert(Baseline { beta, gamma });
        let d_beta = beta - base.beta;
        let d_gamma = gamma - base.gamma;
        let raw = match orientation {
            Orientation::Portrait => Vec2::new(d_gamma, d_beta),
            Orientation::LandscapeLeft => Vec2::new(d_beta, -d_gamma),
            Orientation::LandscapeRight => Vec2::new(-d_beta, d_gamma),
            Orientation::PortraitFlipped => Vec2::new(-d_gamma, -d_beta),
        };
        self.offset = raw.clamp_each(MOTION_MAX_DEG);
    }

    /// Reset after an orientation-change event.
    ///
    /// The baseline becomes *zero*, not unset: the next reading is treated as
    /// a delta from absolute level rather than re-captured the way the first
    /// reading after load is. Deliberately asymmetric with initial load.
    pub fn reset_baseline(&mut self) {
        self.baseline = Some(Baseline { beta: 0.0, gamma: 0.0 });
    }

    /// Current clamped motion offset, in degrees.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Whether a baseline has been established.
    #[must_use]
    pub fn has_baseline(&self) -> bool {
        self.baseline.is_some()
    }
}
