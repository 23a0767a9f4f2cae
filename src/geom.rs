//! Offset and tilt math: the two formulas at the heart of the parallax
//! illusion, plus the [`Vec2`] value type they operate on.
//!
//! Both formulas are pure functions of the current pointer offset (pixels
//! from the gesture anchor) and motion offset (degrees from the orientation
//! baseline). Everything here is browser-free and tested natively.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::consts::{
    MOTION_OFFSET_SCALE, MOTION_ROTATION_MULTIPLIER, POINTER_OFFSET_SCALE,
    POINTER_ROTATION_MULTIPLIER,
};

/// A 2D offset in either pixel or degree units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// The zero offset.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }

    /// Multiply both components by `k`.
    #[must_use]
    pub fn scale(self, k: f64) -> Self {
        Self { x: self.x * k, y: self.y * k }
    }

    /// Clamp each component to `[-bound, bound]`.
    #[must_use]
    pub fn clamp_each(self, bound: f64) -> Self {
        Self {
            x: self.x.clamp(-bound, bound),
            y: self.y.clamp(-bound, bound),
        }
    }
}

/// Rotation of the canvas surface around its two in-plane axes, in degrees.
///
/// `x_deg` rotates around the horizontal axis (nodding toward/away from the
/// viewer), `y_deg` around the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub x_deg: f64,
    pub y_deg: f64,
}

/// Draw offset for a layer of the given depth factor.
///
/// The pointer and motion contributions are independent and additive; each
/// scales linearly with `depth`, so deeper layers travel further and the
/// depth illusion follows. A negative depth moves the layer against the
/// gesture (receding), a positive depth with it (advancing).
#[must_use]
pub fn layer_offset(depth: f64, pointer: Vec2, motion: Vec2) -> Vec2 {
    Vec2 {
        x: pointer.x * depth * POINTER_OFFSET_SCALE + motion.x * depth * MOTION_OFFSET_SCALE,
        y: pointer.y * depth * POINTER_OFFSET_SCALE + motion.y * depth * MOTION_OFFSET_SCALE,
    }
}

/// Overall canvas tilt for the current offsets.
///
/// Pointer input contributes weakly (and with the vertical axis inverted, so
/// dragging up tips the surface away); motion input maps degree-for-degree.
#[must_use]
pub fn surface_tilt(pointer: Vec2, motion: Vec2) -> Tilt {
    Tilt {
        x_deg: pointer.y * -POINTER_ROTATION_MULTIPLIER + motion.y * MOTION_ROTATION_MULTIPLIER,
        y_deg: pointer.x * POINTER_ROTATION_MULTIPLIER + motion.x * MOTION_ROTATION_MULTIPLIER,
    }
}
