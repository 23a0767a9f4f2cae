//! Shared numeric constants for the parallax crate.

// ── Rotation ────────────────────────────────────────────────────

/// Degrees of surface tilt contributed per pixel of pointer offset.
pub const POINTER_ROTATION_MULTIPLIER: f64 = 0.1;

/// Degrees of surface tilt contributed per degree of motion offset.
pub const MOTION_ROTATION_MULTIPLIER: f64 = 1.0;

// ── Layer displacement ──────────────────────────────────────────

/// Pixels of layer displacement per pixel of pointer offset, per unit depth.
pub const POINTER_OFFSET_SCALE: f64 = 0.35;

/// Pixels of layer displacement per degree of motion offset, per unit depth.
pub const MOTION_OFFSET_SCALE: f64 = 2.5;

// ── Motion clamp ────────────────────────────────────────────────

/// Per-axis bound on the motion offset, in degrees. Larger deltas would slide
/// the flat layer art past its edges and break the depth illusion.
pub const MOTION_MAX_DEG: f64 = 23.0;

// ── Snap-back ───────────────────────────────────────────────────

/// Duration of the pointer snap-back animation, in milliseconds.
pub const SNAP_BACK_MS: f64 = 300.0;

/// Overshoot coefficient for the back-out easing curve.
pub const BACK_OVERSHOOT: f64 = 1.70158;

// ── Painting ────────────────────────────────────────────────────

/// Background fill painted beneath the layer stack.
pub const BACKGROUND_FILL: &str = "rgb(32,32,32)";
