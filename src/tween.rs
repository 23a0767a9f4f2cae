//! Snap-back animation: eases the pointer offset home after a gesture ends.
//!
//! At most one [`SnapBack`] is in flight at a time; starting a new one (or a
//! new gesture) replaces it. Sampling is driven by the animation-frame
//! timestamp, which shares a timeline with `performance.now()`, so the tween
//! advances exactly once per rendered frame and never drifts against the
//! render loop.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

use crate::consts::{BACK_OVERSHOOT, SNAP_BACK_MS};
use crate::geom::Vec2;

/// Back-out easing: decelerates past the target, overshoots slightly, and
/// settles. `t` is normalized time in `[0, 1]`; the result starts at 0,
/// peaks just above 1, and ends at exactly 1.
#[must_use]
pub fn back_out(t: f64) -> f64 {
    let s = BACK_OVERSHOOT;
    let k = t - 1.0;
    k * k * ((s + 1.0) * k + s) + 1.0
}

/// One in-flight animation of the pointer offset toward zero.
#[derive(Debug, Clone, Copy)]
pub struct SnapBack {
    from: Vec2,
    start_ms: f64,
    duration_ms: f64,
}

impl SnapBack {
    /// Start easing `from` toward zero at frame time `now_ms`.
    #[must_use]
    pub fn start(from: Vec2, now_ms: f64) -> Self {
        Self { from, start_ms: now_ms, duration_ms: SNAP_BACK_MS }
    }

    /// The offset at frame time `now_ms`. Clamped: at or before the start it
    /// is exactly the starting offset, at or after the end exactly zero.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> Vec2 {
        let t = (now_ms - self.start_ms) / self.duration_ms;
        // back_out(0.0) carries rounding noise (~2e-16), so the start is
        // returned directly rather than through the curve.
        if t <= 0.0 {
            return self.from;
        }
        self.from.scale(1.0 - back_out(t.clamp(0.0, 1.0)))
    }

    /// Whether the animation has run its full duration at `now_ms`.
    #[must_use]
    pub fn finished(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }
}
