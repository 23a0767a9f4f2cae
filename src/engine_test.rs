#![allow(clippy::float_cmp)]

use super::*;
use crate::scene::Scene;

const EPSILON: f64 = 1e-10;

fn core() -> EngineCore {
    EngineCore::new(Scene::builtin())
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn new_core_is_idle_and_not_ready() {
    let mut core = core();
    assert!(!core.is_ready());
    assert!(!core.snap_back_active());
    let frame = core.frame(0.0);
    assert_eq!(frame.pointer, Vec2::ZERO);
    assert_eq!(frame.motion, Vec2::ZERO);
    assert_eq!(frame.tilt, Tilt::default());
}

#[test]
fn assets_ready_gate() {
    let mut core = core();
    assert!(!core.is_ready());
    core.set_assets_ready();
    assert!(core.is_ready());
}

// =============================================================
// Pointer flow
// =============================================================

#[test]
fn drag_produces_anchor_relative_frame() {
    let mut core = core();
    core.on_pointer_down(Vec2::new(100.0, 100.0));
    core.on_pointer_move(Vec2::new(130.0, 115.0));

    let frame = core.frame(16.0);
    assert_eq!(frame.pointer, Vec2::new(30.0, 15.0));
    assert!((frame.tilt.x_deg - -1.5).abs() < EPSILON);
    assert!((frame.tilt.y_deg - 3.0).abs() < EPSILON);
}

#[test]
fn move_without_down_is_ignored() {
    let mut core = core();
    core.on_pointer_move(Vec2::new(400.0, 400.0));
    assert_eq!(core.frame(0.0).pointer, Vec2::ZERO);
}

#[test]
fn release_starts_snap_back_from_current_offset() {
    let mut core = core();
    core.on_pointer_down(Vec2::new(0.0, 0.0));
    core.on_pointer_move(Vec2::new(30.0, 15.0));
    core.on_pointer_up(1000.0);

    assert!(core.snap_back_active());
    // At the release timestamp the tween has consumed no time yet.
    assert_eq!(core.frame(1000.0).pointer, Vec2::new(30.0, 15.0));
}

#[test]
fn snap_back_converges_to_rest_and_clears() {
    let mut core = core();
    core.on_pointer_down(Vec2::new(0.0, 0.0));
    core.on_pointer_move(Vec2::new(40.0, -20.0));
    core.on_pointer_up(1000.0);

    let settled = core.frame(1300.0);
    assert!(settled.pointer.x.abs() < EPSILON);
    assert!(settled.pointer.y.abs() < EPSILON);
    assert!(!core.snap_back_active());

    // Later frames stay at rest.
    assert_eq!(core.frame(1400.0).pointer, core.frame(1500.0).pointer);
}

#[test]
fn snap_back_shrinks_offset_mid_flight() {
    let mut core = core();
    core.on_pointer_down(Vec2::new(0.0, 0.0));
    core.on_pointer_move(Vec2::new(100.0, 0.0));
    core.on_pointer_up(0.0);

    let mid = core.frame(150.0);
    assert!(mid.pointer.x.abs() < 100.0);
}

#[test]
fn new_gesture_cancels_snap_back_and_holds_offset() {
    let mut core = core();
    core.on_pointer_down(Vec2::new(0.0, 0.0));
    core.on_pointer_move(Vec2::new(60.0, 30.0));
    core.on_pointer_up(0.0);

    let mid = core.frame(150.0).pointer;
    core.on_pointer_down(Vec2::new(500.0, 500.0));
    assert!(!core.snap_back_active());

    // No move yet, so the offset holds where the tween left it.
    assert_eq!(core.frame(200.0).pointer, mid);

    // The first move re-derives the offset from the new anchor.
    core.on_pointer_move(Vec2::new(510.0, 495.0));
    assert_eq!(core.frame(216.0).pointer, Vec2::new(10.0, -5.0));
}

#[test]
fn moves_during_snap_back_are_ignored() {
    let mut core = core();
    core.on_pointer_down(Vec2::new(0.0, 0.0));
    core.on_pointer_move(Vec2::new(30.0, 15.0));
    core.on_pointer_up(0.0);

    core.on_pointer_move(Vec2::new(999.0, 999.0));
    assert_eq!(core.frame(0.0).pointer, Vec2::new(30.0, 15.0));
}

// =============================================================
// Motion flow
// =============================================================

#[test]
fn orientation_readings_reach_the_frame() {
    let mut core = core();
    core.on_orientation(Orientation::Portrait, 10.0, 5.0);
    core.on_orientation(Orientation::Portrait, 13.0, 7.0);

    let frame = core.frame(0.0);
    assert_eq!(frame.motion, Vec2::new(2.0, 3.0));
    assert!((frame.tilt.x_deg - 3.0).abs() < EPSILON);
    assert!((frame.tilt.y_deg - 2.0).abs() < EPSILON);
}

#[test]
fn orientation_offset_is_clamped_in_frames() {
    let mut core = core();
    core.on_orientation(Orientation::Portrait, 0.0, 0.0);
    core.on_orientation(Orientation::Portrait, 120.0, -120.0);
    assert_eq!(core.frame(0.0).motion, Vec2::new(-23.0, 23.0));
}

#[test]
fn orientation_change_rebases_to_level() {
    let mut core = core();
    core.on_orientation(Orientation::Portrait, 10.0, 5.0);
    core.on_orientation_change();
    core.on_orientation(Orientation::LandscapeLeft, 4.0, 3.0);
    assert_eq!(core.frame(0.0).motion, Vec2::new(4.0, -3.0));
}

#[test]
fn pointer_and_motion_tilts_combine() {
    let mut core = core();
    core.on_pointer_down(Vec2::new(0.0, 0.0));
    core.on_pointer_move(Vec2::new(30.0, 15.0));
    core.on_orientation(Orientation::Portrait, 0.0, 0.0);
    core.on_orientation(Orientation::Portrait, 3.0, 2.0);

    let frame = core.frame(0.0);
    assert!((frame.tilt.x_deg - (-1.5 + 3.0)).abs() < EPSILON);
    assert!((frame.tilt.y_deg - (3.0 + 2.0)).abs() < EPSILON);
}
