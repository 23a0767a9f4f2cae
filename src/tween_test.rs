#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

// --- back_out ---

#[test]
fn back_out_starts_at_zero() {
    assert!(back_out(0.0).abs() < EPSILON);
}

#[test]
fn back_out_ends_at_one() {
    assert!((back_out(1.0) - 1.0).abs() < EPSILON);
}

#[test]
fn back_out_overshoots_past_one() {
    // The defining feature of back easing: somewhere mid-flight the curve
    // crosses 1 and keeps going before settling.
    let peak = (1..100)
        .map(|i| back_out(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
    assert!(peak < 1.2);
}

#[test]
fn back_out_rises_early() {
    assert!(back_out(0.25) > back_out(0.0));
    assert!(back_out(0.5) > back_out(0.25));
}

// --- SnapBack ---

#[test]
fn sample_at_start_is_starting_offset() {
    let tween = SnapBack::start(Vec2::new(30.0, 15.0), 1000.0);
    assert_eq!(tween.sample(1000.0), Vec2::new(30.0, 15.0));
}

#[test]
fn sample_before_start_clamps_to_starting_offset() {
    let tween = SnapBack::start(Vec2::new(30.0, 15.0), 1000.0);
    assert_eq!(tween.sample(900.0), Vec2::new(30.0, 15.0));
}

#[test]
fn sample_at_or_before_start_is_bit_exact() {
    // The starting offset must come back untouched, not scaled by a curve
    // value that is almost-but-not-quite zero.
    let from = Vec2::new(29.7, -13.3);
    let tween = SnapBack::start(from, 123.456);
    assert_eq!(tween.sample(123.456), from);
    assert_eq!(tween.sample(0.0), from);
}

#[test]
fn sample_at_duration_is_exactly_zero() {
    let tween = SnapBack::start(Vec2::new(30.0, 15.0), 1000.0);
    let end = tween.sample(1300.0);
    assert!(end.x.abs() < EPSILON);
    assert!(end.y.abs() < EPSILON);
}

#[test]
fn sample_past_duration_stays_zero() {
    let tween = SnapBack::start(Vec2::new(-50.0, 20.0), 0.0);
    let late = tween.sample(10_000.0);
    assert!(late.x.abs() < EPSILON);
    assert!(late.y.abs() < EPSILON);
}

#[test]
fn sample_mid_flight_is_near_zero() {
    // Back-out crosses zero early and hovers in the small overshoot band for
    // the rest of the flight.
    let tween = SnapBack::start(Vec2::new(30.0, 15.0), 0.0);
    let mid = tween.sample(150.0);
    assert!(mid.x.abs() < 30.0 * 0.2);
    assert!(mid.y.abs() < 15.0 * 0.2);
}

#[test]
fn sample_preserves_axis_ratio() {
    // Both axes share one eased scalar, so the offset shrinks along its
    // original direction.
    let tween = SnapBack::start(Vec2::new(40.0, 10.0), 0.0);
    let mid = tween.sample(100.0);
    assert!((mid.x * 10.0 - mid.y * 40.0).abs() < EPSILON);
}

#[test]
fn finished_flips_at_duration() {
    let tween = SnapBack::start(Vec2::new(1.0, 1.0), 500.0);
    assert!(!tween.finished(500.0));
    assert!(!tween.finished(799.9));
    assert!(tween.finished(800.0));
    assert!(tween.finished(900.0));
}

#[test]
fn zero_offset_tween_is_identically_zero() {
    let tween = SnapBack::start(Vec2::ZERO, 0.0);
    assert_eq!(tween.sample(150.0), Vec2::ZERO);
    assert_eq!(tween.sample(300.0), Vec2::ZERO);
}
