//! Parallax illustration renderer for the browser.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of a layered parallax scene: loading layer images, tracking
//! pointer and gyroscope input, easing the pointer offset back to rest after a
//! gesture, and compositing every layer onto a 2D canvas once per display
//! refresh. The host page only provides a `<canvas>` element and calls
//! [`boot::mount`] (or [`boot::mount_with_manifest`] with its own scene).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | WASM shell and the testable [`engine::EngineCore`] |
//! | [`scene`] | Layer registry, scene manifest, blend modes |
//! | [`geom`] | Offset/tilt math and the [`geom::Vec2`] value type |
//! | [`input`] | Pointer gesture and device-orientation trackers |
//! | [`tween`] | Snap-back animation of the pointer offset |
//! | [`render`] | Layer compositing onto the 2D context |
//! | [`loader`] | Image loading and the first-frame gate |
//! | [`boot`] | Mount entry points, DOM wiring, frame loop |
//! | [`consts`] | Shared numeric constants (multipliers, clamps, timing) |

pub mod boot;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod input;
pub mod loader;
pub mod render;
pub mod scene;
pub mod tween;
