//! Top-level engine: the browser-free [`EngineCore`] and the WASM [`Engine`]
//! shell that binds it to a canvas element.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::geom::{self, Tilt, Vec2};
use crate::input::{Orientation, OrientationTracker, PointerTracker};
use crate::render;
use crate::scene::Scene;
use crate::tween::SnapBack;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Snapshot of everything one frame needs: the two offsets as of this frame's
/// timestamp, and the surface tilt derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Pointer offset from the gesture anchor, in pixels.
    pub pointer: Vec2,
    /// Clamped motion offset from the orientation baseline, in degrees.
    pub motion: Vec2,
    /// Canvas surface tilt for this frame.
    pub tilt: Tilt,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies.
pub struct EngineCore {
    /// The immutable layer registry.
    pub scene: Scene,
    /// The active press/touch gesture.
    pub pointer: PointerTracker,
    /// The device-orientation stream.
    pub motion: OrientationTracker,
    snap_back: Option<SnapBack>,
    assets_ready: bool,
}

impl EngineCore {
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            pointer: PointerTracker::new(),
            motion: OrientationTracker::new(),
            snap_back: None,
            assets_ready: false,
        }
    }

    // --- Input events ---

    /// A press or touch started at `position`. Cancels any in-flight
    /// snap-back; the offset holds until the first move re-derives it.
    pub fn on_pointer_down(&mut self, position: Vec2) {
        self.snap_back = None;
        self.pointer.begin(position);
    }

    /// The pointer moved to `position`. A no-op unless a gesture is active.
    pub fn on_pointer_move(&mut self, position: Vec2) {
        self.pointer.move_to(position);
    }

    /// The press or touch ended. Starts the snap-back from the current
    /// offset, timed against the frame clock via `now_ms`.
    pub fn on_pointer_up(&mut self, now_ms: f64) {
        self.pointer.end();
        self.snap_back = Some(SnapBack::start(self.pointer.offset(), now_ms));
    }

    /// One device-orientation reading arrived.
    pub fn on_orientation(&mut self, orientation: Orientation, beta: f64, gamma: f64) {
        self.motion.observe(orientation, beta, gamma);
    }

    /// The device rotated between portrait and landscape.
    pub fn on_orientation_change(&mut self) {
        self.motion.reset_baseline();
    }

    // --- Asset gate ---

    /// Mark every layer image as settled. The frame loop must not run before
    /// this is called.
    pub fn set_assets_ready(&mut self) {
        self.assets_ready = true;
    }

    /// Whether the first frame may render.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.assets_ready
    }

    /// Whether a snap-back animation is in flight.
    #[must_use]
    pub fn snap_back_active(&self) -> bool {
        self.snap_back.is_some()
    }

    // --- Frame ---

    /// Advance one frame at timestamp `now_ms`: step the snap-back (if any)
    /// exactly once, then snapshot the offsets and tilt for drawing.
    pub fn frame(&mut self, now_ms: f64) -> FrameState {
        if let Some(snap_back) = self.snap_back {
            self.pointer.set_offset(snap_back.sample(now_ms));
            if snap_back.finished(now_ms) {
                self.snap_back = None;
            }
        }
        let pointer = self.pointer.offset();
        let motion = self.motion.offset();
        FrameState {
            pointer,
            motion,
            tilt: geom::surface_tilt(pointer, motion),
        }
    }
}

/// The full engine. Wraps `EngineCore` and owns the canvas element, its 2D
/// context, and the layer image elements (parallel to `core.scene.layers()`).
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    images: Vec<HtmlImageElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Bind an engine to `canvas` for `scene`, with one image element per
    /// layer (created by [`crate::loader::create_images`]).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the image list doesn't match the scene or the canvas
    /// has no 2D context.
    pub fn new(
        canvas: HtmlCanvasElement,
        scene: Scene,
        images: Vec<HtmlImageElement>,
    ) -> Result<Self, JsValue> {
        if images.len() != scene.len() {
            return Err(JsValue::from_str("image count does not match scene layer count"));
        }
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, images, core: EngineCore::new(scene) })
    }

    /// Advance the core by one frame. Delegates to [`EngineCore::frame`].
    pub fn tick(&mut self, now_ms: f64) -> FrameState {
        self.core.frame(now_ms)
    }

    /// Draw the frame: tilt the canvas element, then composite the layers.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the CSS transform cannot be set or any `Canvas2D`
    /// call fails.
    pub fn render(&self, frame: &FrameState) -> Result<(), JsValue> {
        self.canvas.style().set_property(
            "transform",
            &format!("rotateX({:.4}deg) rotateY({:.4}deg)", frame.tilt.x_deg, frame.tilt.y_deg),
        )?;
        render::draw(
            &self.ctx,
            &self.core.scene,
            &self.images,
            frame,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )
    }
}
