//! Rendering: composites the layer stack onto the 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of the
//! scene and the current [`FrameState`] and produces pixels — it does not
//! mutate any engine state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The frame loop ([`crate::boot`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::consts::BACKGROUND_FILL;
use crate::engine::FrameState;
use crate::geom;
use crate::scene::Scene;

/// Draw one frame: background plus every layer at its depth-scaled offset.
///
/// `images` is parallel to `scene.layers()`. A layer whose image never
/// decoded is skipped — the effect simply lacks that layer, nothing crashes.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    images: &[HtmlImageElement],
    frame: &FrameState,
    viewport_w: f64,
    viewport_h: f64,
) -> Result<(), JsValue> {
    // Phase 1: clear and paint the backdrop in default compositing state.
    ctx.set_global_composite_operation("source-over")?;
    ctx.set_global_alpha(1.0);
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.set_fill_style_str(BACKGROUND_FILL);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);

    // Phase 2: layers in registry order (back to front).
    for (layer, image) in scene.layers().iter().zip(images) {
        if !image_drawable(image) {
            continue;
        }
        ctx.set_global_composite_operation(layer.blend.composite_op())?;
        ctx.set_global_alpha(layer.opacity);
        let offset = geom::layer_offset(layer.depth, frame.pointer, frame.motion);
        ctx.draw_image_with_html_image_element(image, offset.x, offset.y)?;
    }

    // Leave the context in default state for the next frame.
    ctx.set_global_composite_operation("source-over")?;
    ctx.set_global_alpha(1.0);
    Ok(())
}

/// Whether an image has decoded into drawable pixels. A settled-but-errored
/// image reports `complete` with zero natural width.
fn image_drawable(image: &HtmlImageElement) -> bool {
    image.complete() && image.natural_width() > 0
}
