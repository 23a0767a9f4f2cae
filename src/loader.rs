//! Image loading and the first-frame gate.
//!
//! One `HtmlImageElement` per layer. Every image gets `load`/`error`
//! handlers that count it as settled; when the last one settles, the
//! one-shot ready callback fires and the frame loop may start. An errored
//! image counts as settled too — it is logged and later skipped at draw
//! time, so one broken asset can't stall the first frame forever.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlImageElement;

use crate::scene::Scene;

/// Create one image element per scene layer, in layer order. No sources are
/// assigned yet; [`begin_load`] does that once handlers are wired.
///
/// # Errors
///
/// Returns `Err` if an image element cannot be constructed.
pub fn create_images(scene: &Scene) -> Result<Vec<HtmlImageElement>, JsValue> {
    let mut images = Vec::with_capacity(scene.len());
    for _ in scene.layers() {
        images.push(HtmlImageElement::new()?);
    }
    Ok(images)
}

/// Counts settled images and fires the ready callback exactly once, when the
/// count reaches the layer total.
struct LoadGate {
    total: usize,
    settled: Cell<usize>,
    on_ready: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl LoadGate {
    fn settle(&self) {
        let settled = self.settled.get() + 1;
        self.settled.set(settled);
        if settled == self.total {
            if let Some(on_ready) = self.on_ready.borrow_mut().take() {
                on_ready();
            }
        }
    }
}

/// Wire load handlers onto `images` (parallel to `scene.layers()`) and start
/// loading. `on_ready` runs once every image has settled.
///
/// Handlers are installed before sources are assigned so cached images can't
/// slip past the gate. The handler closures are leaked; they live for the
/// page lifetime like the images they watch.
pub fn begin_load(images: &[HtmlImageElement], scene: &Scene, on_ready: impl FnOnce() + 'static) {
    let gate = Rc::new(LoadGate {
        total: images.len(),
        settled: Cell::new(0),
        on_ready: RefCell::new(Some(Box::new(on_ready))),
    });

    for (image, layer) in images.iter().zip(scene.layers()) {
        let gate_for_load = Rc::clone(&gate);
        let on_load = Closure::<dyn FnMut()>::new(move || {
            gate_for_load.settle();
        });
        image.set_onload(Some(on_load.as_ref().unchecked_ref()));
        on_load.forget();

        let gate_for_error = Rc::clone(&gate);
        let src_for_error = layer.src.clone();
        let on_error = Closure::<dyn FnMut()>::new(move || {
            log::warn!("layer image failed to load: {src_for_error}");
            gate_for_error.settle();
        });
        image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();

        image.set_src(&layer.src);
    }
}
