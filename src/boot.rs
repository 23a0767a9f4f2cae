//! Mount entry points and browser wiring.
//!
//! The host page provides a `<canvas>` and calls [`mount`] (built-in scene)
//! or [`mount_with_manifest`] (its own JSON manifest). Mounting wires mouse,
//! touch, and orientation listeners into the engine core, starts the layer
//! images loading, and — once every image has settled — begins the
//! requestAnimationFrame loop. The loop runs for the page lifetime; listener
//! and frame closures are intentionally leaked.
//!
//! All shared state lives in an `Rc<RefCell<Engine>>`. Event callbacks and
//! the frame callback are serialized by the browser event loop, so borrows
//! never overlap.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, DeviceOrientationEvent, Event, HtmlCanvasElement, MouseEvent,
    TouchEvent, Window,
};

use crate::engine::Engine;
use crate::geom::Vec2;
use crate::input::Orientation;
use crate::loader;
use crate::scene::Scene;

/// Mount the built-in ten-layer illustration onto the canvas with the given
/// element id.
///
/// # Errors
///
/// Returns `Err` if the canvas element is missing or any DOM call fails.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<(), JsValue> {
    mount_scene(canvas_id, Scene::builtin())
}

/// Mount a host-supplied scene manifest onto the canvas with the given
/// element id.
///
/// # Errors
///
/// Returns `Err` if the manifest is invalid, the canvas element is missing,
/// or any DOM call fails.
#[wasm_bindgen]
pub fn mount_with_manifest(canvas_id: &str, manifest_json: &str) -> Result<(), JsValue> {
    let scene = Scene::from_json(manifest_json)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    mount_scene(canvas_id, scene)
}

fn mount_scene(canvas_id: &str, scene: Scene) -> Result<(), JsValue> {
    init_diagnostics();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str("canvas element not found"))?
        .dyn_into::<HtmlCanvasElement>()?;

    let images = loader::create_images(&scene)?;
    let engine = Rc::new(RefCell::new(Engine::new(
        canvas.clone(),
        scene.clone(),
        images.clone(),
    )?));

    register_pointer_listeners(&window, &canvas, &engine)?;
    register_motion_listeners(&window, &engine)?;

    // The frame loop starts only once every layer image has settled; drawing
    // earlier would composite undefined pixels.
    let engine_for_ready = Rc::clone(&engine);
    loader::begin_load(&images, &scene, move || {
        engine_for_ready.borrow_mut().core.set_assets_ready();
        log::info!("all layer images settled; starting frame loop");
        start_frame_loop(&engine_for_ready);
    });

    log::info!("parallax scene mounted on #{canvas_id} ({} layers)", scene.len());
    Ok(())
}

fn init_diagnostics() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // A second mount on the same page; the logger is already installed.
    }
}

// =============================================================
// Input wiring
// =============================================================

fn mouse_point(event: &MouseEvent) -> Vec2 {
    Vec2::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn touch_point(event: &TouchEvent) -> Option<Vec2> {
    let touch = event.touches().get(0)?;
    Some(Vec2::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

fn now_ms(window: &Window) -> f64 {
    window.performance().map_or(0.0, |performance| performance.now())
}

fn current_orientation(window: &Window) -> Orientation {
    match window.screen() {
        Ok(screen) => match screen.orientation().angle() {
            Ok(angle) => Orientation::from_angle(angle),
            Err(_) => Orientation::Portrait,
        },
        Err(_) => Orientation::Portrait,
    }
}

/// Gesture starts are captured on the canvas; moves and releases on the
/// window, so a drag that leaves the canvas still tracks and still ends.
fn register_pointer_listeners(
    window: &Window,
    canvas: &HtmlCanvasElement,
    engine: &Rc<RefCell<Engine>>,
) -> Result<(), JsValue> {
    let engine_for_mouse_down = Rc::clone(engine);
    let on_mouse_down = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        engine_for_mouse_down
            .borrow_mut()
            .core
            .on_pointer_down(mouse_point(&event));
    });
    canvas.add_event_listener_with_callback("mousedown", on_mouse_down.as_ref().unchecked_ref())?;
    on_mouse_down.forget();

    let engine_for_touch_start = Rc::clone(engine);
    let on_touch_start = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
        if let Some(point) = touch_point(&event) {
            engine_for_touch_start.borrow_mut().core.on_pointer_down(point);
        }
    });
    canvas
        .add_event_listener_with_callback("touchstart", on_touch_start.as_ref().unchecked_ref())?;
    on_touch_start.forget();

    let engine_for_mouse_move = Rc::clone(engine);
    let on_mouse_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        event.prevent_default();
        engine_for_mouse_move
            .borrow_mut()
            .core
            .on_pointer_move(mouse_point(&event));
    });
    window.add_event_listener_with_callback("mousemove", on_mouse_move.as_ref().unchecked_ref())?;
    on_mouse_move.forget();

    // Touch moves must not scroll the page; that needs a non-passive
    // listener so prevent_default is honored.
    let engine_for_touch_move = Rc::clone(engine);
    let on_touch_move = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
        event.prevent_default();
        if let Some(point) = touch_point(&event) {
            engine_for_touch_move.borrow_mut().core.on_pointer_move(point);
        }
    });
    let touch_move_options = AddEventListenerOptions::new();
    touch_move_options.set_passive(false);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        on_touch_move.as_ref().unchecked_ref(),
        &touch_move_options,
    )?;
    on_touch_move.forget();

    let engine_for_mouse_up = Rc::clone(engine);
    let window_for_mouse_up = window.clone();
    let on_mouse_up = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
        let now = now_ms(&window_for_mouse_up);
        engine_for_mouse_up.borrow_mut().core.on_pointer_up(now);
    });
    window.add_event_listener_with_callback("mouseup", on_mouse_up.as_ref().unchecked_ref())?;
    on_mouse_up.forget();

    let engine_for_touch_end = Rc::clone(engine);
    let window_for_touch_end = window.clone();
    let on_touch_end = Closure::<dyn FnMut(TouchEvent)>::new(move |_event: TouchEvent| {
        let now = now_ms(&window_for_touch_end);
        engine_for_touch_end.borrow_mut().core.on_pointer_up(now);
    });
    window.add_event_listener_with_callback("touchend", on_touch_end.as_ref().unchecked_ref())?;
    on_touch_end.forget();

    Ok(())
}

fn register_motion_listeners(
    window: &Window,
    engine: &Rc<RefCell<Engine>>,
) -> Result<(), JsValue> {
    let engine_for_orientation = Rc::clone(engine);
    let window_for_orientation = window.clone();
    let on_orientation =
        Closure::<dyn FnMut(DeviceOrientationEvent)>::new(move |event: DeviceOrientationEvent| {
            // Readings without both angles carry no usable signal.
            let (Some(beta), Some(gamma)) = (event.beta(), event.gamma()) else {
                return;
            };
            let orientation = current_orientation(&window_for_orientation);
            engine_for_orientation
                .borrow_mut()
                .core
                .on_orientation(orientation, beta, gamma);
        });
    window.add_event_listener_with_callback(
        "deviceorientation",
        on_orientation.as_ref().unchecked_ref(),
    )?;
    on_orientation.forget();

    let engine_for_change = Rc::clone(engine);
    let on_orientation_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        engine_for_change.borrow_mut().core.on_orientation_change();
    });
    window.add_event_listener_with_callback(
        "orientationchange",
        on_orientation_change.as_ref().unchecked_ref(),
    )?;
    on_orientation_change.forget();

    Ok(())
}

// =============================================================
// Frame loop
// =============================================================

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Start the per-refresh loop. The closure holds itself through a shared
/// `Option` so it can re-schedule recursively; it runs until the page goes
/// away.
fn start_frame_loop(engine: &Rc<RefCell<Engine>>) {
    let holder: FrameClosure = Rc::new(RefCell::new(None));
    let holder_for_frame = Rc::clone(&holder);
    let engine_for_frame = Rc::clone(engine);

    *holder.borrow_mut() = Some(Closure::new(move |timestamp_ms: f64| {
        {
            let mut engine = engine_for_frame.borrow_mut();
            let frame = engine.tick(timestamp_ms);
            if let Err(err) = engine.render(&frame) {
                log::warn!("frame render failed: {err:?}");
            }
        }
        schedule_frame(&holder_for_frame);
    }));
    schedule_frame(&holder);
}

fn schedule_frame(holder: &FrameClosure) {
    let Some(window) = web_sys::window() else {
        log::warn!("window unavailable; frame loop stopped");
        return;
    };
    let holder_ref = holder.borrow();
    let Some(frame) = holder_ref.as_ref() else {
        return;
    };
    if let Err(err) = window.request_animation_frame(frame.as_ref().unchecked_ref()) {
        log::warn!("request_animation_frame failed: {err:?}");
    }
}
