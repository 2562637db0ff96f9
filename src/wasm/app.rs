//! Controller state and DOM event wiring.
//!
//! One `App` exists per page. Event closures share it through
//! `Rc<RefCell<…>>`; the browser serializes handlers and frame callbacks, so
//! no borrow is ever contended.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Element, MouseEvent, Window};

use crate::sim::{Fireworks, Point, RandomSource, Viewport};

use super::overlay::Overlay;
use super::render;

/// Pressed elements matching this selector get the short-lived burst.
const NAVIGATIONAL: &str = "a, button, [onclick]";

/// Browser-backed randomness for particle spawning.
struct DomRandom;

impl RandomSource for DomRandom {
    fn unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Everything the closures share: the simulation, the canvases, and the
/// handle of the currently scheduled animation frame.
struct App {
    effects: Fireworks,
    overlay: Overlay,
    rng: DomRandom,
    pending: Option<i32>,
}

type SharedApp = Rc<RefCell<App>>;
type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

thread_local! {
    static MOUNTED: Cell<bool> = Cell::new(false);
}

/// Build the overlay and register all listeners. Calling this twice is a
/// no-op; the page gets exactly one controller.
pub fn mount() -> Result<(), JsValue> {
    if MOUNTED.with(|flag| flag.replace(true)) {
        return Ok(());
    }

    let window = window().ok_or("no window")?;
    let viewport = viewport_size(&window)?;
    let overlay = Overlay::mount(&window, viewport)?;

    let app: SharedApp = Rc::new(RefCell::new(App {
        effects: Fireworks::new(viewport),
        overlay,
        rng: DomRandom,
        pending: None,
    }));

    let tick = make_frame_loop(&app);
    register_pointer_listener(&window, &app, &tick)?;
    register_lifecycle_listeners(&window, &app)?;
    register_resize_listener(&window, &app)?;

    log::info!(
        "firework overlay armed at {}x{}",
        viewport.width,
        viewport.height
    );
    Ok(())
}

fn viewport_size(window: &Window) -> Result<Viewport, JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or("viewport width is not a number")?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or("viewport height is not a number")?;
    Ok(Viewport { width, height })
}

/// The frame closure holds a slot to itself so it can reschedule, and stops
/// rescheduling once the simulation runs dry.
fn make_frame_loop(app: &SharedApp) -> FrameClosure {
    let slot: FrameClosure = Rc::new(RefCell::new(None));
    let handle = slot.clone();
    let app = app.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut state = app.borrow_mut();
        state.pending = None;

        state.overlay.clear();
        let active = state.effects.step();
        render::draw(&state.effects, state.overlay.work_context());
        if let Err(err) = state.overlay.blit() {
            log::error!("canvas blit failed: {err:?}");
        }

        if active {
            schedule(&mut state, &handle);
        }
    }) as Box<dyn FnMut()>));
    slot
}

fn schedule(state: &mut App, tick: &FrameClosure) {
    let Some(window) = window() else { return };
    let slot = tick.borrow();
    let Some(closure) = slot.as_ref() else { return };
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(handle) => state.pending = Some(handle),
        Err(err) => log::error!("request_animation_frame failed: {err:?}"),
    }
}

fn register_pointer_listener(
    window: &Window,
    app: &SharedApp,
    tick: &FrameClosure,
) -> Result<(), JsValue> {
    let app = app.clone();
    let tick = tick.clone();
    let on_press = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |event: MouseEvent| {
        let navigational = is_navigational(&event);
        let at = Point {
            x: f64::from(event.client_x()),
            y: f64::from(event.client_y()),
        };

        let mut state = app.borrow_mut();
        let App { effects, rng, .. } = &mut *state;
        effects.press(at, navigational, rng);
        log::debug!("burst at ({}, {}) navigational={navigational}", at.x, at.y);

        if !state.effects.running() {
            state.effects.mark_running();
            schedule(&mut state, &tick);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    window.add_event_listener_with_callback("mousedown", on_press.as_ref().unchecked_ref())?;
    on_press.forget();
    Ok(())
}

/// A press counts as navigational when it lands inside a link, a button, or
/// anything wired with an onclick attribute.
fn is_navigational(event: &MouseEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(NAVIGATIONAL).ok().flatten())
        .is_some()
}

fn register_lifecycle_listeners(window: &Window, app: &SharedApp) -> Result<(), JsValue> {
    for event in ["pagehide", "beforeunload"] {
        let app = app.clone();
        let on_leave = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            teardown(&mut app.borrow_mut());
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback(event, on_leave.as_ref().unchecked_ref())?;
        on_leave.forget();
    }
    Ok(())
}

/// Cancel the pending frame and drop all effect state, leaving no callback
/// behind to fire against a dead page. Safe to call when nothing is running.
fn teardown(state: &mut App) {
    if let Some(handle) = state.pending.take() {
        if let Some(window) = window() {
            let _ = window.cancel_animation_frame(handle);
        }
    }
    state.effects.clear();
    state.overlay.clear();
    log::info!("firework overlay torn down");
}

fn register_resize_listener(window: &Window, app: &SharedApp) -> Result<(), JsValue> {
    let app = app.clone();
    let on_resize = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let Some(window) = window() else { return };
        let Ok(viewport) = viewport_size(&window) else {
            return;
        };
        let mut state = app.borrow_mut();
        state.overlay.resize(viewport);
        state.effects.resize(viewport.width, viewport.height);
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}
