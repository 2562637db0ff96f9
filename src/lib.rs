//! Mouse-click firework bursts for a web page, compiled to WebAssembly.
//!
//! The particle rules live in [`sim`] and are target independent; the
//! `wasm` module owns the overlay canvases and the DOM wiring, and only
//! exists on `wasm32` targets.

pub mod sim;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    mod app;
    mod overlay;
    mod render;

    pub use app::mount;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Modules can be evaluated before parsing finishes; mounting exactly
        // once from here is what keeps the listeners from double-registering.
        if document.ready_state() == web_sys::DocumentReadyState::Loading {
            let once = Closure::once(move || {
                if let Err(err) = app::mount() {
                    log::error!("overlay mount failed: {err:?}");
                }
            });
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                once.as_ref().unchecked_ref(),
            )?;
            once.forget();
        } else {
            app::mount()?;
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::mount;
