//! Particle drawing onto the working canvas.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::sim::Fireworks;

/// Paint every live particle as a filled circle. Bursts come back in spawn
/// order, so newer explosions land on top of older ones.
pub fn draw(effects: &Fireworks, context: &CanvasRenderingContext2d) {
    let radius = effects.config().radius;
    for burst in effects.bursts() {
        for particle in burst.particles() {
            let fill = JsValue::from_str(&particle.fill_color());
            #[allow(deprecated)]
            context.set_fill_style(&fill);
            context.begin_path();
            let _ = context.arc(
                particle.position().x,
                particle.position().y,
                radius,
                0.0,
                std::f64::consts::TAU,
            );
            context.fill();
        }
    }
}
