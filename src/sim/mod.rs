//! Target-independent simulation core for the click-burst effect.
//!
//! Nothing in here touches the DOM, so burst and particle behavior can be
//! exercised with plain `cargo test` on the host. The wasm layer owns the
//! canvases and feeds this state machine from browser events.

mod burst;
mod fireworks;
mod particle;
mod random;

pub use burst::Burst;
pub use fireworks::Fireworks;
pub use particle::{Particle, PALETTE};
pub use random::RandomSource;

/// A point in viewport (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Current viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Tunables for the effect.
///
/// The defaults reproduce the classic cursor-fireworks look: sixteen
/// particles per press, a sixty-frame burst (twenty when the press lands on
/// a navigational element), and a fixed opacity fade per frame.
#[derive(Clone, Debug)]
pub struct EffectConfig {
    /// Particles spawned per press.
    pub particles_per_burst: usize,
    /// Burst lifetime in frames.
    pub burst_life: u32,
    /// Burst lifetime when the press target is a link or button.
    pub nav_burst_life: u32,
    /// Opacity lost per frame; a particle is pruned once it hits zero.
    pub fade_step: f64,
    /// Downward drift added per frame, scaled by the particle's age.
    pub drift: f64,
    /// Lower bound of the random particle speed.
    pub min_speed: f64,
    /// Upper bound of the random particle speed.
    pub max_speed: f64,
    /// Particle radius in pixels.
    pub radius: f64,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            particles_per_burst: 16,
            burst_life: 60,
            nav_burst_life: 20,
            fade_step: 0.02,
            drift: 0.3,
            min_speed: 1.0,
            max_speed: 3.0,
            radius: 4.0,
        }
    }
}
