use super::{Burst, EffectConfig, Particle, Point, RandomSource, Viewport, PALETTE};

/// The page-wide effect controller: every live burst, the running flag and
/// the viewport the particles are clipped against.
///
/// Burst order is insertion order, which is also draw order: later presses
/// paint on top of earlier ones.
#[derive(Debug)]
pub struct Fireworks {
    config: EffectConfig,
    viewport: Viewport,
    bursts: Vec<Burst>,
    running: bool,
}

impl Fireworks {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_config(EffectConfig::default(), viewport)
    }

    pub fn with_config(config: EffectConfig, viewport: Viewport) -> Self {
        Self {
            config,
            viewport,
            bursts: Vec::new(),
            running: false,
        }
    }

    /// Spawn a burst at `at`. Presses on navigational elements get the short
    /// lifetime so the effect never lingers across a page change.
    ///
    /// Off-viewport presses are tolerated; their particles fail the bounds
    /// check on the first step and the burst dies quietly.
    pub fn press(&mut self, at: Point, navigational: bool, rng: &mut dyn RandomSource) {
        let life = if navigational {
            self.config.nav_burst_life
        } else {
            self.config.burst_life
        };

        let mut burst = Burst::new(at, life);
        for _ in 0..self.config.particles_per_burst {
            let color = PALETTE[rng.pick_index(PALETTE.len())];
            let angle = rng.in_range(0.0, std::f64::consts::TAU);
            let speed = rng.in_range(self.config.min_speed, self.config.max_speed);
            burst.push(Particle::new(at, color, angle, speed));
        }
        self.bursts.push(burst);
    }

    /// One frame for every burst. Returns whether any burst survived; once
    /// this reports `false` the running flag is already down and the caller
    /// must not reschedule.
    pub fn step(&mut self) -> bool {
        if self.bursts.is_empty() {
            self.running = false;
            return false;
        }

        let viewport = self.viewport;
        let config = &self.config;
        for burst in &mut self.bursts {
            burst.step(viewport, config);
        }
        self.bursts.retain(|burst| !burst.is_stopped());

        if self.bursts.is_empty() {
            self.running = false;
            false
        } else {
            true
        }
    }

    /// Record the new viewport. In-flight particles are not repositioned;
    /// they are simply clipped against the new bounds from the next step on.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport { width, height };
    }

    /// Drop every burst and halt. Safe to call with nothing active.
    pub fn clear(&mut self) {
        self.bursts.clear();
        self.running = false;
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Raise the running flag. The caller owns the frame scheduling; the
    /// flag only tracks whether a loop is currently live.
    pub fn mark_running(&mut self) {
        self.running = true;
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }
}
