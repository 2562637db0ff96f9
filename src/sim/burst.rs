use super::{EffectConfig, Particle, Point, Viewport};

/// One explosion: a shared lifetime countdown and the particles it owns.
///
/// A burst stops when its lifetime runs out or when every particle has been
/// pruned; the controller drops stopped bursts at the end of the same frame.
#[derive(Clone, Debug)]
pub struct Burst {
    origin: Point,
    life: u32,
    particles: Vec<Particle>,
    stopped: bool,
}

impl Burst {
    pub(crate) fn new(origin: Point, life: u32) -> Self {
        Self {
            origin,
            life,
            particles: Vec::new(),
            stopped: false,
        }
    }

    pub(crate) fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// One frame: count the lifetime down, prune dead particles, advance the
    /// survivors. Pruning runs as a rebuild pass before the advance so no
    /// element is ever skipped mid-iteration.
    pub(crate) fn step(&mut self, area: Viewport, config: &EffectConfig) {
        if self.stopped {
            return;
        }

        self.life = self.life.saturating_sub(1);
        if self.life == 0 {
            self.particles.clear();
            self.stopped = true;
            return;
        }

        self.particles
            .retain(|particle| particle.in_bounds(area) && particle.visible());
        for particle in &mut self.particles {
            particle.advance(config);
        }

        if self.particles.is_empty() {
            self.stopped = true;
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Frames left before the burst expires.
    pub fn life(&self) -> u32 {
        self.life
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PALETTE;

    const AREA: Viewport = Viewport {
        width: 1000.0,
        height: 1000.0,
    };

    fn immortal_config() -> EffectConfig {
        // No fade and no motion, so only the lifetime can end the burst.
        EffectConfig {
            fade_step: 0.0,
            drift: 0.0,
            ..EffectConfig::default()
        }
    }

    fn burst_with_particles(life: u32, count: usize) -> Burst {
        let origin = Point { x: 500.0, y: 500.0 };
        let mut burst = Burst::new(origin, life);
        for _ in 0..count {
            burst.push(Particle::new(origin, PALETTE[0], 0.0, 0.0));
        }
        burst
    }

    #[test]
    fn empty_burst_stops_on_first_step() {
        let mut burst = Burst::new(Point { x: 0.0, y: 0.0 }, 60);
        burst.step(AREA, &EffectConfig::default());
        assert!(burst.is_stopped());
    }

    #[test]
    fn lifetime_exhaustion_stops_the_burst_and_drops_particles() {
        let config = immortal_config();
        let mut burst = burst_with_particles(60, 4);

        for _ in 0..59 {
            burst.step(AREA, &config);
        }
        assert!(!burst.is_stopped());
        assert_eq!(burst.particles().len(), 4);

        burst.step(AREA, &config);
        assert!(burst.is_stopped());
        assert!(burst.particles().is_empty());
    }

    #[test]
    fn particle_count_never_grows() {
        let config = EffectConfig::default();
        let mut burst = burst_with_particles(200, 8);

        let mut last = burst.particles().len();
        while !burst.is_stopped() {
            burst.step(AREA, &config);
            assert!(burst.particles().len() <= last);
            last = burst.particles().len();
        }
    }

    #[test]
    fn faded_particles_are_pruned_within_the_fade_bound() {
        let config = EffectConfig::default();
        let mut burst = burst_with_particles(200, 3);

        for _ in 0..53 {
            burst.step(AREA, &config);
        }
        // 1.0 at a 0.02 fade is gone by frame ~51, plus one frame for the
        // prune pass to observe it.
        assert!(burst.particles().is_empty());
        assert!(burst.is_stopped());
    }

    #[test]
    fn out_of_viewport_particles_are_pruned() {
        let config = immortal_config();
        let origin = Point { x: -50.0, y: -50.0 };
        let mut burst = Burst::new(origin, 60);
        burst.push(Particle::new(origin, PALETTE[2], 1.0, 1.0));

        burst.step(AREA, &config);
        assert!(burst.particles().is_empty());
        assert!(burst.is_stopped());
    }

    #[test]
    fn stopped_burst_ignores_further_steps() {
        let mut burst = Burst::new(Point { x: 0.0, y: 0.0 }, 1);
        burst.step(AREA, &EffectConfig::default());
        assert!(burst.is_stopped());

        // A second step must not underflow the counter or revive anything.
        burst.step(AREA, &EffectConfig::default());
        assert!(burst.is_stopped());
        assert_eq!(burst.life(), 0);
    }
}
