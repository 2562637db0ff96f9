//! End-to-end flow through the simulation core on the host, no browser
//! involved. Randomness comes from a seeded generator so every run spawns
//! the same bursts.

use fireworks_wasm::sim::{Fireworks, Point, RandomSource, Viewport, PALETTE};
use rand::{rngs::StdRng, Rng, SeedableRng};

struct SeededRandom(StdRng);

impl SeededRandom {
    fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

fn controller() -> Fireworks {
    Fireworks::new(Viewport {
        width: 800.0,
        height: 600.0,
    })
}

#[test]
fn press_then_sixty_unattended_steps_runs_dry() {
    let mut rng = SeededRandom::new(7);
    let mut fx = controller();

    fx.press(Point { x: 100.0, y: 100.0 }, false, &mut rng);
    fx.mark_running();

    let burst = &fx.bursts()[0];
    assert_eq!(burst.particles().len(), 16);
    assert_eq!(burst.origin(), Point { x: 100.0, y: 100.0 });
    assert_eq!(burst.life(), 60);

    for _ in 0..60 {
        fx.step();
    }
    assert!(fx.bursts().is_empty());
    assert!(!fx.running());
}

#[test]
fn spawned_particles_respect_the_configured_ranges() {
    let mut rng = SeededRandom::new(42);
    let mut fx = controller();

    for i in 0..20 {
        fx.press(
            Point {
                x: 40.0 * f64::from(i),
                y: 300.0,
            },
            false,
            &mut rng,
        );
    }

    for burst in fx.bursts() {
        for particle in burst.particles() {
            assert!(particle.speed() >= 1.0 && particle.speed() < 3.0);
            assert!(particle.angle() >= 0.0 && particle.angle() < std::f64::consts::TAU);
            assert!(PALETTE.contains(&particle.color()));
            assert_eq!(particle.opacity(), 1.0);
        }
    }
}

#[test]
fn opacity_only_ever_decreases_across_the_whole_run() {
    let mut rng = SeededRandom::new(3);
    let mut fx = controller();
    fx.press(Point { x: 400.0, y: 300.0 }, false, &mut rng);

    let mut last_opacities: Vec<f64> = fx.bursts()[0]
        .particles()
        .iter()
        .map(|p| p.opacity())
        .collect();

    while fx.step() {
        let Some(burst) = fx.bursts().first() else {
            break;
        };
        let opacities: Vec<f64> = burst.particles().iter().map(|p| p.opacity()).collect();
        // Particles are only ever removed, so the survivors compare against
        // a prefix-sized slice of the previous frame at most.
        assert!(opacities.len() <= last_opacities.len());
        for opacity in &opacities {
            assert!(last_opacities.iter().any(|prev| prev >= opacity));
        }
        last_opacities = opacities;
    }
    assert!(fx.bursts().is_empty());
}

#[test]
fn navigational_and_plain_presses_differ_only_in_lifetime() {
    let mut rng = SeededRandom::new(11);
    let mut fx = controller();

    fx.press(Point { x: 200.0, y: 200.0 }, true, &mut rng);
    fx.press(Point { x: 200.0, y: 200.0 }, false, &mut rng);

    let bursts = fx.bursts();
    assert_eq!(bursts[0].life(), 20);
    assert_eq!(bursts[1].life(), 60);
    assert_eq!(bursts[0].particles().len(), bursts[1].particles().len());
}

#[test]
fn teardown_mid_animation_leaves_nothing_behind() {
    let mut rng = SeededRandom::new(5);
    let mut fx = controller();

    fx.press(Point { x: 400.0, y: 300.0 }, false, &mut rng);
    fx.mark_running();
    for _ in 0..10 {
        fx.step();
    }
    assert!(fx.running());

    fx.clear();
    assert!(fx.bursts().is_empty());
    assert!(!fx.running());
    // The next step finds nothing to do and must not restart anything.
    assert!(!fx.step());
}

#[test]
fn resize_mid_animation_is_tolerated() {
    let mut rng = SeededRandom::new(9);
    let mut fx = controller();

    fx.press(Point { x: 400.0, y: 300.0 }, false, &mut rng);
    fx.mark_running();
    fx.step();

    fx.resize(1920.0, 1080.0);
    assert_eq!(
        fx.viewport(),
        Viewport {
            width: 1920.0,
            height: 1080.0,
        }
    );

    // The burst keeps animating against the new bounds until it runs dry.
    while fx.step() {}
    assert!(fx.bursts().is_empty());
}
