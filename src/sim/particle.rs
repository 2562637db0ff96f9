use super::{EffectConfig, Point, Viewport};

/// Colors a burst draws from, as `#RRGGBB` strings.
pub const PALETTE: [&str; 9] = [
    "#FF5733", "#FFC300", "#DAF7A6", "#C70039", "#900C3F", "#581845", "#00FFFF", "#FF00FF",
    "#FFFF00",
];

/// A single animated point: fixed heading, fading opacity, growing downward
/// drift the longer it has been alive.
#[derive(Clone, Debug)]
pub struct Particle {
    origin: Point,
    position: Point,
    color: &'static str,
    speed: f64,
    angle: f64,
    frames: u32,
    opacity: f64,
}

impl Particle {
    pub(crate) fn new(origin: Point, color: &'static str, angle: f64, speed: f64) -> Self {
        Self {
            origin,
            position: origin,
            color,
            speed,
            angle,
            frames: 0,
            opacity: 1.0,
        }
    }

    /// One frame of motion: step along the heading, sag by the accumulated
    /// drift, fade a little.
    pub(crate) fn advance(&mut self, config: &EffectConfig) {
        self.position.x += self.angle.sin() * self.speed;
        self.position.y += self.angle.cos() * self.speed + f64::from(self.frames) * config.drift;
        self.frames += 1;
        self.opacity -= config.fade_step;
    }

    pub fn in_bounds(&self, area: Viewport) -> bool {
        self.position.x >= 0.0
            && self.position.x <= area.width
            && self.position.y >= 0.0
            && self.position.y <= area.height
    }

    pub fn visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn color(&self) -> &'static str {
        self.color
    }

    /// Fill style for the canvas: palette color with the current opacity
    /// appended as a two-digit hex alpha byte.
    pub fn fill_color(&self) -> String {
        format!("{}{:02x}", self.color, (self.opacity * 255.0) as u8)
    }
}
