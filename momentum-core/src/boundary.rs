use crate::engine::Body;
use crate::params::Canvas;
use glam::DVec2;
use tracing::trace;

/// Padded rectangle bodies bounce inside of
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

/// Which walls a reflection touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub x: bool,
    pub y: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

impl Bounds {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// The canvas shrunk by `padding` on every side
    pub fn inset(canvas: &Canvas, padding: f64) -> Self {
        Self {
            min: DVec2::splat(padding),
            max: DVec2::new(canvas.width - padding, canvas.height - padding),
        }
    }

    /// Reflect off the left and right walls only
    pub fn reflect_x(&self, body: &mut Body, restitution: f64) -> bool {
        reflect_axis(
            &mut body.pos.x,
            &mut body.vel.x,
            body.radius,
            self.min.x,
            self.max.x,
            restitution,
        )
    }

    /// Reflect off all four walls
    ///
    /// A body whose edge is past a wall is moved back to touch it and the
    /// velocity component into that wall is negated and scaled by
    /// `restitution`. Each axis is handled on its own.
    pub fn reflect(&self, body: &mut Body, restitution: f64) -> WallHits {
        let x = self.reflect_x(body, restitution);
        let y = reflect_axis(
            &mut body.pos.y,
            &mut body.vel.y,
            body.radius,
            self.min.y,
            self.max.y,
            restitution,
        );
        WallHits { x, y }
    }
}

fn reflect_axis(
    pos: &mut f64,
    vel: &mut f64,
    radius: f64,
    min: f64,
    max: f64,
    restitution: f64,
) -> bool {
    let mut hit = false;
    if *pos - radius < min {
        *pos = min + radius;
        *vel = -*vel * restitution;
        hit = true;
    }
    if *pos + radius > max {
        *pos = max - radius;
        *vel = -*vel * restitution;
        hit = true;
    }
    if hit {
        trace!(pos = *pos, vel = *vel, "wall bounce");
    }
    hit
}
