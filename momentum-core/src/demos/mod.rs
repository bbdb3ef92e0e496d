//! The five momentum demos and what they hand to a renderer
//!
//! Each demo owns its bodies outright. A host drives it one `tick` per
//! display frame, reads a [`SceneFrame`] to draw, and a [`Readout`] for the
//! momentum panel.

mod collision_2d;
mod elastic_1d;
mod explosion;
mod inelastic_1d;
mod rocket;

pub use collision_2d::{Collision2d, TrajectoryPoint};
pub use elastic_1d::Elastic1d;
pub use explosion::Explosion;
pub use inelastic_1d::Inelastic1d;
pub use rocket::RocketLaunch;

use crate::boundary::Bounds;
use crate::engine::{Body, Momentum};
use crate::error::ParamError;
use crate::params::{Canvas, Collision1dParams, DemoConfig, PADDING_1D};
use crate::rocket::RocketMomentum;
use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::fmt;

/// Which demo to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    Elastic1d,
    Inelastic1d,
    Collision2d,
    Explosion,
    Rocket,
}

impl DemoKind {
    pub const ALL: [DemoKind; 5] = [
        DemoKind::Elastic1d,
        DemoKind::Inelastic1d,
        DemoKind::Collision2d,
        DemoKind::Explosion,
        DemoKind::Rocket,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DemoKind::Elastic1d => "1D elastic collision",
            DemoKind::Inelastic1d => "1D perfectly inelastic collision",
            DemoKind::Collision2d => "2D elastic collision",
            DemoKind::Explosion => "Explosion",
            DemoKind::Rocket => "Rocket propulsion",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A self-contained simulate-and-draw loop
pub trait Demo {
    fn kind(&self) -> DemoKind;

    /// Advance one fixed time step
    fn tick(&mut self);

    /// Rebuild the scene from the current parameters
    fn reset(&mut self);

    /// Snapshot for the renderer
    fn frame(&self) -> SceneFrame;

    /// Momentum panel values
    fn readout(&self) -> Readout;

    /// Demo-specific action; only the explosion reacts
    fn trigger(&mut self) -> bool {
        false
    }

    /// Seconds simulated since the last reset
    fn elapsed(&self) -> f64;
}

impl<D: Demo + ?Sized> Demo for Box<D> {
    fn kind(&self) -> DemoKind {
        (**self).kind()
    }

    fn tick(&mut self) {
        (**self).tick()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn frame(&self) -> SceneFrame {
        (**self).frame()
    }

    fn readout(&self) -> Readout {
        (**self).readout()
    }

    fn trigger(&mut self) -> bool {
        (**self).trigger()
    }

    fn elapsed(&self) -> f64 {
        (**self).elapsed()
    }
}

/// Build any demo from a preset
pub fn build_demo(kind: DemoKind, config: &DemoConfig) -> Result<Box<dyn Demo>, ParamError> {
    let demo: Box<dyn Demo> = match kind {
        DemoKind::Elastic1d => Box::new(Elastic1d::new(config.elastic_1d, config.canvas)?),
        DemoKind::Inelastic1d => Box::new(Inelastic1d::new(config.inelastic_1d, config.canvas)?),
        DemoKind::Collision2d => Box::new(Collision2d::new(config.collision_2d, config.canvas)?),
        DemoKind::Explosion => Box::new(Explosion::new(config.explosion, config.canvas)?),
        DemoKind::Rocket => Box::new(RocketLaunch::new(config.rocket, config.canvas)?),
    };
    Ok(demo)
}

/// Per-body values a renderer needs
#[derive(Debug, Clone, PartialEq)]
pub struct BodyState {
    pub pos: DVec2,
    pub vel: DVec2,
    pub speed: f64,
    pub angle_degrees: f64,
    pub mass: f64,
    pub radius: f64,
    pub collided: bool,
}

impl From<&Body> for BodyState {
    fn from(body: &Body) -> Self {
        Self {
            pos: body.pos,
            vel: body.vel,
            speed: body.speed(),
            angle_degrees: body.angle_degrees(),
            mass: body.mass,
            radius: body.radius,
            collided: body.collided,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    pub pos: DVec2,
    pub radius: f64,
    /// 1.0 while fresh, fading to 0 over the last second of life
    pub opacity: f64,
}

/// Everything drawn for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub time: f64,
    pub bounds: Bounds,
    pub bodies: Vec<BodyState>,
    /// One polyline per body
    pub trails: Vec<Vec<DVec2>>,
    /// Points where a collision was recorded on a trail
    pub markers: Vec<DVec2>,
    pub particles: Vec<ParticleState>,
    pub center_of_mass: Option<DVec2>,
}

impl SceneFrame {
    pub(crate) fn new(time: f64, bounds: Bounds, bodies: &[Body]) -> Self {
        Self {
            time,
            bounds,
            bodies: bodies.iter().map(BodyState::from).collect(),
            trails: Vec::new(),
            markers: Vec::new(),
            particles: Vec::new(),
            center_of_mass: None,
        }
    }
}

/// Momentum of each body before the event and, once it happened, after it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MomentumReadout {
    pub before: Vec<Momentum>,
    pub after: Option<Vec<Momentum>>,
}

impl MomentumReadout {
    pub fn from_bodies(bodies: &[Body]) -> Self {
        Self {
            before: bodies.iter().map(Body::momentum).collect(),
            after: None,
        }
    }

    pub fn total_before(&self) -> Momentum {
        self.before.iter().copied().sum()
    }

    pub fn total_after(&self) -> Option<Momentum> {
        self.after.as_ref().map(|after| after.iter().copied().sum())
    }

    pub(crate) fn record_after(&mut self, bodies: &[Body]) {
        self.after = Some(bodies.iter().map(Body::momentum).collect());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Readout {
    Bodies(MomentumReadout),
    Rocket(RocketMomentum),
}

/// Starting positions for the two bodies on a 1D track
///
/// Bodies heading at each other start a quarter of the way in from each
/// end; a faster chaser starts at the left wall; anything else starts at
/// the thirds.
pub(crate) fn track_positions(params: &Collision1dParams, canvas: &Canvas) -> (f64, f64) {
    let width = canvas.width;
    if params.velocity1 > 0.0 && params.velocity2 < 0.0 {
        (width * 0.25, width * 0.75)
    } else if params.velocity1 > params.velocity2 {
        (PADDING_1D, width / 2.0)
    } else {
        (width / 3.0, width * 2.0 / 3.0)
    }
}

/// Radius of a body on a 1D track
pub fn track_radius(mass: f64) -> f64 {
    10.0 + mass * 3.0
}

pub(crate) fn track_bodies(params: &Collision1dParams, canvas: &Canvas) -> [Body; 2] {
    let (x1, x2) = track_positions(params, canvas);
    let y = canvas.height / 2.0;
    [
        Body::new(
            DVec2::new(x1, y),
            DVec2::new(params.velocity1, 0.0),
            params.mass1,
            track_radius(params.mass1),
        ),
        Body::new(
            DVec2::new(x2, y),
            DVec2::new(params.velocity2, 0.0),
            params.mass2,
            track_radius(params.mass2),
        ),
    ]
}

/// Random source for a scene: fixed when a seed is given
pub(crate) fn scene_rng(seed: Option<u64>) -> Pcg64 {
    match seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    }
}
