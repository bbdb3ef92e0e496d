pub mod boundary;
pub mod collision;
pub mod control;
pub mod demos;
pub mod engine;
pub mod error;
pub mod explosion;
pub mod integrator;
pub mod params;
pub mod report;
pub mod rocket;
pub mod trail;

pub use boundary::{Bounds, WallHits};
pub use control::{Animator, Command, RunState};
pub use demos::{
    build_demo, BodyState, Collision2d, Demo, DemoKind, Elastic1d, Explosion, Inelastic1d,
    MomentumReadout, Readout, RocketLaunch, SceneFrame,
};
pub use engine::{center_of_mass, total_kinetic_energy, total_momentum, Body, Momentum};
pub use error::{ConfigError, ParamError};
pub use params::{
    Canvas, Collision1dParams, Collision2dParams, DemoConfig, ExplosionParams, RocketParams,
    TIME_STEP,
};
pub use rocket::{Rocket, RocketMomentum};
