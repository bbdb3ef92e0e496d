use super::{scene_rng, Demo, DemoKind, ParticleState, Readout, SceneFrame};
use crate::boundary::Bounds;
use crate::engine::Body;
use crate::error::ParamError;
use crate::params::{Canvas, RocketParams, SCALE_ROCKET, TIME_STEP};
use crate::rocket::{ExhaustPlume, Rocket, ROCKET_HEIGHT};
use glam::DVec2;
use rand_pcg::Pcg64;

/// Height of the launch pad centre above the bottom of the canvas
const PAD_OFFSET: f64 = 100.0;
/// Height of the ground line above the bottom of the canvas
const GROUND_OFFSET: f64 = 50.0;

/// A rocket climbing under thrust with its exhaust plume
#[derive(Debug, Clone)]
pub struct RocketLaunch {
    params: RocketParams,
    canvas: Canvas,
    rocket: Rocket,
    plume: ExhaustPlume,
    launched: bool,
    rng: Pcg64,
    time: f64,
}

fn launch_pad(canvas: &Canvas) -> DVec2 {
    DVec2::new(canvas.width / 2.0, canvas.height - PAD_OFFSET)
}

impl RocketLaunch {
    pub fn new(params: RocketParams, canvas: Canvas) -> Result<Self, ParamError> {
        params.validate()?;
        canvas.validate(PAD_OFFSET / 2.0)?;
        Ok(Self {
            rocket: Rocket::new(&params, launch_pad(&canvas)),
            plume: ExhaustPlume::new(),
            launched: false,
            rng: scene_rng(params.seed),
            params,
            canvas,
            time: 0.0,
        })
    }

    pub fn set_params(&mut self, params: RocketParams) -> Result<(), ParamError> {
        params.validate()?;
        self.params = params;
        self.reset();
        Ok(())
    }

    pub fn params(&self) -> &RocketParams {
        &self.params
    }

    pub fn rocket(&self) -> &Rocket {
        &self.rocket
    }

    pub fn plume(&self) -> &ExhaustPlume {
        &self.plume
    }

    pub fn is_launched(&self) -> bool {
        self.launched
    }

    /// Height above the ground line in meters; the pad itself sits at 2.5 m
    pub fn altitude(&self) -> f64 {
        self.rocket
            .altitude(self.canvas.height - GROUND_OFFSET, SCALE_ROCKET)
    }
}

impl Demo for RocketLaunch {
    fn kind(&self) -> DemoKind {
        DemoKind::Rocket
    }

    fn tick(&mut self) {
        self.launched = true;
        self.time += TIME_STEP;

        let nozzle = self.rocket.nozzle();
        let burned = self.rocket.step(TIME_STEP, SCALE_ROCKET);
        self.plume
            .emit(&mut self.rng, nozzle, burned, self.rocket.exhaust_velocity);
        self.plume.update(TIME_STEP, SCALE_ROCKET, self.rocket.gravity);
    }

    fn reset(&mut self) {
        self.rocket = Rocket::new(&self.params, launch_pad(&self.canvas));
        self.plume.clear();
        self.launched = false;
        self.rng = scene_rng(self.params.seed);
        self.time = 0.0;
    }

    fn frame(&self) -> SceneFrame {
        let rocket = &self.rocket;
        let body = Body::new(
            rocket.pos,
            DVec2::new(0.0, -rocket.velocity),
            rocket.current_mass(),
            ROCKET_HEIGHT / 2.0,
        );
        let bounds = Bounds::new(
            DVec2::ZERO,
            DVec2::new(self.canvas.width, self.canvas.height),
        );

        let mut frame = SceneFrame::new(self.time, bounds, std::slice::from_ref(&body));
        frame.trails = vec![rocket.trail.iter().map(|p| p.pos).collect()];
        frame.particles = self
            .plume
            .particles
            .iter()
            .map(|p| ParticleState {
                pos: p.pos,
                radius: p.radius,
                opacity: p.lifespan.min(1.0),
            })
            .collect();
        frame
    }

    fn readout(&self) -> Readout {
        Readout::Rocket(self.rocket.momentum())
    }

    fn elapsed(&self) -> f64 {
        self.time
    }
}
