use super::{scene_rng, Demo, DemoKind, MomentumReadout, Readout, SceneFrame};
use crate::boundary::Bounds;
use crate::engine::{center_of_mass, Body};
use crate::error::ParamError;
use crate::explosion::explode;
use crate::integrator::step;
use crate::params::{Canvas, ExplosionParams, FRAGMENT_BOUNCE, PADDING_2D, SCALE_2D, TIME_STEP};
use crate::trail::Trail;
use glam::DVec2;
use rand_pcg::Pcg64;
use tracing::warn;

/// Fragment positions are sampled for the trail every this many ticks
const TRAIL_INTERVAL: u64 = 3;

pub fn source_radius(mass: f64) -> f64 {
    15.0 + mass * 2.0
}

/// A body at rest that bursts into fragments on demand
#[derive(Debug, Clone)]
pub struct Explosion {
    params: ExplosionParams,
    canvas: Canvas,
    bounds: Bounds,
    source: Body,
    fragments: Vec<Body>,
    exploded: bool,
    explosion_time: f64,
    ticks_since_explosion: u64,
    trajectory: Trail<Vec<DVec2>>,
    readout: MomentumReadout,
    rng: Pcg64,
    time: f64,
}

fn resting_source(params: &ExplosionParams, canvas: &Canvas) -> Body {
    Body::new(
        DVec2::new(canvas.width / 2.0, canvas.height / 2.0),
        DVec2::ZERO,
        params.mass,
        source_radius(params.mass),
    )
}

impl Explosion {
    pub fn new(params: ExplosionParams, canvas: Canvas) -> Result<Self, ParamError> {
        params.validate()?;
        canvas.validate(PADDING_2D)?;
        let source = resting_source(&params, &canvas);
        Ok(Self {
            params,
            canvas,
            bounds: Bounds::inset(&canvas, PADDING_2D),
            readout: MomentumReadout::from_bodies(std::slice::from_ref(&source)),
            source,
            fragments: Vec::new(),
            exploded: false,
            explosion_time: 0.0,
            ticks_since_explosion: 0,
            trajectory: Trail::new(),
            rng: scene_rng(params.seed),
            time: 0.0,
        })
    }

    pub fn set_params(&mut self, params: ExplosionParams) -> Result<(), ParamError> {
        params.validate()?;
        self.params = params;
        self.reset();
        Ok(())
    }

    pub fn params(&self) -> &ExplosionParams {
        &self.params
    }

    pub fn source(&self) -> &Body {
        &self.source
    }

    pub fn fragments(&self) -> &[Body] {
        &self.fragments
    }

    pub fn has_exploded(&self) -> bool {
        self.exploded
    }

    /// Seconds since the explosion
    pub fn explosion_time(&self) -> f64 {
        self.explosion_time
    }

    pub fn trajectory(&self) -> &Trail<Vec<DVec2>> {
        &self.trajectory
    }

    /// Break the source apart; false if it already has
    pub fn detonate(&mut self) -> Result<bool, ParamError> {
        if self.exploded {
            return Ok(false);
        }
        self.fragments = explode(
            &self.source,
            self.params.fragments,
            self.params.force,
            &mut self.rng,
        )?;
        self.exploded = true;
        self.explosion_time = 0.0;
        self.ticks_since_explosion = 0;
        self.readout.record_after(&self.fragments);
        Ok(true)
    }

    /// Where the system's mass is centred: the source, then the fragments
    pub fn center_of_mass(&self) -> DVec2 {
        if self.exploded {
            center_of_mass(&self.fragments).unwrap_or(self.source.pos)
        } else {
            self.source.pos
        }
    }
}

impl Demo for Explosion {
    fn kind(&self) -> DemoKind {
        DemoKind::Explosion
    }

    fn tick(&mut self) {
        self.time += TIME_STEP;
        if !self.exploded {
            return;
        }

        self.explosion_time += TIME_STEP;
        self.ticks_since_explosion += 1;
        for fragment in &mut self.fragments {
            step(fragment, SCALE_2D, TIME_STEP);
            self.bounds.reflect(fragment, FRAGMENT_BOUNCE);
        }

        if self.ticks_since_explosion % TRAIL_INTERVAL == 0 {
            self.trajectory
                .push(self.fragments.iter().map(|f| f.pos).collect());
        }
    }

    fn reset(&mut self) {
        self.source = resting_source(&self.params, &self.canvas);
        self.fragments.clear();
        self.exploded = false;
        self.explosion_time = 0.0;
        self.ticks_since_explosion = 0;
        self.trajectory.clear();
        self.readout = MomentumReadout::from_bodies(std::slice::from_ref(&self.source));
        self.rng = scene_rng(self.params.seed);
        self.time = 0.0;
    }

    fn frame(&self) -> SceneFrame {
        let mut frame = if self.exploded {
            let mut frame = SceneFrame::new(self.time, self.bounds, &self.fragments);
            frame.trails = (0..self.fragments.len())
                .map(|i| self.trajectory.iter().map(|snapshot| snapshot[i]).collect())
                .collect();
            frame
        } else {
            SceneFrame::new(self.time, self.bounds, std::slice::from_ref(&self.source))
        };
        frame.center_of_mass = Some(self.center_of_mass());
        frame
    }

    fn readout(&self) -> Readout {
        Readout::Bodies(self.readout.clone())
    }

    fn trigger(&mut self) -> bool {
        match self.detonate() {
            Ok(fired) => fired,
            Err(err) => {
                warn!(%err, "explosion rejected");
                false
            }
        }
    }

    fn elapsed(&self) -> f64 {
        self.time
    }
}
