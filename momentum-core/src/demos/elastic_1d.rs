use super::{track_bodies, Demo, DemoKind, MomentumReadout, Readout, SceneFrame};
use crate::boundary::Bounds;
use crate::collision::{is_closing, overlap_1d, resolve_elastic_1d, ContactLatch};
use crate::engine::Body;
use crate::error::ParamError;
use crate::integrator::step_all;
use crate::params::{Canvas, Collision1dParams, PADDING_1D, SCALE_1D, TIME_STEP};

/// Two bodies on a track bouncing off each other and the end walls
#[derive(Debug, Clone)]
pub struct Elastic1d {
    params: Collision1dParams,
    canvas: Canvas,
    bounds: Bounds,
    bodies: [Body; 2],
    contact: ContactLatch,
    readout: MomentumReadout,
    time: f64,
}

impl Elastic1d {
    pub fn new(params: Collision1dParams, canvas: Canvas) -> Result<Self, ParamError> {
        params.validate()?;
        canvas.validate(PADDING_1D)?;
        let bodies = track_bodies(&params, &canvas);
        Ok(Self {
            params,
            canvas,
            bounds: Bounds::inset(&canvas, PADDING_1D),
            readout: MomentumReadout::from_bodies(&bodies),
            bodies,
            contact: ContactLatch::default(),
            time: 0.0,
        })
    }

    /// Swap in new parameters and rebuild the scene
    pub fn set_params(&mut self, params: Collision1dParams) -> Result<(), ParamError> {
        params.validate()?;
        self.params = params;
        self.reset();
        Ok(())
    }

    pub fn params(&self) -> &Collision1dParams {
        &self.params
    }

    pub fn bodies(&self) -> &[Body; 2] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body; 2] {
        &mut self.bodies
    }
}

impl Demo for Elastic1d {
    fn kind(&self) -> DemoKind {
        DemoKind::Elastic1d
    }

    fn tick(&mut self) {
        step_all(&mut self.bodies, SCALE_1D, TIME_STEP);
        self.time += TIME_STEP;

        let [a, b] = &self.bodies;
        let overlap = overlap_1d(a, b);
        if self.contact.enter(overlap.is_some(), is_closing(a, b)) {
            let [a, b] = &mut self.bodies;
            resolve_elastic_1d(a, b, overlap.unwrap_or(0.0));
            self.readout.record_after(&self.bodies);
        }

        for body in &mut self.bodies {
            self.bounds.reflect_x(body, 1.0);
        }
    }

    fn reset(&mut self) {
        self.bodies = track_bodies(&self.params, &self.canvas);
        self.readout = MomentumReadout::from_bodies(&self.bodies);
        self.contact.clear();
        self.time = 0.0;
    }

    fn frame(&self) -> SceneFrame {
        SceneFrame::new(self.time, self.bounds, &self.bodies)
    }

    fn readout(&self) -> Readout {
        Readout::Bodies(self.readout.clone())
    }

    fn elapsed(&self) -> f64 {
        self.time
    }
}
