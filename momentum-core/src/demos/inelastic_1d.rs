use super::{track_bodies, Demo, DemoKind, MomentumReadout, Readout, SceneFrame};
use crate::boundary::Bounds;
use crate::collision::{merge_inelastic_1d, overlap_1d};
use crate::engine::Body;
use crate::error::ParamError;
use crate::integrator::{step, step_all};
use crate::params::{Canvas, Collision1dParams, PADDING_1D, SCALE_1D, TIME_STEP};

/// Two bodies on a track that stick together when they meet
#[derive(Debug, Clone)]
pub struct Inelastic1d {
    params: Collision1dParams,
    canvas: Canvas,
    bounds: Bounds,
    bodies: [Body; 2],
    merged: Option<Body>,
    readout: MomentumReadout,
    time: f64,
}

impl Inelastic1d {
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
            merged: None,
            time: 0.0,
        })
    }

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

    /// The combined body, once the collision has happened
    pub fn merged(&self) -> Option<&Body> {
        self.merged.as_ref()
    }
}

impl Demo for Inelastic1d {
    fn kind(&self) -> DemoKind {
        DemoKind::Inelastic1d
    }

    fn tick(&mut self) {
        self.time += TIME_STEP;

        if let Some(merged) = &mut self.merged {
            step(merged, SCALE_1D, TIME_STEP);
            self.bounds.reflect_x(merged, 1.0);
            return;
        }

        step_all(&mut self.bodies, SCALE_1D, TIME_STEP);
        if overlap_1d(&self.bodies[0], &self.bodies[1]).is_some() {
            let merged = merge_inelastic_1d(&self.bodies[0], &self.bodies[1]);
            self.readout.record_after(std::slice::from_ref(&merged));
            self.merged = Some(merged);
        } else {
            for body in &mut self.bodies {
                self.bounds.reflect_x(body, 1.0);
            }
        }
    }

    fn reset(&mut self) {
        self.bodies = track_bodies(&self.params, &self.canvas);
        self.readout = MomentumReadout::from_bodies(&self.bodies);
        self.merged = None;
        self.time = 0.0;
    }

    fn frame(&self) -> SceneFrame {
        match &self.merged {
            Some(merged) => SceneFrame::new(self.time, self.bounds, std::slice::from_ref(merged)),
            None => SceneFrame::new(self.time, self.bounds, &self.bodies),
        }
    }

    fn readout(&self) -> Readout {
        Readout::Bodies(self.readout.clone())
    }

    fn elapsed(&self) -> f64 {
        self.time
    }
}
