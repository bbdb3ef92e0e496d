use super::{Demo, DemoKind, MomentumReadout, Readout, SceneFrame};
use crate::boundary::Bounds;
use crate::collision::{is_closing, overlap_2d, resolve_elastic_2d, ContactLatch};
use crate::engine::Body;
use crate::error::ParamError;
use crate::integrator::step_all;
use crate::params::{Canvas, Collision2dParams, PADDING_2D, SCALE_2D, TIME_STEP};
use crate::trail::Trail;
use glam::DVec2;

/// Horizontal distance of each starting body from the canvas centre
const START_OFFSET: f64 = 100.0;

pub fn planar_radius(mass: f64) -> f64 {
    10.0 + mass * 2.0
}

/// Both body centres at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub a: DVec2,
    pub b: DVec2,
    /// Recorded at or after the first collision
    pub is_collision: bool,
}

/// Two bodies with speed and heading meeting at a glancing angle
#[derive(Debug, Clone)]
pub struct Collision2d {
    params: Collision2dParams,
    canvas: Canvas,
    bounds: Bounds,
    bodies: [Body; 2],
    contact: ContactLatch,
    has_collided: bool,
    trajectory: Trail<TrajectoryPoint>,
    readout: MomentumReadout,
    time: f64,
}

fn planar_bodies(params: &Collision2dParams, canvas: &Canvas) -> [Body; 2] {
    let center = DVec2::new(canvas.width / 2.0, canvas.height / 2.0);
    let heading = |speed: f64, degrees: f64| DVec2::from_angle(degrees.to_radians()) * speed;
    [
        Body::new(
            center - DVec2::new(START_OFFSET, 0.0),
            heading(params.speed1, params.angle1),
            params.mass1,
            planar_radius(params.mass1),
        ),
        Body::new(
            center + DVec2::new(START_OFFSET, 0.0),
            heading(params.speed2, params.angle2),
            params.mass2,
            planar_radius(params.mass2),
        ),
    ]
}

impl Collision2d {
    pub fn new(params: Collision2dParams, canvas: Canvas) -> Result<Self, ParamError> {
        params.validate()?;
        canvas.validate(PADDING_2D)?;
        let bodies = planar_bodies(&params, &canvas);
        Ok(Self {
            params,
            canvas,
            bounds: Bounds::inset(&canvas, PADDING_2D),
            readout: MomentumReadout::from_bodies(&bodies),
            bodies,
            contact: ContactLatch::default(),
            has_collided: false,
            trajectory: Trail::new(),
            time: 0.0,
        })
    }

    pub fn set_params(&mut self, params: Collision2dParams) -> Result<(), ParamError> {
        params.validate()?;
        self.params = params;
        self.reset();
        Ok(())
    }

    pub fn params(&self) -> &Collision2dParams {
        &self.params
    }

    pub fn bodies(&self) -> &[Body; 2] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body; 2] {
        &mut self.bodies
    }

    pub fn has_collided(&self) -> bool {
        self.has_collided
    }

    pub fn trajectory(&self) -> &Trail<TrajectoryPoint> {
        &self.trajectory
    }

    fn record_trajectory(&mut self) {
        self.trajectory.push(TrajectoryPoint {
            a: self.bodies[0].pos,
            b: self.bodies[1].pos,
            is_collision: self.has_collided,
        });
    }
}

impl Demo for Collision2d {
    fn kind(&self) -> DemoKind {
        DemoKind::Collision2d
    }

    fn tick(&mut self) {
        if self.trajectory.is_empty() {
            self.record_trajectory();
        }

        step_all(&mut self.bodies, SCALE_2D, TIME_STEP);
        self.time += TIME_STEP;

        let [a, b] = &self.bodies;
        let overlap = overlap_2d(a, b);
        if self.contact.enter(overlap.is_some(), is_closing(a, b)) {
            let [a, b] = &mut self.bodies;
            resolve_elastic_2d(a, b, overlap.unwrap_or(0.0));
            self.has_collided = true;
            self.readout.record_after(&self.bodies);
            self.record_trajectory();
        }

        let mut bounced = false;
        for body in &mut self.bodies {
            bounced |= self.bounds.reflect(body, 1.0).any();
        }
        if bounced {
            self.record_trajectory();
        }
    }

    fn reset(&mut self) {
        self.bodies = planar_bodies(&self.params, &self.canvas);
        self.readout = MomentumReadout::from_bodies(&self.bodies);
        self.contact.clear();
        self.has_collided = false;
        self.trajectory.clear();
        self.time = 0.0;
    }

    fn frame(&self) -> SceneFrame {
        let mut frame = SceneFrame::new(self.time, self.bounds, &self.bodies);
        frame.trails = vec![
            self.trajectory.iter().map(|p| p.a).collect(),
            self.trajectory.iter().map(|p| p.b).collect(),
        ];

        let mut previous = false;
        for point in self.trajectory.iter() {
            if point.is_collision && !previous {
                frame.markers.push(point.a);
                frame.markers.push(point.b);
            }
            previous = point.is_collision;
        }
        frame
    }

    fn readout(&self) -> Readout {
        Readout::Bodies(self.readout.clone())
    }

    fn elapsed(&self) -> f64 {
        self.time
    }
}
