//! Variable-mass rocket integrator and exhaust plume
//!
//! The rocket flies straight up. Thrust is `burn_rate × exhaust_velocity`
//! while propellant remains, and acceleration is thrust over the current
//! total mass minus gravity. Exhaust particles are decoration only: they
//! never feed back into the rocket's motion.

use crate::params::RocketParams;
use crate::trail::Trail;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

/// Rocket body height in pixels; the nozzle sits half of it below the centre
pub const ROCKET_HEIGHT: f64 = 80.0;

/// Particles emitted per tick while the engine burns
pub const PARTICLES_PER_TICK: usize = 3;
/// Seconds an exhaust particle lives
pub const PARTICLE_LIFESPAN: f64 = 1.0;
/// A trail point is recorded every this many ticks
pub const TRAIL_INTERVAL: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocketTrailPoint {
    pub pos: DVec2,
    pub velocity: f64,
}

/// Momentum bookkeeping shown next to the rocket
///
/// `exhaust` is `propellant_used × −exhaust_velocity`, an instantaneous
/// approximation rather than the integral of every expelled parcel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RocketMomentum {
    pub rocket: f64,
    pub exhaust: f64,
    pub total: f64,
}

#[derive(Debug, Clone)]
pub struct Rocket {
    pub dry_mass: f64,
    pub propellant_mass: f64,
    pub exhaust_velocity: f64,
    pub burn_rate: f64,
    pub gravity: f64,
    pub propellant_used: f64,
    /// Upward speed in m/s
    pub velocity: f64,
    /// Acceleration applied during the most recent tick
    pub acceleration: f64,
    /// Centre of the rocket in canvas pixels (y grows downward)
    pub pos: DVec2,
    pub ticks: u64,
    pub trail: Trail<RocketTrailPoint>,
}

impl Rocket {
    pub fn new(params: &RocketParams, pos: DVec2) -> Self {
        Self {
            dry_mass: params.dry_mass,
            propellant_mass: params.propellant_mass,
            exhaust_velocity: params.exhaust_velocity,
            burn_rate: params.burn_rate,
            gravity: params.gravity,
            propellant_used: 0.0,
            velocity: 0.0,
            acceleration: 0.0,
            pos,
            ticks: 0,
            trail: Trail::new(),
        }
    }

    pub fn current_mass(&self) -> f64 {
        self.dry_mass + self.propellant_mass - self.propellant_used
    }

    pub fn propellant_remaining(&self) -> f64 {
        (self.propellant_mass - self.propellant_used).max(0.0)
    }

    /// Remaining propellant as a fraction of the initial load
    pub fn propellant_fraction(&self) -> f64 {
        if self.propellant_mass > 0.0 {
            self.propellant_remaining() / self.propellant_mass
        } else {
            0.0
        }
    }

    pub fn thrust(&self) -> f64 {
        if self.propellant_remaining() > 0.0 {
            self.burn_rate * self.exhaust_velocity
        } else {
            0.0
        }
    }

    /// Net upward acceleration for the rocket's present state
    pub fn net_acceleration(&self) -> f64 {
        self.thrust() / self.current_mass() - self.gravity
    }

    pub fn nozzle(&self) -> DVec2 {
        self.pos + DVec2::new(0.0, ROCKET_HEIGHT / 2.0)
    }

    /// Height of the rocket centre above the canvas line `ground_y`, in meters
    pub fn altitude(&self, ground_y: f64, scale: f64) -> f64 {
        (ground_y - self.pos.y) / scale
    }

    /// Advance one tick and return the propellant burned during it
    ///
    /// Acceleration is taken from the mass at the start of the tick;
    /// the burn is clamped so propellant never goes negative.
    pub fn step(&mut self, dt: f64, scale: f64) -> f64 {
        self.acceleration = self.net_acceleration();

        let remaining = self.propellant_remaining();
        let burned = (self.burn_rate * dt).min(remaining);
        if burned > 0.0 && burned >= remaining {
            self.propellant_used = self.propellant_mass;
            debug!(velocity = self.velocity, "propellant exhausted");
        } else {
            self.propellant_used += burned;
        }

        self.velocity += self.acceleration * dt;
        self.pos.y -= self.velocity * dt * scale;

        if self.ticks % TRAIL_INTERVAL == 0 {
            self.trail.push(RocketTrailPoint {
                pos: self.pos,
                velocity: self.velocity,
            });
        }
        self.ticks += 1;

        burned
    }

    pub fn momentum(&self) -> RocketMomentum {
        let rocket = self.current_mass() * self.velocity;
        let exhaust = self.propellant_used * -self.exhaust_velocity;
        RocketMomentum {
            rocket,
            exhaust,
            total: rocket + exhaust,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExhaustParticle {
    pub pos: DVec2,
    /// Velocity in m/s, canvas orientation
    pub vel: DVec2,
    pub mass: f64,
    pub radius: f64,
    /// Seconds left before the particle is discarded
    pub lifespan: f64,
}

/// Short-lived particles streaming out of the nozzle
#[derive(Debug, Clone, Default)]
pub struct ExhaustPlume {
    pub particles: Vec<ExhaustParticle>,
}

impl ExhaustPlume {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit particles for `burned` kg of propellant leaving `nozzle`
    ///
    /// One speed and heading perturbation is drawn per tick and shared by
    /// its particles; positions are jittered per particle.
    pub fn emit<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        nozzle: DVec2,
        burned: f64,
        exhaust_velocity: f64,
    ) {
        if burned <= 0.0 {
            return;
        }
        let speed = exhaust_velocity + rng.gen_range(-1.0..1.0);
        let heading = FRAC_PI_2 + rng.gen_range(-0.25..0.25);
        let vel = DVec2::from_angle(heading) * speed;
        let mass = burned / PARTICLES_PER_TICK as f64;

        for _ in 0..PARTICLES_PER_TICK {
            let jitter = DVec2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-2.5..2.5));
            self.particles.push(ExhaustParticle {
                pos: nozzle + jitter,
                vel,
                mass,
                radius: 3.0 + rng.gen::<f64>() * 3.0,
                lifespan: PARTICLE_LIFESPAN,
            });
        }
    }

    /// Move every particle, pull it down by gravity, and drop expired ones
    pub fn update(&mut self, dt: f64, scale: f64, gravity: f64) {
        for particle in &mut self.particles {
            particle.pos += particle.vel * dt * scale;
            particle.vel.y += gravity * dt;
            particle.lifespan -= dt;
        }
        self.particles.retain(|p| p.lifespan > 0.0);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
