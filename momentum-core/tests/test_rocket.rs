//! Unit tests for the variable-mass rocket and its exhaust plume

use glam::DVec2;
use momentum_core::params::{RocketParams, TIME_STEP};
use momentum_core::rocket::{ExhaustPlume, Rocket, PARTICLES_PER_TICK};
use momentum_core::tests::test_helpers::{approx_eq, seeded_rng};

const SCALE: f64 = 20.0;

fn weightless(dry_mass: f64, propellant_mass: f64) -> RocketParams {
    RocketParams {
        dry_mass,
        propellant_mass,
        exhaust_velocity: 400.0,
        burn_rate: 5.0,
        gravity: 0.0,
        seed: Some(1),
    }
}

#[test]
fn test_initial_acceleration_is_thrust_over_mass() {
    let params = weightless(50.0, 100.0);
    let mut rocket = Rocket::new(&params, DVec2::new(400.0, 300.0));

    let expected = 5.0 * 400.0 / 150.0;
    assert!(approx_eq(rocket.net_acceleration(), expected, 1e-12));

    rocket.step(TIME_STEP, SCALE);
    assert!(approx_eq(rocket.acceleration, expected, 1e-12));
    assert!(approx_eq(rocket.velocity, expected * TIME_STEP, 1e-12));
    assert!(rocket.pos.y < 300.0, "rocket climbs toward the top of the canvas");
}

#[test]
fn test_burn_consumes_propellant_per_tick() {
    let params = weightless(50.0, 100.0);
    let mut rocket = Rocket::new(&params, DVec2::ZERO);

    let burned = rocket.step(TIME_STEP, SCALE);

    assert!(approx_eq(burned, 0.25, 1e-12));
    assert!(approx_eq(rocket.propellant_used, 0.25, 1e-12));
    assert!(approx_eq(rocket.current_mass(), 149.75, 1e-12));
}

#[test]
fn test_thrust_stops_when_propellant_runs_out() {
    let params = RocketParams {
        gravity: 9.8,
        ..weightless(50.0, 1.0)
    };
    let mut rocket = Rocket::new(&params, DVec2::ZERO);

    let mut ticks = 0;
    while rocket.propellant_remaining() > 0.0 {
        rocket.step(TIME_STEP, SCALE);
        ticks += 1;
        assert!(ticks < 100, "propellant never ran out");
    }

    assert_eq!(rocket.propellant_used, 1.0);
    assert_eq!(rocket.thrust(), 0.0);
    assert_eq!(rocket.net_acceleration(), -9.8);
    assert_eq!(rocket.propellant_fraction(), 0.0);

    let burned = rocket.step(TIME_STEP, SCALE);
    assert_eq!(burned, 0.0);
    assert_eq!(rocket.acceleration, -9.8);
    assert!(approx_eq(rocket.current_mass(), 50.0, 1e-12));
}

#[test]
fn test_burn_is_clamped_to_remaining_propellant() {
    let params = weightless(10.0, 0.1);
    let mut rocket = Rocket::new(&params, DVec2::ZERO);

    let burned = rocket.step(TIME_STEP, SCALE);

    assert!(approx_eq(burned, 0.1, 1e-12));
    assert_eq!(rocket.propellant_remaining(), 0.0);
}

#[test]
fn test_momentum_bookkeeping() {
    let params = weightless(50.0, 100.0);
    let mut rocket = Rocket::new(&params, DVec2::ZERO);
    for _ in 0..10 {
        rocket.step(TIME_STEP, SCALE);
    }

    let p = rocket.momentum();
    assert!(approx_eq(p.rocket, rocket.current_mass() * rocket.velocity, 1e-9));
    assert!(approx_eq(p.exhaust, -rocket.propellant_used * 400.0, 1e-9));
    assert!(approx_eq(p.total, p.rocket + p.exhaust, 1e-9));
}

#[test]
fn test_trail_records_every_fifth_tick() {
    let params = weightless(50.0, 100.0);
    let mut rocket = Rocket::new(&params, DVec2::ZERO);
    for _ in 0..12 {
        rocket.step(TIME_STEP, SCALE);
    }
    // ticks 0, 5 and 10
    assert_eq!(rocket.trail.len(), 3);
}

#[test]
fn test_plume_emits_downward_particles() {
    let mut rng = seeded_rng(4);
    let mut plume = ExhaustPlume::new();
    let nozzle = DVec2::new(400.0, 340.0);

    plume.emit(&mut rng, nozzle, 0.3, 400.0);

    assert_eq!(plume.len(), PARTICLES_PER_TICK);
    for particle in &plume.particles {
        assert!(approx_eq(particle.mass, 0.1, 1e-12));
        assert!(particle.vel.y > 0.0, "exhaust leaves toward the ground");
        assert!((particle.pos - nozzle).abs().cmple(DVec2::new(5.0, 2.5)).all());
        assert!(particle.radius >= 3.0 && particle.radius < 6.0);
    }
}

#[test]
fn test_plume_needs_burned_propellant() {
    let mut rng = seeded_rng(4);
    let mut plume = ExhaustPlume::new();
    plume.emit(&mut rng, DVec2::ZERO, 0.0, 400.0);
    assert!(plume.is_empty());
}

#[test]
fn test_plume_particles_expire() {
    let mut rng = seeded_rng(9);
    let mut plume = ExhaustPlume::new();
    plume.emit(&mut rng, DVec2::ZERO, 0.3, 400.0);

    for _ in 0..10 {
        plume.update(TIME_STEP, SCALE, 9.8);
    }
    assert_eq!(plume.len(), PARTICLES_PER_TICK, "half a second in, all alive");

    for _ in 0..15 {
        plume.update(TIME_STEP, SCALE, 9.8);
    }
    assert!(plume.is_empty(), "lifespan is one second");
}
