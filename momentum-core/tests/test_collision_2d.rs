//! Unit tests for the 2D elastic resolver

use glam::DVec2;
use momentum_core::collision::{contact_normal, overlap_2d, resolve_elastic_2d};
use momentum_core::engine::{total_kinetic_energy, total_momentum};
use momentum_core::tests::test_helpers::{approx_eq, body_2d, rel_eq, seeded_rng, vec_approx_eq};
use rand::Rng;

#[test]
fn test_head_on_equal_masses_swap() {
    let mut a = body_2d(DVec2::new(0.0, 0.0), DVec2::new(2.0, 0.0), 1.0, 1.0);
    let mut b = body_2d(DVec2::new(2.0, 0.0), DVec2::new(-1.0, 0.0), 1.0, 1.0);

    resolve_elastic_2d(&mut a, &mut b, 0.0);

    assert!(vec_approx_eq(a.vel, DVec2::new(-1.0, 0.0), 1e-12));
    assert!(vec_approx_eq(b.vel, DVec2::new(2.0, 0.0), 1e-12));
}

#[test]
fn test_tangential_component_passes_through() {
    // Line of centres is vertical, so only vy is exchanged
    let mut a = body_2d(DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0), 1.0, 1.0);
    let mut b = body_2d(DVec2::new(0.0, 2.0), DVec2::ZERO, 1.0, 1.0);

    resolve_elastic_2d(&mut a, &mut b, 0.0);

    assert!(vec_approx_eq(a.vel, DVec2::new(1.0, 0.0), 1e-12), "a = {:?}", a.vel);
    assert!(vec_approx_eq(b.vel, DVec2::new(0.0, 1.0), 1e-12), "b = {:?}", b.vel);
    assert!(a.collided && b.collided);
}

#[test]
fn test_conserves_momentum_and_energy() {
    let mut rng = seeded_rng(2024);
    for _ in 0..1000 {
        let r1 = rng.gen_range(1.0..20.0);
        let r2 = rng.gen_range(1.0..20.0);
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let a_pos = DVec2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
        let b_pos = a_pos + DVec2::from_angle(angle) * (r1 + r2) * rng.gen_range(0.5..1.0);

        let mut a = body_2d(
            a_pos,
            DVec2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)),
            rng.gen_range(0.1..10.0),
            r1,
        );
        let mut b = body_2d(
            b_pos,
            DVec2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)),
            rng.gen_range(0.1..10.0),
            r2,
        );

        let p_before = total_momentum([&a, &b]);
        let e_before = total_kinetic_energy([&a, &b]);

        let overlap = overlap_2d(&a, &b).expect("bodies placed in contact");
        resolve_elastic_2d(&mut a, &mut b, overlap);

        let p_after = total_momentum([&a, &b]);
        let e_after = total_kinetic_energy([&a, &b]);

        assert!(rel_eq(p_before.px, p_after.px, 1e-9), "px {} vs {}", p_before.px, p_after.px);
        assert!(rel_eq(p_before.py, p_after.py, 1e-9), "py {} vs {}", p_before.py, p_after.py);
        assert!(rel_eq(e_before, e_after, 1e-9), "energy {} vs {}", e_before, e_after);

        // Overlap correction leaves the bodies exactly touching
        assert!(rel_eq(a.pos.distance(b.pos), r1 + r2, 1e-9));
    }
}

#[test]
fn test_coincident_centres_stay_finite() {
    let mut a = body_2d(DVec2::new(5.0, 5.0), DVec2::new(1.0, 0.5), 2.0, 1.0);
    let mut b = body_2d(DVec2::new(5.0, 5.0), DVec2::new(-1.0, 0.0), 1.0, 1.0);
    assert_eq!(contact_normal(&a, &b), DVec2::X);

    let p_before = total_momentum([&a, &b]);
    let overlap = overlap_2d(&a, &b).expect("coincident bodies overlap");
    assert!(approx_eq(overlap, 2.0, 1e-12));

    resolve_elastic_2d(&mut a, &mut b, overlap);

    assert!(a.vel.is_finite() && b.vel.is_finite());
    assert!(a.pos.is_finite() && b.pos.is_finite());
    assert!(vec_approx_eq(a.pos, DVec2::new(4.0, 5.0), 1e-12));
    assert!(vec_approx_eq(b.pos, DVec2::new(6.0, 5.0), 1e-12));

    let p_after = total_momentum([&a, &b]);
    assert!(vec_approx_eq(p_before.vector(), p_after.vector(), 1e-12));
}

#[test]
fn test_separated_bodies_do_not_overlap() {
    let a = body_2d(DVec2::ZERO, DVec2::ZERO, 1.0, 1.0);
    let b = body_2d(DVec2::new(3.0, 4.0), DVec2::ZERO, 1.0, 1.0);
    assert_eq!(overlap_2d(&a, &b), None);
}
