//! Unit tests for the 1D elastic and perfectly inelastic resolvers

use momentum_core::collision::{
    elastic_1d, inelastic_1d, is_closing, merge_inelastic_1d, overlap_1d, resolve_elastic_1d,
    ContactLatch,
};
use momentum_core::tests::test_helpers::{approx_eq, body_1d, rel_eq, seeded_rng};
use rand::Rng;

#[test]
fn test_elastic_reference_scenario() {
    // m1 = 2 kg at 3 m/s meets m2 = 1 kg at -2 m/s
    let (v1, v2) = elastic_1d(2.0, 3.0, 1.0, -2.0);

    assert!(approx_eq(v1, -1.0 / 3.0, 1e-12), "v1' = {}", v1);
    assert!(approx_eq(v2, 14.0 / 3.0, 1e-12), "v2' = {}", v2);

    let before = 2.0 * 3.0 + 1.0 * -2.0;
    let after = 2.0 * v1 + 1.0 * v2;
    assert!(approx_eq(before, 4.0, 1e-12));
    assert!(approx_eq(after, 4.0, 1e-12));
}

#[test]
fn test_elastic_equal_masses_swap_velocities() {
    let (v1, v2) = elastic_1d(1.5, 2.0, 1.5, -0.5);
    assert!(approx_eq(v1, -0.5, 1e-12));
    assert!(approx_eq(v2, 2.0, 1e-12));
}

#[test]
fn test_elastic_conserves_momentum_and_energy() {
    let mut rng = seeded_rng(11);
    for _ in 0..1000 {
        let m1: f64 = rng.gen_range(0.1..10.0);
        let m2: f64 = rng.gen_range(0.1..10.0);
        let v1: f64 = rng.gen_range(-10.0..10.0);
        let v2: f64 = rng.gen_range(-10.0..10.0);

        let (v1a, v2a) = elastic_1d(m1, v1, m2, v2);

        let p_before = m1 * v1 + m2 * v2;
        let p_after = m1 * v1a + m2 * v2a;
        let e_before = m1 * v1 * v1 + m2 * v2 * v2;
        let e_after = m1 * v1a * v1a + m2 * v2a * v2a;

        assert!(rel_eq(p_before, p_after, 1e-9), "momentum {} vs {}", p_before, p_after);
        assert!(rel_eq(e_before, e_after, 1e-9), "energy {} vs {}", e_before, e_after);
    }
}

#[test]
fn test_overlap_detects_touching_bodies() {
    let a = body_1d(0.0, 1.0, 1.0);
    let b = body_1d(2.0, -1.0, 1.0);
    assert_eq!(overlap_1d(&a, &b), Some(0.0), "exact contact counts as a collision");

    let far = body_1d(2.5, -1.0, 1.0);
    assert_eq!(overlap_1d(&a, &far), None);
}

#[test]
fn test_resolve_pushes_bodies_apart_half_each() {
    let mut a = body_1d(0.0, 3.0, 2.0);
    let mut b = body_1d(1.5, -2.0, 1.0);
    let overlap = overlap_1d(&a, &b).expect("bodies overlap");
    assert!(approx_eq(overlap, 0.5, 1e-12));

    resolve_elastic_1d(&mut a, &mut b, overlap);

    assert!(approx_eq(a.pos.x, -0.25, 1e-12));
    assert!(approx_eq(b.pos.x, 1.75, 1e-12));
    assert!(approx_eq(a.vel.x, -1.0 / 3.0, 1e-12));
    assert!(approx_eq(b.vel.x, 14.0 / 3.0, 1e-12));
    assert!(a.collided && b.collided);
    assert_eq!(a.vel.y, 0.0);
}

#[test]
fn test_resolve_keeps_order_when_right_body_is_first() {
    let mut a = body_1d(1.5, -1.0, 1.0);
    let mut b = body_1d(0.0, 1.0, 1.0);
    resolve_elastic_1d(&mut a, &mut b, 0.5);
    assert!(approx_eq(a.pos.x, 1.75, 1e-12));
    assert!(approx_eq(b.pos.x, -0.25, 1e-12));
}

#[test]
fn test_inelastic_reference_scenario() {
    let v = inelastic_1d(2.0, 4.0, 3.0, -1.0);
    assert!(approx_eq(v, 1.0, 1e-12));
}

#[test]
fn test_inelastic_conserves_momentum_and_loses_energy() {
    let mut rng = seeded_rng(5);
    for _ in 0..1000 {
        let m1: f64 = rng.gen_range(0.1..10.0);
        let m2: f64 = rng.gen_range(0.1..10.0);
        let v1: f64 = rng.gen_range(-10.0..10.0);
        let v2: f64 = rng.gen_range(-10.0..10.0);
        if (v1 - v2).abs() < 1e-3 {
            continue;
        }

        let v = inelastic_1d(m1, v1, m2, v2);

        let p_before = m1 * v1 + m2 * v2;
        let p_after = (m1 + m2) * v;
        assert!(rel_eq(p_before, p_after, 1e-9));

        let e_before = 0.5 * (m1 * v1 * v1 + m2 * v2 * v2);
        let e_after = 0.5 * (m1 + m2) * v * v;
        assert!(e_after < e_before, "energy must drop: {} -> {}", e_before, e_after);
    }
}

#[test]
fn test_inelastic_equal_velocities_keep_energy() {
    let v = inelastic_1d(2.0, 1.5, 4.0, 1.5);
    assert!(approx_eq(v, 1.5, 1e-12));
}

#[test]
fn test_merge_builds_combined_body() {
    let a = body_1d(0.0, 4.0, 2.0);
    let b = body_1d(1.0, -1.0, 3.0);
    let merged = merge_inelastic_1d(&a, &b);

    assert!(approx_eq(merged.mass, 5.0, 1e-12));
    assert!(approx_eq(merged.vel.x, 1.0, 1e-12));
    assert!(approx_eq(merged.pos.x, 0.5, 1e-12));
    assert!(approx_eq(merged.radius, 2.0_f64.sqrt() * 1.2, 1e-12));
    assert_eq!(merged.vel.y, 0.0);
    assert_eq!(merged.pos.y, a.pos.y);

    let p = merged.momentum();
    assert!(approx_eq(p.px, 2.0 * 4.0 + 3.0 * -1.0, 1e-12));
}

#[test]
fn test_contact_latch_fires_once_per_encounter() {
    let mut latch = ContactLatch::default();
    assert!(latch.enter(true, true));
    assert!(!latch.enter(true, false), "still touching and moving apart");
    assert!(!latch.enter(false, false));
    assert!(latch.enter(true, false), "new encounter re-arms");

    latch.clear();
    assert!(!latch.is_touching());
}

#[test]
fn test_contact_latch_fires_again_when_pushed_back_together() {
    let mut latch = ContactLatch::default();
    assert!(latch.enter(true, true));
    assert!(latch.enter(true, true), "touching pair closing again resolves");
}

#[test]
fn test_closing_follows_relative_velocity() {
    let a = body_1d(0.0, 1.0, 1.0);
    let b = body_1d(2.0, -1.0, 1.0);
    assert!(is_closing(&a, &b));
    assert!(is_closing(&b, &a));

    let receding = body_1d(2.0, 3.0, 1.0);
    assert!(!is_closing(&a, &receding));

    let resting = body_1d(2.0, 1.0, 1.0);
    assert!(!is_closing(&a, &resting), "equal velocities are not closing");
}
