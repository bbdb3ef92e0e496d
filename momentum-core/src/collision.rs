//! Pairwise contact detection and collision response
//!
//! Bodies are circles. Two bodies touch when the distance between their
//! centres is at most the sum of their radii. Response is closed form:
//! the 1D elastic formula, its 2D normal/tangential extension, and the
//! perfectly inelastic merge.

use crate::engine::Body;
use glam::DVec2;
use tracing::debug;

/// Slack on the contact test so bodies resting exactly at contact count
pub const CONTACT_EPSILON: f64 = 1e-9;

/// Post-collision velocities for a 1D elastic collision
pub fn elastic_1d(m1: f64, v1: f64, m2: f64, v2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let v1_after = ((m1 - m2) * v1 + 2.0 * m2 * v2) / total;
    let v2_after = ((m2 - m1) * v2 + 2.0 * m1 * v1) / total;
    (v1_after, v2_after)
}

/// Common velocity after a perfectly inelastic collision
pub fn inelastic_1d(m1: f64, v1: f64, m2: f64, v2: f64) -> f64 {
    (m1 * v1 + m2 * v2) / (m1 + m2)
}

/// Penetration depth along the track, if the bodies touch
pub fn overlap_1d(a: &Body, b: &Body) -> Option<f64> {
    let distance = (a.pos.x - b.pos.x).abs();
    penetration(distance, a.radius + b.radius)
}

/// Penetration depth along the line of centres, if the bodies touch
pub fn overlap_2d(a: &Body, b: &Body) -> Option<f64> {
    let distance = a.pos.distance(b.pos);
    penetration(distance, a.radius + b.radius)
}

fn penetration(distance: f64, min_distance: f64) -> Option<f64> {
    (distance <= min_distance + CONTACT_EPSILON).then(|| (min_distance - distance).max(0.0))
}

/// Unit vector from `a` towards `b`
///
/// Coincident centres have no line of centres; fall back to +x so the
/// response stays finite.
pub fn contact_normal(a: &Body, b: &Body) -> DVec2 {
    (b.pos - a.pos).try_normalize().unwrap_or(DVec2::X)
}

/// Whether the bodies are moving toward each other along the line of centres
pub fn is_closing(a: &Body, b: &Body) -> bool {
    (b.vel - a.vel).dot(contact_normal(a, b)) < 0.0
}

/// Push two touching bodies apart on the track, half the overlap each
pub fn separate_1d(a: &mut Body, b: &mut Body, overlap: f64) {
    let half = overlap / 2.0;
    if a.pos.x <= b.pos.x {
        a.pos.x -= half;
        b.pos.x += half;
    } else {
        a.pos.x += half;
        b.pos.x -= half;
    }
}

/// Push two touching bodies apart along the line of centres, half each
pub fn separate_2d(a: &mut Body, b: &mut Body, overlap: f64) {
    let shift = contact_normal(a, b) * (overlap / 2.0);
    a.pos -= shift;
    b.pos += shift;
}

/// Resolve a head-on elastic collision between two touching bodies
pub fn resolve_elastic_1d(a: &mut Body, b: &mut Body, overlap: f64) {
    separate_1d(a, b, overlap);

    let (v1, v2) = elastic_1d(a.mass, a.vel.x, b.mass, b.vel.x);
    debug!(
        v1_before = a.vel.x,
        v2_before = b.vel.x,
        v1_after = v1,
        v2_after = v2,
        "elastic 1D collision"
    );
    a.vel.x = v1;
    b.vel.x = v2;
    a.collided = true;
    b.collided = true;
}

/// Resolve an elastic collision in the plane
///
/// Velocities are split into components along the line of centres and
/// along its perpendicular. The normal components go through the 1D
/// formula; the tangential components are untouched.
pub fn resolve_elastic_2d(a: &mut Body, b: &mut Body, overlap: f64) {
    let normal = contact_normal(a, b);
    let tangent = normal.perp();

    separate_2d(a, b, overlap);

    let (v1n, v1t) = (a.vel.dot(normal), a.vel.dot(tangent));
    let (v2n, v2t) = (b.vel.dot(normal), b.vel.dot(tangent));
    let (v1n_after, v2n_after) = elastic_1d(a.mass, v1n, b.mass, v2n);

    a.vel = normal * v1n_after + tangent * v1t;
    b.vel = normal * v2n_after + tangent * v2t;
    a.collided = true;
    b.collided = true;

    debug!(
        normal_x = normal.x,
        normal_y = normal.y,
        v1n_before = v1n,
        v1n_after,
        v2n_before = v2n,
        v2n_after,
        "elastic 2D collision"
    );
}

/// Merge two bodies into one after a perfectly inelastic collision
///
/// The merged body sits at the midpoint of the two centres. Its radius
/// grows as `sqrt(r1² + r2²) × 1.2` rather than with volume, which keeps
/// it on screen.
pub fn merge_inelastic_1d(a: &Body, b: &Body) -> Body {
    let mass = a.mass + b.mass;
    let velocity = inelastic_1d(a.mass, a.vel.x, b.mass, b.vel.x);
    let radius = (a.radius.powi(2) + b.radius.powi(2)).sqrt() * 1.2;
    let pos = DVec2::new((a.pos.x + b.pos.x) / 2.0, a.pos.y);

    debug!(mass, velocity, radius, "bodies merged");

    let mut merged = Body::new(pos, DVec2::new(velocity, 0.0), mass, radius);
    merged.collided = true;
    merged
}

/// Decides when a touching pair needs resolving
///
/// Fires on the frame the bodies come into contact. While they stay in
/// contact it fires again only if they are closing, which happens when a
/// wall sends one body back into its partner before they separate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactLatch {
    touching: bool,
}

impl ContactLatch {
    /// Feed this frame's contact test and approach direction
    pub fn enter(&mut self, in_contact: bool, closing: bool) -> bool {
        let fire = in_contact && (!self.touching || closing);
        self.touching = in_contact;
        fire
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    pub fn clear(&mut self) {
        self.touching = false;
    }
}
