//! Momentum-conserving fragmentation
//!
//! A body breaks into `k` fragments. The first `k - 1` fly off in random
//! directions with equal impulse each, so lighter pieces move faster. The
//! last fragment's velocity is solved so that the fragments carry exactly
//! the momentum the source body had.

use crate::engine::Body;
use crate::error::{positive, positive_mass, ParamError};
use crate::params::MAX_FRAGMENTS;
use glam::DVec2;
use rand::seq::SliceRandom;
use rand::Rng;
use std::f64::consts::TAU;
use tracing::debug;

/// Smallest share of the remaining mass a non-final fragment receives
pub const MIN_SHARE: f64 = 0.1;
/// Largest share of the remaining mass a non-final fragment receives
pub const MAX_SHARE: f64 = 0.5;

pub fn fragment_radius(mass: f64) -> f64 {
    10.0 + mass * 1.5
}

/// Draw `count` positive masses summing to `total`, in draw order
///
/// Each draw takes between 10% and 50% of what is left; the final
/// fragment takes the remainder.
pub fn draw_masses<R: Rng + ?Sized>(total: f64, count: usize, rng: &mut R) -> Vec<f64> {
    let mut remaining = total;
    let mut masses = Vec::with_capacity(count);
    for i in 0..count {
        if i + 1 == count {
            masses.push(remaining);
        } else {
            let share = (rng.gen::<f64>() * MAX_SHARE).max(MIN_SHARE);
            let mass = share * remaining;
            masses.push(mass);
            remaining -= mass;
        }
    }
    masses
}

/// Split `total` into `count` positive masses in random order
pub fn partition_mass<R: Rng + ?Sized>(total: f64, count: usize, rng: &mut R) -> Vec<f64> {
    let mut masses = draw_masses(total, count, rng);
    masses.shuffle(rng);
    masses
}

/// Velocities relative to the source body, one per mass
///
/// Every fragment except the last gets speed `force / mass` along a random
/// heading. The last one cancels the accumulated momentum.
pub fn fragment_velocities<R: Rng + ?Sized>(masses: &[f64], force: f64, rng: &mut R) -> Vec<DVec2> {
    let Some((&last_mass, leading)) = masses.split_last() else {
        return Vec::new();
    };

    let mut velocities = Vec::with_capacity(masses.len());
    let mut momentum = DVec2::ZERO;
    for &mass in leading {
        let angle = rng.gen_range(0.0..TAU);
        let vel = DVec2::from_angle(angle) * (force / mass);
        momentum += vel * mass;
        velocities.push(vel);
    }
    velocities.push(-momentum / last_mass);
    velocities
}

/// Break `source` into `count` fragments at its position
///
/// Fragments move relative to the source, so the total momentum after the
/// split equals the source momentum: zero for a body at rest.
pub fn explode<R: Rng + ?Sized>(
    source: &Body,
    count: usize,
    force: f64,
    rng: &mut R,
) -> Result<Vec<Body>, ParamError> {
    positive_mass("mass", source.mass)?;
    positive("force", force)?;
    if count == 0 || count > MAX_FRAGMENTS {
        return Err(ParamError::FragmentCount {
            count,
            max: MAX_FRAGMENTS,
        });
    }

    let masses = partition_mass(source.mass, count, rng);
    let velocities = fragment_velocities(&masses, force, rng);

    let fragments: Vec<Body> = masses
        .iter()
        .zip(velocities)
        .map(|(&mass, vel)| Body::new(source.pos, source.vel + vel, mass, fragment_radius(mass)))
        .collect();

    debug!(
        count,
        force,
        source_mass = source.mass,
        "body exploded into fragments"
    );

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_single_fragment_keeps_all_mass_at_rest() {
        let mut rng = Pcg64::seed_from_u64(1);
        let masses = partition_mass(4.0, 1, &mut rng);
        assert_eq!(masses, vec![4.0]);
        let velocities = fragment_velocities(&masses, 3.0, &mut rng);
        assert_eq!(velocities, vec![DVec2::ZERO]);
    }

    #[test]
    fn test_empty_mass_list_has_no_velocities() {
        let mut rng = Pcg64::seed_from_u64(1);
        assert!(fragment_velocities(&[], 3.0, &mut rng).is_empty());
    }
}
