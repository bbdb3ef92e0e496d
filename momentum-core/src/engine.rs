use glam::DVec2;

/// A circular body in one of the demos
///
/// 1D demos only use the x components; y stays fixed on the track.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    pub mass: f64,
    pub radius: f64,
    /// Set once the body has taken part in a resolved collision
    pub collided: bool,
}

impl Body {
    pub fn new(pos: DVec2, vel: DVec2, mass: f64, radius: f64) -> Self {
        Self {
            pos,
            vel,
            mass,
            radius,
            collided: false,
        }
    }

    pub fn momentum(&self) -> Momentum {
        Momentum::from_vector(self.vel * self.mass)
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Heading in degrees, measured the way the canvas draws it (y down)
    pub fn angle_degrees(&self) -> f64 {
        self.vel.y.atan2(self.vel.x).to_degrees()
    }
}

/// Momentum of a body or of a whole scene
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Momentum {
    pub px: f64,
    pub py: f64,
    pub magnitude: f64,
}

impl Momentum {
    pub fn from_vector(p: DVec2) -> Self {
        Self {
            px: p.x,
            py: p.y,
            magnitude: p.length(),
        }
    }

    pub fn vector(&self) -> DVec2 {
        DVec2::new(self.px, self.py)
    }
}

impl std::ops::Add for Momentum {
    type Output = Momentum;

    fn add(self, rhs: Momentum) -> Momentum {
        Momentum::from_vector(self.vector() + rhs.vector())
    }
}

impl std::iter::Sum for Momentum {
    fn sum<I: Iterator<Item = Momentum>>(iter: I) -> Momentum {
        iter.fold(Momentum::default(), |acc, p| acc + p)
    }
}

pub fn total_momentum<'a>(bodies: impl IntoIterator<Item = &'a Body>) -> Momentum {
    bodies.into_iter().map(Body::momentum).sum()
}

pub fn total_kinetic_energy<'a>(bodies: impl IntoIterator<Item = &'a Body>) -> f64 {
    bodies.into_iter().map(Body::kinetic_energy).sum()
}

/// Mass-weighted centre of a set of bodies, `None` when empty
pub fn center_of_mass<'a>(bodies: impl IntoIterator<Item = &'a Body>) -> Option<DVec2> {
    let (weighted, mass) = bodies
        .into_iter()
        .fold((DVec2::ZERO, 0.0), |(w, m), b| (w + b.pos * b.mass, m + b.mass));
    (mass > 0.0).then(|| weighted / mass)
}
