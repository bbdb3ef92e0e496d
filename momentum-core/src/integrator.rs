use crate::engine::Body;

/// Advance a body by one explicit Euler step: `pos += vel * scale * dt`
///
/// `scale` converts meters to pixels. There is no sub-stepping, so a fast
/// body can tunnel through a thin target between two frames.
pub fn step(body: &mut Body, scale: f64, dt: f64) {
    body.pos += body.vel * scale * dt;
}

pub fn step_all(bodies: &mut [Body], scale: f64, dt: f64) {
    for body in bodies.iter_mut() {
        step(body, scale, dt);
    }
}
