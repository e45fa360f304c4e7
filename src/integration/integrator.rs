use crate::math::vec2::Vec2;
use crate::objects::particle::Particle;

/// Advances a particle one step with Störmer–Verlet integration.
///
/// The new position is `x + (x - x_prev) + a * dt²` and the old position
/// becomes the previous one. Velocity is never stored.
pub fn integrate(particle: &mut Particle, acceleration: Vec2, dt: f64) {
    let temp = particle.position;
    let displacement = temp - particle.previous_position;
    particle.position = temp + displacement + acceleration * (dt * dt);
    particle.previous_position = temp;
}
