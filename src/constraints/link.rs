use std::collections::HashSet;

use tracing::{debug, warn};

use super::Constraint;
use crate::objects::particle::Particle;

/// A rigid stick that keeps two particles of the same body at a fixed distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Index of the first particle.
    pub a: usize,
    /// Index of the second particle.
    pub b: usize,
    /// Target distance, fixed when the link is created.
    pub rest_length: f64,
}

impl Link {
    /// Creates a link whose rest length is the current distance between `a` and `b`.
    /// Callers validate the indices.
    pub(crate) fn between(a: usize, b: usize, particles: &[Particle]) -> Self {
        let rest_length = particles[a].position.distance(particles[b].position);
        Self { a, b, rest_length }
    }

    /// Current distance between the two endpoints, or `None` if either index is out of range.
    pub fn current_length(&self, particles: &[Particle]) -> Option<f64> {
        let a = particles.get(self.a)?;
        let b = particles.get(self.b)?;
        Some(a.position.distance(b.position))
    }
}

impl Constraint for Link {
    /// Moves each unlocked endpoint half of the length error along the link.
    fn solve_position(&self, particles: &mut [Particle], locked: &HashSet<usize>) {
        if self.a == self.b || self.a >= particles.len() || self.b >= particles.len() {
            warn!(a = self.a, b = self.b, count = particles.len(), "invalid particle index in link");
            return;
        }
        let (pa, pb) = super::get_mutable_particle_pair(particles, self.a, self.b);

        let delta = pb.position - pa.position;
        let current_length = delta.magnitude();
        if current_length == 0.0 {
            debug!(a = self.a, b = self.b, "skipping zero-length link");
            return;
        }

        let fraction = (current_length - self.rest_length) / current_length;
        let correction = delta * (0.5 * fraction);

        if !locked.contains(&self.a) {
            pa.position += correction;
        }
        if !locked.contains(&self.b) {
            pb.position -= correction;
        }
    }
}
