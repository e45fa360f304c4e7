use std::collections::HashSet;

use crate::objects::particle::Particle;

pub mod boundary;
pub mod link;

pub use boundary::{Boundary, Bounds};
pub use link::Link;

/// A positional constraint relaxed once per solver pass.
pub trait Constraint {
    /// Moves particles toward satisfying the constraint.
    /// `locked` holds the indices of externally driven particles.
    fn solve_position(&self, particles: &mut [Particle], locked: &HashSet<usize>);
}

/// Mutable references to two distinct particles of one slice.
/// Panics if the indices are equal or out of bounds.
pub(crate) fn get_mutable_particle_pair(
    particles: &mut [Particle],
    idx_a: usize,
    idx_b: usize,
) -> (&mut Particle, &mut Particle) {
    debug_assert_ne!(idx_a, idx_b);
    if idx_a < idx_b {
        let (slice_a, slice_b) = particles.split_at_mut(idx_b);
        (&mut slice_a[idx_a], &mut slice_b[0])
    } else {
        let (slice_b, slice_a) = particles.split_at_mut(idx_a);
        (&mut slice_a[0], &mut slice_b[idx_b])
    }
}
