use std::collections::HashSet;

use tracing::trace;

use crate::common::SolverConfig;
use crate::constraints::{Boundary, Bounds, Constraint, Link};
use crate::error::BodyError;
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::objects::particle::Particle;

/// A set of particles joined by rigid links, simulated independently of other bodies.
///
/// Particles are addressed by index in creation order. Particles are only ever
/// appended, so indices held by links and callers stay valid.
#[derive(Debug, Clone)]
pub struct Body {
    particles: Vec<Particle>,
    links: Vec<Link>,
    // Externally driven particles: skipped by integration and by link corrections.
    locked: HashSet<usize>,
    solver: SolverConfig,
}

impl Body {
    /// Builds a body from current positions, previous positions and link index pairs.
    ///
    /// Link rest lengths are taken from `positions`. A previous position that
    /// differs from its position seeds an initial velocity.
    pub fn new(
        positions: &[Vec2],
        previous_positions: &[Vec2],
        link_pairs: &[(usize, usize)],
        locked: &[usize],
    ) -> Result<Self, BodyError> {
        if positions.len() != previous_positions.len() {
            return Err(BodyError::LengthMismatch {
                positions: positions.len(),
                previous: previous_positions.len(),
            });
        }

        let particles: Vec<Particle> = positions
            .iter()
            .zip(previous_positions)
            .map(|(&position, &previous)| Particle::with_previous(position, previous))
            .collect();

        let mut body = Self {
            particles,
            links: Vec::with_capacity(link_pairs.len()),
            locked: HashSet::new(),
            solver: SolverConfig::default(),
        };
        for &(a, b) in link_pairs {
            body.add_link(a, b)?;
        }
        for &index in locked {
            body.check_index(index)?;
            body.locked.insert(index);
        }
        Ok(body)
    }

    /// Builds a body whose particles all start at rest.
    pub fn at_rest(
        positions: &[Vec2],
        link_pairs: &[(usize, usize)],
        locked: &[usize],
    ) -> Result<Self, BodyError> {
        Self::new(positions, positions, link_pairs, locked)
    }

    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.set_solver(solver);
        self
    }

    pub fn set_solver(&mut self, solver: SolverConfig) {
        self.solver = SolverConfig {
            bounce: solver.bounce.clamp(0.0, 1.0),
            ..solver
        };
    }

    pub fn solver(&self) -> &SolverConfig {
        &self.solver
    }

    /// Verlet-integrates every unlocked particle by `dt` under the body's gravity.
    ///
    /// Locked particles keep both their position and their previous position.
    pub fn integrate(&mut self, dt: f64) {
        let gravity = self.solver.gravity;
        for (index, particle) in self.particles.iter_mut().enumerate() {
            if self.locked.contains(&index) {
                continue;
            }
            integrator::integrate(particle, gravity, dt);
        }
    }

    /// Runs the configured number of relaxation passes.
    ///
    /// Each pass clamps every particle into `bounds`, then relaxes every link in
    /// order. Links see positions already moved earlier in the same pass.
    pub fn satisfy_constraints(&mut self, bounds: Bounds) {
        let boundary = Boundary::new(bounds, self.solver.bounce);
        for _ in 0..self.solver.iterations {
            boundary.solve_position(&mut self.particles, &self.locked);
            for link in &self.links {
                link.solve_position(&mut self.particles, &self.locked);
            }
        }
    }

    /// Locks a particle and moves it to `position`.
    ///
    /// The previous position is left alone, so the next passes see the drag as motion.
    /// Releasing does not zero the velocity: after [`Body::unpin`] the particle moves
    /// by its position minus the previous position it had before it was pinned,
    /// so a long drag can whip it on release.
    pub fn pin(&mut self, index: usize, position: Vec2) -> Result<(), BodyError> {
        self.check_index(index)?;
        self.locked.insert(index);
        self.particles[index].position = position;
        trace!(index, x = position.x, y = position.y, "pinned particle");
        Ok(())
    }

    /// Releases a locked particle. Fails with [`BodyError::NotLocked`] if it was free.
    pub fn unpin(&mut self, index: usize) -> Result<(), BodyError> {
        self.check_index(index)?;
        if !self.locked.remove(&index) {
            return Err(BodyError::NotLocked { index });
        }
        trace!(index, "unpinned particle");
        Ok(())
    }

    /// Index of the particle nearest `position` among those no farther than `radius`.
    /// Ties go to the lowest index. A negative or NaN radius matches nothing.
    pub fn closest_particle_within(&self, position: Vec2, radius: f64) -> Option<usize> {
        if radius.is_nan() || radius < 0.0 {
            return None;
        }
        let radius_squared = radius * radius;
        let mut best: Option<(usize, f64)> = None;
        for (index, particle) in self.particles.iter().enumerate() {
            let distance_squared = particle.position.distance_squared(position);
            if distance_squared > radius_squared {
                continue;
            }
            match best {
                Some((_, best_distance)) if distance_squared >= best_distance => {}
                _ => best = Some((index, distance_squared)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Appends a particle at rest and returns its index.
    pub fn add_particle(&mut self, position: Vec2) -> usize {
        let index = self.particles.len();
        self.particles.push(Particle::new(position));
        index
    }

    /// Links two existing particles at their current distance and returns the link's index.
    pub fn add_link(&mut self, a: usize, b: usize) -> Result<usize, BodyError> {
        self.check_index(a)?;
        self.check_index(b)?;
        if a == b {
            return Err(BodyError::SelfLink { index: a });
        }
        let index = self.links.len();
        self.links.push(Link::between(a, b, &self.particles));
        Ok(index)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    /// Snapshot of every particle position, in index order.
    pub fn positions(&self) -> Vec<Vec2> {
        self.particles.iter().map(|p| p.position).collect()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn is_locked(&self, index: usize) -> bool {
        self.locked.contains(&index)
    }

    /// Locked particle indices in ascending order.
    pub fn locked_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.locked.iter().copied().collect();
        indices.sort_unstable();
        indices
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Sum of squared differences between each link's length and its rest length.
    pub fn link_error(&self) -> f64 {
        self.links
            .iter()
            .filter_map(|link| {
                let deviation = link.current_length(&self.particles)? - link.rest_length;
                Some(deviation * deviation)
            })
            .sum()
    }

    fn check_index(&self, index: usize) -> Result<(), BodyError> {
        if index < self.particles.len() {
            Ok(())
        } else {
            Err(BodyError::IndexOutOfRange {
                index,
                count: self.particles.len(),
            })
        }
    }
}
