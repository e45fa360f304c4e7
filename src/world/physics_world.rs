use tracing::{debug, trace};

use crate::{
    common::WorldConfig,
    constraints::Bounds,
    error::WorldError,
    math::vec2::Vec2,
    objects::body::Body,
};

/// Addresses one particle of one body in a [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleHandle {
    pub body: usize,
    pub particle: usize,
}

/// A box of independently simulated bodies advanced with a fixed time step.
#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<Body>,
    bounds: Bounds,
    time_step: f64,
}

impl World {
    /// Creates an empty world spanning `[0, width] x [0, height]` with the default time step.
    pub fn new(width: f64, height: f64) -> Result<Self, WorldError> {
        Self::from_config(WorldConfig::new(width, height))
    }

    pub fn from_config(config: WorldConfig) -> Result<Self, WorldError> {
        let bounds = Bounds::new(config.width, config.height);
        if !bounds.is_valid() {
            return Err(WorldError::InvalidBounds {
                width: config.width,
                height: config.height,
            });
        }
        if !(config.time_step.is_finite() && config.time_step > 0.0) {
            return Err(WorldError::InvalidTimeStep(config.time_step));
        }
        Ok(Self {
            bodies: Vec::new(),
            bounds,
            time_step: config.time_step,
        })
    }

    /// Adds a body and returns its index.
    pub fn add_body(&mut self, body: Body) -> usize {
        let index = self.bodies.len();
        debug!(
            index,
            particles = body.particle_count(),
            links = body.link_count(),
            "added body"
        );
        self.bodies.push(body);
        index
    }

    /// Removes and returns a body. Later bodies shift down by one index.
    pub fn remove_body(&mut self, index: usize) -> Result<Body, WorldError> {
        if index >= self.bodies.len() {
            return Err(WorldError::BodyOutOfRange {
                index,
                count: self.bodies.len(),
            });
        }
        debug!(index, "removed body");
        Ok(self.bodies.remove(index))
    }

    /// Advances every body by one time step: integrate, then relax against the bounds.
    pub fn step(&mut self) {
        trace!(bodies = self.bodies.len(), "world step");
        for body in self.bodies.iter_mut() {
            body.integrate(self.time_step);
            body.satisfy_constraints(self.bounds);
        }
    }

    /// Hit-tests every body and returns the particle closest to `position`
    /// within `radius`. Ties go to the lowest body index, then the lowest particle index.
    pub fn closest_particle_within(&self, position: Vec2, radius: f64) -> Option<ParticleHandle> {
        let mut best: Option<(ParticleHandle, f64)> = None;
        for (body_index, body) in self.bodies.iter().enumerate() {
            let Some(particle) = body.closest_particle_within(position, radius) else {
                continue;
            };
            let distance_squared = body.particles()[particle].position.distance_squared(position);
            match best {
                Some((_, best_distance)) if distance_squared >= best_distance => {}
                _ => {
                    best = Some((
                        ParticleHandle {
                            body: body_index,
                            particle,
                        },
                        distance_squared,
                    ))
                }
            }
        }
        best.map(|(handle, _)| handle)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }
}
