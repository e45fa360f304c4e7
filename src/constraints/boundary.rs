use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Constraint;
use crate::objects::particle::Particle;

/// Axis-aligned simulation box spanning `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True for a box with positive, finite extent on both axes.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Keeps particles inside [`Bounds`], reflecting their implied velocity off the walls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub bounds: Bounds,
    /// Fraction of wall-normal velocity kept after contact, in [0, 1].
    pub bounce: f64,
}

impl Boundary {
    pub fn new(bounds: Bounds, bounce: f64) -> Self {
        Self { bounds, bounce }
    }

    /// Clamps one particle into the box. Each axis is handled on its own.
    pub fn apply(&self, particle: &mut Particle) {
        let (x, prev_x) = clamp_axis(
            particle.position.x,
            particle.previous_position.x,
            self.bounds.width,
            self.bounce,
        );
        let (y, prev_y) = clamp_axis(
            particle.position.y,
            particle.previous_position.y,
            self.bounds.height,
            self.bounce,
        );
        particle.position.x = x;
        particle.previous_position.x = prev_x;
        particle.position.y = y;
        particle.previous_position.y = prev_y;
    }
}

/// Returns the clamped `(position, previous)` pair for one axis.
/// The previous coordinate is rebuilt so the next step moves away from the wall.
fn clamp_axis(position: f64, previous: f64, max: f64, bounce: f64) -> (f64, f64) {
    let clamped = if position < 0.0 {
        0.0
    } else if position > max {
        max
    } else {
        return (position, previous);
    };
    let diff = position - previous;
    (clamped, clamped + diff * bounce)
}

impl Constraint for Boundary {
    /// Locked particles are clamped too; only integration exempts them.
    fn solve_position(&self, particles: &mut [Particle], _locked: &HashSet<usize>) {
        for particle in particles.iter_mut() {
            self.apply(particle);
        }
    }
}
