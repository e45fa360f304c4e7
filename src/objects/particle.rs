use crate::math::vec2::Vec2;

/// A point mass whose velocity is implied by its last two positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Where the particle was one time step ago.
    pub previous_position: Vec2,
}

impl Particle {
    /// Creates a particle at rest at `position`.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            previous_position: position,
        }
    }

    /// Creates a particle whose initial velocity is `position - previous_position`.
    pub fn with_previous(position: Vec2, previous_position: Vec2) -> Self {
        Self {
            position,
            previous_position,
        }
    }

    /// Displacement per time step.
    pub fn velocity(&self) -> Vec2 {
        self.position - self.previous_position
    }
}
