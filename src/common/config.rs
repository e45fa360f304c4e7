//! Tunable simulation parameters.
//!
//! Both config types deserialize from partial JSON: missing fields fall back
//! to their defaults.
//!
//! ```
//! use versics::{SolverConfig, Vec2};
//!
//! let solver = SolverConfig::new()
//!     .with_iterations(8)
//!     .with_gravity(Vec2::new(0.0, 500.0))
//!     .with_bounce(0.5);
//! assert_eq!(solver.iterations, 8);
//! ```

use serde::{Deserialize, Serialize};

use crate::math::vec2::Vec2;

/// Per-body integration and relaxation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Constant acceleration applied to unlocked particles. Default: 980 down.
    pub gravity: Vec2,
    /// Relaxation passes per `satisfy_constraints` call. Default: 6.
    pub iterations: usize,
    /// Fraction of wall-normal velocity kept after hitting the boundary.
    /// Range [0, 1]: 0 stops dead, 1 reflects perfectly. Default: 0.25.
    pub bounce: f64,
}

impl SolverConfig {
    pub const DEFAULT_GRAVITY: f64 = 980.0;
    pub const DEFAULT_ITERATIONS: usize = 6;
    pub const DEFAULT_BOUNCE: f64 = 0.25;

    pub fn new() -> Self {
        Self {
            gravity: Vec2::DOWN * Self::DEFAULT_GRAVITY,
            iterations: Self::DEFAULT_ITERATIONS,
            bounce: Self::DEFAULT_BOUNCE,
        }
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the bounce coefficient, clamped into [0, 1].
    pub fn with_bounce(mut self, bounce: f64) -> Self {
        self.bounce = bounce.clamp(0.0, 1.0);
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Boundary size and fixed time step shared by every body in a world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    /// Seconds advanced per `World::step`. Default: 1/60.
    pub time_step: f64,
}

impl WorldConfig {
    pub const DEFAULT_TIME_STEP: f64 = 1.0 / 60.0;

    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            time_step: Self::DEFAULT_TIME_STEP,
        }
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }
}

impl Default for WorldConfig {
    /// An 800x800 box, the size the swing scene runs in.
    fn default() -> Self {
        Self::new(800.0, 800.0)
    }
}
