//! 2D particle physics with Verlet integration.
//!
//! A [`World`] holds independent [`Body`] values inside a rectangular box.
//! Each body is a set of particles joined by rigid links. Calling
//! [`World::step`] once per frame integrates every body under gravity and then
//! relaxes its boundary and link constraints. Particles can be pinned to an
//! externally driven position (e.g. a mouse drag) and released again.

pub mod common;
pub mod constraints;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod world;

// Re-export key types for easier use
pub use common::{SolverConfig, WorldConfig};
pub use constraints::{Bounds, Constraint, Link};
pub use error::{BodyError, WorldError};
pub use math::vec2::Vec2;
pub use objects::{Body, Particle};
pub use world::{ParticleHandle, World};
