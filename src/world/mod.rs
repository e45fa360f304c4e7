pub mod physics_world;

pub use physics_world::{ParticleHandle, World};
