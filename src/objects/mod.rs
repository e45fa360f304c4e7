pub mod body;
pub mod particle;

pub use body::Body;
pub use particle::Particle;
