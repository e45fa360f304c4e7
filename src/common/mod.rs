pub mod config;

pub use config::{SolverConfig, WorldConfig};
