//! Error types for body and world operations.

use std::fmt;

/// Errors raised by operations on a single [`Body`](crate::Body).
///
/// Every variant is recoverable: the body is left exactly as it was before
/// the failing call.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyError {
    /// A particle index is outside the body's current particle count.
    IndexOutOfRange { index: usize, count: usize },
    /// `unpin` was called for a particle that is not locked.
    NotLocked { index: usize },
    /// The position and previous-position lists have different lengths.
    LengthMismatch { positions: usize, previous: usize },
    /// A link was asked to connect a particle to itself.
    SelfLink { index: usize },
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyError::IndexOutOfRange { index, count } => {
                write!(f, "particle index {} out of range (count: {})", index, count)
            }
            BodyError::NotLocked { index } => write!(f, "particle {} is not locked", index),
            BodyError::LengthMismatch { positions, previous } => write!(
                f,
                "{} positions but {} previous positions",
                positions, previous
            ),
            BodyError::SelfLink { index } => write!(f, "link connects particle {} to itself", index),
        }
    }
}

impl std::error::Error for BodyError {}

/// Errors raised when building or editing a [`World`](crate::World).
#[derive(Debug, Clone, PartialEq)]
pub enum WorldError {
    /// Boundary width and height must be positive and finite.
    InvalidBounds { width: f64, height: f64 },
    /// The fixed time step must be positive and finite.
    InvalidTimeStep(f64),
    /// A body index is outside the world's body count.
    BodyOutOfRange { index: usize, count: usize },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::InvalidBounds { width, height } => {
                write!(f, "invalid world bounds {}x{}", width, height)
            }
            WorldError::InvalidTimeStep(dt) => write!(f, "invalid time step {}", dt),
            WorldError::BodyOutOfRange { index, count } => {
                write!(f, "body index {} out of range (count: {})", index, count)
            }
        }
    }
}

impl std::error::Error for WorldError {}
