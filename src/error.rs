//! Error types for simulation setup.

use core::fmt;

/// Errors raised while building or checking a simulation.
///
/// Everything here is a construction-time failure; stepping never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass weight must be positive and finite.
    InvalidWeight,
    /// A position or velocity component is NaN or infinite.
    NonFiniteInput,
    /// A link connects a mass to itself.
    SelfLink { index: usize },
    /// Mass index is out of bounds.
    MassOutOfBounds { index: usize, count: usize },
    /// Number of supplied positions does not match the topology.
    MassCountMismatch { expected: usize, found: usize },
    /// Vertex data is not a whole number of vertices of at least 3 floats.
    InvalidVertexLayout { len: usize, stride: usize },
    /// Timestep must be positive and finite.
    InvalidTimestep,
    /// Restitution must be finite and non-negative.
    InvalidRestitution,
    /// Link parameters must be finite and non-negative, with min <= max.
    InvalidLinkParams,
    /// `GravityMode::MirroredOnSecond` only applies to `Integration::Sequential`.
    MirroredGravityNeedsSequential,
    /// A mass left the stable regime (non-finite state or speed over the limit).
    Unstable { index: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidWeight => write!(f, "mass weight must be positive and finite"),
            PhysicsError::NonFiniteInput => write!(f, "input contains a non-finite value"),
            PhysicsError::SelfLink { index } => {
                write!(f, "link connects mass {} to itself", index)
            }
            PhysicsError::MassOutOfBounds { index, count } => {
                write!(f, "mass index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::MassCountMismatch { expected, found } => {
                write!(f, "expected {} mass positions, found {}", expected, found)
            }
            PhysicsError::InvalidVertexLayout { len, stride } => {
                write!(f, "{} floats do not split into vertices of stride {}", len, stride)
            }
            PhysicsError::InvalidTimestep => write!(f, "timestep must be positive and finite"),
            PhysicsError::InvalidRestitution => {
                write!(f, "restitution must be finite and non-negative")
            }
            PhysicsError::InvalidLinkParams => write!(f, "invalid spring-damper parameters"),
            PhysicsError::MirroredGravityNeedsSequential => {
                write!(f, "mirrored gravity requires sequential integration")
            }
            PhysicsError::Unstable { index } => {
                write!(f, "mass {} left the stable regime", index)
            }
        }
    }
}

impl core::error::Error for PhysicsError {}
