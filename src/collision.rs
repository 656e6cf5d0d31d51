//! Ground-plane collision response.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::mass::PointMass;

/// Horizontal floor at `height` along y.
///
/// A mass at or below the floor has its vertical velocity reflected and
/// scaled by `restitution`. Position is left alone, so a mass can sit
/// slightly below the floor until its own motion carries it back out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GroundPlane<F: Float> {
    pub height: F,
    pub restitution: F,
}

impl<F: Float> GroundPlane<F> {
    pub fn new(height: F, restitution: F) -> Self {
        GroundPlane { height, restitution }
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.height.is_finite() {
            return Err(PhysicsError::NonFiniteInput);
        }
        if !self.restitution.is_finite() || self.restitution < F::zero() {
            return Err(PhysicsError::InvalidRestitution);
        }
        Ok(())
    }

    pub fn is_penetrating(&self, mass: &PointMass<F>) -> bool {
        mass.position.y <= self.height
    }

    /// Reflect vertical velocity if `mass` has reached the floor.
    /// Returns whether a collision happened.
    pub fn respond(&self, mass: &mut PointMass<F>) -> bool {
        if !self.is_penetrating(mass) {
            return false;
        }
        mass.velocity.y = -self.restitution * mass.velocity.y;
        true
    }
}
