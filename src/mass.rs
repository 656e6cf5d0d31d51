//! Point masses: weight plus kinematic state, stepped with explicit Euler.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec3;

/// A point mass — the node type of the spring network.
///
/// Position and velocity are public and mutated in place by the solver.
/// `force` accumulates link forces between integration steps.
#[derive(Clone, Debug)]
pub struct PointMass<F: Float> {
    pub position: Vec3<F>,
    pub velocity: Vec3<F>,
    pub force: Vec3<F>,
    weight: F,
    inv_weight: F,
}

impl<F: Float> PointMass<F> {
    /// Create a mass at rest at `position`.
    ///
    /// Fails with [`PhysicsError::InvalidWeight`] unless `weight` is positive
    /// and finite, and with [`PhysicsError::NonFiniteInput`] for a non-finite
    /// position.
    pub fn new(position: Vec3<F>, weight: F) -> Result<Self, PhysicsError> {
        if !(weight > F::zero()) || !weight.is_finite() {
            return Err(PhysicsError::InvalidWeight);
        }
        if !position.is_finite() {
            return Err(PhysicsError::NonFiniteInput);
        }
        Ok(PointMass {
            position,
            velocity: Vec3::zero(),
            force: Vec3::zero(),
            weight,
            inv_weight: F::one() / weight,
        })
    }

    pub fn weight(&self) -> F { self.weight }
    pub fn inv_weight(&self) -> F { self.inv_weight }

    pub fn set_position(&mut self, x: F, y: F, z: F) {
        self.position = Vec3::new(x, y, z);
    }

    pub fn set_velocity(&mut self, x: F, y: F, z: F) {
        self.velocity = Vec3::new(x, y, z);
    }

    pub fn set_velocity_x(&mut self, x: F) { self.velocity.x = x; }
    pub fn set_velocity_y(&mut self, y: F) { self.velocity.y = y; }
    pub fn set_velocity_z(&mut self, z: F) { self.velocity.z = z; }

    pub fn add_velocity_x(&mut self, x: F) { self.velocity.x = self.velocity.x + x; }
    pub fn add_velocity_y(&mut self, y: F) { self.velocity.y = self.velocity.y + y; }
    pub fn add_velocity_z(&mut self, z: F) { self.velocity.z = self.velocity.z + z; }

    /// Add `force` to the accumulator consumed by the next [`integrate`](Self::integrate).
    pub fn apply_force(&mut self, force: Vec3<F>) {
        self.force += force;
    }

    pub fn clear_force(&mut self) {
        self.force = Vec3::zero();
    }

    /// One forward Euler step from the accumulated force plus `gravity`
    /// (an acceleration). Velocity first, then position. Clears the accumulator.
    pub fn integrate(&mut self, dt: F, gravity: Vec3<F>) {
        let acceleration = self.force.scale(self.inv_weight) + gravity;
        self.velocity += acceleration.scale(dt);
        self.position += self.velocity.scale(dt);
        self.force = Vec3::zero();
    }

    pub fn momentum(&self) -> Vec3<F> {
        self.velocity.scale(self.weight)
    }

    pub fn speed(&self) -> F {
        self.velocity.length()
    }
}
