//! Spring-damper links between two point masses.

use crate::config::{GravityMode, LengthBounds, LinkParams};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::mass::PointMass;
use crate::vec::Vec3;

/// A Hookean spring in parallel with a linear damper, joining masses `a` and `b`.
///
/// Endpoints are indices into the solver's mass arena. The link keeps its own
/// force accumulator, which [`add_force`](Self::add_force) adds to and
/// [`reset`](Self::reset) zeroes. The force is the one acting on `a`; `b`
/// receives its negation.
#[derive(Clone, Debug)]
pub struct SpringDamperLink<F: Float> {
    a: usize,
    b: usize,
    pub params: LinkParams<F>,
    force: Vec3<F>,
    last_distance: F,
}

impl<F: Float> SpringDamperLink<F> {
    pub fn new(a: usize, b: usize, params: LinkParams<F>) -> Result<Self, PhysicsError> {
        if a == b {
            return Err(PhysicsError::SelfLink { index: a });
        }
        params.validate()?;
        Ok(SpringDamperLink {
            a,
            b,
            params,
            force: Vec3::zero(),
            last_distance: F::zero(),
        })
    }

    pub fn a(&self) -> usize { self.a }
    pub fn b(&self) -> usize { self.b }
    pub fn force(&self) -> Vec3<F> { self.force }

    /// Separation measured by the latest [`add_force`](Self::add_force).
    pub fn last_distance(&self) -> F { self.last_distance }

    pub fn reset(&mut self) {
        self.force = Vec3::zero();
    }

    /// Add the spring and damper forces acting on `a` to the accumulator.
    ///
    /// Coincident endpoints have no spring axis; the spring term is skipped and
    /// the method returns `false`. The damper term is always applied.
    pub fn add_force(&mut self, masses: &[PointMass<F>], bounds: LengthBounds) -> bool {
        let ma = &masses[self.a];
        let mb = &masses[self.b];

        let delta = ma.position - mb.position;
        let distance = delta.length();
        self.last_distance = distance;

        let has_axis = distance > F::zero();
        if has_axis {
            let effective = match bounds {
                LengthBounds::Advisory => distance,
                LengthBounds::Clamped => {
                    distance.clamp(self.params.min_length, self.params.max_length)
                }
            };
            let stretch = effective - self.params.rest_length;
            self.force -= delta.scale(self.params.stiffness * stretch / distance);
        }

        self.force -= (ma.velocity - mb.velocity).scale(self.params.damping);
        has_axis
    }

    /// Forward Euler on both endpoints from the accumulated force, applied
    /// immediately: velocity then position for `a`, then the same for `b`.
    pub fn integrate(&self, masses: &mut [PointMass<F>], dt: F, gravity: F, mode: GravityMode) {
        let force = self.force;

        let a = &mut masses[self.a];
        let w = a.weight();
        a.velocity.x = a.velocity.x + (force.x / w) * dt;
        a.velocity.y = a.velocity.y + ((force.y - gravity * w) / w) * dt;
        a.velocity.z = a.velocity.z + (force.z / w) * dt;
        a.position += a.velocity.scale(dt);

        let b = &mut masses[self.b];
        let w = b.weight();
        let gravity_b = match mode {
            GravityMode::Uniform => gravity,
            GravityMode::MirroredOnSecond => -gravity,
        };
        b.velocity.x = b.velocity.x - (force.x / w) * dt;
        b.velocity.y = b.velocity.y - ((force.y + gravity_b * w) / w) * dt;
        b.velocity.z = b.velocity.z - (force.z / w) * dt;
        b.position += b.velocity.scale(dt);
    }
}
