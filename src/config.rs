//! Configuration types for bodies and the per-frame simulation step.

use crate::collision::GroundPlane;
use crate::error::PhysicsError;
use crate::float::Float;

/// Spring and damper parameters shared by a class of links.
///
/// `min_length` and `max_length` are only read under
/// [`LengthBounds::Clamped`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinkParams<F: Float> {
    /// Spring constant `k`.
    pub stiffness: F,
    /// Damper constant `c`, applied to relative velocity.
    pub damping: F,
    /// Separation the spring pulls toward.
    pub rest_length: F,
    pub min_length: F,
    pub max_length: F,
}

impl<F: Float> LinkParams<F> {
    /// Link with the given constants and open bounds `[0, ∞)`, so clamping
    /// has no effect until [`LinkParams::with_bounds`] narrows them.
    pub fn new(stiffness: F, damping: F, rest_length: F) -> Self {
        LinkParams {
            stiffness,
            damping,
            rest_length,
            min_length: F::zero(),
            max_length: F::infinity(),
        }
    }

    /// Set the length bounds.
    pub fn with_bounds(mut self, min_length: F, max_length: F) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Same constants with every length scaled by √2, the ratio between a
    /// face diagonal and a side of a square face.
    pub fn face_diagonal(&self) -> Self {
        let root_two = F::two().sqrt();
        LinkParams {
            stiffness: self.stiffness,
            damping: self.damping,
            rest_length: self.rest_length * root_two,
            min_length: self.min_length * root_two,
            max_length: self.max_length * root_two,
        }
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        let values = [self.stiffness, self.damping, self.rest_length, self.min_length];
        if values.iter().any(|v| !v.is_finite() || *v < F::zero()) {
            return Err(PhysicsError::InvalidLinkParams);
        }
        // An unbounded maximum is allowed; NaN fails the comparison.
        if !(self.min_length <= self.max_length) {
            return Err(PhysicsError::InvalidLinkParams);
        }
        Ok(())
    }
}

/// Physical parameters of a body: per-class link constants and per-mass weight.
///
/// # Builder Pattern
/// ```
/// use softcube::config::{BodyConfig, LinkParams};
///
/// let config: BodyConfig<f32> = BodyConfig::new()
///     .with_weight(1.5)
///     .with_structural(LinkParams::new(40.0, 4.0, 0.25));
/// assert!((config.diagonal.rest_length - 0.25 * 2f32.sqrt()).abs() < 1e-6);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyConfig<F: Float> {
    /// Links along the principal axes.
    pub structural: LinkParams<F>,
    /// Links across faces.
    pub diagonal: LinkParams<F>,
    /// Weight of every mass. Default: 2.0.
    pub weight: F,
}

impl<F: Float> BodyConfig<F> {
    /// k = 20, c = 5, rest 0.2, bounds [0.08, 0.6], diagonals scaled by √2,
    /// weight 2.0.
    pub fn new() -> Self {
        let structural = LinkParams::new(
            F::from_f64(20.0),
            F::from_f64(5.0),
            F::from_f64(0.2),
        )
        .with_bounds(F::from_f64(0.08), F::from_f64(0.6));
        BodyConfig {
            structural,
            diagonal: structural.face_diagonal(),
            weight: F::from_f64(2.0),
        }
    }

    /// Set the weight of every mass.
    pub fn with_weight(mut self, weight: F) -> Self {
        self.weight = weight;
        self
    }

    /// Set the structural parameters; diagonals are re-derived from them.
    pub fn with_structural(mut self, params: LinkParams<F>) -> Self {
        self.structural = params;
        self.diagonal = params.face_diagonal();
        self
    }

    /// Override the diagonal parameters.
    pub fn with_diagonal(mut self, params: LinkParams<F>) -> Self {
        self.diagonal = params;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        self.structural.validate()?;
        self.diagonal.validate()?;
        if !(self.weight > F::zero()) || !self.weight.is_finite() {
            return Err(PhysicsError::InvalidWeight);
        }
        Ok(())
    }
}

impl<F: Float> Default for BodyConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// How a frame turns link forces into motion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Integration {
    /// Accumulate every link force per mass, then integrate each mass once.
    /// Independent of link order.
    #[default]
    TwoPhase,
    /// Each link integrates both endpoints immediately, in topology order.
    /// Later links see the updates of earlier ones.
    Sequential,
}

/// Gravity applied to the second endpoint of a link in [`Integration::Sequential`].
///
/// [`SimConfig::validate`] rejects `MirroredOnSecond` under any other pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GravityMode {
    /// Every mass accelerates downward.
    #[default]
    Uniform,
    /// The second endpoint of each link accelerates upward.
    MirroredOnSecond,
}

/// Whether the spring law reads [`LinkParams::min_length`] and
/// [`LinkParams::max_length`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum LengthBounds {
    /// Bounds are stored but ignored.
    #[default]
    Advisory,
    /// Distance is clamped into the bounds before the spring term.
    Clamped,
}

/// Per-frame simulation settings.
///
/// # Builder Pattern
/// ```
/// use softcube::config::{Integration, SimConfig};
///
/// let config: SimConfig<f64> = SimConfig::new()
///     .with_timestep(0.001)
///     .with_gravity(0.0)
///     .with_ground(-0.9, 0.9)
///     .with_integration(Integration::Sequential);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimConfig<F: Float> {
    /// Fixed timestep. Default: 0.0001.
    pub dt: F,
    /// Gravity magnitude, acting along -y. Default: 9.82.
    pub gravity: F,
    /// Floor to collide against. Default: height -0.8, restitution 0.9.
    pub ground: Option<GroundPlane<F>>,
    pub integration: Integration,
    pub gravity_mode: GravityMode,
    pub length_bounds: LengthBounds,
}

impl<F: Float> SimConfig<F> {
    pub fn new() -> Self {
        SimConfig {
            dt: F::from_f64(0.0001),
            gravity: F::from_f64(9.82),
            ground: Some(GroundPlane::new(F::from_f64(-0.8), F::from_f64(0.9))),
            integration: Integration::TwoPhase,
            gravity_mode: GravityMode::Uniform,
            length_bounds: LengthBounds::Advisory,
        }
    }

    pub fn with_timestep(mut self, dt: F) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_ground(mut self, height: F, restitution: F) -> Self {
        self.ground = Some(GroundPlane::new(height, restitution));
        self
    }

    pub fn without_ground(mut self) -> Self {
        self.ground = None;
        self
    }

    pub fn with_integration(mut self, integration: Integration) -> Self {
        self.integration = integration;
        self
    }

    pub fn with_gravity_mode(mut self, gravity_mode: GravityMode) -> Self {
        self.gravity_mode = gravity_mode;
        self
    }

    pub fn with_length_bounds(mut self, length_bounds: LengthBounds) -> Self {
        self.length_bounds = length_bounds;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.dt > F::zero()) || !self.dt.is_finite() {
            return Err(PhysicsError::InvalidTimestep);
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::NonFiniteInput);
        }
        if let Some(ground) = &self.ground {
            ground.validate()?;
        }
        if self.gravity_mode == GravityMode::MirroredOnSecond
            && self.integration != Integration::Sequential
        {
            return Err(PhysicsError::MirroredGravityNeedsSequential);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_setup() {
        let body: BodyConfig<f64> = BodyConfig::new();
        assert_eq!(body.structural.stiffness, 20.0);
        assert_eq!(body.structural.damping, 5.0);
        assert_eq!(body.structural.rest_length, 0.2);
        assert_eq!(body.weight, 2.0);
        assert!((body.diagonal.rest_length - (0.08f64).sqrt()).abs() < 1e-12);
        assert!(body.diagonal.min_length < body.diagonal.max_length);

        let sim: SimConfig<f64> = SimConfig::new();
        assert_eq!(sim.dt, 0.0001);
        assert_eq!(sim.gravity, 9.82);
        assert_eq!(sim.ground, Some(GroundPlane::new(-0.8, 0.9)));
        assert_eq!(sim.integration, Integration::TwoPhase);
        assert_eq!(sim.gravity_mode, GravityMode::Uniform);
        assert_eq!(sim.length_bounds, LengthBounds::Advisory);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let params = LinkParams::new(1.0f32, 1.0, 1.0).with_bounds(2.0, 0.5);
        assert_eq!(params.validate(), Err(PhysicsError::InvalidLinkParams));
    }

    #[test]
    fn rejects_negative_stiffness() {
        let body = BodyConfig::<f32>::new().with_structural(LinkParams::new(-1.0, 1.0, 1.0));
        assert_eq!(body.validate(), Err(PhysicsError::InvalidLinkParams));
    }

    #[test]
    fn rejects_bad_timestep() {
        assert_eq!(
            SimConfig::<f32>::new().with_timestep(0.0).validate(),
            Err(PhysicsError::InvalidTimestep)
        );
        assert_eq!(
            SimConfig::<f64>::new().with_timestep(f64::NAN).validate(),
            Err(PhysicsError::InvalidTimestep)
        );
    }

    #[test]
    fn rejects_bad_restitution() {
        assert_eq!(
            SimConfig::<f32>::new().with_ground(-0.8, -0.1).validate(),
            Err(PhysicsError::InvalidRestitution)
        );
        assert!(SimConfig::<f32>::new().without_ground().validate().is_ok());
    }

    #[test]
    fn open_bounds_by_default() {
        let params = LinkParams::new(10.0f64, 0.0, 1.0);
        assert_eq!(params.min_length, 0.0);
        assert_eq!(params.max_length, f64::INFINITY);
        assert!(params.validate().is_ok());
        assert_eq!(params.face_diagonal().max_length, f64::INFINITY);
        assert!(BodyConfig::<f32>::new()
            .with_structural(LinkParams::new(20.0, 5.0, 0.2))
            .validate()
            .is_ok());

        let nan_max = LinkParams::new(1.0f64, 1.0, 1.0).with_bounds(0.0, f64::NAN);
        assert_eq!(nan_max.validate(), Err(PhysicsError::InvalidLinkParams));
    }

    #[test]
    fn rejects_body_wide_bad_weight() {
        assert_eq!(
            BodyConfig::<f64>::new().with_weight(0.0).validate(),
            Err(PhysicsError::InvalidWeight)
        );
        assert_eq!(
            BodyConfig::<f32>::new().with_weight(f32::NAN).validate(),
            Err(PhysicsError::InvalidWeight)
        );
    }

    #[test]
    fn mirrored_gravity_requires_sequential() {
        let mirrored = SimConfig::<f64>::new().with_gravity_mode(GravityMode::MirroredOnSecond);
        assert_eq!(
            mirrored.validate(),
            Err(PhysicsError::MirroredGravityNeedsSequential)
        );
        assert!(mirrored
            .with_integration(Integration::Sequential)
            .validate()
            .is_ok());
    }
}
