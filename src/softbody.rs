//! Soft bodies: point masses wired by a topology, stepped with a fixed config.

use crate::config::{BodyConfig, SimConfig};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::geometry::PositionSink;
use crate::link::SpringDamperLink;
use crate::mass::PointMass;
use crate::observer::StepObserver;
use crate::solver::SpringSolver;
use crate::topology::Topology;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A deformable body built from start positions and a connectivity table.
///
/// All validation happens in [`SoftBody::new`]; stepping cannot fail.
pub struct SoftBody<F: Float> {
    solver: SpringSolver<F>,
    config: SimConfig<F>,
}

impl<F: Float> SoftBody<F> {
    /// One mass per position (index order must match `topology`), one link per
    /// topology edge.
    pub fn new(
        positions: &[Vec3<F>],
        topology: &Topology,
        body: &BodyConfig<F>,
        config: SimConfig<F>,
    ) -> Result<Self, PhysicsError> {
        if positions.len() != topology.mass_count() {
            return Err(PhysicsError::MassCountMismatch {
                expected: topology.mass_count(),
                found: positions.len(),
            });
        }
        body.validate()?;
        config.validate()?;

        let mut solver = SpringSolver::new();
        for &position in positions {
            solver.add_mass(PointMass::new(position, body.weight)?);
        }
        for link in topology.build_links(body)? {
            solver.add_link(link)?;
        }

        tracing::debug!(
            masses = solver.mass_count(),
            links = solver.link_count(),
            integration = ?config.integration,
            "soft body created"
        );

        Ok(SoftBody { solver, config })
    }

    /// The 8-corner cuboid with default connectivity.
    pub fn cuboid(
        corners: &[Vec3<F>],
        body: &BodyConfig<F>,
        config: SimConfig<F>,
    ) -> Result<Self, PhysicsError> {
        Self::new(corners, &Topology::cuboid(), body, config)
    }

    pub fn step<O: StepObserver>(&mut self, observer: &mut O) {
        self.solver.step(&self.config, observer);
    }

    /// Run `frames` steps back to back.
    pub fn run<O: StepObserver>(&mut self, frames: usize, observer: &mut O) {
        for _ in 0..frames {
            self.step(observer);
        }
    }

    pub fn config(&self) -> &SimConfig<F> { &self.config }
    pub fn mass_count(&self) -> usize { self.solver.mass_count() }
    pub fn link_count(&self) -> usize { self.solver.link_count() }
    pub fn mass(&self, index: usize) -> &PointMass<F> { self.solver.mass(index) }
    pub fn mass_mut(&mut self, index: usize) -> &mut PointMass<F> { self.solver.mass_mut(index) }
    pub fn links(&self) -> &[SpringDamperLink<F>] { &self.solver.links }

    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.solver.masses.iter().map(|m| m.position).collect()
    }

    /// Hand every position, in index order, to `sink`.
    pub fn write_positions<S: PositionSink<F> + ?Sized>(&self, sink: &mut S) {
        for (i, mass) in self.solver.masses.iter().enumerate() {
            sink.write_position(i, mass.position);
        }
    }

    /// Average position of the masses (unweighted).
    pub fn centroid(&self) -> Vec3<F> {
        if self.solver.masses.is_empty() {
            return Vec3::zero();
        }
        let n = F::from_usize(self.solver.masses.len());
        let mut sum = Vec3::zero();
        for m in &self.solver.masses {
            sum += m.position;
        }
        sum.scale(F::one() / n)
    }

    pub fn mean_height(&self) -> F {
        self.centroid().y
    }

    pub fn momentum(&self) -> Vec3<F> {
        self.solver.momentum()
    }

    /// Largest speed over all masses.
    pub fn max_speed(&self) -> F {
        self.solver
            .masses
            .iter()
            .fold(F::zero(), |max, m| max.max(m.speed()))
    }

    /// Diagnostic bound check. Fails on the first mass whose state is
    /// non-finite or whose speed exceeds `max_speed`. Never modifies the body.
    pub fn check_stability(&self, max_speed: F) -> Result<(), PhysicsError> {
        for (index, mass) in self.solver.masses.iter().enumerate() {
            let finite = mass.position.is_finite() && mass.velocity.is_finite();
            if !finite || mass.speed() > max_speed {
                tracing::warn!(index, "mass left the stable regime");
                return Err(PhysicsError::Unstable { index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::cuboid_corners;
    use crate::observer::NoOpStepObserver;

    fn unit_cube() -> [Vec3<f64>; 8] {
        cuboid_corners(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn builds_cuboid() {
        let body = SoftBody::cuboid(&unit_cube(), &BodyConfig::new(), SimConfig::new()).unwrap();
        assert_eq!(body.mass_count(), 8);
        assert_eq!(body.link_count(), 24);
        assert_eq!(body.mass(7).position, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn centroid_of_unit_cube() {
        let body = SoftBody::cuboid(&unit_cube(), &BodyConfig::new(), SimConfig::new()).unwrap();
        let c = body.centroid();
        assert!((c.x - 0.5).abs() < 1e-12);
        assert!((c.y - 0.5).abs() < 1e-12);
        assert!((c.z - 0.5).abs() < 1e-12);
    }

    #[test]
    fn count_mismatch_rejected() {
        let corners = unit_cube();
        let err = SoftBody::cuboid(&corners[..7], &BodyConfig::new(), SimConfig::new())
            .err()
            .unwrap();
        assert_eq!(err, PhysicsError::MassCountMismatch { expected: 8, found: 7 });
    }

    #[test]
    fn bad_position_rejected() {
        let mut corners = unit_cube();
        corners[3].z = f64::INFINITY;
        let err = SoftBody::cuboid(&corners, &BodyConfig::new(), SimConfig::new())
            .err()
            .unwrap();
        assert_eq!(err, PhysicsError::NonFiniteInput);
    }

    #[test]
    fn stability_check_flags_runaway_mass() {
        let mut body =
            SoftBody::cuboid(&unit_cube(), &BodyConfig::new(), SimConfig::new()).unwrap();
        assert!(body.check_stability(1.0).is_ok());
        body.mass_mut(5).set_velocity(0.0, 100.0, 0.0);
        assert_eq!(body.check_stability(50.0), Err(PhysicsError::Unstable { index: 5 }));
        body.step(&mut NoOpStepObserver);
        assert!(body.check_stability(1000.0).is_ok());
    }
}
