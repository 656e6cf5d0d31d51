//! Frame stepper for a network of point masses and spring-damper links.

use crate::config::{Integration, SimConfig};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::link::SpringDamperLink;
use crate::mass::PointMass;
use crate::observer::StepObserver;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Owns the mass arena and the links that index into it.
///
/// Links are evaluated in insertion order. Nothing is allocated per frame.
pub struct SpringSolver<F: Float> {
    pub masses: AllocVec<PointMass<F>>,
    pub links: AllocVec<SpringDamperLink<F>>,
}

impl<F: Float> SpringSolver<F> {
    pub fn new() -> Self {
        SpringSolver {
            masses: AllocVec::new(),
            links: AllocVec::new(),
        }
    }

    pub fn add_mass(&mut self, mass: PointMass<F>) -> usize {
        let idx = self.masses.len();
        self.masses.push(mass);
        idx
    }

    /// Both endpoints must already be in the arena.
    pub fn add_link(&mut self, link: SpringDamperLink<F>) -> Result<(), PhysicsError> {
        let count = self.masses.len();
        for index in [link.a(), link.b()] {
            if index >= count {
                return Err(PhysicsError::MassOutOfBounds { index, count });
            }
        }
        self.links.push(link);
        Ok(())
    }

    /// Advance one frame: link forces, integration, then ground collision.
    pub fn step<O: StepObserver>(&mut self, config: &SimConfig<F>, observer: &mut O) {
        match config.integration {
            Integration::TwoPhase => self.step_two_phase(config, observer),
            Integration::Sequential => self.step_sequential(config, observer),
        }

        if let Some(ground) = &config.ground {
            for (i, mass) in self.masses.iter_mut().enumerate() {
                if ground.respond(mass) {
                    observer.on_collision(i);
                }
            }
        }

        observer.on_step_complete();
    }

    fn step_two_phase<O: StepObserver>(&mut self, config: &SimConfig<F>, observer: &mut O) {
        for mass in self.masses.iter_mut() {
            mass.clear_force();
        }

        for (i, link) in self.links.iter_mut().enumerate() {
            link.reset();
            if !link.add_force(&self.masses, config.length_bounds) {
                flag_degenerate(observer, i);
            }
            let force = link.force();
            self.masses[link.a()].apply_force(force);
            self.masses[link.b()].apply_force(-force);
        }
        observer.on_forces_accumulated();

        let gravity = Vec3::new(F::zero(), -config.gravity, F::zero());
        for mass in self.masses.iter_mut() {
            mass.integrate(config.dt, gravity);
        }
    }

    fn step_sequential<O: StepObserver>(&mut self, config: &SimConfig<F>, observer: &mut O) {
        for (i, link) in self.links.iter_mut().enumerate() {
            link.reset();
            if !link.add_force(&self.masses, config.length_bounds) {
                flag_degenerate(observer, i);
            }
            link.integrate(&mut self.masses, config.dt, config.gravity, config.gravity_mode);
        }
        observer.on_forces_accumulated();
    }

    pub fn mass_count(&self) -> usize { self.masses.len() }
    pub fn link_count(&self) -> usize { self.links.len() }
    pub fn mass(&self, index: usize) -> &PointMass<F> { &self.masses[index] }
    pub fn mass_mut(&mut self, index: usize) -> &mut PointMass<F> { &mut self.masses[index] }
    pub fn link(&self, index: usize) -> &SpringDamperLink<F> { &self.links[index] }

    /// Sum of weight × velocity over all masses.
    pub fn momentum(&self) -> Vec3<F> {
        self.masses
            .iter()
            .fold(Vec3::zero(), |sum, mass| sum + mass.momentum())
    }
}

impl<F: Float> Default for SpringSolver<F> {
    fn default() -> Self {
        Self::new()
    }
}

fn flag_degenerate<O: StepObserver>(observer: &mut O, link: usize) {
    tracing::debug!(link, "coincident endpoints, spring term skipped");
    observer.on_degenerate_link(link);
}
