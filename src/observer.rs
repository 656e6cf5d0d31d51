//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or flagging degenerate geometry). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called once every link force for the frame has been computed.
    fn on_forces_accumulated(&mut self) {}

    /// Called when link `link` had coincident endpoints and its spring term
    /// was skipped.
    fn on_degenerate_link(&mut self, _link: usize) {}

    /// Called when mass `mass` hit the ground and had its velocity reflected.
    fn on_collision(&mut self, _mass: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Observer that tallies what happened across the steps it watched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub steps: usize,
    pub degenerate_links: usize,
    pub collisions: usize,
}

impl StepObserver for StepStats {
    fn on_degenerate_link(&mut self, _link: usize) {
        self.degenerate_links += 1;
    }

    fn on_collision(&mut self, _mass: usize) {
        self.collisions += 1;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
