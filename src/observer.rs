//! Step observer trait for monitoring chain solver progress.

/// Trait for observing chain simulation steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after all points have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each relaxation sweep over the constraints.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards solver phases to `tracing` at trace level.
#[derive(Debug, Default)]
pub struct TracingStepObserver {
    iterations: usize,
}

impl TracingStepObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepObserver for TracingStepObserver {
    fn on_integrate(&mut self) {
        self.iterations = 0;
        tracing::trace!("chain integrated");
    }

    fn on_constraint_iteration(&mut self, iteration: usize) {
        self.iterations = iteration + 1;
    }

    fn on_step_complete(&mut self) {
        tracing::trace!(iterations = self.iterations, "chain step complete");
    }
}
