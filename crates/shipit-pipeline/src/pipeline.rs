use std::fmt::{Debug, Display};

use tracing::{debug, warn};

use crate::error::PipelineError;
use crate::step::Step;

/// An ordered sequence of steps run against a shared context.
pub struct Pipeline<Ctx, E> {
    steps: Vec<Box<dyn Step<Ctx, Error = E>>>,
}

impl<Ctx, E> Pipeline<Ctx, E>
where
    E: Debug + Display,
{
    #[must_use]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step to the end of the sequence.
    #[must_use]
    pub fn step(mut self, step: impl Step<Ctx, Error = E> + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Runs every step in order, stopping at the first gated failure.
    ///
    /// The failing step's [`Step::recover`] runs before the error is
    /// returned. Non-gating step failures are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::StepFailed` when a gating step fails and its
    /// recovery succeeds, or `PipelineError::RecoveryFailed` when the
    /// recovery fails as well.
    pub fn run(&self, ctx: &mut Ctx) -> Result<(), PipelineError<E>> {
        for step in &self.steps {
            debug!(step = step.name(), "running step");

            let Err(error) = step.run(ctx) else {
                continue;
            };

            if !step.gating() {
                warn!(step = step.name(), %error, "best-effort step failed, continuing");
                continue;
            }

            return match step.recover(ctx) {
                Ok(()) => Err(PipelineError::StepFailed {
                    step: step.name(),
                    source: error,
                }),
                Err(recovery_error) => Err(PipelineError::RecoveryFailed {
                    step: step.name(),
                    source: error,
                    recovery_error,
                }),
            };
        }

        Ok(())
    }
}

impl<Ctx, E> Default for Pipeline<Ctx, E>
where
    E: Debug + Display,
{
    fn default() -> Self {
        Self::new()
    }
}
