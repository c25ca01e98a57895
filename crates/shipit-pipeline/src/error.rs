use std::fmt::Debug;

use thiserror::Error;

/// Error from pipeline execution.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PipelineError<E: Debug> {
    /// A gating step failed; its recovery (if any) succeeded.
    #[error("step '{step}' failed")]
    StepFailed {
        /// Name of the step that failed.
        step: &'static str,
        /// The error that caused the step to fail.
        #[source]
        source: E,
    },

    /// A gating step failed and its recovery failed too.
    #[error("step '{step}' failed, and its recovery also failed")]
    RecoveryFailed {
        /// Name of the step that failed.
        step: &'static str,
        /// The error from the failed step.
        source: E,
        /// The error from the failed recovery.
        recovery_error: E,
    },
}
