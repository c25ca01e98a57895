//! Ordered gated-step execution for release runs.
//!
//! A pipeline runs its steps strictly in order and stops at the first
//! failure of a gating step. Before aborting, the failing step gets one
//! chance to undo its own side effects via [`Step::recover`]. Steps marked
//! non-gating are best-effort: their failures are logged and ignored.

mod error;
mod pipeline;
mod step;

pub use error::PipelineError;
pub use pipeline::Pipeline;
pub use step::Step;
