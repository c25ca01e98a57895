//! The release procedure: a strict ordered sequence of gated steps driving
//! external tools, with one compensating action (restoring the manifest
//! version when the commit is rejected).

pub mod config;
pub mod docs;
mod error;
pub mod mocks;
pub mod plan;
mod procedure;
pub mod providers;
pub mod traits;

pub use error::{ReleaseError, Result};
pub use plan::ReleasePlan;
pub use procedure::{ReleaseOptions, ReleaseProcedure};
