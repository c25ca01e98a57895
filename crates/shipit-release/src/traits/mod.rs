mod command_runner;
mod manifest_store;
mod prompter;

pub use command_runner::{CommandOutcome, CommandRunner, CommandSpec};
pub use manifest_store::ManifestStore;
pub use prompter::{Prompter, Selection};
