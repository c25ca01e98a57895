use std::path::Path;
use std::process::Command;

use shipit_release::traits::{CommandOutcome, CommandRunner, CommandSpec};
use shipit_release::{ReleaseError, Result};
use tracing::debug;

/// Runs commands as real child processes, inheriting stdio so the operator
/// sees their output live.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, cwd: &Path, command: &CommandSpec) -> Result<CommandOutcome> {
        debug!(%command, cwd = %cwd.display(), "spawning command");

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .status()
            .map_err(|source| ReleaseError::CommandSpawn {
                command: command.to_string(),
                source,
            })?;

        Ok(CommandOutcome {
            success: status.success(),
            code: status.code(),
        })
    }
}
