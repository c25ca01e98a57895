use std::fmt;
use std::path::Path;

use crate::Result;

/// An external command as an argv, invoked as a child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a spec from a configured argv; `None` when the argv is empty.
    #[must_use]
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Appends arguments to the command.
    #[must_use]
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Exit result of a completed child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutcome {
    #[must_use]
    pub const fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    #[must_use]
    pub const fn failure(code: Option<i32>) -> Self {
        Self {
            success: false,
            code,
        }
    }
}

/// Child-process execution capability.
///
/// Implementations block until the command completes; success is a zero
/// exit status. No retries, no timeouts.
pub trait CommandRunner: Send + Sync {
    /// Runs `command` in `cwd` and waits for its exit status.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned or waited on.
    /// A non-zero exit is a successful `Ok` carrying a failed outcome.
    fn run(&self, cwd: &Path, command: &CommandSpec) -> Result<CommandOutcome>;
}
