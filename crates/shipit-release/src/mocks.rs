//! Scripted test doubles for the procedure's capability traits.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use crate::error::{ReleaseError, Result};
use crate::traits::{CommandOutcome, CommandRunner, CommandSpec, Prompter, Selection};

/// One pre-recorded operator answer.
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    Select(usize),
    Input(String),
    Confirm(bool),
    /// Cancels whichever prompt consumes it.
    Cancel,
}

/// A prompter that replays a fixed script.
///
/// Any prompt beyond the script, or answered with the wrong response kind,
/// fails with `InteractionRequired` — so an empty script doubles as a proof
/// that no prompting occurred.
pub struct ScriptedPrompter {
    script: Mutex<VecDeque<ScriptedResponse>>,
    shown_menus: Mutex<Vec<Vec<String>>>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = ScriptedResponse>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            shown_menus: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new([])
    }

    /// The items of every select menu shown, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn selections(&self) -> Vec<Vec<String>> {
        self.shown_menus.lock().expect("lock poisoned").clone()
    }

    fn next(&self) -> Result<ScriptedResponse> {
        self.script
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .ok_or(ReleaseError::InteractionRequired)
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, _prompt: &str, items: &[String]) -> Result<Selection> {
        self.shown_menus
            .lock()
            .expect("lock poisoned")
            .push(items.to_vec());

        match self.next()? {
            ScriptedResponse::Select(index) => Ok(Selection::Choice(index)),
            ScriptedResponse::Cancel => Ok(Selection::Cancelled),
            ScriptedResponse::Input(_) | ScriptedResponse::Confirm(_) => {
                Err(ReleaseError::InteractionRequired)
            }
        }
    }

    fn input(&self, _prompt: &str) -> Result<String> {
        match self.next()? {
            ScriptedResponse::Input(text) => Ok(text),
            _ => Err(ReleaseError::InteractionRequired),
        }
    }

    fn confirm(&self, _prompt: &str) -> Result<bool> {
        match self.next()? {
            ScriptedResponse::Confirm(answer) => Ok(answer),
            ScriptedResponse::Cancel => Ok(false),
            _ => Err(ReleaseError::InteractionRequired),
        }
    }
}

/// A command runner that records every invocation and succeeds unless told
/// to fail on a command prefix.
pub struct ScriptedRunner {
    log: Mutex<Vec<String>>,
    failures: Vec<(String, i32)>,
}

impl ScriptedRunner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: Mutex::new(Vec::new()),
            failures: Vec::new(),
        }
    }

    /// Makes every command starting with `prefix` report the given exit code.
    #[must_use]
    pub fn fail_on(mut self, prefix: &str, code: i32) -> Self {
        self.failures.push((prefix.to_string(), code));
        self
    }

    /// Every command run so far, rendered as `program arg arg ...`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn commands(&self) -> Vec<String> {
        self.log.lock().expect("lock poisoned").clone()
    }

    /// Whether any recorded command starts with `prefix`.
    #[must_use]
    pub fn ran(&self, prefix: &str) -> bool {
        self.commands().iter().any(|c| c.starts_with(prefix))
    }
}

impl Default for ScriptedRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, _cwd: &Path, command: &CommandSpec) -> Result<CommandOutcome> {
        let rendered = command.to_string();
        self.log.lock().expect("lock poisoned").push(rendered.clone());

        for (prefix, code) in &self.failures {
            if rendered.starts_with(prefix) {
                return Ok(CommandOutcome::failure(Some(*code)));
            }
        }
        Ok(CommandOutcome::success())
    }
}
