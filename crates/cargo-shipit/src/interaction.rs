use std::io::IsTerminal;

use dialoguer::{Confirm, Input, Select};
use shipit_release::traits::{Prompter, Selection};
use shipit_release::{ReleaseError, Result};

/// Prompter backed by the controlling terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> Result<Selection> {
        ensure_interactive()?;

        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(map_dialoguer)?;

        Ok(match selection {
            Some(index) => Selection::Choice(index),
            None => Selection::Cancelled,
        })
    }

    fn input(&self, prompt: &str) -> Result<String> {
        ensure_interactive()?;

        Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(map_dialoguer)
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        ensure_interactive()?;

        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact_opt()
            .map_err(map_dialoguer)?;

        // Esc declines rather than erroring.
        Ok(answer.unwrap_or(false))
    }
}

fn ensure_interactive() -> Result<()> {
    let forced = std::env::var("CARGO_SHIPIT_FORCE_TTY").is_ok();
    if forced || std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(ReleaseError::InteractionRequired)
    }
}

fn map_dialoguer(e: dialoguer::Error) -> ReleaseError {
    match e {
        dialoguer::Error::IO(io_err) => ReleaseError::Prompt(io_err),
    }
}
