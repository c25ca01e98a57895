use crate::Result;

/// Outcome of a single-select menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Choice(usize),
    Cancelled,
}

/// Operator interaction capability.
///
/// The procedure's decision logic only ever talks to this trait, so it can
/// be exercised with a scripted responder instead of a real terminal.
pub trait Prompter: Send + Sync {
    /// Presents a single-select menu and returns the chosen index.
    ///
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn select(&self, prompt: &str, items: &[String]) -> Result<Selection>;

    /// Reads a free-text line.
    ///
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn input(&self, prompt: &str) -> Result<String>;

    /// Asks a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns an error if the interaction cannot be completed.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}
