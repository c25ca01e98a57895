/// A single step of a release run.
///
/// Steps share a mutable context injected by the pipeline; they do not pass
/// data to each other directly.
pub trait Step<Ctx> {
    /// Error type for step failures.
    type Error;

    /// Human-readable name for logging and error messages.
    fn name(&self) -> &'static str;

    /// Execute the step.
    ///
    /// # Errors
    ///
    /// Returns an error if the step fails to complete.
    fn run(&self, ctx: &mut Ctx) -> Result<(), Self::Error>;

    /// Undo this step's side effects after its own failure.
    ///
    /// Called only when `run` on the same step returned an error; a later
    /// step's failure never re-enters an earlier step. The default is a
    /// no-op, suitable for steps without partial side effects.
    ///
    /// # Errors
    ///
    /// Returns an error if recovery fails.
    fn recover(&self, ctx: &mut Ctx) -> Result<(), Self::Error> {
        let _ = ctx;
        Ok(())
    }

    /// Whether a failure of this step aborts the run.
    ///
    /// Best-effort steps return `false`; their failures are logged and the
    /// pipeline continues.
    fn gating(&self) -> bool {
        true
    }
}
