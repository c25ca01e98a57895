use thiserror::Error;

use shipit_release::ReleaseError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Release(#[from] ReleaseError),

    #[error("cannot determine current directory")]
    CurrentDir(#[source] std::io::Error),
}

impl CliError {
    /// Whether the run ended because the operator backed out.
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Release(ReleaseError::Cancelled))
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_error_converts_via_from() {
        let err: CliError = ReleaseError::Cancelled.into();

        assert!(matches!(err, CliError::Release(_)));
    }

    #[test]
    fn cancellation_is_recognised() {
        let err: CliError = ReleaseError::Cancelled.into();

        assert!(err.is_cancellation());
        assert!(!CliError::Release(ReleaseError::InteractionRequired).is_cancellation());
    }

    #[test]
    fn current_dir_error_has_source_chain() {
        let err = CliError::CurrentDir(std::io::Error::other("test"));

        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn release_error_message_passes_through() {
        let err: CliError = ReleaseError::Cancelled.into();

        assert_eq!(err.to_string(), "release cancelled");
    }
}
