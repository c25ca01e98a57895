use std::path::PathBuf;

use shipit_pipeline::PipelineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error(transparent)]
    Manifest(#[from] shipit_manifest::ManifestError),

    #[error("version calculation failed")]
    Version(#[from] shipit_version::VersionError),

    #[error("command `{command}` exited with {}", code.map_or_else(|| "no status".to_string(), |c| format!("status {c}")))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("failed to spawn command `{command}`")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read documentation file '{path}'")]
    DocRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write documentation file '{path}'")]
    DocWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read configuration from '{path}'")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration in '{path}'")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("configured command '{key}' is empty")]
    EmptyCommand { key: &'static str },

    #[error("release cancelled")]
    Cancelled,

    #[error("interaction required but provider cannot prompt")]
    InteractionRequired,

    #[error("terminal prompt failed")]
    Prompt(#[source] std::io::Error),

    #[error("release failed at step '{step}'")]
    StepFailed {
        step: &'static str,
        #[source]
        source: Box<ReleaseError>,
    },

    #[error("release failed at step '{step}', and restoring the manifest also failed")]
    RecoveryFailed {
        step: &'static str,
        source: Box<ReleaseError>,
        recovery_error: Box<ReleaseError>,
    },
}

pub type Result<T> = std::result::Result<T, ReleaseError>;

impl From<PipelineError<ReleaseError>> for ReleaseError {
    fn from(err: PipelineError<ReleaseError>) -> Self {
        match err {
            PipelineError::StepFailed { step, source } => Self::StepFailed {
                step,
                source: Box::new(source),
            },
            PipelineError::RecoveryFailed {
                step,
                source,
                recovery_error,
            } => Self::RecoveryFailed {
                step,
                source: Box::new(source),
                recovery_error: Box::new(recovery_error),
            },
            _ => Self::Cancelled,
        }
    }
}
