//! Release configuration, read from `[package.metadata.shipit]` in the
//! manifest. Everything has a sensible default; the metadata table only
//! overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ReleaseError, Result};
use crate::traits::CommandSpec;

/// Configuration passed into the procedure at start.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// The manifest carrying `package.name` and `package.version`.
    pub manifest_path: PathBuf,
    /// Documentation files subject to the major.minor reference rewrite,
    /// relative to the project root.
    pub docs: Vec<PathBuf>,
    /// Registry index URL appended to the publish command as `--index`.
    pub registry: Option<String>,
    pub lint: CommandSpec,
    pub build: CommandSpec,
    pub package_check: CommandSpec,
    pub publish: CommandSpec,
    /// Best-effort mirror sync; skipped entirely when unset.
    pub mirror_sync: Option<CommandSpec>,
}

#[derive(Debug, Default, Deserialize)]
struct RawManifest {
    #[serde(default)]
    package: RawPackage,
}

#[derive(Debug, Default, Deserialize)]
struct RawPackage {
    #[serde(default)]
    metadata: RawMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct RawMetadata {
    #[serde(default)]
    shipit: RawShipit,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawShipit {
    docs: Option<Vec<PathBuf>>,
    registry: Option<String>,
    lint: Option<Vec<String>>,
    build: Option<Vec<String>>,
    package_check: Option<Vec<String>>,
    publish: Option<Vec<String>>,
    mirror_sync: Option<Vec<String>>,
}

impl ReleaseConfig {
    /// Loads configuration for the project rooted at `project_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read, its metadata table
    /// is malformed, or a configured command argv is empty.
    pub fn load(project_root: &Path) -> Result<Self> {
        let manifest_path = project_root.join("Cargo.toml");

        let content =
            std::fs::read_to_string(&manifest_path).map_err(|source| ReleaseError::ConfigRead {
                path: manifest_path.clone(),
                source,
            })?;

        let raw: RawManifest =
            toml::from_str(&content).map_err(|source| ReleaseError::ConfigParse {
                path: manifest_path.clone(),
                source,
            })?;

        Self::from_raw(manifest_path, raw.package.metadata.shipit)
    }

    fn from_raw(manifest_path: PathBuf, raw: RawShipit) -> Result<Self> {
        Ok(Self {
            manifest_path,
            docs: raw
                .docs
                .unwrap_or_else(|| vec![PathBuf::from("README.md")]),
            registry: raw.registry,
            lint: override_or(raw.lint.as_deref(), "lint", || {
                CommandSpec::new("cargo", ["clippy", "--all-targets"])
            })?,
            build: override_or(raw.build.as_deref(), "build", || {
                CommandSpec::new("cargo", ["build", "--release"])
            })?,
            package_check: override_or(raw.package_check.as_deref(), "package_check", || {
                CommandSpec::new("cargo", ["package"])
            })?,
            publish: override_or(raw.publish.as_deref(), "publish", || {
                CommandSpec::new("cargo", ["publish"])
            })?,
            mirror_sync: match raw.mirror_sync.as_deref() {
                Some(argv) => Some(
                    CommandSpec::from_argv(argv)
                        .ok_or(ReleaseError::EmptyCommand { key: "mirror_sync" })?,
                ),
                None => None,
            },
        })
    }

    /// The publish command with the registry index applied.
    #[must_use]
    pub fn publish_command(&self) -> CommandSpec {
        match &self.registry {
            Some(registry) => self
                .publish
                .clone()
                .with_args(["--index".to_string(), registry.clone()]),
            None => self.publish.clone(),
        }
    }
}

fn override_or(
    argv: Option<&[String]>,
    key: &'static str,
    default: impl FnOnce() -> CommandSpec,
) -> Result<CommandSpec> {
    match argv {
        Some(argv) => CommandSpec::from_argv(argv).ok_or(ReleaseError::EmptyCommand { key }),
        None => Ok(default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_from(toml: &str) -> Result<ReleaseConfig> {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("Cargo.toml"), toml).expect("write manifest");
        ReleaseConfig::load(dir.path())
    }

    #[test]
    fn defaults_apply_without_metadata() {
        let config = load_from(
            r#"
[package]
name = "mypkg"
version = "1.2.3"
"#,
        )
        .expect("load config");

        assert_eq!(config.docs, vec![PathBuf::from("README.md")]);
        assert_eq!(config.registry, None);
        assert_eq!(config.lint.to_string(), "cargo clippy --all-targets");
        assert_eq!(config.build.to_string(), "cargo build --release");
        assert_eq!(config.package_check.to_string(), "cargo package");
        assert_eq!(config.publish_command().to_string(), "cargo publish");
        assert!(config.mirror_sync.is_none());
    }

    #[test]
    fn metadata_overrides_commands_and_docs() {
        let config = load_from(
            r#"
[package]
name = "mypkg"
version = "1.2.3"

[package.metadata.shipit]
docs = ["README.md", "docs/install.md"]
registry = "https://registry.example.com/index"
lint = ["cargo", "fmt", "--check"]
mirror_sync = ["scripts/sync-mirror.sh"]
"#,
        )
        .expect("load config");

        assert_eq!(config.docs.len(), 2);
        assert_eq!(config.lint.to_string(), "cargo fmt --check");
        assert_eq!(
            config.mirror_sync.as_ref().expect("configured").to_string(),
            "scripts/sync-mirror.sh"
        );
        assert_eq!(
            config.publish_command().to_string(),
            "cargo publish --index https://registry.example.com/index"
        );
    }

    #[test]
    fn empty_command_override_is_rejected() {
        let err = load_from(
            r#"
[package]
name = "mypkg"
version = "1.2.3"

[package.metadata.shipit]
build = []
"#,
        )
        .expect_err("must fail");

        assert!(matches!(
            err,
            ReleaseError::EmptyCommand { key: "build" }
        ));
    }

    #[test]
    fn unknown_metadata_keys_are_rejected() {
        let err = load_from(
            r#"
[package]
name = "mypkg"
version = "1.2.3"

[package.metadata.shipit]
does_not_exist = true
"#,
        )
        .expect_err("must fail");

        assert!(matches!(err, ReleaseError::ConfigParse { .. }));
    }

    #[test]
    fn missing_manifest_is_a_config_read_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = ReleaseConfig::load(dir.path()).expect_err("must fail");

        assert!(matches!(err, ReleaseError::ConfigRead { .. }));
    }
}
