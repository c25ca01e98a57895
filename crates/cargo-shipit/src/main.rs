mod error;
mod interaction;
mod process;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use shipit_core::ReleaseKind;
use shipit_release::config::ReleaseConfig;
use shipit_release::providers::FsManifestStore;
use shipit_release::{ReleaseOptions, ReleaseProcedure};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::interaction::TerminalPrompter;
use crate::process::ProcessRunner;

#[derive(Parser)]
#[command(name = "cargo", bin_name = "cargo")]
enum CargoCli {
    Shipit(ShipitArgs),
}

#[derive(clap::Args)]
#[command(version)]
#[command(about = "Walk a package release from lint to publish", long_about = None)]
struct ShipitArgs {
    /// Project root holding the Cargo.toml to release (default: current directory)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,

    /// Preselect the release type instead of prompting
    #[arg(long, value_enum)]
    kind: Option<ReleaseKind>,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    yes: bool,
}

fn main() -> ExitCode {
    init_tracing();

    let CargoCli::Shipit(args) = CargoCli::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_cancellation() => {
            eprintln!("release cancelled");
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: ShipitArgs) -> Result<(), CliError> {
    let project_root = match args.path {
        Some(path) => path,
        None => std::env::current_dir().map_err(CliError::CurrentDir)?,
    };

    let config = ReleaseConfig::load(&project_root)?;
    let prompter = TerminalPrompter;
    let runner = ProcessRunner;
    let store = FsManifestStore::new();

    let procedure = ReleaseProcedure::new(&project_root, &config, &prompter, &runner, &store);
    procedure.run(ReleaseOptions {
        kind: args.kind,
        assume_yes: args.yes,
    })?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kind_and_yes_flags() {
        let CargoCli::Shipit(args) =
            CargoCli::try_parse_from(["cargo", "shipit", "--kind", "minor", "--yes"])
                .expect("valid invocation");

        assert_eq!(args.kind, Some(ReleaseKind::Minor));
        assert!(args.yes);
        assert!(args.path.is_none());
    }

    #[test]
    fn parses_project_path() {
        let CargoCli::Shipit(args) =
            CargoCli::try_parse_from(["cargo", "shipit", "-C", "/tmp/proj"])
                .expect("valid invocation");

        assert_eq!(args.path, Some(PathBuf::from("/tmp/proj")));
        assert_eq!(args.kind, None);
    }

    #[test]
    fn rejects_unknown_kind() {
        let result = CargoCli::try_parse_from(["cargo", "shipit", "--kind", "gigantic"]);

        assert!(result.is_err());
    }
}
