//! The end-to-end release run.
//!
//! Preflight commands run first, then the interactive planning phase, then
//! the side-effecting pipeline. The commit step is the only one carrying a
//! recovery: a rejected commit restores the manifest's original version.
//! Anything left behind by later failures (a local tag, an unpushed commit)
//! stays for the operator to resolve.

use std::path::{Path, PathBuf};

use semver::Version;
use shipit_core::ReleaseKind;
use shipit_pipeline::{Pipeline, Step};
use tracing::{debug, info};

use crate::config::ReleaseConfig;
use crate::docs;
use crate::error::{ReleaseError, Result};
use crate::plan::ReleasePlan;
use crate::traits::{CommandRunner, CommandSpec, ManifestStore, Prompter};

/// Per-run knobs supplied by the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseOptions {
    /// Preselected release type; prompts when unset.
    pub kind: Option<ReleaseKind>,
    /// Skip the confirmation gate.
    pub assume_yes: bool,
}

pub struct ReleaseProcedure<'a> {
    project_root: &'a Path,
    config: &'a ReleaseConfig,
    prompter: &'a dyn Prompter,
    runner: &'a dyn CommandRunner,
    store: &'a dyn ManifestStore,
}

impl<'a> ReleaseProcedure<'a> {
    #[must_use]
    pub fn new(
        project_root: &'a Path,
        config: &'a ReleaseConfig,
        prompter: &'a dyn Prompter,
        runner: &'a dyn CommandRunner,
        store: &'a dyn ManifestStore,
    ) -> Self {
        Self {
            project_root,
            config,
            prompter,
            runner,
            store,
        }
    }

    /// Drives the full release and returns the executed plan.
    ///
    /// # Errors
    ///
    /// Returns `ReleaseError::Cancelled` when the operator declines, or the
    /// first gated failure otherwise.
    pub fn run(&self, options: ReleaseOptions) -> Result<ReleasePlan> {
        self.preflight()?;
        let plan = self.plan(options)?;
        self.confirm(&plan, options)?;
        info!(package = %plan.package.name, target = %plan.target, "release confirmed");
        self.execute(&plan)?;
        info!(target = %plan.target, "release complete");
        Ok(plan)
    }

    // Everything here is read-only with respect to the project, so a
    // failure needs no cleanup.
    fn preflight(&self) -> Result<()> {
        let pipeline = Pipeline::new()
            .step(CommandStep::gated(
                "sync",
                CommandSpec::new("git", ["pull"]),
            ))
            .step(CommandStep::gated("lint", self.config.lint.clone()))
            .step(CommandStep::gated("build", self.config.build.clone()))
            .step(CommandStep::gated(
                "package_check",
                self.config.package_check.clone(),
            ));

        let mut ctx = self.step_context();
        pipeline.run(&mut ctx)?;
        Ok(())
    }

    fn plan(&self, options: ReleaseOptions) -> Result<ReleasePlan> {
        let package = self.store.read_package(&self.config.manifest_path)?;
        info!(package = %package.name, version = %package.version, "planning release");

        let kind = match options.kind {
            Some(kind) => kind,
            None => crate::plan::select_release_kind(self.prompter)?,
        };
        let target = crate::plan::plan_target_version(&package.version, kind, self.prompter)?;

        Ok(ReleasePlan {
            package,
            kind,
            target,
        })
    }

    fn confirm(&self, plan: &ReleasePlan, options: ReleaseOptions) -> Result<()> {
        if options.assume_yes {
            return Ok(());
        }

        let prompt = format!("Release {} v{}?", plan.package.name, plan.target);
        if self.prompter.confirm(&prompt)? {
            Ok(())
        } else {
            Err(ReleaseError::Cancelled)
        }
    }

    fn execute(&self, plan: &ReleasePlan) -> Result<()> {
        let tag = plan.tag_name();

        let mut pipeline = Pipeline::new();

        if docs::moves_minor_line(plan.kind) {
            pipeline = pipeline.step(RewriteDocsStep {
                docs: self
                    .config
                    .docs
                    .iter()
                    .map(|doc| self.project_root.join(doc))
                    .collect(),
                package: plan.package.name.clone(),
                current: plan.package.version.clone(),
                target: plan.target.clone(),
            });
        }

        pipeline = pipeline
            .step(WriteManifestStep {
                manifest_path: self.config.manifest_path.clone(),
                target: plan.target.clone(),
            })
            .step(CommandStep::gated(
                "stage",
                CommandSpec::new("git", ["add", "-A"]),
            ))
            .step(CommitStep {
                manifest_path: self.config.manifest_path.clone(),
                original: plan.package.version.clone(),
                command: CommandSpec::new(
                    "git",
                    ["commit".to_string(), "-m".to_string(), plan.commit_message()],
                ),
            })
            .step(CommandStep::gated(
                "push",
                CommandSpec::new("git", ["push"]),
            ))
            .step(CommandStep::gated(
                "tag",
                CommandSpec::new("git", ["tag".to_string(), tag.clone()]),
            ))
            .step(CommandStep::gated(
                "push_tag",
                CommandSpec::new("git", ["push".to_string(), "origin".to_string(), tag]),
            ))
            .step(CommandStep::gated("publish", self.config.publish_command()));

        if let Some(mirror) = &self.config.mirror_sync {
            pipeline = pipeline.step(CommandStep::best_effort("mirror_sync", mirror.clone()));
        }

        let mut ctx = self.step_context();
        pipeline.run(&mut ctx)?;
        Ok(())
    }

    fn step_context(&self) -> StepContext<'a> {
        StepContext {
            project_root: self.project_root,
            runner: self.runner,
            store: self.store,
        }
    }
}

struct StepContext<'a> {
    project_root: &'a Path,
    runner: &'a dyn CommandRunner,
    store: &'a dyn ManifestStore,
}

impl StepContext<'_> {
    fn run_command(&self, command: &CommandSpec) -> Result<()> {
        let outcome = self.runner.run(self.project_root, command)?;
        if outcome.success {
            Ok(())
        } else {
            Err(ReleaseError::CommandFailed {
                command: command.to_string(),
                code: outcome.code,
            })
        }
    }
}

struct CommandStep {
    name: &'static str,
    command: CommandSpec,
    gating: bool,
}

impl CommandStep {
    fn gated(name: &'static str, command: CommandSpec) -> Self {
        Self {
            name,
            command,
            gating: true,
        }
    }

    fn best_effort(name: &'static str, command: CommandSpec) -> Self {
        Self {
            name,
            command,
            gating: false,
        }
    }
}

impl<'a> Step<StepContext<'a>> for CommandStep {
    type Error = ReleaseError;

    fn name(&self) -> &'static str {
        self.name
    }

    fn run(&self, ctx: &mut StepContext<'a>) -> Result<()> {
        ctx.run_command(&self.command)
    }

    fn gating(&self) -> bool {
        self.gating
    }
}

struct RewriteDocsStep {
    docs: Vec<PathBuf>,
    package: String,
    current: Version,
    target: Version,
}

impl<'a> Step<StepContext<'a>> for RewriteDocsStep {
    type Error = ReleaseError;

    fn name(&self) -> &'static str {
        "rewrite_docs"
    }

    fn run(&self, _ctx: &mut StepContext<'a>) -> Result<()> {
        for path in &self.docs {
            docs::rewrite_minor_references(path, &self.package, &self.current, &self.target)?;
        }
        Ok(())
    }
}

struct WriteManifestStep {
    manifest_path: PathBuf,
    target: Version,
}

impl<'a> Step<StepContext<'a>> for WriteManifestStep {
    type Error = ReleaseError;

    fn name(&self) -> &'static str {
        "write_manifest"
    }

    fn run(&self, ctx: &mut StepContext<'a>) -> Result<()> {
        debug!(manifest = %self.manifest_path.display(), target = %self.target, "writing target version");
        ctx.store.write_version(&self.manifest_path, &self.target)
    }
}

struct CommitStep {
    manifest_path: PathBuf,
    original: Version,
    command: CommandSpec,
}

impl<'a> Step<StepContext<'a>> for CommitStep {
    type Error = ReleaseError;

    fn name(&self) -> &'static str {
        "commit"
    }

    fn run(&self, ctx: &mut StepContext<'a>) -> Result<()> {
        ctx.run_command(&self.command)
    }

    // A rejected commit (e.g. a pre-commit hook) must not leave the manifest
    // pointing at an unreleased version.
    fn recover(&self, ctx: &mut StepContext<'a>) -> Result<()> {
        debug!(
            manifest = %self.manifest_path.display(),
            original = %self.original,
            "rolling back manifest version"
        );
        ctx.store.write_version(&self.manifest_path, &self.original)
    }
}
