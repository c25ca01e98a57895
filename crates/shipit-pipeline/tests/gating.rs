use shipit_pipeline::{Pipeline, PipelineError, Step};

#[derive(Default)]
struct TestContext {
    log: Vec<String>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("{0}")]
struct TestError(String);

struct RecordStep {
    name: &'static str,
}

impl Step<TestContext> for RecordStep {
    type Error = TestError;

    fn name(&self) -> &'static str {
        self.name
    }

    fn run(&self, ctx: &mut TestContext) -> Result<(), TestError> {
        ctx.log.push(format!("run {}", self.name));
        Ok(())
    }

    fn recover(&self, ctx: &mut TestContext) -> Result<(), TestError> {
        ctx.log.push(format!("recover {}", self.name));
        Ok(())
    }
}

struct FailingStep {
    name: &'static str,
    gating: bool,
    recovery: Option<Result<(), ()>>,
}

impl FailingStep {
    fn gated(name: &'static str) -> Self {
        Self {
            name,
            gating: true,
            recovery: None,
        }
    }

    fn best_effort(name: &'static str) -> Self {
        Self {
            name,
            gating: false,
            recovery: None,
        }
    }

    fn with_recovery(name: &'static str, recovery: Result<(), ()>) -> Self {
        Self {
            name,
            gating: true,
            recovery: Some(recovery),
        }
    }
}

impl Step<TestContext> for FailingStep {
    type Error = TestError;

    fn name(&self) -> &'static str {
        self.name
    }

    fn run(&self, ctx: &mut TestContext) -> Result<(), TestError> {
        ctx.log.push(format!("run {}", self.name));
        Err(TestError(format!("{} failed", self.name)))
    }

    fn recover(&self, ctx: &mut TestContext) -> Result<(), TestError> {
        ctx.log.push(format!("recover {}", self.name));
        match self.recovery {
            Some(Err(())) => Err(TestError(format!("{} recovery failed", self.name))),
            _ => Ok(()),
        }
    }

    fn gating(&self) -> bool {
        self.gating
    }
}

#[test]
fn steps_run_in_declaration_order() -> anyhow::Result<()> {
    let mut ctx = TestContext::default();

    let pipeline = Pipeline::new()
        .step(RecordStep { name: "sync" })
        .step(RecordStep { name: "lint" })
        .step(RecordStep { name: "build" });

    pipeline.run(&mut ctx)?;

    assert_eq!(ctx.log, vec!["run sync", "run lint", "run build"]);
    Ok(())
}

#[test]
fn first_gated_failure_stops_the_run() {
    let mut ctx = TestContext::default();

    let pipeline = Pipeline::new()
        .step(RecordStep { name: "sync" })
        .step(FailingStep::gated("lint"))
        .step(RecordStep { name: "build" });

    let err = pipeline.run(&mut ctx).expect_err("must fail");

    assert!(matches!(err, PipelineError::StepFailed { step: "lint", .. }));
    assert_eq!(ctx.log, vec!["run sync", "run lint", "recover lint"]);
}

#[test]
fn recovery_runs_only_for_the_failing_step() {
    let mut ctx = TestContext::default();

    let pipeline = Pipeline::new()
        .step(RecordStep { name: "write" })
        .step(FailingStep::gated("commit"));

    let result = pipeline.run(&mut ctx);

    assert!(result.is_err());
    // "write" succeeded, so its recovery never runs.
    assert_eq!(ctx.log, vec!["run write", "run commit", "recover commit"]);
}

#[test]
fn failed_recovery_surfaces_both_errors() {
    let mut ctx = TestContext::default();

    let pipeline = Pipeline::new().step(FailingStep::with_recovery("commit", Err(())));

    let err = pipeline.run(&mut ctx).expect_err("must fail");

    match err {
        PipelineError::RecoveryFailed {
            step,
            source,
            recovery_error,
        } => {
            assert_eq!(step, "commit");
            assert_eq!(source, TestError("commit failed".to_string()));
            assert_eq!(
                recovery_error,
                TestError("commit recovery failed".to_string())
            );
        }
        PipelineError::StepFailed { .. } => panic!("expected RecoveryFailed"),
        _ => panic!("unexpected error variant"),
    }
}

#[test]
fn best_effort_failure_does_not_abort() -> anyhow::Result<()> {
    let mut ctx = TestContext::default();

    let pipeline = Pipeline::new()
        .step(RecordStep { name: "publish" })
        .step(FailingStep::best_effort("mirror_sync"))
        .step(RecordStep { name: "after" });

    pipeline.run(&mut ctx)?;

    // The best-effort step neither recovers nor stops later steps.
    assert_eq!(
        ctx.log,
        vec!["run publish", "run mirror_sync", "run after"]
    );
    Ok(())
}

#[test]
fn step_failed_error_names_the_step() {
    let mut ctx = TestContext::default();

    let pipeline = Pipeline::new().step(FailingStep::gated("push"));

    let err = pipeline.run(&mut ctx).expect_err("must fail");

    assert!(err.to_string().contains("push"));
}
