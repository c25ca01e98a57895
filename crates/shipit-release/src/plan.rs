//! Release planning: the bump-kind menu, the stage menu, and the custom
//! version prompt, all against the [`Prompter`] capability.

use semver::Version;
use shipit_core::{PackageInfo, PrereleaseStage, ReleaseKind};
use shipit_version::{bump_prerelease, bump_version, parse_custom, stage_candidates};
use tracing::debug;

use crate::error::{ReleaseError, Result};
use crate::traits::{Prompter, Selection};

/// The decided release: what to bump and where it lands.
#[derive(Debug, Clone)]
pub struct ReleasePlan {
    pub package: PackageInfo,
    pub kind: ReleaseKind,
    pub target: Version,
}

impl ReleasePlan {
    /// The deterministic commit message for this release.
    #[must_use]
    pub fn commit_message(&self) -> String {
        format!("chore(release): v{}", self.target)
    }

    /// The tag name for this release.
    #[must_use]
    pub fn tag_name(&self) -> String {
        format!("v{}", self.target)
    }
}

/// Presents the fixed eight-entry release-type menu.
pub fn select_release_kind(prompter: &dyn Prompter) -> Result<ReleaseKind> {
    let items: Vec<String> = ReleaseKind::ALL.iter().copied().map(kind_label).collect();

    match prompter.select("Select release type", &items)? {
        Selection::Choice(index) => ReleaseKind::ALL
            .get(index)
            .copied()
            .ok_or(ReleaseError::Cancelled),
        Selection::Cancelled => Err(ReleaseError::Cancelled),
    }
}

/// Computes the target version for the chosen kind, prompting for a
/// prerelease stage or a custom version where the kind requires it.
pub fn plan_target_version(
    current: &Version,
    kind: ReleaseKind,
    prompter: &dyn Prompter,
) -> Result<Version> {
    if let Some(bump) = kind.as_bump() {
        return Ok(bump_version(current, bump));
    }

    if let Some(pre) = kind.as_pre() {
        let candidates = stage_candidates(current, pre);
        let stage = if let [only] = candidates.as_slice() {
            // One admissible stage: no menu, increment directly.
            debug!(stage = %only, "single prerelease stage candidate, skipping prompt");
            *only
        } else {
            select_stage(current, kind, &candidates, prompter)?
        };
        return Ok(bump_prerelease(current, pre, stage)?);
    }

    // ReleaseKind::Custom
    let input = prompter.input("Enter target version")?;
    Ok(parse_custom(input.trim())?)
}

fn select_stage(
    current: &Version,
    kind: ReleaseKind,
    candidates: &[PrereleaseStage],
    prompter: &dyn Prompter,
) -> Result<PrereleaseStage> {
    let pre = kind.as_pre().ok_or(ReleaseError::Cancelled)?;

    let items = candidates
        .iter()
        .map(|stage| {
            let preview = bump_prerelease(current, pre, *stage)?;
            Ok(format!("{stage} ({preview})"))
        })
        .collect::<Result<Vec<String>>>()?;

    match prompter.select("Select prerelease stage", &items)? {
        Selection::Choice(index) => candidates
            .get(index)
            .copied()
            .ok_or(ReleaseError::Cancelled),
        Selection::Cancelled => Err(ReleaseError::Cancelled),
    }
}

fn kind_label(kind: ReleaseKind) -> String {
    let hint = match kind {
        ReleaseKind::Patch => "bug fixes (x.y.Z)",
        ReleaseKind::Minor => "new features (x.Y.0)",
        ReleaseKind::Major => "breaking changes (X.0.0)",
        ReleaseKind::Prerelease => "bump the prerelease counter",
        ReleaseKind::Prepatch => "next patch as a prerelease",
        ReleaseKind::Preminor => "next minor as a prerelease",
        ReleaseKind::Premajor => "next major as a prerelease",
        ReleaseKind::Custom => "enter a version manually",
    };
    format!("{kind} - {hint}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{ScriptedPrompter, ScriptedResponse};

    fn v(s: &str) -> Version {
        Version::parse(s).expect("valid version")
    }

    #[test]
    fn stable_kinds_need_no_prompting() -> anyhow::Result<()> {
        let prompter = ScriptedPrompter::empty();

        assert_eq!(
            plan_target_version(&v("1.2.3"), ReleaseKind::Minor, &prompter)?,
            v("1.3.0")
        );
        assert_eq!(
            plan_target_version(&v("1.2.3"), ReleaseKind::Patch, &prompter)?,
            v("1.2.4")
        );
        assert_eq!(
            plan_target_version(&v("1.2.3"), ReleaseKind::Major, &prompter)?,
            v("2.0.0")
        );
        Ok(())
    }

    #[test]
    fn prerelease_from_stable_prompts_all_three_stages() -> anyhow::Result<()> {
        let prompter = ScriptedPrompter::new([ScriptedResponse::Select(1)]);

        let target = plan_target_version(&v("1.2.3"), ReleaseKind::Prerelease, &prompter)?;

        assert_eq!(target, v("1.2.4-beta.0"));
        let menus = prompter.selections();
        assert_eq!(menus.len(), 1);
        assert_eq!(
            menus[0],
            vec![
                "alpha (1.2.4-alpha.0)".to_string(),
                "beta (1.2.4-beta.0)".to_string(),
                "rc (1.2.4-rc.0)".to_string()
            ]
        );
        Ok(())
    }

    #[test]
    fn prerelease_from_beta_never_offers_alpha() -> anyhow::Result<()> {
        let prompter = ScriptedPrompter::new([ScriptedResponse::Select(0)]);

        let target = plan_target_version(&v("1.2.4-beta.1"), ReleaseKind::Prerelease, &prompter)?;

        assert_eq!(target, v("1.2.4-beta.2"));
        let menus = prompter.selections();
        assert_eq!(
            menus[0],
            vec![
                "beta (1.2.4-beta.2)".to_string(),
                "rc (1.2.4-rc.0)".to_string()
            ]
        );
        Ok(())
    }

    #[test]
    fn single_candidate_skips_the_stage_prompt() -> anyhow::Result<()> {
        // An empty script fails on any prompt, proving none occurred.
        let prompter = ScriptedPrompter::empty();

        let target = plan_target_version(&v("1.2.4-rc.0"), ReleaseKind::Prerelease, &prompter)?;

        assert_eq!(target, v("1.2.4-rc.1"));
        Ok(())
    }

    #[test]
    fn prepatch_prompts_with_all_stages_even_from_beta() -> anyhow::Result<()> {
        let prompter = ScriptedPrompter::new([ScriptedResponse::Select(0)]);

        let target = plan_target_version(&v("1.2.4-beta.1"), ReleaseKind::Prepatch, &prompter)?;

        assert_eq!(target, v("1.2.5-alpha.0"));
        Ok(())
    }

    #[test]
    fn custom_kind_reads_and_validates_free_text() -> anyhow::Result<()> {
        let prompter = ScriptedPrompter::new([ScriptedResponse::Input(" 3.0.0-rc.2 ".to_string())]);

        let target = plan_target_version(&v("1.2.3"), ReleaseKind::Custom, &prompter)?;

        assert_eq!(target, v("3.0.0-rc.2"));
        Ok(())
    }

    #[test]
    fn invalid_custom_version_is_fatal() {
        let prompter = ScriptedPrompter::new([ScriptedResponse::Input("banana".to_string())]);

        let err = plan_target_version(&v("1.2.3"), ReleaseKind::Custom, &prompter)
            .expect_err("must fail");

        assert!(matches!(err, ReleaseError::Version(_)));
        let source = std::error::Error::source(&err).expect("has source");
        assert!(source.to_string().contains("banana"));
    }

    #[test]
    fn cancelled_stage_menu_cancels_the_plan() {
        let prompter = ScriptedPrompter::new([ScriptedResponse::Cancel]);

        let err = plan_target_version(&v("1.2.3"), ReleaseKind::Prerelease, &prompter)
            .expect_err("must fail");

        assert!(matches!(err, ReleaseError::Cancelled));
    }

    #[test]
    fn kind_menu_offers_eight_options() -> anyhow::Result<()> {
        let prompter = ScriptedPrompter::new([ScriptedResponse::Select(7)]);

        let kind = select_release_kind(&prompter)?;

        assert_eq!(kind, ReleaseKind::Custom);
        assert_eq!(prompter.selections()[0].len(), 8);
        Ok(())
    }
}
