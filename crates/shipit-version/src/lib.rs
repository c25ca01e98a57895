//! Target-version computation for the release procedure.
//!
//! Stable bumps clear any prerelease and build metadata. Pre-bumps follow
//! the conventional registry semantics: introducing a prerelease from a
//! stable version moves to the next patch, and bumping within the same
//! stage increments the trailing counter.

use semver::{BuildMetadata, Prerelease, Version};
use shipit_core::{BumpType, PreBump, PrereleaseStage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("invalid target version '{value}'")]
    InvalidTarget {
        value: String,
        #[source]
        source: semver::Error,
    },
}

/// Increments the given stable field, clearing prerelease and build metadata.
#[must_use]
pub fn bump_version(version: &Version, bump_type: BumpType) -> Version {
    let mut new_version = version.clone();

    match bump_type {
        BumpType::Major => {
            new_version.major += 1;
            new_version.minor = 0;
            new_version.patch = 0;
        }
        BumpType::Minor => {
            new_version.minor += 1;
            new_version.patch = 0;
        }
        BumpType::Patch => {
            new_version.patch += 1;
        }
    }

    new_version.pre = Prerelease::EMPTY;
    new_version.build = BuildMetadata::EMPTY;
    new_version
}

/// The recognized stage carried by the version's prerelease identifier.
#[must_use]
pub fn prerelease_stage(version: &Version) -> Option<PrereleaseStage> {
    let ident = version.pre.as_str().split('.').next()?;
    PrereleaseStage::from_ident(ident)
}

/// The stages that may be offered for the given pre-bump.
///
/// A plain `prerelease` bump on a version already carrying a recognized
/// stage never goes backwards: the candidates start at the current stage.
/// Every other case offers all three stages.
#[must_use]
pub fn stage_candidates(version: &Version, pre: PreBump) -> Vec<PrereleaseStage> {
    let floor = match (pre, prerelease_stage(version)) {
        (PreBump::Prerelease, Some(stage)) => stage,
        _ => PrereleaseStage::Alpha,
    };

    PrereleaseStage::ALL
        .into_iter()
        .filter(|stage| *stage >= floor)
        .collect()
}

/// Computes the prerelease target for the given bump and stage.
pub fn bump_prerelease(
    version: &Version,
    pre: PreBump,
    stage: PrereleaseStage,
) -> Result<Version, VersionError> {
    let (mut target, counter) = match pre {
        PreBump::Prepatch => (bump_version(version, BumpType::Patch), 0),
        PreBump::Preminor => (bump_version(version, BumpType::Minor), 0),
        PreBump::Premajor => (bump_version(version, BumpType::Major), 0),
        PreBump::Prerelease => {
            if version.pre.is_empty() {
                (bump_version(version, BumpType::Patch), 0)
            } else {
                let mut base = version.clone();
                base.build = BuildMetadata::EMPTY;
                (base, next_counter(&version.pre, stage))
            }
        }
    };

    let ident = format!("{stage}.{counter}");
    target.pre = Prerelease::new(&ident).map_err(|source| VersionError::InvalidTarget {
        value: format!(
            "{}.{}.{}-{ident}",
            target.major, target.minor, target.patch
        ),
        source,
    })?;
    Ok(target)
}

/// Validates an operator-supplied version string against semver grammar.
pub fn parse_custom(value: &str) -> Result<Version, VersionError> {
    Version::parse(value).map_err(|source| VersionError::InvalidTarget {
        value: value.to_string(),
        source,
    })
}

// Staying within the same stage advances the trailing counter; switching
// stages restarts it at zero.
fn next_counter(pre: &Prerelease, stage: PrereleaseStage) -> u64 {
    let mut parts = pre.as_str().split('.');
    let same_stage = parts.next().and_then(PrereleaseStage::from_ident) == Some(stage);
    if !same_stage {
        return 0;
    }
    parts
        .next()
        .and_then(|counter| counter.parse::<u64>().ok())
        .map_or(0, |counter| counter + 1)
}
