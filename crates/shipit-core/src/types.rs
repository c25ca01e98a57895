use std::fmt;

use clap::ValueEnum;
use semver::Version;
use serde::{Deserialize, Serialize};

/// The release choices offered to the operator, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseKind {
    Patch,
    Minor,
    Major,
    Prerelease,
    Prepatch,
    Preminor,
    Premajor,
    Custom,
}

impl ReleaseKind {
    pub const ALL: [Self; 8] = [
        Self::Patch,
        Self::Minor,
        Self::Major,
        Self::Prerelease,
        Self::Prepatch,
        Self::Preminor,
        Self::Premajor,
        Self::Custom,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
            Self::Prerelease => "prerelease",
            Self::Prepatch => "prepatch",
            Self::Preminor => "preminor",
            Self::Premajor => "premajor",
            Self::Custom => "custom",
        }
    }

    /// The stable-field increment this kind maps to, if any.
    #[must_use]
    pub const fn as_bump(self) -> Option<BumpType> {
        match self {
            Self::Patch => Some(BumpType::Patch),
            Self::Minor => Some(BumpType::Minor),
            Self::Major => Some(BumpType::Major),
            _ => None,
        }
    }

    /// The prerelease increment this kind maps to, if any.
    #[must_use]
    pub const fn as_pre(self) -> Option<PreBump> {
        match self {
            Self::Prerelease => Some(PreBump::Prerelease),
            Self::Prepatch => Some(PreBump::Prepatch),
            Self::Preminor => Some(PreBump::Preminor),
            Self::Premajor => Some(PreBump::Premajor),
            _ => None,
        }
    }
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreBump {
    /// Bump only the prerelease counter (next patch when stable).
    Prerelease,
    Prepatch,
    Preminor,
    Premajor,
}

/// Named prerelease phases, ordered by maturity.
///
/// The ordering is load-bearing: a plain prerelease bump never offers a
/// stage earlier than the one the package already carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrereleaseStage {
    Alpha,
    Beta,
    Rc,
}

impl PrereleaseStage {
    pub const ALL: [Self; 3] = [Self::Alpha, Self::Beta, Self::Rc];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Rc => "rc",
        }
    }

    /// Parses a prerelease identifier into a recognized stage.
    #[must_use]
    pub fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "alpha" => Some(Self::Alpha),
            "beta" => Some(Self::Beta),
            "rc" => Some(Self::Rc),
            _ => None,
        }
    }
}

impl fmt::Display for PrereleaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The package identity read from the manifest at procedure start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    pub version: Version,
}
