//! Documentation reference rewrite for minor/major releases.
//!
//! Human-readable install references pin a `name@major.minor` line; patch
//! and prerelease bumps leave that line unchanged, so only minor and major
//! releases rewrite it.

use std::path::Path;

use semver::Version;
use shipit_core::ReleaseKind;
use tracing::debug;

use crate::error::{ReleaseError, Result};

/// Whether the given release kind moves the major.minor line.
#[must_use]
pub const fn moves_minor_line(kind: ReleaseKind) -> bool {
    matches!(kind, ReleaseKind::Minor | ReleaseKind::Major)
}

/// Replaces every `<package>@<cur.major>.<cur.minor>` occurrence with the
/// target's major.minor and persists the file.
///
/// Returns `true` when the file changed.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written.
pub fn rewrite_minor_references(
    path: &Path,
    package: &str,
    current: &Version,
    target: &Version,
) -> Result<bool> {
    let needle = format!("{package}@{}.{}", current.major, current.minor);
    let replacement = format!("{package}@{}.{}", target.major, target.minor);
    if needle == replacement {
        return Ok(false);
    }

    let content = std::fs::read_to_string(path).map_err(|source| ReleaseError::DocRead {
        path: path.to_path_buf(),
        source,
    })?;

    if !content.contains(&needle) {
        return Ok(false);
    }

    let updated = content.replace(&needle, &replacement);
    std::fs::write(path, updated).map_err(|source| ReleaseError::DocWrite {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), %needle, %replacement, "rewrote documentation references");
    Ok(true)
}
