use std::path::Path;

use semver::Version;
use shipit_core::PackageInfo;

use crate::Result;

/// Manifest read/write capability for the procedure and its rollback.
pub trait ManifestStore: Send + Sync {
    /// Reads the package name and current version.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is missing or malformed.
    fn read_package(&self, path: &Path) -> Result<PackageInfo>;

    /// Rewrites `package.version`, preserving all other content.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or written.
    fn write_version(&self, path: &Path, version: &Version) -> Result<()>;
}
