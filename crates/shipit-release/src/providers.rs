use std::path::Path;

use semver::Version;
use shipit_core::PackageInfo;

use crate::Result;
use crate::traits::ManifestStore;

/// On-disk manifest store backed by `shipit-manifest`.
pub struct FsManifestStore;

impl FsManifestStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsManifestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestStore for FsManifestStore {
    fn read_package(&self, path: &Path) -> Result<PackageInfo> {
        Ok(shipit_manifest::read_package(path)?)
    }

    fn write_version(&self, path: &Path, version: &Version) -> Result<()> {
        Ok(shipit_manifest::write_version(path, version)?)
    }
}
