use std::path::Path;

use semver::Version;
use shipit_core::PackageInfo;
use toml_edit::DocumentMut;

use crate::error::ManifestError;

/// # Errors
///
/// Returns `ManifestError::Read` if the file cannot be read, or
/// `ManifestError::Parse` if the TOML is malformed.
pub fn read_document(path: &Path) -> Result<DocumentMut, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    content
        .parse::<DocumentMut>()
        .map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads the package name and current version from a manifest.
///
/// # Errors
///
/// Returns `ManifestError::MissingField` if required fields are absent, or
/// `ManifestError::InvalidVersion` if the version string is not valid semver.
pub fn read_package(path: &Path) -> Result<PackageInfo, ManifestError> {
    let doc = read_document(path)?;

    let name = package_str(&doc, path, "name")?.to_string();
    let version_str = package_str(&doc, path, "version")?;

    let version =
        Version::parse(version_str).map_err(|source| ManifestError::InvalidVersion {
            path: path.to_path_buf(),
            version: version_str.to_string(),
            source,
        })?;

    Ok(PackageInfo { name, version })
}

/// # Errors
///
/// Returns an error if the manifest cannot be read or its version is invalid.
pub fn read_version(path: &Path) -> Result<Version, ManifestError> {
    Ok(read_package(path)?.version)
}

fn package_str<'a>(
    doc: &'a DocumentMut,
    path: &Path,
    field: &str,
) -> Result<&'a str, ManifestError> {
    let package = doc
        .get("package")
        .ok_or_else(|| ManifestError::MissingField {
            path: path.to_path_buf(),
            field: "package".to_string(),
        })?;

    package
        .get(field)
        .and_then(toml_edit::Item::as_str)
        .ok_or_else(|| ManifestError::MissingField {
            path: path.to_path_buf(),
            field: format!("package.{field}"),
        })
}
