//! Module-version threshold checks.
//!
//! OpenMRS module versions are dotted numeric strings
//! (`MAJOR.MINOR[.PATCH]`), optionally carrying a `-SNAPSHOT` suffix on the
//! component a development build was cut from. This is not semver — two
//! components are enough — so the comparison is hand-rolled.

use thiserror::Error;

/// A version component that is not numeric after `-SNAPSHOT` stripping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid numeric component {component:?} in module version {version:?}")]
pub struct VersionParseError {
    pub version: String,
    pub component: String,
}

/// Whether `version` is at least `min_major.min_minor`.
///
/// A version with fewer than two dot-separated components never meets the
/// threshold (`Ok(false)`, not an error). A higher major passes regardless
/// of minor; at exactly `min_major` the minor decides.
pub fn meets_minimum(
    version: &str,
    min_major: u32,
    min_minor: u32,
) -> Result<bool, VersionParseError> {
    let mut components = version.split('.');
    let (major, minor) = match (components.next(), components.next()) {
        (Some(major), Some(minor)) => (major, minor),
        _ => return Ok(false),
    };

    let major = parse_component(version, major)?;
    let minor = parse_component(version, minor)?;

    Ok(major > min_major || (major == min_major && minor >= min_minor))
}

fn parse_component(version: &str, raw: &str) -> Result<u32, VersionParseError> {
    let numeric = raw.strip_suffix("-SNAPSHOT").unwrap_or(raw);
    numeric.parse().map_err(|_| VersionParseError {
        version: version.to_string(),
        component: raw.to_string(),
    })
}
