//! Strict semantic version validation.
//!
//! The matching engine accepts loosely formed versions (`"1.2"`, `"6.5.0b"`).
//! Tools that publish packs need the strict form, which is checked here with
//! the `semver` crate.

use crate::error::{PackMatchError, Result};
use semver::Version;

/// Validate that `version` is a strict `MAJOR.MINOR.PATCH[-pre][+build]` string.
pub fn validate_semver(version: &str) -> Result<Version> {
    Version::parse(version).map_err(|e| PackMatchError::invalid_version(version, e.to_string()))
}

/// Returns true when `version` passes [`validate_semver`].
#[must_use]
pub fn is_strict_semver(version: &str) -> bool {
    Version::parse(version).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_semver() {
        let v = validate_semver("6.5.0-a+b").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (6, 5, 0));
        assert_eq!(v.pre.as_str(), "a");
        assert_eq!(v.build.as_str(), "b");
    }

    #[test]
    fn test_loose_versions_are_rejected() {
        assert!(!is_strict_semver("1.2"));
        assert!(!is_strict_semver("6.5.0b"));
        assert!(!is_strict_semver("v1.2.3"));
        assert!(matches!(
            validate_semver("1.2"),
            Err(PackMatchError::Parse { .. })
        ));
    }
}
