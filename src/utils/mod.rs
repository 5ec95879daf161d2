//! Shared utilities.

pub mod strings;
mod version;

pub use version::{is_strict_semver, validate_semver};
