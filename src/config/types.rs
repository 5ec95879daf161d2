//! Configuration types for packmatch.
//!
//! The file format mirrors these structs one to one; every section is
//! optional and falls back to its `Default`.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Version and attribute matching behavior
    pub matching: MatchingConfig,
    /// Additional vendor names, ids and legacy ids
    pub vendors: VendorConfig,
    /// Output configuration
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Compare version segments case-sensitively in `compare`.
    pub const fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.config.matching.case_sensitive = case_sensitive;
        self
    }

    /// Reject major version upgrades for open ranges.
    pub const fn compatible(mut self, compatible: bool) -> Self {
        self.config.matching.compatible = compatible;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Start from an empty vendor table instead of the built-in one.
    pub const fn without_builtin_vendors(mut self) -> Self {
        self.config.vendors.use_builtins = false;
        self
    }

    /// Register a vendor name for a numeric id.
    pub fn vendor_alias(mut self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.config.vendors.aliases.insert(name.into(), id.into());
        self
    }

    /// Set the display name for a numeric vendor id.
    pub fn vendor_name(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.config.vendors.names.insert(id.into(), name.into());
        self
    }

    /// Map a retired vendor id onto its successor.
    pub fn legacy_vendor_id(mut self, old: impl Into<String>, new: impl Into<String>) -> Self {
        self.config.vendors.legacy_ids.insert(old.into(), new.into());
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// Version and attribute matching behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchingConfig {
    /// Compare the alphanumeric parts of version segments case-sensitively
    /// in the `compare` command. Range checks and version selection are
    /// always case-sensitive. Release identifiers are always compared
    /// case-insensitively.
    pub case_sensitive: bool,
    /// Treat a major version above an open range minimum as a mismatch.
    pub compatible: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            compatible: false,
        }
    }
}

/// Vendor table customization.
///
/// Ids are decimal strings, as used in `"Name:Id"` vendor attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VendorConfig {
    /// Start from the built-in vendor tables
    pub use_builtins: bool,
    /// Vendor name (or alias) to numeric id
    pub aliases: BTreeMap<String, String>,
    /// Numeric id to canonical display name
    pub names: BTreeMap<String, String>,
    /// Retired numeric id to current numeric id
    pub legacy_ids: BTreeMap<String, String>,
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            use_builtins: true,
            aliases: BTreeMap::new(),
            names: BTreeMap::new(),
            legacy_ids: BTreeMap::new(),
        }
    }
}

impl VendorConfig {
    /// True if nothing beyond the built-in tables is configured.
    #[must_use]
    pub fn is_builtin_only(&self) -> bool {
        self.use_builtins
            && self.aliases.is_empty()
            && self.names.is_empty()
            && self.legacy_ids.is_empty()
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format for CLI results
    pub format: OutputFormat,
}

/// Output format for CLI results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
