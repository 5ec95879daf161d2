//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".packmatch.yaml",
    ".packmatch.yml",
    "packmatch.yaml",
    "packmatch.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/packmatch/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    if let Some(path) =
        dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("packmatch")))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// The path `config init` writes to when no explicit path is given.
#[must_use]
pub fn default_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAMES[0])
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<ConfigFileError> for crate::error::PackMatchError {
    fn from(err: ConfigFileError) -> Self {
        match err {
            ConfigFileError::NotFound(path) => Self::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
            ),
            ConfigFileError::Io(e) => e.into(),
            ConfigFileError::Parse(e) => e.into(),
        }
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Booleans only override when they differ from the default; vendor
    /// entries from `other` are added on top of the existing ones.
    pub fn merge(&mut self, other: &Self) {
        if !other.matching.case_sensitive {
            self.matching.case_sensitive = false;
        }
        if other.matching.compatible {
            self.matching.compatible = true;
        }

        if !other.vendors.use_builtins {
            self.vendors.use_builtins = false;
        }
        self.vendors
            .aliases
            .extend(other.vendors.aliases.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.vendors
            .names
            .extend(other.vendors.names.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.vendors
            .legacy_ids
            .extend(other.vendors.legacy_ids.iter().map(|(k, v)| (k.clone(), v.clone())));

        if other.output.format != super::types::OutputFormat::default() {
            self.output.format = other.output.format;
        }
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    r"# packmatch configuration
# Place this file at .packmatch.yaml in your project root or ~/.config/packmatch/

matching:
  # Compare alphanumeric version segments case-sensitively (compare command only)
  case_sensitive: true
  # Reject a higher major version for ranges without maximum
  compatible: false

vendors:
  # Start from the built-in vendor tables
  use_builtins: true
  # Vendor name or alias -> numeric id
  aliases: {}
  #   Acme Semiconductor: '9000'
  # Numeric id -> canonical display name
  names: {}
  #   '9000': Acme
  # Retired numeric id -> current numeric id
  legacy_ids: {}
  #   '8999': '9000'

output:
  # Format: text, json
  format: text
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
