//! Configuration module for packmatch.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use packmatch::config::{AppConfig, ConfigPreset};
//!
//! let config = AppConfig::from_preset(ConfigPreset::Compatible);
//!
//! let config = AppConfig::builder()
//!     .compatible(true)
//!     .vendor_alias("Acme Semiconductor", "9000")
//!     .build();
//!
//! use packmatch::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.packmatch.yaml` file in your project root or `~/.config/packmatch/`:
//!
//! ```yaml
//! matching:
//!   compatible: true
//! vendors:
//!   aliases:
//!     Acme Semiconductor: '9000'
//!   names:
//!     '9000': Acme
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::ConfigPreset;
pub use types::{
    AppConfig, AppConfigBuilder, MatchingConfig, OutputConfig, OutputFormat, VendorConfig,
};
pub use validation::{ConfigError, Validatable};
pub(crate) use validation::is_vendor_id;

pub use file::{
    default_config_path, discover_config_file, generate_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and complete `.packmatch.yaml` files.
pub fn generate_json_schema() -> crate::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
