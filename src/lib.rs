//! **Attribute and version resolution for software packs.**
//!
//! `packmatch` decides whether a catalog entry (a component, API, device or
//! pack) satisfies a request expressed as named attributes. Requests may carry
//! version ranges, vendor aliases and wildcard patterns; the engine resolves
//! them and derives the canonical identifier strings tools use as keys.
//!
//! ## Core Concepts & Modules
//!
//! - **[`matching`]**: the leaf algorithms. Natural alphanumeric ordering,
//!   forgiving semantic versions with ranges and best-match selection,
//!   symmetric wildcards, and the [`VendorRegistry`] of vendor synonyms.
//! - **[`model`]**: the [`AttributeSet`] every entry and request is described
//!   by, its matching predicates and identifiers, and the [`AttributeCatalog`]
//!   for queries over many entries.
//! - **[`config`]**: YAML configuration with extra vendor names and default
//!   matching behavior.
//! - **[`cli`]**: handlers behind the `packmatch` binary.
//!
//! ## Matching a Component
//!
//! ```
//! use packmatch::AttributeSet;
//!
//! let component = AttributeSet::with_tag("component")
//!     .attr("Cclass", "Device")
//!     .attr("Cgroup", "Startup")
//!     .attr("Cvendor", "ARM")
//!     .attr("Cversion", "1.0.0");
//!
//! let filter = AttributeSet::new()
//!     .attr("Cgroup", "Start*")
//!     .attr("Cversion", "1.0.0:2.0.0");
//!
//! assert!(component.has_component_attributes(&filter));
//! assert_eq!(component.component_id(true), "ARM::Device.Startup:1.0.0");
//! ```
//!
//! ## Selecting a Version
//!
//! ```
//! use packmatch::matching::version;
//!
//! let available = ["1.1.1", "2.2.2", "3.3.3"];
//! assert_eq!(version::get_matching_version("@>=1.0.0", available, false).as_deref(), Some("3.3.3"));
//! assert_eq!(version::get_matching_version("1.0.0:2.9.9", available, false).as_deref(), Some("2.2.2"));
//! assert_eq!(version::get_matching_version("@4.0.0", available, false), None);
//! ```
//!
//! ## Vendors
//!
//! Vendor lookups go through a process-wide registry. Install a customized
//! one once at startup; otherwise the built-in tables are used.
//!
//! ```
//! use packmatch::VendorRegistry;
//!
//! let vendors = VendorRegistry::shared();
//! assert!(vendors.matches("Freescale", "NXP:11"));
//! assert_eq!(vendors.canonical_name("Freescale:78"), "NXP");
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Identifier builders mirror the optional parts of an id one flag each
    clippy::fn_params_excessive_bools,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod matching;
pub mod model;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset, MatchingConfig, OutputConfig, VendorConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, PackMatchError, Result};
pub use matching::{MatchMode, VendorRegistry, VersionComparator, VersionKey, WildcardPattern};
pub use model::{AttributeCatalog, AttributeSet};
