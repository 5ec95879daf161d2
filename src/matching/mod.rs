//! Matching primitives for pack attributes.
//!
//! Leaves first:
//!
//! - [`alnum`]: natural string ordering with numeric digit runs
//! - [`version`]: forgiving semantic versions, ranges and version selection
//! - [`wildcard`]: symmetric `?`/`*`/`[...]` matching of attribute values
//! - [`vendor`]: vendor name and id canonicalization
//!
//! [`crate::model::AttributeSet`] combines them into attribute-level
//! predicates.
//!
//! # Example
//!
//! ```ignore
//! use packmatch::matching::{version, wildcard, VendorRegistry};
//!
//! assert_eq!(version::compare("6.4.0", "6.5.0", true), -2);
//! assert_eq!(version::range_compare("3.2.0", "3.1.0:3.8.0", false), 0);
//! assert!(wildcard::matches("STM32F10[123]?[CDE]", "STM32F103ZE"));
//! assert!(VendorRegistry::shared().matches("Freescale", "NXP:11"));
//! ```

pub mod alnum;
pub mod vendor;
pub mod version;
pub mod wildcard;

pub use vendor::VendorRegistry;
pub use version::{
    compare as compare_versions, get_matching_version, range_compare, MatchMode, ParsedVersion,
    VersionComparator, VersionKey,
};
pub use wildcard::WildcardPattern;
