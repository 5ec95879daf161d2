//! Attribute model of catalog entries and requests.
//!
//! Components, APIs, devices and packs are all described by an
//! [`AttributeSet`]. Requests use the same type, so matching is always a
//! comparison of two sets:
//!
//! ```ignore
//! use packmatch::model::AttributeSet;
//!
//! let component = AttributeSet::with_tag("component")
//!     .attr("Cclass", "Device")
//!     .attr("Cgroup", "Startup")
//!     .attr("Cvendor", "ARM")
//!     .attr("Cversion", "1.0.0");
//!
//! let filter = AttributeSet::new().attr("Cgroup", "Start*").attr("Cversion", "1.0.0:2.0.0");
//! assert!(component.has_component_attributes(&filter));
//! assert_eq!(component.component_id(true), "ARM::Device.Startup:1.0.0");
//! ```

mod attributes;
mod catalog;
mod identifiers;
pub mod keys;

pub use attributes::{parse_assignment, AttributeSet};
pub use catalog::AttributeCatalog;
pub use identifiers::{
    name_from_package_id, vendor_from_package_id, CLASS_DELIMITER, ID_SEPARATOR,
};
