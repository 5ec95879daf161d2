//! Well-known attribute names.
//!
//! Component attributes start with `C`, device attributes with `D`, and the
//! processor name with `P`. Prefix-based predicates rely on this convention.

pub const CCLASS: &str = "Cclass";
pub const CGROUP: &str = "Cgroup";
pub const CSUB: &str = "Csub";
pub const CVARIANT: &str = "Cvariant";
pub const CVERSION: &str = "Cversion";
pub const CAPIVERSION: &str = "Capiversion";
pub const CVENDOR: &str = "Cvendor";
pub const CBUNDLE: &str = "Cbundle";

pub const DNAME: &str = "Dname";
pub const DVARIANT: &str = "Dvariant";
pub const DVENDOR: &str = "Dvendor";
pub const DFAMILY: &str = "Dfamily";
pub const DSUBFAMILY: &str = "DsubFamily";
pub const PNAME: &str = "Pname";

pub const VENDOR: &str = "vendor";
pub const NAME: &str = "name";
pub const VERSION: &str = "version";
pub const CONDITION: &str = "condition";
pub const DOC: &str = "doc";
pub const MAX_INSTANCES: &str = "maxInstances";

/// Tag of API entries. APIs never carry a vendor and identify by class and group.
pub const API_TAG: &str = "api";

/// Prefix of component classification attributes.
pub const COMPONENT_PREFIX: char = 'C';

/// Prefix of device attributes.
pub const DEVICE_PREFIX: char = 'D';

/// Attributes whose values are compared as vendors rather than wildcards.
#[must_use]
pub fn is_vendor_key(name: &str) -> bool {
    name == DVENDOR || name == VENDOR
}

/// Attributes whose values are compared as version ranges.
#[must_use]
pub fn is_version_key(name: &str) -> bool {
    name == CVERSION || name == CAPIVERSION
}
