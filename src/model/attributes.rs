//! Named string attributes of a catalog entry or a request.
//!
//! An [`AttributeSet`] is what the matching engine sees of a component, API,
//! device, board or pack: an ordered map of attribute names to string values
//! plus the tag of the element it was read from. Requests are attribute sets
//! too, so every predicate here compares two sets.

use super::keys;
use crate::error::{PackMatchError, Result};
use crate::matching::{version, wildcard, VendorRegistry};
use crate::utils::strings::{self, prefix, suffix};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ordered attribute map with an optional element tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeSet {
    /// Element tag, e.g. `"component"` or `"api"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
    /// Attribute values keyed by name
    #[serde(default)]
    attributes: BTreeMap<String, String>,
}

impl AttributeSet {
    /// Create an empty, untagged set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with a tag.
    #[must_use]
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style insert; empty values are skipped.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.add(name, value, false);
        self
    }

    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn set_tag(&mut self, tag: Option<String>) {
        self.tag = tag;
    }

    /// True for entries tagged `"api"`.
    #[must_use]
    pub fn is_api(&self) -> bool {
        self.tag.as_deref() == Some(keys::API_TAG)
    }

    #[must_use]
    pub const fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // ========================================================================
    // Storage
    // ========================================================================

    /// Add or update an attribute. Returns true if the set changed.
    ///
    /// Empty names are rejected. Unless `insert_empty` is set, an empty
    /// value removes an existing attribute and is otherwise not stored.
    pub fn add(&mut self, name: &str, value: &str, insert_empty: bool) -> bool {
        if name.is_empty() {
            return false;
        }
        if let Some(existing) = self.attributes.get(name) {
            if existing == value {
                return false;
            }
            if !insert_empty && value.is_empty() {
                self.attributes.remove(name);
                return true;
            }
        }
        if insert_empty || !value.is_empty() {
            self.attributes.insert(name.to_string(), value.to_string());
        }
        true
    }

    /// Set an attribute, storing empty values as they are.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        self.add(name, value, true)
    }

    /// Remove an attribute. Returns true if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.attributes.remove(name).is_some()
    }

    pub fn clear(&mut self) {
        self.attributes.clear();
    }

    /// Merge `other` into this set. Returns true if anything changed.
    ///
    /// Existing attributes are only overwritten with `replace_existing`.
    pub fn add_all(&mut self, other: &Self, replace_existing: bool) -> bool {
        if other.is_empty() {
            return false;
        }
        if self.is_empty() {
            self.attributes.clone_from(&other.attributes);
            return true;
        }
        let mut changed = false;
        for (name, value) in &other.attributes {
            if (replace_existing || !self.contains(name)) && self.add(name, value, false) {
                changed = true;
            }
        }
        changed
    }

    /// Replace all attributes with those of `other`. Returns true if anything changed.
    pub fn set_all(&mut self, other: &Self) -> bool {
        if self.attributes == other.attributes {
            return false;
        }
        self.attributes.clone_from(&other.attributes);
        true
    }

    /// Remove all attributes whose name wildcard-matches `pattern`.
    pub fn erase_matching(&mut self, pattern: &str) -> bool {
        let before = self.attributes.len();
        self.attributes
            .retain(|name, _| !wildcard::matches(pattern, name));
        self.attributes.len() != before
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Attribute value, or `""` if missing.
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.attributes.get(name).map_or("", String::as_str)
    }

    #[must_use]
    pub fn get_opt(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// True if any attribute value wildcard-matches `pattern`.
    #[must_use]
    pub fn has_value(&self, pattern: &str) -> bool {
        self.attributes
            .values()
            .any(|value| wildcard::matches(pattern, value))
    }

    /// `"1"` and `"true"` read as true; missing or empty values yield `default`.
    #[must_use]
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.get(name) {
            "" => default,
            value => value == "1" || value == "true",
        }
    }

    /// Decimal or `0x` hexadecimal value, `default` if missing or malformed.
    #[must_use]
    pub fn get_i32(&self, name: &str, default: i32) -> i32 {
        strings::parse_i32(self.get(name)).unwrap_or(default)
    }

    #[must_use]
    pub fn get_u32(&self, name: &str, default: u32) -> u32 {
        strings::parse_u64(self.get(name))
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(default)
    }

    #[must_use]
    pub fn get_u64(&self, name: &str, default: u64) -> u64 {
        strings::parse_u64(self.get(name)).unwrap_or(default)
    }

    /// Text of an attribute before the first `delimiter`.
    #[must_use]
    pub fn attribute_prefix(&self, name: &str, delimiter: char) -> &str {
        prefix(self.get(name), delimiter)
    }

    /// Text of an attribute after the last `delimiter`.
    #[must_use]
    pub fn attribute_suffix(&self, name: &str, delimiter: char) -> &str {
        suffix(self.get(name), delimiter)
    }

    /// `name=value` pairs separated by spaces, values optionally quoted.
    #[must_use]
    pub fn attributes_string(&self, quote: bool) -> String {
        self.iter()
            .map(|(name, value)| {
                if quote {
                    format!("{name}=\"{value}\"")
                } else {
                    format!("{name}={value}")
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// True if every attribute of `required` is present here and matches.
    ///
    /// Vendor attributes are compared with the vendor registry, everything
    /// else with [`wildcard::matches`].
    #[must_use]
    pub fn compare_attributes(&self, required: &Self) -> bool {
        self.compare_attributes_in(required, VendorRegistry::shared())
    }

    /// [`compare_attributes`](Self::compare_attributes) with an explicit registry.
    #[must_use]
    pub fn compare_attributes_in(&self, required: &Self, vendors: &VendorRegistry) -> bool {
        required.iter().all(|(name, wanted)| {
            self.get_opt(name).is_some_and(|stored| {
                if keys::is_vendor_key(name) {
                    vendors.matches(stored, wanted)
                } else {
                    wildcard::matches(stored, wanted)
                }
            })
        })
    }

    /// Same attribute count and [`compare_attributes`](Self::compare_attributes).
    #[must_use]
    pub fn compare(&self, other: &Self) -> bool {
        self.len() == other.len() && self.compare_attributes(other)
    }

    /// Exact equality of all pairs, ignoring the tag.
    #[must_use]
    pub fn equal_attributes(&self, other: &Self) -> bool {
        self.attributes == other.attributes
    }

    /// True if all `C`-prefixed attributes of `filter` are satisfied.
    ///
    /// Attributes missing here are tolerated when the filter value is empty
    /// or for `Capiversion`. Version attributes are checked as ranges, the
    /// rest as wildcards. An empty filter matches everything.
    #[must_use]
    pub fn has_component_attributes(&self, filter: &Self) -> bool {
        filter
            .iter()
            .filter(|(name, _)| name.starts_with(keys::COMPONENT_PREFIX))
            .all(|(name, wanted)| match self.get_opt(name) {
                None => wanted.is_empty() || name == keys::CAPIVERSION,
                Some(stored) if keys::is_version_key(name) => {
                    version::range_compare(stored, wanted, false) == 0
                }
                Some(stored) => wildcard::matches(wanted, stored),
            })
    }

    /// True if `candidate` requests this API.
    ///
    /// Every `C`-prefixed attribute of this set except `Cvendor` must be
    /// present in `candidate` and match. A missing `Capiversion` accepts any
    /// version, a present one is a range this API's version must lie in.
    #[must_use]
    pub fn match_api_attributes(&self, candidate: &Self) -> bool {
        if candidate.is_empty() {
            return false;
        }
        self.iter()
            .filter(|(name, _)| name.starts_with(keys::COMPONENT_PREFIX) && *name != keys::CVENDOR)
            .all(|(name, mine)| match candidate.get_opt(name) {
                None => name == keys::CAPIVERSION,
                Some(range) if name == keys::CAPIVERSION => {
                    version::range_compare(mine, range, false) == 0
                }
                Some(theirs) => wildcard::matches(mine, theirs),
            })
    }

    /// True if every `D`-prefixed attribute of this set is matched by `candidate`.
    #[must_use]
    pub fn match_device_attributes(&self, candidate: &Self) -> bool {
        self.match_device_attributes_in(candidate, VendorRegistry::shared())
    }

    #[must_use]
    pub fn match_device_attributes_in(&self, candidate: &Self, vendors: &VendorRegistry) -> bool {
        if candidate.is_empty() {
            return false;
        }
        self.iter()
            .filter(|(name, _)| name.starts_with(keys::DEVICE_PREFIX))
            .all(|(name, mine)| self.device_value_matches(candidate, name, mine, vendors))
    }

    /// Like [`match_device_attributes`](Self::match_device_attributes), but
    /// only `Dname`, `Pname` and `Dvendor` are considered.
    #[must_use]
    pub fn match_device(&self, candidate: &Self) -> bool {
        self.match_device_in(candidate, VendorRegistry::shared())
    }

    #[must_use]
    pub fn match_device_in(&self, candidate: &Self, vendors: &VendorRegistry) -> bool {
        if candidate.is_empty() {
            return false;
        }
        self.iter()
            .filter(|(name, _)| matches!(*name, keys::DNAME | keys::PNAME | keys::DVENDOR))
            .all(|(name, mine)| self.device_value_matches(candidate, name, mine, vendors))
    }

    fn device_value_matches(
        &self,
        candidate: &Self,
        name: &str,
        mine: &str,
        vendors: &VendorRegistry,
    ) -> bool {
        candidate.get_opt(name).is_some_and(|theirs| {
            if name == keys::DVENDOR {
                vendors.matches(theirs, mine)
            } else {
                wildcard::matches(mine, theirs)
            }
        })
    }

    // ========================================================================
    // Well-known attributes
    // ========================================================================

    #[must_use]
    pub fn cclass(&self) -> &str {
        self.get(keys::CCLASS)
    }

    #[must_use]
    pub fn cgroup(&self) -> &str {
        self.get(keys::CGROUP)
    }

    #[must_use]
    pub fn csub(&self) -> &str {
        self.get(keys::CSUB)
    }

    #[must_use]
    pub fn cvariant(&self) -> &str {
        self.get(keys::CVARIANT)
    }

    #[must_use]
    pub fn cbundle(&self) -> &str {
        self.get(keys::CBUNDLE)
    }

    #[must_use]
    pub fn condition_id(&self) -> &str {
        self.get(keys::CONDITION)
    }

    #[must_use]
    pub fn api_version(&self) -> &str {
        self.get(keys::CAPIVERSION)
    }

    #[must_use]
    pub fn device_name(&self) -> &str {
        self.get(keys::DNAME)
    }

    #[must_use]
    pub fn device_variant_name(&self) -> &str {
        self.get(keys::DVARIANT)
    }

    #[must_use]
    pub fn device_family_name(&self) -> &str {
        self.get(keys::DFAMILY)
    }

    #[must_use]
    pub fn device_sub_family_name(&self) -> &str {
        self.get(keys::DSUBFAMILY)
    }

    #[must_use]
    pub fn processor_name(&self) -> &str {
        self.get(keys::PNAME)
    }

    /// The entry's version: `Capiversion` for APIs, otherwise `Cversion`
    /// falling back to `version`.
    #[must_use]
    pub fn version_string(&self) -> &str {
        if self.is_api() {
            return self.api_version();
        }
        match self.get(keys::CVERSION) {
            "" => self.get(keys::VERSION),
            version => version,
        }
    }

    /// Version followed by the variant, separated by a space.
    #[must_use]
    pub fn version_variant_string(&self) -> String {
        match self.cvariant() {
            "" => self.version_string().to_string(),
            variant => format!("{} {}", self.version_string(), variant),
        }
    }

    /// The entry's vendor: empty for APIs, otherwise `Cvendor` falling back
    /// to `vendor`.
    #[must_use]
    pub fn vendor_string(&self) -> &str {
        if self.is_api() {
            return "";
        }
        match self.get(keys::CVENDOR) {
            "" => self.get(keys::VENDOR),
            vendor => vendor,
        }
    }

    /// Canonical display name of [`vendor_string`](Self::vendor_string).
    #[must_use]
    pub fn vendor_name(&self) -> String {
        self.vendor_name_in(VendorRegistry::shared())
    }

    /// [`vendor_name`](Self::vendor_name) resolved through `vendors`.
    #[must_use]
    pub fn vendor_name_in(&self, vendors: &VendorRegistry) -> String {
        vendors.canonical_name(self.vendor_string())
    }

    /// `doc`, falling back to `name`.
    #[must_use]
    pub fn doc_attribute(&self) -> &str {
        match self.get(keys::DOC) {
            "" => self.get(keys::NAME),
            doc => doc,
        }
    }

    /// Device variant (or device) name, followed by `:Pname` if set.
    #[must_use]
    pub fn full_device_name(&self) -> String {
        let mut name = match self.device_variant_name() {
            "" => self.device_name().to_string(),
            variant => variant.to_string(),
        };
        let processor = self.processor_name();
        if !processor.is_empty() {
            name.push(':');
            name.push_str(processor);
        }
        name
    }

    #[must_use]
    pub fn has_max_instances(&self) -> bool {
        !self.get(keys::MAX_INSTANCES).is_empty()
    }

    /// Allowed number of instances, at least one.
    #[must_use]
    pub fn max_instances(&self) -> i32 {
        self.get_i32(keys::MAX_INSTANCES, 1).max(1)
    }
}

/// Parse a `name=value` argument. The value may be empty.
pub fn parse_assignment(input: &str) -> Result<(String, String)> {
    match input.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(PackMatchError::invalid_attribute(input)),
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) if self.is_empty() => write!(f, "<{tag}>"),
            Some(tag) => write!(f, "<{tag} {}>", self.attributes_string(true)),
            None => f.write_str(&self.attributes_string(true)),
        }
    }
}

impl From<BTreeMap<String, String>> for AttributeSet {
    fn from(attributes: BTreeMap<String, String>) -> Self {
        Self {
            tag: None,
            attributes,
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tag: None,
            attributes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(&str, &str)]) -> AttributeSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_add_semantics() {
        let mut attrs = AttributeSet::new();
        assert!(!attrs.add("", "x", true));
        assert!(attrs.add("Cclass", "Device", false));
        assert!(!attrs.add("Cclass", "Device", false));
        assert!(attrs.add("Cclass", "", false));
        assert!(!attrs.contains("Cclass"));

        assert!(attrs.add("Cgroup", "", true));
        assert_eq!(attrs.get_opt("Cgroup"), Some(""));
        // nothing stored, but still reported as a change
        assert!(attrs.add("Csub", "", false));
        assert!(!attrs.contains("Csub"));
    }

    #[test]
    fn test_add_all_and_set_all() {
        let mut attrs = set(&[("Cclass", "Device"), ("Cgroup", "Startup")]);
        let other = set(&[("Cclass", "CMSIS"), ("Cversion", "1.0.0")]);

        assert!(attrs.add_all(&other, false));
        assert_eq!(attrs.get("Cclass"), "Device");
        assert_eq!(attrs.get("Cversion"), "1.0.0");

        assert!(attrs.add_all(&other, true));
        assert_eq!(attrs.get("Cclass"), "CMSIS");
        assert!(!attrs.add_all(&AttributeSet::new(), true));

        assert!(attrs.set_all(&other));
        assert_eq!(attrs, other);
        assert!(!attrs.set_all(&other));
    }

    #[test]
    fn test_erase_matching() {
        let mut attrs = set(&[("Dname", "x"), ("Dvendor", "y"), ("Pname", "z")]);
        assert!(attrs.erase_matching("D*"));
        assert_eq!(attrs.len(), 1);
        assert!(!attrs.erase_matching("D*"));
    }

    #[test]
    fn test_typed_reads() {
        let attrs = set(&[
            ("a", "1"),
            ("b", "true"),
            ("c", "yes"),
            ("hex", "0x20"),
            ("neg", "-5"),
            ("bad", "five"),
            ("empty", ""),
        ]);
        assert!(attrs.get_bool("a", false));
        assert!(attrs.get_bool("b", false));
        assert!(!attrs.get_bool("c", true));
        assert!(attrs.get_bool("missing", true));
        assert!(attrs.get_bool("empty", true));
        assert_eq!(attrs.get_i32("hex", -1), 32);
        assert_eq!(attrs.get_i32("neg", 0), -5);
        assert_eq!(attrs.get_i32("bad", -1), -1);
        assert_eq!(attrs.get_u32("neg", 7), 7);
        assert_eq!(attrs.get_u64("hex", 0), 32);
        assert_eq!(attrs.get_u64("missing", 9), 9);
    }

    #[test]
    fn test_prefix_suffix_and_strings() {
        let attrs = set(&[("Dvendor", "NXP:11"), ("Dname", "LPC55S69")]);
        assert_eq!(attrs.attribute_prefix("Dvendor", ':'), "NXP");
        assert_eq!(attrs.attribute_suffix("Dvendor", ':'), "11");
        assert_eq!(
            attrs.attributes_string(false),
            "Dname=LPC55S69 Dvendor=NXP:11"
        );
        assert_eq!(
            attrs.attributes_string(true),
            "Dname=\"LPC55S69\" Dvendor=\"NXP:11\""
        );
    }

    #[test]
    fn test_compare_attributes() {
        let entry = set(&[
            ("Dname", "STM32F103ZE"),
            ("Dvendor", "STMicroelectronics:13"),
            ("Dfamily", "STM32F1"),
        ]);
        assert!(entry.compare_attributes(&set(&[("Dname", "STM32F10[123]?[CDE]")])));
        assert!(entry.compare_attributes(&set(&[("Dvendor", "ST")])));
        assert!(!entry.compare_attributes(&set(&[("Dvendor", "NXP")])));
        assert!(!entry.compare_attributes(&set(&[("Pname", "cm3")])));
        assert!(entry.compare_attributes(&AttributeSet::new()));

        assert!(!entry.compare(&set(&[("Dname", "STM32F103ZE")])));
        assert!(entry.compare(&set(&[
            ("Dname", "STM32F1*"),
            ("Dvendor", "ST:13"),
            ("Dfamily", "STM32F1"),
        ])));
    }

    #[test]
    fn test_equal_attributes() {
        let a = set(&[("Cclass", "Device"), ("Cgroup", "Startup")]);
        let b = set(&[("Cclass", "Device"), ("Cgroup", "Startup")]);
        let c = set(&[("Cclass", "Device"), ("Cgroup", "Start*")]);
        assert!(a.equal_attributes(&b));
        assert!(!a.equal_attributes(&c));
        assert!(!a.equal_attributes(&set(&[("Cclass", "Device")])));
    }

    #[test]
    fn test_has_component_attributes() {
        let component = set(&[
            ("Cclass", "Device"),
            ("Cgroup", "Startup"),
            ("Cversion", "2.1.0"),
            ("Dname", "ignored"),
        ]);
        assert!(component.has_component_attributes(&AttributeSet::new()));
        assert!(component.has_component_attributes(&set(&[("Cclass", "Dev*")])));
        assert!(component.has_component_attributes(&set(&[("Cversion", "2.0.0:2.5.0")])));
        assert!(!component.has_component_attributes(&set(&[("Cversion", "3.0.0")])));
        assert!(component.has_component_attributes(&set(&[("Csub", "")])));
        assert!(!component.has_component_attributes(&set(&[("Csub", "Core")])));
        assert!(component.has_component_attributes(&set(&[("Capiversion", "1.0.0")])));
        assert!(component.has_component_attributes(&set(&[("Dname", "other")])));
    }

    #[test]
    fn test_match_api_attributes() {
        let mut api = set(&[
            ("Cclass", "CMSIS"),
            ("Cgroup", "RTOS2"),
            ("Capiversion", "2.1.3"),
            ("Cvendor", "ARM"),
        ]);
        api.set_tag(Some("api".to_string()));

        let request = set(&[("Cclass", "CMSIS"), ("Cgroup", "RTOS2"), ("Capiversion", "2.0.0")]);
        assert!(api.match_api_attributes(&request));
        assert!(api.match_api_attributes(&set(&[("Cclass", "CMSIS"), ("Cgroup", "RTOS*")])));
        assert!(!api.match_api_attributes(&set(&[
            ("Cclass", "CMSIS"),
            ("Cgroup", "RTOS2"),
            ("Capiversion", "3.0.0"),
        ])));
        assert!(!api.match_api_attributes(&set(&[("Cclass", "CMSIS")])));
        assert!(!api.match_api_attributes(&AttributeSet::new()));
    }

    #[test]
    fn test_match_device_attributes() {
        let device = set(&[
            ("Dname", "LPC55S69JBD100"),
            ("Dvendor", "NXP:11"),
            ("Pname", "cm33_core0"),
        ]);
        let request = set(&[
            ("Dname", "LPC55S69*"),
            ("Dvendor", "Freescale:78"),
            ("Pname", "cm33_core1"),
        ]);
        assert!(device.match_device_attributes(&request));
        assert!(!device.match_device(&request));
        assert!(!device.match_device_attributes(&set(&[("Dname", "LPC55S69JBD100")])));
        assert!(!device.match_device_attributes(&AttributeSet::new()));

        let same_core = set(&[
            ("Dname", "LPC55S69JBD100"),
            ("Dvendor", "NXP"),
            ("Pname", "cm33_core0"),
        ]);
        assert!(device.match_device(&same_core));
    }

    #[test]
    fn test_version_and_vendor_accessors() {
        let component = set(&[("Cvendor", "Freescale"), ("Cversion", "1.2.0"), ("Cvariant", "Debug")]);
        assert_eq!(component.version_string(), "1.2.0");
        assert_eq!(component.version_variant_string(), "1.2.0 Debug");
        assert_eq!(component.vendor_string(), "Freescale");
        assert_eq!(component.vendor_name(), "NXP");

        let pack = set(&[("vendor", "ARM"), ("version", "5.9.0")]);
        assert_eq!(pack.version_string(), "5.9.0");
        assert_eq!(pack.vendor_string(), "ARM");

        let mut api = set(&[("Cvendor", "ARM"), ("Cversion", "1.0.0"), ("Capiversion", "2.0.0")]);
        api.set_tag(Some("api".to_string()));
        assert_eq!(api.version_string(), "2.0.0");
        assert_eq!(api.vendor_string(), "");
    }

    #[test]
    fn test_device_accessors() {
        let device = set(&[("Dname", "STM32H745XI"), ("Dvariant", "STM32H745XIHx"), ("Pname", "CM7")]);
        assert_eq!(device.full_device_name(), "STM32H745XIHx:CM7");
        assert_eq!(set(&[("Dname", "LPC1768")]).full_device_name(), "LPC1768");

        assert_eq!(set(&[("name", "Pack")]).doc_attribute(), "Pack");
        assert_eq!(set(&[("name", "Pack"), ("doc", "d.html")]).doc_attribute(), "d.html");

        assert!(!device.has_max_instances());
        assert_eq!(device.max_instances(), 1);
        assert_eq!(set(&[("maxInstances", "4")]).max_instances(), 4);
        assert_eq!(set(&[("maxInstances", "0")]).max_instances(), 1);
    }

    #[test]
    fn test_display() {
        let mut attrs = set(&[("Cclass", "Device")]);
        assert_eq!(attrs.to_string(), "Cclass=\"Device\"");
        attrs.set_tag(Some("component".to_string()));
        assert_eq!(attrs.to_string(), "<component Cclass=\"Device\">");
        assert_eq!(AttributeSet::with_tag("api").to_string(), "<api>");
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("Cclass=Device").unwrap(),
            ("Cclass".to_string(), "Device".to_string())
        );
        assert_eq!(
            parse_assignment("Dvendor=NXP:11").unwrap().1,
            "NXP:11"
        );
        assert_eq!(parse_assignment("Csub=").unwrap().1, "");
        assert!(parse_assignment("Cclass").is_err());
        assert!(parse_assignment("=Device").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut attrs = set(&[("Cclass", "Device"), ("Cgroup", "Startup")]);
        attrs.set_tag(Some("component".to_string()));
        let json = serde_json::to_string(&attrs).unwrap();
        let back: AttributeSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attrs);
    }
}
