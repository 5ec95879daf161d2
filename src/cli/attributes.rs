//! Attribute command handlers.
//!
//! Implements `attrs id` and `attrs match`. Attribute sets are given on the
//! command line as `name=value` pairs.

use super::output::{write_report, yes_no, TextReport};
use crate::config::OutputFormat;
use crate::matching::VendorRegistry;
use crate::model::{keys, parse_assignment, AttributeSet};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;

/// Build an attribute set from `name=value` arguments.
pub fn parse_attribute_set(pairs: &[String], tag: Option<&str>) -> Result<AttributeSet> {
    let mut set = tag.map_or_else(AttributeSet::new, AttributeSet::with_tag);
    for pair in pairs {
        let (name, value) =
            parse_assignment(pair).with_context(|| format!("in argument '{pair}'"))?;
        set.set(&name, &value);
    }
    Ok(set)
}

// ============================================================================
// attrs id
// ============================================================================

/// All identifiers derivable from one attribute set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierReport {
    pub attributes: AttributeSet,
    pub component_id: String,
    pub component_unique_id: String,
    pub component_aggregate_id: String,
    pub api_id: String,
    pub taxonomy_id: String,
    pub bundle_id: String,
    pub package_id: String,
    pub display_name: String,
    pub pre_include_file: String,
    pub vendor: String,
    pub version: String,
}

impl IdentifierReport {
    #[must_use]
    pub fn new(attributes: AttributeSet, vendors: &VendorRegistry) -> Self {
        Self {
            component_id: attributes.component_id_in(true, vendors),
            component_unique_id: attributes.component_unique_id_in(true, vendors),
            component_aggregate_id: attributes.component_aggregate_id_in(vendors),
            api_id: attributes.api_id(true),
            taxonomy_id: attributes.taxonomy_id(),
            bundle_id: attributes.bundle_id_in(true, vendors),
            package_id: if attributes.get(keys::NAME).is_empty() {
                String::new()
            } else {
                attributes.package_id(true)
            },
            display_name: attributes.component_display_name(true, true, true, ':'),
            pre_include_file: attributes.pre_include_file_name(),
            vendor: attributes.vendor_name_in(vendors),
            version: attributes.version_string().to_string(),
            attributes,
        }
    }
}

impl TextReport for IdentifierReport {
    fn to_text(&self) -> String {
        let rows = [
            ("component", &self.component_id),
            ("unique", &self.component_unique_id),
            ("aggregate", &self.component_aggregate_id),
            ("api", &self.api_id),
            ("taxonomy", &self.taxonomy_id),
            ("bundle", &self.bundle_id),
            ("package", &self.package_id),
            ("display", &self.display_name),
            ("pre-include", &self.pre_include_file),
            ("vendor", &self.vendor),
            ("version", &self.version),
        ];
        let mut out = String::new();
        for (label, value) in rows.iter().filter(|(_, v)| !v.is_empty()) {
            let _ = writeln!(out, "{label:<12} {value}");
        }
        out.trim_end().to_string()
    }
}

pub fn run_attrs_id(
    vendors: &VendorRegistry,
    pairs: &[String],
    tag: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let attributes = parse_attribute_set(pairs, tag)?;
    write_report(&IdentifierReport::new(attributes, vendors), format)
}

// ============================================================================
// attrs match
// ============================================================================

/// Outcome of every matching predicate for an entry and a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeMatchReport {
    pub entry: AttributeSet,
    pub request: AttributeSet,
    pub compare_attributes: bool,
    pub equal_attributes: bool,
    pub component_attributes: bool,
    pub api_attributes: bool,
    pub device_attributes: bool,
    pub device: bool,
}

impl AttributeMatchReport {
    #[must_use]
    pub fn new(entry: AttributeSet, request: AttributeSet, vendors: &VendorRegistry) -> Self {
        Self {
            compare_attributes: entry.compare_attributes_in(&request, vendors),
            equal_attributes: entry.equal_attributes(&request),
            component_attributes: entry.has_component_attributes(&request),
            api_attributes: entry.match_api_attributes(&request),
            device_attributes: request.match_device_attributes_in(&entry, vendors),
            device: request.match_device_in(&entry, vendors),
            entry,
            request,
        }
    }

    /// True if the entry satisfies the request in any of the checked ways.
    #[must_use]
    pub fn any(&self) -> bool {
        self.compare_attributes
            || self.equal_attributes
            || self.component_attributes
            || self.api_attributes
            || self.device_attributes
            || self.device
    }
}

impl TextReport for AttributeMatchReport {
    fn to_text(&self) -> String {
        let rows = [
            ("compare", self.compare_attributes),
            ("equal", self.equal_attributes),
            ("component", self.component_attributes),
            ("api", self.api_attributes),
            ("device-attrs", self.device_attributes),
            ("device", self.device),
        ];
        let mut out = format!("entry:   {}\nrequest: {}\n", self.entry, self.request);
        for (label, value) in rows {
            let _ = writeln!(out, "{label:<12} {}", yes_no(value));
        }
        out.trim_end().to_string()
    }
}

/// Returns whether any predicate matched.
pub fn run_attrs_match(
    vendors: &VendorRegistry,
    entry: &[String],
    request: &[String],
    tag: Option<&str>,
    format: OutputFormat,
) -> Result<bool> {
    let entry = parse_attribute_set(entry, tag)?;
    let request = parse_attribute_set(request, None)?;
    let report = AttributeMatchReport::new(entry, request, vendors);
    write_report(&report, format)?;
    Ok(report.any())
}
