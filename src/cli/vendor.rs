//! Vendor command handlers.
//!
//! Implements `vendor canonical`, `vendor full` and `vendor match`.

use super::output::{write_report, yes_no, TextReport};
use crate::config::OutputFormat;
use crate::matching::VendorRegistry;
use anyhow::Result;
use serde::Serialize;

/// Canonical forms of one vendor string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorReport {
    pub input: String,
    pub canonical_name: String,
    pub full: String,
    pub is_canonical: bool,
    pub aliases: Vec<String>,
}

impl VendorReport {
    #[must_use]
    pub fn new(vendors: &VendorRegistry, input: &str) -> Self {
        let canonical_name = vendors.canonical_name(input);
        Self {
            input: input.to_string(),
            full: vendors.full_vendor_string(input),
            is_canonical: vendors.is_canonical_name(input),
            aliases: vendors
                .aliases_of(&canonical_name)
                .into_iter()
                .map(str::to_string)
                .collect(),
            canonical_name,
        }
    }
}

/// Text output of `vendor canonical`.
struct CanonicalView<'a>(&'a VendorReport);

impl Serialize for CanonicalView<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl TextReport for CanonicalView<'_> {
    fn to_text(&self) -> String {
        self.0.canonical_name.clone()
    }
}

/// Text output of `vendor full`.
struct FullView<'a>(&'a VendorReport);

impl Serialize for FullView<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl TextReport for FullView<'_> {
    fn to_text(&self) -> String {
        self.0.full.clone()
    }
}

pub fn run_vendor_canonical(vendors: &VendorRegistry, input: &str, format: OutputFormat) -> Result<()> {
    write_report(&CanonicalView(&VendorReport::new(vendors, input)), format)
}

pub fn run_vendor_full(vendors: &VendorRegistry, input: &str, format: OutputFormat) -> Result<()> {
    write_report(&FullView(&VendorReport::new(vendors, input)), format)
}

/// Result of matching two vendor strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorMatchReport {
    pub first: String,
    pub second: String,
    pub first_full: String,
    pub second_full: String,
    pub matches: bool,
}

impl VendorMatchReport {
    #[must_use]
    pub fn new(vendors: &VendorRegistry, first: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
            first_full: vendors.full_vendor_string(first),
            second_full: vendors.full_vendor_string(second),
            matches: vendors.matches(first, second),
        }
    }
}

impl TextReport for VendorMatchReport {
    fn to_text(&self) -> String {
        format!(
            "{} ({}) ~ {} ({}): {}",
            self.first,
            self.first_full,
            self.second,
            self.second_full,
            yes_no(self.matches)
        )
    }
}

/// Returns whether the vendors match.
pub fn run_vendor_match(
    vendors: &VendorRegistry,
    first: &str,
    second: &str,
    format: OutputFormat,
) -> Result<bool> {
    let report = VendorMatchReport::new(vendors, first, second);
    write_report(&report, format)?;
    Ok(report.matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_report() {
        let vendors = VendorRegistry::builtin();
        let report = VendorReport::new(&vendors, "Freescale:78");
        assert_eq!(report.canonical_name, "NXP");
        assert_eq!(report.full, "NXP:11");
        assert!(!report.is_canonical);
        assert!(report.aliases.contains(&"Freescale".to_string()));
        assert_eq!(CanonicalView(&report).to_text(), "NXP");
        assert_eq!(FullView(&report).to_text(), "NXP:11");
    }

    #[test]
    fn test_unknown_vendor_report() {
        let vendors = VendorRegistry::builtin();
        let report = VendorReport::new(&vendors, "MyVendor:9999");
        assert_eq!(report.canonical_name, "MyVendor");
        assert_eq!(report.full, "MyVendor:9999");
        assert!(report.aliases.is_empty());
    }

    #[test]
    fn test_vendor_match_report() {
        let vendors = VendorRegistry::builtin();
        let report = VendorMatchReport::new(&vendors, "NXP", "Freescale");
        assert!(report.matches);
        assert_eq!(report.to_text(), "NXP (NXP:11) ~ Freescale (NXP:11): yes");

        let report = VendorMatchReport::new(&vendors, "MyVendor:9999", "ThatVendor:9998");
        assert!(!report.matches);
    }
}
