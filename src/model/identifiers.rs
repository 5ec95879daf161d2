//! Canonical identifier strings derived from attribute sets.
//!
//! Identifiers are plain strings so they can be used as map keys and shown to
//! users unchanged:
//!
//! | Identifier | Shape |
//! |------------|-------|
//! | component  | `Vendor[.Bundle]::Cclass.Cgroup[.Csub][(condition)][:Cvariant][:version]` |
//! | API        | `::Cclass.Cgroup[:Capiversion](API)` |
//! | package    | `vendor.name[.version]` |
//! | bundle     | `Vendor.Bundle::Cclass[:version]` |
//! | taxonomy   | `Cclass[.Cgroup[.Csub]]` |
//!
//! The condition only appears in the unique component id. APIs always yield
//! their API id, without version.

use super::attributes::AttributeSet;
use super::keys;
use crate::matching::{version, wildcard, VendorRegistry};

/// Separator between the vendor/bundle prefix and the component classification.
pub const ID_SEPARATOR: &str = "::";

/// Default delimiter between `Cclass`, `Cgroup` and `Csub`.
pub const CLASS_DELIMITER: char = '.';

impl AttributeSet {
    /// Canonical vendor name, followed by `.Cbundle` if set. Empty for APIs.
    #[must_use]
    pub fn vendor_and_bundle(&self) -> String {
        self.vendor_and_bundle_in(VendorRegistry::shared())
    }

    /// [`vendor_and_bundle`](Self::vendor_and_bundle) with the vendor
    /// canonicalized through `vendors`.
    #[must_use]
    pub fn vendor_and_bundle_in(&self, vendors: &VendorRegistry) -> String {
        if self.is_api() {
            return String::new();
        }
        let mut s = self.vendor_name_in(vendors);
        let bundle = self.cbundle();
        if !bundle.is_empty() {
            s.push('.');
            s.push_str(bundle);
        }
        s
    }

    /// [`vendor_and_bundle`](Self::vendor_and_bundle) if a bundle is set, else empty.
    #[must_use]
    pub fn bundle_short_id(&self) -> String {
        self.bundle_short_id_in(VendorRegistry::shared())
    }

    #[must_use]
    pub fn bundle_short_id_in(&self, vendors: &VendorRegistry) -> String {
        if self.cbundle().is_empty() {
            String::new()
        } else {
            self.vendor_and_bundle_in(vendors)
        }
    }

    /// `Vendor.Bundle::Cclass[:version]`, or empty without a bundle.
    #[must_use]
    pub fn bundle_id(&self, with_version: bool) -> String {
        self.bundle_id_in(with_version, VendorRegistry::shared())
    }

    #[must_use]
    pub fn bundle_id_in(&self, with_version: bool, vendors: &VendorRegistry) -> String {
        if self.cbundle().is_empty() {
            return String::new();
        }
        let mut id = self.vendor_and_bundle_in(vendors);
        id.push_str(ID_SEPARATOR);
        id.push_str(self.cclass());
        push_part(&mut id, with_version.then(|| self.version_string()));
        id
    }

    /// `Cclass[.Cgroup[.Csub]]`; empty without `Cclass`.
    #[must_use]
    pub fn taxonomy_id(&self) -> String {
        let mut id = self.cclass().to_string();
        if id.is_empty() {
            return id;
        }
        let group = self.cgroup();
        if !group.is_empty() {
            id.push('.');
            id.push_str(group);
            let sub = self.csub();
            if !sub.is_empty() {
                id.push('.');
                id.push_str(sub);
            }
        }
        id
    }

    /// `vendor.name[.version]` with build metadata removed from the version.
    #[must_use]
    pub fn package_id(&self, with_version: bool) -> String {
        let mut id = self.get(keys::VENDOR).to_string();
        if !id.is_empty() {
            id.push('.');
        }
        id.push_str(self.get(keys::NAME));

        let ver = self.version_string();
        if with_version && !ver.is_empty() {
            id.push('.');
            id.push_str(version::remove_version_meta(ver));
        }
        id
    }

    /// `::Cclass.Cgroup[:Capiversion](API)`.
    #[must_use]
    pub fn api_id(&self, with_version: bool) -> String {
        let mut id = format!("{ID_SEPARATOR}{}.{}", self.cclass(), self.cgroup());
        push_part(&mut id, with_version.then(|| self.api_version()));
        id.push_str("(API)");
        id
    }

    /// Full component id including condition and variant.
    #[must_use]
    pub fn component_unique_id(&self, with_version: bool) -> String {
        self.component_unique_id_in(with_version, VendorRegistry::shared())
    }

    #[must_use]
    pub fn component_unique_id_in(&self, with_version: bool, vendors: &VendorRegistry) -> String {
        if self.is_api() {
            return self.api_id(false);
        }
        self.construct_component_id(
            &self.vendor_and_bundle_in(vendors),
            true,
            with_version,
            true,
            CLASS_DELIMITER,
        )
    }

    /// Component id including the variant but not the condition.
    #[must_use]
    pub fn component_id(&self, with_version: bool) -> String {
        self.component_id_in(with_version, VendorRegistry::shared())
    }

    /// [`component_id`](Self::component_id) with the vendor canonicalized
    /// through `vendors`.
    #[must_use]
    pub fn component_id_in(&self, with_version: bool, vendors: &VendorRegistry) -> String {
        if self.is_api() {
            return self.api_id(false);
        }
        self.construct_component_id(
            &self.vendor_and_bundle_in(vendors),
            true,
            with_version,
            false,
            CLASS_DELIMITER,
        )
    }

    /// Component id without variant, version and condition. Shared by all
    /// variants and versions of a component.
    #[must_use]
    pub fn component_aggregate_id(&self) -> String {
        self.component_aggregate_id_in(VendorRegistry::shared())
    }

    #[must_use]
    pub fn component_aggregate_id_in(&self, vendors: &VendorRegistry) -> String {
        self.construct_component_id(
            &self.vendor_and_bundle_in(vendors),
            false,
            false,
            false,
            CLASS_DELIMITER,
        )
    }

    /// `::Cclass` grouping name used in project trees.
    #[must_use]
    pub fn project_group_name(&self) -> String {
        format!("{ID_SEPARATOR}{}", self.cclass())
    }

    /// `Cclass`, `Cgroup` and the optional `Csub`, joined by `delimiter`.
    #[must_use]
    pub fn class_group_sub(&self, delimiter: char) -> String {
        let mut s = format!("{}{delimiter}{}", self.cclass(), self.cgroup());
        let sub = self.csub();
        if !sub.is_empty() {
            s.push(delimiter);
            s.push_str(sub);
        }
        s
    }

    /// Build a component id from its parts; empty optional parts are omitted.
    #[must_use]
    pub fn construct_component_id(
        &self,
        prefix: &str,
        with_variant: bool,
        with_version: bool,
        with_condition: bool,
        delimiter: char,
    ) -> String {
        let mut id = format!("{prefix}{ID_SEPARATOR}{}", self.class_group_sub(delimiter));

        let condition = self.condition_id();
        if with_condition && !condition.is_empty() {
            id.push('(');
            id.push_str(condition);
            id.push(')');
        }
        push_part(&mut id, with_variant.then(|| self.cvariant()));
        push_part(&mut id, with_version.then(|| self.version_string()));
        id
    }

    /// Short component name for display: `[Cclass<d>]Cgroup[<d>Csub][:Cvariant][:version]`.
    #[must_use]
    pub fn component_display_name(
        &self,
        with_class: bool,
        with_variant: bool,
        with_version: bool,
        delimiter: char,
    ) -> String {
        let mut name = String::new();
        if with_class {
            name.push_str(self.cclass());
            name.push(delimiter);
        }
        name.push_str(self.cgroup());
        let sub = self.csub();
        if !sub.is_empty() {
            name.push(delimiter);
            name.push_str(sub);
        }
        push_part(&mut name, with_variant.then(|| self.cvariant()));
        push_part(&mut name, with_version.then(|| self.version_string()));
        name
    }

    /// Name of the generated pre-include header, e.g. `Pre_Include_Device_Startup.h`.
    #[must_use]
    pub fn pre_include_file_name(&self) -> String {
        format!(
            "Pre_Include_{}.h",
            wildcard::to_x(&self.class_group_sub('_'), true)
        )
    }
}

/// Appends `:part` when `part` is present and non-empty.
fn push_part(id: &mut String, part: Option<&str>) {
    if let Some(part) = part.filter(|p| !p.is_empty()) {
        id.push(':');
        id.push_str(part);
    }
}

/// Vendor part of a `vendor.name.version` package id.
#[must_use]
pub fn vendor_from_package_id(package_id: &str) -> &str {
    package_id.split('.').next().unwrap_or(package_id)
}

/// Name part of a `vendor.name.version` package id.
///
/// Ids without a `.` have no name part and yield the whole id.
#[must_use]
pub fn name_from_package_id(package_id: &str) -> &str {
    match package_id.split_once('.') {
        Some((_, rest)) => rest.split('.').next().unwrap_or(rest),
        None => package_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn startup() -> AttributeSet {
        AttributeSet::with_tag("component")
            .attr("Cclass", "Device")
            .attr("Cgroup", "Startup")
            .attr("Cvendor", "ARM")
            .attr("Cversion", "1.0.0")
    }

    #[test]
    fn test_component_id() {
        let c = startup();
        assert_eq!(c.component_id(true), "ARM::Device.Startup:1.0.0");
        assert_eq!(c.component_id(false), "ARM::Device.Startup");
        assert_eq!(c.component_aggregate_id(), "ARM::Device.Startup");
    }

    #[test]
    fn test_component_ids_with_all_parts() {
        let c = startup()
            .attr("Cvendor", "Freescale")
            .attr("Cbundle", "SDK")
            .attr("Csub", "Core")
            .attr("Cvariant", "Debug")
            .attr("condition", "K64F");

        assert_eq!(
            c.component_unique_id(true),
            "NXP.SDK::Device.Startup.Core(K64F):Debug:1.0.0"
        );
        assert_eq!(c.component_id(true), "NXP.SDK::Device.Startup.Core:Debug:1.0.0");
        assert_eq!(c.component_aggregate_id(), "NXP.SDK::Device.Startup.Core");
        assert_eq!(c.bundle_short_id(), "NXP.SDK");
        assert_eq!(c.bundle_id(true), "NXP.SDK::Device:1.0.0");
        assert_eq!(c.bundle_id(false), "NXP.SDK::Device");
        assert_eq!(c.taxonomy_id(), "Device.Startup.Core");
        assert_eq!(
            c.construct_component_id("", false, false, false, '_'),
            "::Device_Startup_Core"
        );
    }

    #[test]
    fn test_ids_use_given_registry() {
        let mut vendors = VendorRegistry::new();
        vendors.add_alias("Acme Semiconductor", "9000");
        vendors.set_name("9000", "Acme");
        let c = startup()
            .attr("Cvendor", "Acme Semiconductor")
            .attr("Cbundle", "Kit");

        assert_eq!(c.vendor_name_in(&vendors), "Acme");
        assert_eq!(c.vendor_and_bundle_in(&vendors), "Acme.Kit");
        assert_eq!(c.bundle_short_id_in(&vendors), "Acme.Kit");
        assert_eq!(c.bundle_id_in(true, &vendors), "Acme.Kit::Device:1.0.0");
        assert_eq!(c.component_id_in(false, &vendors), "Acme.Kit::Device.Startup");
        assert_eq!(
            c.component_unique_id_in(true, &vendors),
            "Acme.Kit::Device.Startup:1.0.0"
        );
        assert_eq!(c.component_aggregate_id_in(&vendors), "Acme.Kit::Device.Startup");

        // unknown to the built-in tables, so the spelling is kept
        let builtin = VendorRegistry::builtin();
        assert_eq!(c.component_id_in(false, &builtin), "Acme Semiconductor.Kit::Device.Startup");
    }

    #[test]
    fn test_bundle_ids_without_bundle() {
        let c = startup();
        assert_eq!(c.bundle_short_id(), "");
        assert_eq!(c.bundle_id(true), "");
        assert_eq!(c.vendor_and_bundle(), "ARM");
    }

    #[test]
    fn test_api_ids() {
        let api = AttributeSet::with_tag("api")
            .attr("Cclass", "CMSIS")
            .attr("Cgroup", "RTOS2")
            .attr("Cvendor", "ARM")
            .attr("Capiversion", "2.1.3");

        assert_eq!(api.api_id(true), "::CMSIS.RTOS2:2.1.3(API)");
        assert_eq!(api.api_id(false), "::CMSIS.RTOS2(API)");
        assert_eq!(api.component_id(true), "::CMSIS.RTOS2(API)");
        assert_eq!(api.component_unique_id(true), "::CMSIS.RTOS2(API)");
        assert_eq!(api.vendor_and_bundle(), "");
    }

    #[test]
    fn test_taxonomy_id() {
        let only_class = AttributeSet::new().attr("Cclass", "Device");
        assert_eq!(only_class.taxonomy_id(), "Device");
        let no_class = AttributeSet::new().attr("Cgroup", "Startup");
        assert_eq!(no_class.taxonomy_id(), "");
        let sub_without_group = only_class.clone().attr("Csub", "Core");
        assert_eq!(sub_without_group.taxonomy_id(), "Device");
    }

    #[test]
    fn test_package_id() {
        let pack = AttributeSet::with_tag("package")
            .attr("vendor", "ARM")
            .attr("name", "CMSIS")
            .attr("version", "5.9.0+build.12");
        assert_eq!(pack.package_id(true), "ARM.CMSIS.5.9.0");
        assert_eq!(pack.package_id(false), "ARM.CMSIS");

        let anonymous = AttributeSet::new().attr("name", "Local");
        assert_eq!(anonymous.package_id(true), "Local");
    }

    #[test]
    fn test_display_name_and_group() {
        let c = startup().attr("Csub", "Core").attr("Cvariant", "Debug");
        assert_eq!(
            c.component_display_name(true, true, true, ':'),
            "Device:Startup:Core:Debug:1.0.0"
        );
        assert_eq!(c.component_display_name(false, false, false, '.'), "Startup.Core");
        assert_eq!(c.project_group_name(), "::Device");
    }

    #[test]
    fn test_pre_include_file_name() {
        let c = AttributeSet::new()
            .attr("Cclass", "CMSIS Driver")
            .attr("Cgroup", "USART")
            .attr("Csub", "1.0-rc");
        assert_eq!(
            c.pre_include_file_name(),
            "Pre_Include_CMSIS_Driver_USART_1.0-rc.h"
        );
    }

    #[test]
    fn test_package_id_parts() {
        assert_eq!(vendor_from_package_id("Vendor.Name.1.0.0"), "Vendor");
        assert_eq!(name_from_package_id("Vendor.Name.1.0.0"), "Name");
        assert_eq!(name_from_package_id("Vendor.Name"), "Name");
        assert_eq!(vendor_from_package_id("VendorNameversion"), "VendorNameversion");
        assert_eq!(name_from_package_id("VendorNameversion"), "VendorNameversion");
    }
}
