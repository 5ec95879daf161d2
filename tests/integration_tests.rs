//! Integration tests for packmatch
//!
//! These tests verify end-to-end behavior of the matching engine on a small
//! catalog of components, APIs, devices and packs, plus the configuration
//! driven vendor registry and report rendering.

use packmatch::{
    cli,
    config::{load_config_file, OutputFormat},
    matching::{version, wildcard, VersionComparator, VersionKey},
    AttributeCatalog, AttributeSet, VendorRegistry,
};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn load_catalog() -> AttributeCatalog {
    let content =
        std::fs::read_to_string(fixture_path("catalog.json")).expect("Failed to read catalog");
    serde_json::from_str(&content).expect("Failed to parse catalog")
}

fn request(pairs: &[(&str, &str)]) -> AttributeSet {
    pairs.iter().copied().collect()
}

// ============================================================================
// Catalog Tests
// ============================================================================

mod catalog_tests {
    use super::*;

    #[test]
    fn test_fixture_loads() {
        let catalog = load_catalog();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.iter().filter(|e| e.is_api()).count(), 1);
    }

    #[test]
    fn test_find_components_by_class() {
        let catalog = load_catalog();
        let found = catalog.find_components(&request(&[("Cclass", "Device")]));
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn test_find_components_by_api_version() {
        let catalog = load_catalog();
        let found = catalog.find_components(&request(&[
            ("Cclass", "CMSIS"),
            ("Cgroup", "RTOS2"),
            ("Capiversion", "2.0.0"),
        ]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].csub(), "Keil RTX5");
    }

    #[test]
    fn test_resolve_component_versions() {
        let catalog = load_catalog();
        let startup = request(&[("Cclass", "Device"), ("Cgroup", "Startup")]);

        let pick = |filter: &str, compatible: bool| {
            catalog
                .resolve_component(&startup, filter, compatible)
                .map(|c| c.version_string().to_string())
        };

        assert_eq!(pick("", false).as_deref(), Some("2.0.0"));
        assert_eq!(pick("@1.2.0", false).as_deref(), Some("1.2.0"));
        assert_eq!(pick("@>=1.1.0", false).as_deref(), Some("2.0.0"));
        assert_eq!(pick("1.0.0", true).as_deref(), Some("1.2.0"));
        assert_eq!(pick("1.0.0:2.0.0-", false).as_deref(), Some("1.2.0"));
        assert_eq!(pick("3.0.0", false), None);
    }

    #[test]
    fn test_find_apis() {
        let catalog = load_catalog();
        let wanted = request(&[("Cclass", "CMSIS"), ("Cgroup", "RTOS2"), ("Capiversion", "2.1.0")]);
        let apis = catalog.find_apis(&wanted);
        assert_eq!(apis.len(), 1);
        assert_eq!(apis[0].api_id(true), "::CMSIS.RTOS2:2.1.3(API)");
    }

    #[test]
    fn test_find_devices_by_vendor_alias() {
        let catalog = load_catalog();
        let devices = catalog.find_devices(&request(&[("Dvendor", "Freescale")]));
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].device_name(), "LPC55S69JBD100");
        assert_eq!(devices[0].full_device_name(), "LPC55S69JBD100:cm33_core0");
    }

    #[test]
    fn test_find_matching_with_wildcard() {
        let catalog = load_catalog();
        let found = catalog.find_matching(&request(&[("Dfamily", "STM32F*")]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].device_name(), "STM32F103ZE");
    }

    #[test]
    fn test_index_by_component_id() {
        let catalog = load_catalog();
        let index = catalog.index_by_component_id(false);
        assert_eq!(index["ARM::Device.Startup"].len(), 3);
        assert!(index.contains_key("::CMSIS.RTOS2(API)"));
        assert!(index.contains_key("NXP.MCUXpresso SDK::Device.SDK Drivers.gpio"));
    }
}

// ============================================================================
// Identifier Tests
// ============================================================================

mod identifier_tests {
    use super::*;

    #[test]
    fn test_component_identifiers() {
        let catalog = load_catalog();
        let startup = &catalog.entries()[0];
        assert_eq!(startup.component_id(true), "ARM::Device.Startup:1.0.0");
        assert_eq!(
            startup.component_unique_id(true),
            "ARM::Device.Startup(ARMCM4):1.0.0"
        );

        let rtx = &catalog.entries()[3];
        assert_eq!(
            rtx.component_id(true),
            "ARM::CMSIS.RTOS2.Keil RTX5:Library:5.5.4"
        );
        assert_eq!(rtx.component_aggregate_id(), "ARM::CMSIS.RTOS2.Keil RTX5");
        assert_eq!(rtx.taxonomy_id(), "CMSIS.RTOS2.Keil RTX5");
        assert_eq!(rtx.pre_include_file_name(), "Pre_Include_CMSIS_RTOS2_Keil_RTX5.h");
    }

    #[test]
    fn test_bundle_identifiers_use_canonical_vendor() {
        let catalog = load_catalog();
        let gpio = &catalog.entries()[4];
        assert_eq!(gpio.vendor_name(), "NXP");
        assert_eq!(gpio.bundle_short_id(), "NXP.MCUXpresso SDK");
        assert_eq!(gpio.bundle_id(false), "NXP.MCUXpresso SDK::Device");
        assert_eq!(
            gpio.component_id(true),
            "NXP.MCUXpresso SDK::Device.SDK Drivers.gpio:2.1.1"
        );
    }

    #[test]
    fn test_package_identifiers() {
        let catalog = load_catalog();
        let pack = &catalog.entries()[8];
        let id = pack.package_id(true);
        assert_eq!(id, "ARM.CMSIS.5.9.0");
        assert_eq!(packmatch::model::vendor_from_package_id(&id), "ARM");
        assert_eq!(packmatch::model::name_from_package_id(&id), "CMSIS");
    }
}

// ============================================================================
// Configured Vendor Tests
// ============================================================================

mod vendor_config_tests {
    use super::*;

    fn configured_registry() -> VendorRegistry {
        let config = load_config_file(&fixture_path("packmatch.yaml")).expect("Failed to load config");
        VendorRegistry::from_config(&config.vendors).expect("Invalid vendor config")
    }

    #[test]
    fn test_config_fixture() {
        let config = load_config_file(&fixture_path("packmatch.yaml")).unwrap();
        assert!(config.matching.compatible);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_configured_aliases() {
        let vendors = configured_registry();
        assert_eq!(vendors.canonical_name("Acme Semiconductor"), "Acme");
        assert_eq!(vendors.full_vendor_string("Acme Semiconductor"), "Acme:9000");
        assert!(vendors.matches("Acme Semiconductor", "Acme:9000"));
        assert!(vendors.matches("Acme:8999", "Acme Semiconductor:9000"));
        // built-ins stay available
        assert!(vendors.matches("Freescale", "NXP:11"));
    }

    #[test]
    fn test_attribute_matching_with_configured_registry() {
        let vendors = configured_registry();
        let device = request(&[("Dname", "ACME100"), ("Dvendor", "Acme:9000")]);
        let wanted = request(&[("Dvendor", "Acme Semiconductor")]);

        assert!(device.compare_attributes_in(&wanted, &vendors));
        assert!(wanted.match_device_attributes_in(&device, &vendors));
        assert!(!device.compare_attributes_in(&wanted, &VendorRegistry::builtin()));
    }

    #[test]
    fn test_identifiers_with_configured_registry() {
        let vendors = configured_registry();
        let component = request(&[
            ("Cclass", "Device"),
            ("Cgroup", "Startup"),
            ("Cvendor", "Acme Semiconductor"),
            ("Cversion", "1.0.0"),
        ]);
        assert_eq!(component.vendor_name_in(&vendors), "Acme");
        assert_eq!(component.component_id_in(true, &vendors), "Acme::Device.Startup:1.0.0");

        let catalog: AttributeCatalog = vec![component].into();
        let index = catalog.index_by_component_id_in(false, &vendors);
        assert!(index.contains_key("Acme::Device.Startup"));
    }
}

// ============================================================================
// Version Ordering Tests
// ============================================================================

mod version_ordering_tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_version_key_sorting() {
        let sorted: BTreeSet<VersionKey> = ["1.10.0", "1.2.0", "1.2.0-rc1", "0.9", "1.2.0+meta"]
            .into_iter()
            .map(VersionKey::from)
            .collect();
        let order: Vec<&str> = sorted.iter().map(VersionKey::as_str).collect();
        assert_eq!(order, vec!["0.9", "1.2.0-rc1", "1.2.0", "1.2.0+meta", "1.10.0"]);
    }

    #[test]
    fn test_named_version_sorting() {
        let comparator = VersionComparator::with_delimiter('@');
        let mut packs = vec!["CMSIS@5.9.0", "CMSIS@5.10.0", "ARM@1.0.0", "CMSIS-DSP@1.0.0"];
        packs.sort_by(|a, b| comparator.ordering(a, b));
        assert_eq!(
            packs,
            vec!["ARM@1.0.0", "CMSIS@5.9.0", "CMSIS@5.10.0", "CMSIS-DSP@1.0.0"]
        );
    }

    #[test]
    fn test_wildcard_device_filters() {
        let devices = ["STM32F103ZE", "STM32F103C8", "STM32F407VG", "LPC1768"];
        let matched: Vec<&str> = devices
            .iter()
            .copied()
            .filter(|d| wildcard::matches("STM32F10[123]?[CDE]", d))
            .collect();
        assert_eq!(matched, vec!["STM32F103ZE"]);
        assert_eq!(version::ceil("5.9.0", true), "6.0.0-");
    }
}

// ============================================================================
// Report Tests
// ============================================================================

mod report_tests {
    use super::*;

    #[test]
    fn test_compare_report_json() {
        let report = cli::CompareReport::new("6.4.0", "6.5.0", true);
        insta::assert_json_snapshot!(report, @r#"
        {
          "first": "6.4.0",
          "second": "6.5.0",
          "case_sensitive": true,
          "result": -2
        }
        "#);
    }

    #[test]
    fn test_range_report_text() {
        let report = cli::RangeReport::new("2.0.0", "1.0.0:2.0.0-", false);
        assert!(!report.in_range);
        let text = cli::render(&report, OutputFormat::Text).unwrap();
        assert_eq!(text, "2.0.0 is above range '1.0.0:2.0.0-' (1)");
    }

    #[test]
    fn test_identifier_report_json_fields() {
        let attrs = cli::parse_attribute_set(
            &["Cclass=Device".to_string(), "Cgroup=Startup".to_string(), "Cvendor=ARM".to_string()],
            Some("component"),
        )
        .unwrap();
        let report = cli::IdentifierReport::new(attrs, &VendorRegistry::builtin());
        let json = cli::render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["component_id"], "ARM::Device.Startup");
        assert_eq!(value["attributes"]["tag"], "component");
        assert_eq!(value["attributes"]["attributes"]["Cclass"], "Device");
    }
}
