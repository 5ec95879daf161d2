#![no_main]
use libfuzzer_sys::fuzz_target;
use packmatch::VendorRegistry;

/// Fuzz vendor resolution against the built-in tables.
///
/// Canonical names are stable when resolved again.
fuzz_target!(|data: &[u8]| {
    let Ok(vendor) = std::str::from_utf8(data) else {
        return;
    };
    let vendors = VendorRegistry::shared();
    let canonical = vendors.canonical_name(vendor);
    assert_eq!(vendors.canonical_name(&canonical), canonical, "{vendor:?}");
    let _ = vendors.full_vendor_string(vendor);
    let _ = vendors.matches(vendor, &canonical);
});
