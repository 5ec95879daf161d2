#![no_main]
use libfuzzer_sys::fuzz_target;
use packmatch::matching::version;

/// Fuzz version comparison, range checks and version selection.
///
/// The input is split at the first NUL into two version strings. Comparison
/// must be antisymmetric and never panic on arbitrary text.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (a, b) = s.split_once('\0').unwrap_or((s, ""));

    let forward = version::compare(a, b, true);
    let backward = version::compare(b, a, true);
    assert_eq!(forward.signum(), -backward.signum(), "{a:?} vs {b:?}");

    let _ = version::range_compare(a, b, true);
    let _ = version::get_matching_version(b, [a, b], false);
    let _ = version::ceil(a, true);
    let _ = version::floor(a);
});
