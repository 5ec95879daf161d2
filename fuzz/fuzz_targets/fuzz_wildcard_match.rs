#![no_main]
use libfuzzer_sys::fuzz_target;
use packmatch::matching::wildcard;

/// Fuzz the wildcard matcher, including malformed bracket classes.
///
/// Matching is symmetric for every pair of inputs.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (a, b) = s.split_once('\0').unwrap_or((s, ""));
    assert_eq!(wildcard::matches(a, b), wildcard::matches(b, a), "{a:?} vs {b:?}");
    let _ = wildcard::to_x(a, true);
});
