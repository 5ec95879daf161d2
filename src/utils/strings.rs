//! Delimiter helpers shared by the version, vendor and identifier code.
//!
//! Prefix lookups stop at the *first* delimiter, suffix lookups at the *last*
//! one, so `"Name::Id"` splits into `"Name"` and `"Id"`.

/// Text before the first `delimiter`, or the whole string if there is none.
#[must_use]
pub fn prefix(s: &str, delimiter: char) -> &str {
    s.find(delimiter).map_or(s, |pos| &s[..pos])
}

/// Text after the last `delimiter`, or `""` if there is none.
#[must_use]
pub fn suffix(s: &str, delimiter: char) -> &str {
    s.rfind(delimiter)
        .map_or("", |pos| &s[pos + delimiter.len_utf8()..])
}

/// Text after the first occurrence of `delimiter`, or the whole string if absent.
#[must_use]
pub fn remove_prefix_by_str<'a>(s: &'a str, delimiter: &str) -> &'a str {
    s.find(delimiter).map_or(s, |pos| &s[pos + delimiter.len()..])
}

/// Byte index of the first ASCII digit.
#[must_use]
pub fn first_digit(s: &str) -> Option<usize> {
    s.bytes().position(|b| b.is_ascii_digit())
}

/// Parses a decimal or `0x`-prefixed hexadecimal unsigned integer.
///
/// Leading and trailing whitespace is ignored; anything else that does not
/// parse yields `None`.
#[must_use]
pub fn parse_u64(s: &str) -> Option<u64> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}

/// Signed counterpart of [`parse_u64`]. Hex values are reinterpreted bitwise,
/// so `0xFFFFFFFF` reads as `-1`.
#[must_use]
pub fn parse_i32(s: &str) -> Option<i32> {
    let t = s.trim();
    if t.starts_with("0x") || t.starts_with("0X") {
        return parse_u64(t)
            .and_then(|v| u32::try_from(v).ok())
            .map(|v| v as i32);
    }
    t.parse().ok()
}
