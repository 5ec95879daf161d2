//! Symmetric glob matching for attribute values.
//!
//! Supported syntax: `?` (exactly one character), `*` (any run of
//! characters, including none) and `[...]` character classes. Either side of
//! [`matches`] may be a pattern, so `matches(a, b) == matches(b, a)` holds for
//! every pair, including two patterns such as device name families.

use regex::Regex;
use tracing::debug;

/// Characters that turn a string into a wildcard pattern.
const WILDCARD_CHARS: &[char] = &['?', '*', '[', ']'];

/// Returns true if `s` contains any of `? * [ ]`.
#[must_use]
pub fn is_wildcard_pattern(s: &str) -> bool {
    s.contains(WILDCARD_CHARS)
}

/// Translate a wildcard pattern into an unanchored regex body.
///
/// Each `*` is translated on its own into `.*`. Bracket classes are passed
/// through unchanged; every other character is matched literally.
#[must_use]
pub fn to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() + 8);
    let mut buf = [0u8; 4];
    // length of the open class body, `None` outside a class
    let mut class_body: Option<usize> = None;
    for ch in pattern.chars() {
        if let Some(len) = class_body {
            regex.push(ch);
            // `]` opening the body (after an optional `^`) is a literal member
            let leading = len == 0 || (len == 1 && regex.ends_with("[^]"));
            class_body = if ch == ']' && !leading { None } else { Some(len + 1) };
            continue;
        }
        match ch {
            '?' => regex.push('.'),
            '*' => regex.push_str(".*"),
            '[' => {
                regex.push('[');
                class_body = Some(0);
            }
            c => regex.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    regex
}

/// Replace wildcards with `x` and other unusual characters with `_`.
///
/// Produces identifier-safe names, e.g. for generated header files.
/// Alphanumerics are kept; `-` and `.` are kept only if `keep_minus_and_dot`
/// is set.
#[must_use]
pub fn to_x(s: &str, keep_minus_and_dot: bool) -> String {
    s.chars()
        .map(|ch| match ch {
            c if c.is_ascii_alphanumeric() => c,
            '-' | '.' if keep_minus_and_dot => ch,
            '*' | '?' => 'x',
            _ => '_',
        })
        .collect()
}

/// A wildcard pattern compiled once for repeated use.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    regex: Regex,
}

impl WildcardPattern {
    /// Compile `pattern` into an anchored regex.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})$", to_regex(pattern)))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern text this was compiled from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// One-directional test of `s` against this pattern.
    #[must_use]
    pub fn is_match(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }
}

/// Test `s` against `pattern`, treating `s` as plain text.
///
/// A pattern that fails to compile (e.g. an unclosed class) matches nothing.
#[must_use]
pub fn match_to_pattern(s: &str, pattern: &str) -> bool {
    match WildcardPattern::new(pattern) {
        Ok(compiled) => compiled.is_match(s),
        Err(e) => {
            debug!("Ignoring invalid wildcard pattern '{}': {}", pattern, e);
            false
        }
    }
}

/// Symmetric wildcard match.
///
/// Identical strings always match. An empty string matches nothing else, and
/// two different plain strings never match. If both sides are patterns, each
/// is tried against the other.
#[must_use]
pub fn matches(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    if a.is_empty() || b.is_empty() {
        return false;
    }
    match (is_wildcard_pattern(a), is_wildcard_pattern(b)) {
        (false, false) => false,
        (true, false) => match_to_pattern(b, a),
        (false, true) => match_to_pattern(a, b),
        (true, true) => match_to_pattern(b, a) || match_to_pattern(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(cases: &[(&str, &str, bool)]) {
        for &(a, b, expected) in cases {
            assert_eq!(matches(a, b), expected, "matches({a:?}, {b:?})");
            assert_eq!(matches(b, a), expected, "matches({b:?}, {a:?})");
        }
    }

    #[test]
    fn test_translation() {
        let input = "This?? is a *test1* _string-!#.";
        assert_eq!(to_regex(input), "This.. is a .*test1.* _string\\-!\\#\\.");
        assert_eq!(to_x(input, true), "Thisxx_is_a_xtest1x__string-__.");
        assert_eq!(to_x(input, false), "Thisxx_is_a_xtest1x__string____");
        assert_eq!(to_regex("a+b$(c)"), "a\\+b\\$\\(c\\)");
        assert_eq!(to_regex("M|[0-9^]*"), "M\\|[0-9^].*");
        assert_eq!(to_regex("[]a]?"), "[]a].");
        assert_eq!(to_regex("[^]a]\\"), "[^]a]\\\\");
    }

    #[test]
    fn test_is_wildcard_pattern() {
        assert!(is_wildcard_pattern("STM32F10[123]?[CDE]"));
        assert!(is_wildcard_pattern("*"));
        assert!(!is_wildcard_pattern("STM32F103ZE"));
        assert!(!is_wildcard_pattern(""));
    }

    #[test]
    fn test_plain_and_empty() {
        check(&[
            ("a", "a", true),
            ("a", "", false),
            ("", "d", false),
            ("", "*", false),
            ("abcX-1", "abcX-2", false),
            ("abcX-1", "abcX-3", false),
            ("abcX-1", "abcY-1", false),
            ("abcX-1", "abcY-2", false),
        ]);
        assert!(matches("", ""));
    }

    #[test]
    fn test_star() {
        check(&[
            ("a*", "a*d", true),
            ("a*", "*d", false),
            ("a*", "abcd", true),
            ("a*", "xycd", false),
            ("a*d", "*d", true),
            ("a*d", "abcd", true),
            ("a*d", "abxx", false),
            ("a*d", "abxyz", false),
            ("a*d", "xycd", false),
            ("*d", "abcd", true),
            ("*d", "d", true),
            ("*c*", "abcd", true),
            ("abcd", "a**d", true),
        ]);
    }

    #[test]
    fn test_question_mark() {
        check(&[
            ("abcd", "a??d", true),
            ("abcd", "?bc?", true),
            ("abc?", "abc*", true),
            ("ab?d", "ab??", true),
            ("ab?d", "abc??", false),
            ("?bcd", "abc??", false),
            ("?bcd", "*bcd", true),
            ("?bcd", "abc???", false),
            ("abc?", "ab??", true),
            ("abc?", "abc??", false),
            ("ab??", "abc??", false),
            ("abc*", "ab*?", true),
            ("abc*", "abc?*", true),
            ("ab*?", "abc?*", true),
        ]);
    }

    #[test]
    fn test_regex_syntax_is_literal() {
        check(&[
            ("Cortex-M|*", "Zzz", false),
            ("Cortex-M|*", "Cortex-M|4", true),
            ("a^b*", "a^bc", true),
            ("A\\d*", "A1", false),
            ("A\\d*", "A\\d1", true),
            ("x{2}*", "xx", false),
            ("(a)&~#*", "(a)&~#b", true),
        ]);
    }

    #[test]
    fn test_character_classes() {
        check(&[
            ("abcX-1", "abc[XY]-[12]", true),
            ("abcZ-1", "abc[XY]-[12]", false),
            ("abcY-2", "abc[XY]-[12]", true),
        ]);
    }

    #[test]
    fn test_prefix_suffix() {
        check(&[
            ("Prefix_*_Suffix", "Prefix_Mid_Suffix", true),
            ("Prefix_*_Suffix", "Prefix_Mid_V_Suffix", true),
            ("Prefix_*_Suffix", "Prefix_Mid_Suffix_Suffix", true),
            ("Prefix*_Suffix", "Prefix_Mid_Suffix", true),
            ("Prefix*Suffix", "Prefix_Mid_Suffix", true),
            ("Prefix*Suffix", "Prefix_Mid_Suffix_Suffix", true),
            ("Prefix_*Suffix", "Prefix_Mid_Suffix", true),
            ("Prefix.*.Suffix", "Prefix.Mid.Suffix", true),
        ]);
    }

    #[test]
    fn test_pattern_chain() {
        let chain = [
            "STM32F10[123]?[CDE]",
            "STM32F103ZE",
            "*",
            "*?",
            "?*",
            "?*?",
            "*?*",
            "**",
            "**?",
        ];
        for pair in chain.windows(2) {
            assert!(matches(pair[0], pair[1]), "{} vs {}", pair[0], pair[1]);
            assert!(matches(pair[1], pair[0]), "{} vs {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn test_invalid_class_matches_nothing() {
        assert!(!matches("abc[", "abcd"));
        assert!(!match_to_pattern("abcd", "abc["));
        assert!(WildcardPattern::new("abc[").is_err());
    }

    #[test]
    fn test_compiled_pattern() {
        let pattern = WildcardPattern::new("STM32F4*").unwrap();
        assert_eq!(pattern.as_str(), "STM32F4*");
        assert!(pattern.is_match("STM32F407VG"));
        assert!(!pattern.is_match("STM32F103ZE"));
    }
}
