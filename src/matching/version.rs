//! Semantic version comparison for pack, component and API versions.
//!
//! Versions follow `MAJOR.MINOR.PATCH[-release][+metadata]`, but the parser is
//! deliberately forgiving: missing segments default to `"0"`, segments may be
//! alphanumeric, and a release identifier glued directly to the last digit
//! (`"1.2.3b"`) is recognised as well.
//!
//! Comparison results are magnitude-scaled rather than plain orderings:
//!
//! | result | meaning                        |
//! |--------|--------------------------------|
//! | `±3`   | major segment differs          |
//! | `±2`   | minor segment differs          |
//! | `±1`   | patch or release differs       |
//! | `0`    | equal (build metadata ignored) |
//!
//! Callers rely on the magnitude, e.g. compatible range checks reject results
//! above `2` as a breaking major upgrade.

use super::alnum;
use crate::utils::strings::{first_digit, prefix, remove_prefix_by_str, suffix};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Separates a name from a version selector, as in `"Vendor::Name@1.2.3"`.
pub const VERSION_PREFIX: &str = "@";

/// Operator for "this version or any later one".
pub const HIGHER_OR_EQUAL_OPERATOR: &str = ">=";

/// Delimiter between the minimum and maximum of a version range.
pub const RANGE_DELIMITER: char = ':';

/// A version split into its comparable parts. Build metadata is already gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedVersion<'a> {
    segments: [&'a str; 3],
    release: Option<&'a str>,
}

impl<'a> ParsedVersion<'a> {
    /// Parse a version string. Never fails; see the module docs for the rules.
    #[must_use]
    pub fn parse(version: &'a str) -> Self {
        Self::parse_without_meta(remove_version_meta(version))
    }

    fn parse_without_meta(version: &'a str) -> Self {
        let (core, release) = match version.find('-') {
            Some(pos) => (&version[..pos], Some(&version[pos + 1..])),
            None => split_implicit_release(version),
        };
        Self {
            segments: split_segments(core),
            release,
        }
    }

    /// The `MAJOR`, `MINOR` and `PATCH` segments.
    #[must_use]
    pub const fn segments(&self) -> [&'a str; 3] {
        self.segments
    }

    /// The release identifier. `Some("")` for a trailing dash.
    #[must_use]
    pub const fn release(&self) -> Option<&'a str> {
        self.release
    }

    /// Scaled comparison against another parsed version.
    ///
    /// Release identifiers are parsed as versions themselves, one
    /// `-`-separated chunk at a time, and compared case-insensitively.
    #[must_use]
    pub fn compare_to(&self, other: &Self, case_sensitive: bool) -> i32 {
        if let Some(result) = compare_segments(&self.segments, &other.segments, case_sensitive) {
            return result;
        }

        let (mut mine, mut theirs) = (self.release, other.release);
        loop {
            match (mine, theirs) {
                (None, None) => return 0,
                // a version without release outranks any pre-release of it
                (None, Some(_)) => return 1,
                (Some(_), None) => return -1,
                (Some(m), Some(t)) => {
                    let m = Self::parse_without_meta(m);
                    let t = Self::parse_without_meta(t);
                    if let Some(result) = compare_segments(&m.segments, &t.segments, false) {
                        return result.signum();
                    }
                    mine = m.release;
                    theirs = t.release;
                }
            }
        }
    }
}

/// Rank-scaled result of the first differing segment, `None` if all are equal.
fn compare_segments(mine: &[&str; 3], theirs: &[&str; 3], case_sensitive: bool) -> Option<i32> {
    (1..=3)
        .rev()
        .zip(mine.iter().zip(theirs.iter()))
        .find_map(|(rank, (a, b))| match alnum::compare(a, b, case_sensitive) {
            Ordering::Less => Some(-rank),
            Ordering::Greater => Some(rank),
            Ordering::Equal => None,
        })
}

/// Split `"1.2.3b"` into `("1.2.3", Some("b"))`.
///
/// Only applies when the string ends in non-digits that directly follow a
/// digit, with no `'.'` in between. `"1.2.3"`, `"Test"` and `"1.2.b"` carry no
/// implicit release.
#[must_use]
pub fn split_implicit_release(version: &str) -> (&str, Option<&str>) {
    let bytes = version.as_bytes();
    let last = match bytes.len().checked_sub(1) {
        Some(last) => last,
        None => return (version, None),
    };
    for pos in (0..=last).rev() {
        match bytes[pos] {
            b'.' => break,
            c if c.is_ascii_digit() => {
                if pos < last {
                    return (&version[..=pos], Some(&version[pos + 1..]));
                }
                break;
            }
            _ => {}
        }
    }
    (version, None)
}

fn split_segments(core: &str) -> [&str; 3] {
    let mut segments = ["0"; 3];
    let mut rest = Some(core);
    for segment in &mut segments {
        match rest {
            Some(r) if !r.is_empty() => match r.find('.') {
                Some(pos) => {
                    *segment = &r[..pos];
                    rest = Some(&r[pos + 1..]);
                }
                None => {
                    *segment = r;
                    rest = None;
                }
            },
            _ => break,
        }
    }
    segments
}

/// Compare two version strings, returning a magnitude-scaled result.
///
/// Identical strings are equal without parsing. Release identifiers are always
/// compared case-insensitively; `case_sensitive` affects the main segments.
#[must_use]
pub fn compare(v1: &str, v2: &str, case_sensitive: bool) -> i32 {
    if v1 == v2 {
        return 0;
    }
    ParsedVersion::parse(v1).compare_to(&ParsedVersion::parse(v2), case_sensitive)
}

/// Check `version` against a `"min[:max]"` range.
///
/// Returns `0` when the version lies inside the range, a negative scaled value
/// when it is below `min` and a positive one when it is above `max`. A range of
/// `"x:x"` requires an exact match. A trailing `-` on `max` (`"1.0.0:2.0.0-"`)
/// excludes `max` and all of its pre-releases. With `compatible` set, a range
/// without maximum still rejects a higher major version.
#[must_use]
pub fn range_compare(version: &str, range: &str, compatible: bool) -> i32 {
    if version == range {
        return 0;
    }
    let min = prefix(range, RANGE_DELIMITER);
    let max = suffix(range, RANGE_DELIMITER);

    let mut res_min = 0;
    if !min.is_empty() {
        res_min = compare(version, min, true);
        if res_min < 0 || min == max {
            return res_min;
        }
    }
    if !max.is_empty() {
        let res_max = compare(version, max, true);
        if res_max > 0 {
            return res_max;
        }
    } else if compatible && res_min > 2 {
        return res_min;
    }
    0
}

/// [`range_compare`] with semantic-version compatibility enforced.
#[must_use]
pub fn compatible_range_compare(version: &str, range: &str) -> i32 {
    range_compare(version, range, true)
}

/// Drop build metadata: `"1.0.0+build"` becomes `"1.0.0"`.
#[must_use]
pub fn remove_version_meta(version: &str) -> &str {
    version.find('+').map_or(version, |pos| &version[..pos])
}

/// The next major version, e.g. `"2.3.0"` becomes `"3.0.0"`.
///
/// With `minus` set a trailing `-` is appended, which makes the result usable
/// as an exclusive range maximum. Unparseable majors count as `0`.
#[must_use]
pub fn ceil(version: &str, minus: bool) -> String {
    let major = prefix(version, '.').trim().parse::<u64>().unwrap_or(0);
    let mut ceiling = format!("{}.0.0", major.saturating_add(1));
    if minus {
        ceiling.push('-');
    }
    ceiling
}

/// The major version with zeroed minor and patch, e.g. `"2.3.0"` becomes `"2.0.0"`.
#[must_use]
pub fn floor(version: &str) -> String {
    format!("{}.0.0", prefix(version, '.'))
}

/// How a version filter selects among available versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Version is enforced by the consumer
    Enforced,
    /// Exactly the given version
    Fixed,
    /// The latest available version
    #[default]
    Latest,
    /// Any version will do
    Any,
    /// The version must not be used
    Excluded,
    /// The given version or any later one
    HigherOrEqual,
}

impl MatchMode {
    /// Parse a mode name; unknown names select [`MatchMode::Latest`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "fixed" => Self::Fixed,
            "enforced" => Self::Enforced,
            "excluded" => Self::Excluded,
            _ => Self::Latest,
        }
    }

    /// Classify a `"Name@<selector>"` filter.
    ///
    /// `@1.2.3` is [`Fixed`](Self::Fixed), `@>=1.2.3` is
    /// [`HigherOrEqual`](Self::HigherOrEqual). Everything else, including a
    /// filter without `@` or without any digit, means
    /// [`Latest`](Self::Latest).
    #[must_use]
    pub fn from_version_string(filter: &str) -> Self {
        let selector = suffix(filter, '@');
        if selector.is_empty() {
            return Self::Latest;
        }
        let Some(pos) = first_digit(selector) else {
            return Self::Latest;
        };
        match &selector[..pos] {
            "" => Self::Fixed,
            HIGHER_OR_EQUAL_OPERATOR => Self::HigherOrEqual,
            _ => Self::Latest,
        }
    }

    /// Name as used in configuration files. [`Any`](Self::Any) has no name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Latest | Self::HigherOrEqual => "latest",
            Self::Enforced => "enforced",
            Self::Excluded => "excluded",
            Self::Any => "",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Select the best version from `available` for `filter`.
///
/// A filter without `@` is a range (see [`range_compare`]) and the highest
/// version inside it wins; on ties the first candidate is kept. A filter with
/// `@` is classified by [`MatchMode::from_version_string`]: fixed filters
/// return the first candidate equal to the requested version, latest and
/// higher-or-equal filters return the highest candidate at or above it.
///
/// Returns `None` when nothing satisfies the filter.
pub fn get_matching_version<I, S>(filter: &str, available: I, compatible: bool) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if !filter.contains('@') {
        let mut best: Option<S> = None;
        for candidate in available {
            if range_compare(candidate.as_ref(), filter, compatible) != 0 {
                continue;
            }
            let better = best
                .as_ref()
                .map_or(true, |b| compare(candidate.as_ref(), b.as_ref(), true) > 0);
            if better {
                best = Some(candidate);
            }
        }
        return best.map(|b| b.as_ref().to_string());
    }

    let mode = MatchMode::from_version_string(filter);
    let mut baseline = remove_prefix_by_str(filter, VERSION_PREFIX).to_string();
    if mode == MatchMode::HigherOrEqual {
        baseline = remove_prefix_by_str(&baseline, HIGHER_OR_EQUAL_OPERATOR).to_string();
    }

    let mut matched = None;
    for candidate in available {
        let candidate = candidate.as_ref();
        let result = compare(candidate, &baseline, false);
        match mode {
            MatchMode::Fixed if result == 0 => return Some(candidate.to_string()),
            MatchMode::Latest | MatchMode::HigherOrEqual if result >= 0 => {
                baseline = candidate.to_string();
                matched = Some(candidate.to_string());
            }
            _ => {}
        }
    }
    matched
}

/// Orders versions, optionally prefixed with a name.
///
/// With a delimiter, `"Name@1.2.0"` style strings are ordered by name first
/// (see [`alnum::compare_len`]) and by version second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VersionComparator {
    delimiter: Option<char>,
    case_sensitive: bool,
}

impl VersionComparator {
    /// Comparator for plain version strings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: None,
            case_sensitive: true,
        }
    }

    /// Comparator for `name<delimiter>version` strings.
    #[must_use]
    pub const fn with_delimiter(delimiter: char) -> Self {
        Self {
            delimiter: Some(delimiter),
            case_sensitive: true,
        }
    }

    #[must_use]
    pub const fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Scaled comparison. Name differences yield `±1`.
    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> i32 {
        let Some(delimiter) = self.delimiter else {
            return compare(a, b, self.case_sensitive);
        };
        match alnum::compare_len(
            prefix(a, delimiter),
            prefix(b, delimiter),
            self.case_sensitive,
        ) {
            Ordering::Less => -1,
            Ordering::Greater => 1,
            Ordering::Equal => compare(
                suffix(a, delimiter),
                suffix(b, delimiter),
                self.case_sensitive,
            ),
        }
    }

    #[must_use]
    pub fn ordering(&self, a: &str, b: &str) -> Ordering {
        self.compare(a, b).cmp(&0)
    }
}

/// A version string ordered by version semantics, for sorted containers.
///
/// Versions that compare equal but are spelled differently (`"2.01"` and
/// `"2.1"`, or differing build metadata) are ordered by their text so that
/// the order stays consistent with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionKey(pub String);

impl VersionKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VersionKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for VersionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.0, &other.0, true)
            .cmp(&0)
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for VersionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
