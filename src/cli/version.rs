//! Version and wildcard command handlers.
//!
//! Implements the `compare`, `range`, `select` and `wildcard` subcommands.

use super::output::{write_report, yes_no, TextReport};
use crate::config::OutputFormat;
use crate::matching::{version, wildcard, MatchMode};
use crate::utils::validate_semver;
use anyhow::Result;
use serde::Serialize;

// ============================================================================
// compare
// ============================================================================

/// Result of comparing two versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompareReport {
    pub first: String,
    pub second: String,
    pub case_sensitive: bool,
    /// Scaled difference: ±3 major, ±2 minor, ±1 patch or release
    pub result: i32,
}

impl CompareReport {
    #[must_use]
    pub fn new(first: &str, second: &str, case_sensitive: bool) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
            case_sensitive,
            result: version::compare(first, second, case_sensitive),
        }
    }

    fn relation(&self) -> &'static str {
        match self.result {
            r if r < 0 => "<",
            0 => "==",
            _ => ">",
        }
    }
}

impl TextReport for CompareReport {
    fn to_text(&self) -> String {
        format!(
            "{} {} {} ({})",
            self.first,
            self.relation(),
            self.second,
            self.result
        )
    }
}

/// With `strict` set, both versions must be well-formed semantic versions.
pub fn run_compare(
    first: &str,
    second: &str,
    case_sensitive: bool,
    strict: bool,
    format: OutputFormat,
) -> Result<()> {
    if strict {
        validate_semver(first)?;
        validate_semver(second)?;
    }
    write_report(&CompareReport::new(first, second, case_sensitive), format)
}

// ============================================================================
// range
// ============================================================================

/// Result of checking a version against a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeReport {
    pub version: String,
    pub range: String,
    pub compatible: bool,
    /// `0` inside the range, negative below, positive above
    pub result: i32,
    pub in_range: bool,
}

impl RangeReport {
    #[must_use]
    pub fn new(version: &str, range: &str, compatible: bool) -> Self {
        let result = version::range_compare(version, range, compatible);
        Self {
            version: version.to_string(),
            range: range.to_string(),
            compatible,
            result,
            in_range: result == 0,
        }
    }
}

impl TextReport for RangeReport {
    fn to_text(&self) -> String {
        let position = match self.result {
            r if r < 0 => "below",
            0 => "inside",
            _ => "above",
        };
        format!(
            "{} is {} range '{}' ({})",
            self.version, position, self.range, self.result
        )
    }
}

/// Returns whether the version lies inside the range.
pub fn run_range(version: &str, range: &str, compatible: bool, format: OutputFormat) -> Result<bool> {
    let report = RangeReport::new(version, range, compatible);
    write_report(&report, format)?;
    Ok(report.in_range)
}

// ============================================================================
// select
// ============================================================================

/// Result of selecting the best version for a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectReport {
    pub filter: String,
    pub mode: MatchMode,
    pub compatible: bool,
    pub candidates: Vec<String>,
    pub selected: Option<String>,
}

impl SelectReport {
    #[must_use]
    pub fn new(filter: &str, candidates: &[String], compatible: bool) -> Self {
        Self {
            filter: filter.to_string(),
            mode: MatchMode::from_version_string(filter),
            compatible,
            candidates: candidates.to_vec(),
            selected: version::get_matching_version(filter, candidates, compatible),
        }
    }
}

impl TextReport for SelectReport {
    fn to_text(&self) -> String {
        match &self.selected {
            Some(selected) => selected.clone(),
            None => format!(
                "no version satisfies '{}' among {} candidates",
                self.filter,
                self.candidates.len()
            ),
        }
    }
}

/// Returns whether a version was selected.
pub fn run_select(
    filter: &str,
    candidates: &[String],
    compatible: bool,
    format: OutputFormat,
) -> Result<bool> {
    let report = SelectReport::new(filter, candidates, compatible);
    tracing::debug!("Filter '{}' classified as {:?}", filter, report.mode);
    write_report(&report, format)?;
    Ok(report.selected.is_some())
}

// ============================================================================
// wildcard
// ============================================================================

/// Result of a symmetric wildcard match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WildcardReport {
    pub first: String,
    pub second: String,
    pub matches: bool,
}

impl WildcardReport {
    #[must_use]
    pub fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
            matches: wildcard::matches(first, second),
        }
    }
}

impl TextReport for WildcardReport {
    fn to_text(&self) -> String {
        format!("{} ~ {}: {}", self.first, self.second, yes_no(self.matches))
    }
}

/// Returns whether the two strings match.
pub fn run_wildcard(first: &str, second: &str, format: OutputFormat) -> Result<bool> {
    let report = WildcardReport::new(first, second);
    write_report(&report, format)?;
    Ok(report.matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::render;

    #[test]
    fn test_compare_report() {
        let report = CompareReport::new("6.4.0", "6.5.0", true);
        assert_eq!(report.result, -2);
        assert_eq!(report.to_text(), "6.4.0 < 6.5.0 (-2)");
    }

    #[test]
    fn test_strict_compare_rejects_loose_versions() {
        assert!(run_compare("6.4.0", "6.5.0b", true, true, OutputFormat::Text).is_err());
    }

    #[test]
    fn test_range_report() {
        let inside = RangeReport::new("3.2.0", "3.1.0:3.8.0", false);
        assert!(inside.in_range);
        assert_eq!(inside.to_text(), "3.2.0 is inside range '3.1.0:3.8.0' (0)");

        let above = RangeReport::new("4.0.0", "3.1.0", true);
        assert!(!above.in_range);
        assert_eq!(above.result, 3);
    }

    #[test]
    fn test_select_report() {
        let candidates: Vec<String> = ["1.1.1", "2.2.2", "3.3.3"].iter().map(|s| (*s).to_string()).collect();
        let latest = SelectReport::new("@>=1.0.0", &candidates, false);
        assert_eq!(latest.mode, MatchMode::HigherOrEqual);
        assert_eq!(latest.selected.as_deref(), Some("3.3.3"));

        let fixed = SelectReport::new("@2.2.2", &candidates, false);
        assert_eq!(fixed.to_text(), "2.2.2");

        let none = SelectReport::new("@4.0.0", &candidates, false);
        assert_eq!(none.selected, None);
        assert_eq!(none.to_text(), "no version satisfies '@4.0.0' among 3 candidates");
    }

    #[test]
    fn test_select_report_json() {
        let candidates = vec!["1.0.0".to_string(), "1.5.0".to_string()];
        let report = SelectReport::new("1.0.0:1.9.9", &candidates, false);
        let json = render(&report, OutputFormat::Json).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "filter": "1.0.0:1.9.9",
          "mode": "latest",
          "compatible": false,
          "candidates": [
            "1.0.0",
            "1.5.0"
          ],
          "selected": "1.5.0"
        }
        "#);
    }

    #[test]
    fn test_wildcard_report() {
        let report = WildcardReport::new("STM32F10[123]?[CDE]", "STM32F103ZE");
        assert!(report.matches);
        assert_eq!(report.to_text(), "STM32F10[123]?[CDE] ~ STM32F103ZE: yes");
    }
}
