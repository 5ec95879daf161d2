//! Report rendering shared by all command handlers.

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use serde::Serialize;

/// A command result that can be shown as plain text.
pub trait TextReport {
    fn to_text(&self) -> String;
}

/// Render a report in the requested format.
pub fn render<T>(report: &T, format: OutputFormat) -> Result<String>
where
    T: Serialize + TextReport,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report as JSON")
        }
        OutputFormat::Text => Ok(report.to_text()),
    }
}

/// Render a report and print it to stdout.
pub fn write_report<T>(report: &T, format: OutputFormat) -> Result<()>
where
    T: Serialize + TextReport,
{
    println!("{}", render(report, format)?);
    Ok(())
}

/// `"yes"`/`"no"` for boolean text output.
pub(crate) const fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
