//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler builds a report, renders it as text or JSON and prints it.
//! Handlers of yes/no questions return the answer so main.rs can set the
//! exit code.

mod attributes;
mod config;
mod output;
mod vendor;
mod version;

pub use attributes::{
    parse_attribute_set, run_attrs_id, run_attrs_match, AttributeMatchReport, IdentifierReport,
};
pub use config::{
    render_config, run_config_init, run_config_path, run_config_schema, run_config_show,
    write_example_config,
};
pub use output::{render, write_report, TextReport};
pub use vendor::{
    run_vendor_canonical, run_vendor_full, run_vendor_match, VendorMatchReport, VendorReport,
};
pub use version::{
    run_compare, run_range, run_select, run_wildcard, CompareReport, RangeReport, SelectReport,
    WildcardReport,
};
