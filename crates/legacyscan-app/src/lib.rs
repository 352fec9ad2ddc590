//! Use case orchestration for legacyscan.
//!
//! This crate provides the application layer: use cases that coordinate the settings,
//! domain, and render layers. It stays thin and delegates detection to the domain crate.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod catalog;
mod config;
mod explain;
mod render;
mod report;
mod scan;
mod units;

pub use catalog::{catalog_json, format_catalog, run_catalog};
pub use config::resolve;
pub use explain::{
    ExplainOutput, format_explanation, format_identifier, format_not_found, run_explain,
};
pub use render::{MarkdownInput, run_markdown, to_renderable};
pub use report::{parse_report_json, serialize_report};
pub use scan::{
    ScanInput, ScanOutput, Unit, parse_units, run_scan, serialize_units, verdict_exit_code,
};
pub use units::collect_units;
