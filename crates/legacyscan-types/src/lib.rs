//! Stable DTOs and IDs used across the legacyscan workspace.
//!
//! This crate is intentionally boring:
//! - object categories and the emitted usage record shape
//! - stable string IDs for matchers
//! - the report envelope written next to scan results
//! - explain registry for matcher documentation

#![forbid(unsafe_code)]

pub mod category;
pub mod explain;
pub mod ids;
pub mod receipt;

pub use category::{Category, ParseCategoryError};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    CategoryCounts, LegacyscanReport, ReportEnvelope, SCHEMA_REPORT_V1, ScanData, ToolMeta,
    UsageRecord, Verdict,
};
