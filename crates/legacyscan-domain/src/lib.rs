//! Pure usage detection (no IO).
//!
//! Input: a text block and a catalog constructed elsewhere.
//! Output: ordered findings, ready to be formatted into usage records.

#![forbid(unsafe_code)]

pub mod format;
pub mod model;
pub mod policy;
pub mod report;
pub mod scan;

mod engine;
mod fingerprint;
mod matchers;

#[cfg(test)]
mod props;
#[cfg(test)]
mod test_support;

pub use engine::Detector;
pub use model::{Finding, RawMatch};
pub use policy::{EffectiveConfig, FailOn, MatcherPolicy, OverlapPolicy};
