//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CatalogConfig, IdentifierConfig, LegacyscanConfigV1, MatcherConfig};
pub use presets::PROFILES;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `legacyscan.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<LegacyscanConfigV1> {
    let cfg: LegacyscanConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config and catalog used by the engine.
pub fn resolve_config(
    cfg: LegacyscanConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
