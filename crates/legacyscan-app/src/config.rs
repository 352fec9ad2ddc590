use anyhow::Context;
use legacyscan_settings::{LegacyscanConfigV1, Overrides, ResolvedConfig};

/// Parse and resolve config text. Empty text means "no config file": defaults apply.
pub fn resolve(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        LegacyscanConfigV1::default()
    } else {
        legacyscan_settings::parse_config_toml(config_text).context("parse config")?
    };

    legacyscan_settings::resolve_config(cfg, overrides).context("resolve config")
}
