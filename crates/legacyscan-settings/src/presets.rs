use legacyscan_domain::policy::{EffectiveConfig, MatcherPolicy};
use legacyscan_types::{Category, ids};

/// Known profile names.
pub const PROFILES: &[&str] = &["default", "strict", "exhaustive"];

/// Preset profiles. Unknown names fall back to `default`.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "strict" => strict_profile(),
        "exhaustive" => exhaustive_profile(),
        _ => EffectiveConfig::default(),
    }
}

/// Statement-shaped matchers only.
fn strict_profile() -> EffectiveConfig {
    let mut cfg = EffectiveConfig {
        profile: "strict".to_string(),
        ..EffectiveConfig::default()
    };
    for id in [ids::MATCHER_ASSIGNMENT_REFERENCE, ids::MATCHER_BARE_MENTION] {
        cfg.matchers.insert(id.to_string(), MatcherPolicy::disabled());
    }
    cfg
}

fn exhaustive_profile() -> EffectiveConfig {
    let mut cfg = EffectiveConfig {
        profile: "exhaustive".to_string(),
        ..EffectiveConfig::default()
    };
    cfg.bare_mentions.insert(Category::Table);
    cfg
}
