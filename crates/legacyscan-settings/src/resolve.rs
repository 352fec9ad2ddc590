use crate::{model::CatalogConfig, model::LegacyscanConfigV1, presets};
use anyhow::Context;
use legacyscan_catalog::{Catalog, CatalogBuilder};
use legacyscan_domain::policy::{EffectiveConfig, FailOn, MatcherPolicy, OverlapPolicy};
use legacyscan_types::{Category, ids};

/// Values given on the command line; they win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub fail_on: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub catalog: Catalog,
}

pub fn resolve_config(
    cfg: LegacyscanConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "default".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(overlap) = cfg.overlap.as_deref() {
        effective.overlap = parse_overlap(overlap)?;
    }

    if let Some(fail_on) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on)?;
    }

    if let Some(field) = cfg.output_field.as_deref() {
        let field = field.trim();
        if field.is_empty() {
            anyhow::bail!("output_field must not be empty");
        }
        effective.output_field = field.to_string();
    }

    if let Some(categories) = &cfg.bare_mentions {
        effective.bare_mentions = categories
            .iter()
            .map(|c| c.parse::<Category>().context("invalid bare_mentions entry"))
            .collect::<anyhow::Result<_>>()?;
    }

    // per-matcher overrides
    for (matcher_id, mc) in cfg.matchers.iter() {
        if !ids::ALL_MATCHERS.contains(&matcher_id.as_str()) {
            anyhow::bail!(
                "unknown matcher: {matcher_id} (expected one of {})",
                ids::ALL_MATCHERS.join(", ")
            );
        }
        let entry = effective
            .matchers
            .entry(matcher_id.clone())
            .or_insert_with(MatcherPolicy::disabled);
        if let Some(enabled) = mc.enabled {
            entry.enabled = enabled;
        }
    }

    let catalog = build_catalog(&cfg.catalog)?;

    Ok(ResolvedConfig { effective, catalog })
}

fn build_catalog(cc: &CatalogConfig) -> anyhow::Result<Catalog> {
    let mut builder = if cc.replace_defaults {
        Catalog::builder()
    } else {
        CatalogBuilder::credit_management()
    };

    for name in &cc.remove {
        builder.remove(name);
    }
    for id in &cc.identifiers {
        let category: Category = id
            .category
            .parse()
            .with_context(|| format!("invalid category for catalog identifier {}", id.name))?;
        builder.add(&id.name, category, id.remediation.clone());
    }

    builder.build().context("invalid [catalog] section")
}

fn parse_overlap(v: &str) -> anyhow::Result<OverlapPolicy> {
    match v {
        "exact_span" => Ok(OverlapPolicy::ExactSpan),
        "contained" => Ok(OverlapPolicy::Contained),
        "overlapping" => Ok(OverlapPolicy::Overlapping),
        other => anyhow::bail!(
            "unknown overlap: {other} (expected exact_span|contained|overlapping)"
        ),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "never" => Ok(FailOn::Never),
        "ambiguous" => Ok(FailOn::Ambiguous),
        "any" => Ok(FailOn::Any),
        other => anyhow::bail!("unknown fail_on: {other} (expected never|ambiguous|any)"),
    }
}
