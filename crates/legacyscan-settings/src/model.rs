use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `legacyscan.toml` schema v1.
///
/// Every key is optional; the selected profile supplies the rest.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LegacyscanConfigV1 {
    /// Optional schema string for tooling (`legacyscan.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `default`, `strict` or `exhaustive`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// `exact_span`, `contained` or `overlapping`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlap: Option<String>,

    /// `never`, `ambiguous` or `any`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// Unit key that receives the usage records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_field: Option<String>,

    /// Categories scanned by the identifier-only fallback. Replaces the profile's list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bare_mentions: Option<Vec<String>>,

    /// Map of matcher_id -> config.
    #[serde(default)]
    pub matchers: BTreeMap<String, MatcherConfig>,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatcherConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogConfig {
    /// Start from an empty catalog instead of the built-in credit management list.
    #[serde(default)]
    pub replace_defaults: bool,

    /// Names dropped from the starting catalog.
    #[serde(default)]
    pub remove: Vec<String>,

    #[serde(default)]
    pub identifiers: Vec<IdentifierConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IdentifierConfig {
    pub name: String,
    /// `table`, `transaction`, `program` or `class`.
    pub category: String,
    /// Omit for objects that are obsolete without a successor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}
