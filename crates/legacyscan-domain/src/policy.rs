use legacyscan_types::{Category, ids};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

/// Which matches are dropped when spans collide.
///
/// Decisions are taken in matcher evaluation order, so a statement-shaped match always
/// survives against a lenient match it collides with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Drop only exact `(start, end)` duplicates.
    #[default]
    ExactSpan,
    /// Also drop matches lying entirely inside an already kept span.
    Contained,
    /// Drop any match that shares at least one byte with a kept span.
    Overlapping,
}

impl OverlapPolicy {
    /// Does the already kept span `kept` suppress `candidate`?
    pub fn suppresses(self, kept: &Range<usize>, candidate: &Range<usize>) -> bool {
        match self {
            OverlapPolicy::ExactSpan => kept == candidate,
            OverlapPolicy::Contained => kept.start <= candidate.start && candidate.end <= kept.end,
            OverlapPolicy::Overlapping => kept.start < candidate.end && candidate.start < kept.end,
        }
    }
}

/// When a scan counts as failed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailOn {
    #[default]
    Never,
    /// Fail when an object without known remediation is used.
    Ambiguous,
    /// Fail on any finding.
    Any,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatcherPolicy {
    pub enabled: bool,
}

impl MatcherPolicy {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub overlap: OverlapPolicy,
    pub fail_on: FailOn,
    /// Categories scanned by the bare-mention fallback.
    pub bare_mentions: BTreeSet<Category>,
    /// Map of matcher id -> policy. Missing ids are disabled.
    pub matchers: BTreeMap<String, MatcherPolicy>,
    /// Key under which usage records are attached to each unit.
    pub output_field: String,
}

impl Default for EffectiveConfig {
    /// Every statement-shaped and lenient matcher on; no bare mentions.
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            overlap: OverlapPolicy::ExactSpan,
            fail_on: FailOn::Never,
            bare_mentions: BTreeSet::new(),
            matchers: ids::ALL_MATCHERS
                .iter()
                .map(|id| (id.to_string(), MatcherPolicy::enabled()))
                .collect(),
            output_field: ids::DEFAULT_OUTPUT_FIELD.to_string(),
        }
    }
}

impl EffectiveConfig {
    pub fn is_enabled(&self, matcher_id: &str) -> bool {
        self.matchers.get(matcher_id).is_some_and(|p| p.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_span_only_drops_identical_spans() {
        let p = OverlapPolicy::ExactSpan;
        assert!(p.suppresses(&(0..10), &(0..10)));
        assert!(!p.suppresses(&(0..10), &(2..6)));
        assert!(!p.suppresses(&(0..10), &(5..15)));
    }

    #[test]
    fn contained_drops_nested_spans() {
        let p = OverlapPolicy::Contained;
        assert!(p.suppresses(&(0..10), &(2..6)));
        assert!(p.suppresses(&(0..10), &(0..10)));
        assert!(!p.suppresses(&(0..10), &(5..15)));
        assert!(!p.suppresses(&(2..6), &(0..10)));
    }

    #[test]
    fn overlapping_drops_any_shared_byte() {
        let p = OverlapPolicy::Overlapping;
        assert!(p.suppresses(&(0..10), &(5..15)));
        assert!(!p.suppresses(&(0..10), &(10..15)));
    }

    #[test]
    fn default_enables_every_matcher_without_bare_mentions() {
        let cfg = EffectiveConfig::default();
        for id in ids::ALL_MATCHERS {
            assert!(cfg.is_enabled(id), "{id} should be enabled");
        }
        assert!(cfg.bare_mentions.is_empty());
        assert!(!cfg.is_enabled("usage.unknown"));
    }
}
