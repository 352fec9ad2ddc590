use crate::fingerprint::fingerprint_for_usage;
use crate::matchers::{self, Matcher};
use crate::model::{Finding, RawMatch};
use crate::policy::{EffectiveConfig, OverlapPolicy};
use legacyscan_catalog::{Catalog, CatalogError};
use legacyscan_types::Category;
use std::collections::HashSet;
use std::ops::Range;
use std::sync::Arc;

/// Runs the enabled matchers over text blocks.
///
/// Holds no mutable state; one instance can be shared across threads.
#[derive(Clone, Debug)]
pub struct Detector {
    catalog: Arc<Catalog>,
    matchers: Vec<Matcher>,
    overlap: OverlapPolicy,
}

impl Detector {
    pub fn new(catalog: Arc<Catalog>, cfg: &EffectiveConfig) -> Self {
        Self {
            catalog,
            matchers: matchers::plan(cfg),
            overlap: cfg.overlap,
        }
    }

    /// Built-in catalog with the default configuration.
    pub fn credit_management() -> Result<Self, CatalogError> {
        Ok(Self::new(
            Arc::new(Catalog::credit_management()?),
            &EffectiveConfig::default(),
        ))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Matcher ids this detector runs, in evaluation order.
    pub fn matcher_ids(&self) -> Vec<&'static str> {
        self.matchers.iter().map(Matcher::id).collect()
    }

    /// Findings for one text block, ordered by start offset.
    ///
    /// Never fails: text without usages (including the empty string) yields no findings.
    pub fn detect(&self, text: &str) -> Vec<Finding> {
        let mut raw = Vec::new();
        for matcher in &self.matchers {
            matcher.run(text, &self.catalog, &mut raw);
        }

        let mut kept = resolve_collisions(raw, self.overlap);
        // Stable: equal starts keep matcher order.
        kept.sort_by_key(|m| m.span.start);

        kept.into_iter()
            .filter_map(|m| self.to_finding(text, m))
            .collect()
    }

    fn to_finding(&self, text: &str, m: RawMatch) -> Option<Finding> {
        let entry = self.catalog.lookup(&m.object)?;
        let snippet = text.get(m.span.clone())?.trim().to_string();
        let suggested_remediation = entry.remediation.clone();

        Some(Finding {
            fingerprint: fingerprint_for_usage(m.matcher, &entry.name, &snippet),
            target_name: entry.name.clone(),
            category: m.category,
            target_type: (m.category == Category::Table).then_some(Category::Table),
            span: m.span,
            snippet,
            ambiguous: suggested_remediation.is_none(),
            suggested_remediation,
            statement: m.statement,
            matcher: m.matcher,
        })
    }
}

/// Apply the overlap policy in discovery order. Later matches lose.
fn resolve_collisions(raw: Vec<RawMatch>, overlap: OverlapPolicy) -> Vec<RawMatch> {
    match overlap {
        OverlapPolicy::ExactSpan => {
            let mut seen: HashSet<Range<usize>> = HashSet::new();
            raw.into_iter()
                .filter(|m| seen.insert(m.span.clone()))
                .collect()
        }
        policy => {
            let mut kept: Vec<RawMatch> = Vec::with_capacity(raw.len());
            for m in raw {
                if !kept.iter().any(|k| policy.suppresses(&k.span, &m.span)) {
                    kept.push(m);
                }
            }
            kept
        }
    }
}
