//! Category matchers, in evaluation order.
//!
//! Order matters: when two matchers report the same span, the earlier one wins.

mod assignment;
mod bare_mention;
mod statement;

use crate::model::RawMatch;
use crate::policy::EffectiveConfig;
use legacyscan_catalog::Catalog;
use legacyscan_types::{Category, ids};
use std::collections::BTreeSet;

use statement::StatementRule;

#[derive(Clone, Debug)]
pub enum Matcher {
    Statement(&'static StatementRule),
    Assignment,
    BareMention(BTreeSet<Category>),
}

impl Matcher {
    pub fn id(&self) -> &'static str {
        match self {
            Matcher::Statement(rule) => rule.id,
            Matcher::Assignment => ids::MATCHER_ASSIGNMENT_REFERENCE,
            Matcher::BareMention(_) => ids::MATCHER_BARE_MENTION,
        }
    }

    pub fn run(&self, text: &str, catalog: &Catalog, out: &mut Vec<RawMatch>) {
        match self {
            Matcher::Statement(rule) => rule.run(text, catalog, out),
            Matcher::Assignment => assignment::run(text, catalog, out),
            Matcher::BareMention(categories) => bare_mention::run(text, catalog, categories, out),
        }
    }
}

/// The enabled matchers for `cfg`, in evaluation order.
pub fn plan(cfg: &EffectiveConfig) -> Vec<Matcher> {
    let all = [
        Matcher::Statement(&statement::TABLE_STATEMENT),
        Matcher::Statement(&statement::CALL_TRANSACTION),
        Matcher::Statement(&statement::SUBMIT_PROGRAM),
        Matcher::Statement(&statement::OBJECT_INSTANTIATION),
        Matcher::Statement(&statement::CLEAR_REFERENCE),
        Matcher::Assignment,
        Matcher::BareMention(cfg.bare_mentions.clone()),
    ];

    all.into_iter()
        .filter(|m| cfg.is_enabled(m.id()))
        .filter(|m| !matches!(m, Matcher::BareMention(c) if c.is_empty()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::MatcherPolicy;

    #[test]
    fn plan_follows_matcher_id_order() {
        let mut cfg = EffectiveConfig::default();
        cfg.bare_mentions.insert(Category::Table);
        let order: Vec<_> = plan(&cfg).iter().map(Matcher::id).collect();
        assert_eq!(order, ids::ALL_MATCHERS);
    }

    #[test]
    fn plan_skips_disabled_and_empty_bare_mentions() {
        let mut cfg = EffectiveConfig::default();
        cfg.matchers.insert(
            ids::MATCHER_CLEAR_REFERENCE.to_string(),
            MatcherPolicy::disabled(),
        );
        let order: Vec<_> = plan(&cfg).iter().map(Matcher::id).collect();
        assert!(!order.contains(&ids::MATCHER_CLEAR_REFERENCE));
        assert!(!order.contains(&ids::MATCHER_BARE_MENTION));
        assert_eq!(order.len(), 5);
    }
}
