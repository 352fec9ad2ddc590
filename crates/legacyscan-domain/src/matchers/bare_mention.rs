//! Identifier-only fallback: every catalog name of the configured categories, plus a
//! trailing field-access suffix. Captures no statement context.

use crate::model::RawMatch;
use crate::scan;
use legacyscan_catalog::Catalog;
use legacyscan_types::{Category, ids};
use std::collections::BTreeSet;

pub fn run(
    text: &str,
    catalog: &Catalog,
    categories: &BTreeSet<Category>,
    out: &mut Vec<RawMatch>,
) {
    if categories.is_empty() {
        return;
    }
    let bytes = text.as_bytes();

    for (start, end) in scan::identifiers(bytes, 0, bytes.len()) {
        let Some(category) = catalog.category_of(&text[start..end]) else {
            continue;
        };
        if !categories.contains(&category) {
            continue;
        }
        out.push(RawMatch {
            span: start..scan::field_suffix_end(bytes, end),
            category,
            object: text[start..end].to_string(),
            statement: None,
            matcher: ids::MATCHER_BARE_MENTION,
        });
    }
}
