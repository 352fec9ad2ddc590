//! The `explain` use case: look up matcher or catalog identifier documentation.

use legacyscan_catalog::{Catalog, DeprecatedIdentifier};
use legacyscan_types::explain::{self, Explanation};
use legacyscan_types::{Category, ids};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// The identifier is a matcher id.
    Matcher(Explanation),
    /// The identifier is a deprecated object of the effective catalog.
    Identifier(DeprecatedIdentifier),
    /// Unknown identifier; includes available matcher ids.
    NotFound {
        identifier: String,
        available_matchers: &'static [&'static str],
    },
}

/// Look up an explanation for a matcher id, then for a catalog name.
pub fn run_explain(identifier: &str, catalog: &Catalog) -> ExplainOutput {
    if let Some(exp) = explain::lookup_explanation(identifier) {
        return ExplainOutput::Matcher(exp);
    }
    match catalog.lookup(identifier) {
        Some(id) => ExplainOutput::Identifier(id.clone()),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_matchers: explain::all_matcher_ids(),
        },
    }
}

/// Format a matcher explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before (reported):\n");
    out.push_str("```abap\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After (fixed):\n");
    out.push_str("```abap\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format a catalog entry for terminal display.
pub fn format_identifier(id: &DeprecatedIdentifier) -> String {
    let title = format!("{} ({})", id.name, id.category);
    let mut out = String::new();

    out.push_str(&title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push_str("\n\n");
    match &id.remediation {
        Some(r) => {
            out.push_str("Remediation\n");
            out.push_str("-----------\n");
            out.push_str(r);
        }
        None => out.push_str(
            "Obsolete without a direct replacement. Usages are reported as ambiguous and need a manual decision.",
        ),
    }
    out.push_str("\n\nReported by:\n");
    for matcher in matchers_for(id.category) {
        out.push_str(&format!("  - {}\n", matcher));
    }

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, matchers: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Unknown matcher id or catalog identifier: {}\n\n",
        identifier
    ));
    out.push_str("Available matcher ids:\n");
    for id in matchers {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nRun `legacyscan catalog` to list catalog identifiers.\n");

    out
}

fn matchers_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Table => &[
            ids::MATCHER_TABLE_STATEMENT,
            ids::MATCHER_CLEAR_REFERENCE,
            ids::MATCHER_ASSIGNMENT_REFERENCE,
            ids::MATCHER_BARE_MENTION,
        ],
        Category::Transaction => &[ids::MATCHER_CALL_TRANSACTION, ids::MATCHER_BARE_MENTION],
        Category::Program => &[ids::MATCHER_SUBMIT_PROGRAM, ids::MATCHER_BARE_MENTION],
        Category::Class => &[ids::MATCHER_OBJECT_INSTANTIATION, ids::MATCHER_BARE_MENTION],
    }
}
