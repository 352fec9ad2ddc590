//! The `catalog` use case: list the effective deprecated-identifier catalog.

use legacyscan_catalog::Catalog;
use legacyscan_settings::Overrides;
use legacyscan_types::Category;
use serde_json::{Value, json};

use crate::config;

/// The catalog after applying the `[catalog]` section of the config.
pub fn run_catalog(config_text: &str, overrides: Overrides) -> anyhow::Result<Catalog> {
    Ok(config::resolve(config_text, overrides)?.catalog)
}

/// Plain-text listing grouped by category.
pub fn format_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();

    for category in Category::ALL {
        out.push_str(&format!("{}\n", category));
        let mut any = false;
        for name in catalog.names(category) {
            any = true;
            let remediation = catalog
                .lookup(name)
                .and_then(|id| id.remediation.as_deref())
                .unwrap_or("obsolete, no replacement");
            out.push_str(&format!("  {:<16} {}\n", name, remediation));
        }
        if !any {
            out.push_str("  (none)\n");
        }
        out.push('\n');
    }

    out
}

pub fn catalog_json(catalog: &Catalog) -> Value {
    Value::Array(
        catalog
            .iter()
            .map(|id| {
                json!({
                    "name": id.name,
                    "category": id.category,
                    "remediation": id.remediation,
                })
            })
            .collect(),
    )
}
