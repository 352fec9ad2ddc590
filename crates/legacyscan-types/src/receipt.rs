use crate::Category;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Stable schema identifier for legacyscan reports.
pub const SCHEMA_REPORT_V1: &str = "legacyscan.report.v1";

/// One detected usage, in the shape attached to each scanned unit.
///
/// `table`, `used_fields` and `suggested_fields` are always empty today; they are kept so
/// downstream remediation tooling sees the same keys for every record kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UsageRecord {
    pub table: Option<String>,
    /// Only populated for table usages.
    pub target_type: Option<Category>,
    pub target_name: String,
    /// Character offset (not byte offset) of the first matched character.
    pub start_char_in_unit: usize,
    /// Character offset one past the last matched character.
    pub end_char_in_unit: usize,
    #[serde(default)]
    pub used_fields: Vec<String>,
    /// True when the catalog knows no replacement for the object.
    pub ambiguous: bool,
    pub suggested_statement: Option<String>,
    pub suggested_fields: Option<Vec<String>>,
    pub snippet: String,

    /// Matcher that produced the record (`usage.*`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub matcher: String,
    /// Stable hash of matcher, object and normalized snippet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Per-category finding counts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryCounts {
    pub table: u32,
    pub transaction: u32,
    pub program: u32,
    pub class: u32,
}

impl CategoryCounts {
    pub fn bump(&mut self, category: Category) {
        match category {
            Category::Table => self.table += 1,
            Category::Transaction => self.transaction += 1,
            Category::Program => self.program += 1,
            Category::Class => self.class += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.table + self.transaction + self.program + self.class
    }
}

/// Legacyscan-specific summary payload for the report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScanData {
    pub profile: String,
    pub units_scanned: u32,
    pub findings_total: u32,
    pub ambiguous_total: u32,
    pub by_category: CategoryCounts,
    /// Findings per matcher id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub by_matcher: BTreeMap<String, u32>,
}

/// A generic receipt/envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = ScanData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub data: TData,
}

pub type LegacyscanReport = ReportEnvelope<ScanData>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_record_keeps_null_keys() {
        let record = UsageRecord {
            table: None,
            target_type: None,
            target_name: "VKM2".to_string(),
            start_char_in_unit: 0,
            end_char_in_unit: 24,
            used_fields: Vec::new(),
            ambiguous: false,
            suggested_statement: Some("Replace with UKM_CASE".to_string()),
            suggested_fields: None,
            snippet: "CALL TRANSACTION 'VKM2'.".to_string(),
            matcher: String::new(),
            fingerprint: None,
        };

        let value = serde_json::to_value(&record).expect("serialize");
        let obj = value.as_object().expect("object");
        assert!(obj["table"].is_null());
        assert!(obj["target_type"].is_null());
        assert!(obj["suggested_fields"].is_null());
        assert_eq!(obj["used_fields"], serde_json::json!([]));
        assert!(!obj.contains_key("matcher"));
        assert!(!obj.contains_key("fingerprint"));
    }

    #[test]
    fn category_counts_total() {
        let mut counts = CategoryCounts::default();
        counts.bump(Category::Table);
        counts.bump(Category::Table);
        counts.bump(Category::Class);
        assert_eq!(counts.table, 2);
        assert_eq!(counts.total(), 3);
    }
}
