use legacyscan_types::Category;
use std::ops::Range;

/// A single matcher hit, before deduplication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawMatch {
    /// Byte range into the scanned text.
    pub span: Range<usize>,
    pub category: Category,
    /// Object name as written in the source.
    pub object: String,
    /// Normalized statement keyword (`CALL TRANSACTION`, `=`); `None` for bare mentions.
    pub statement: Option<String>,
    pub matcher: &'static str,
}

/// A deduplicated, catalog-resolved usage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    /// Uppercase catalog name.
    pub target_name: String,
    pub category: Category,
    /// `Some(Table)` for table usages only.
    pub target_type: Option<Category>,
    /// Byte range into the scanned text.
    pub span: Range<usize>,
    pub snippet: String,
    pub suggested_remediation: Option<String>,
    pub ambiguous: bool,
    pub statement: Option<String>,
    pub matcher: &'static str,
    pub fingerprint: String,
}
