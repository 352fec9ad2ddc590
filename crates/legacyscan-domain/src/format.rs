//! Conversion of findings into the externally visible usage record.

use crate::model::Finding;
use legacyscan_types::UsageRecord;

/// Shape `finding` as a [`UsageRecord`]. `text` is the block it was found in; byte
/// offsets are converted to character offsets.
pub fn to_record(finding: &Finding, text: &str) -> UsageRecord {
    UsageRecord {
        table: None,
        target_type: finding.target_type,
        target_name: finding.target_name.clone(),
        start_char_in_unit: char_offset(text, finding.span.start),
        end_char_in_unit: char_offset(text, finding.span.end),
        used_fields: Vec::new(),
        ambiguous: finding.ambiguous,
        suggested_statement: finding.suggested_remediation.clone(),
        suggested_fields: None,
        snippet: finding.snippet.clone(),
        matcher: finding.matcher.to_string(),
        fingerprint: Some(finding.fingerprint.clone()),
    }
}

pub fn to_records(findings: &[Finding], text: &str) -> Vec<UsageRecord> {
    findings.iter().map(|f| to_record(f, text)).collect()
}

fn char_offset(text: &str, byte: usize) -> usize {
    text.get(..byte).map_or(0, |prefix| prefix.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::detector;
    use legacyscan_types::Category;

    #[test]
    fn record_carries_finding_fields() {
        let text = "SELECT * FROM S066 WHERE KUNNR = '1'.";
        let findings = detector().detect(text);
        let record = to_record(&findings[0], text);

        assert_eq!(record.table, None);
        assert_eq!(record.target_type, Some(Category::Table));
        assert_eq!(record.target_name, "S066");
        assert_eq!(record.start_char_in_unit, 0);
        assert_eq!(record.end_char_in_unit, text.len());
        assert!(record.used_fields.is_empty());
        assert!(!record.ambiguous);
        assert_eq!(record.suggested_fields, None);
        assert_eq!(record.snippet, text);
        assert_eq!(record.matcher, "usage.table_statement");
        assert_eq!(record.fingerprint.as_deref().map(str::len), Some(64));
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let text = "\" Prüfung für Kredit\nSUBMIT rvkred03.";
        let findings = detector().detect(text);
        let record = to_record(&findings[0], text);

        let expected_start = text.find("SUBMIT").map(|b| text[..b].chars().count());
        assert_eq!(Some(record.start_char_in_unit), expected_start);
        assert_eq!(record.end_char_in_unit, text.chars().count());
        assert!(findings[0].span.start > record.start_char_in_unit);
    }

    #[test]
    fn non_table_records_have_no_target_type() {
        let text = "CALL TRANSACTION 'VKM3'.";
        let records = to_records(&detector().detect(text), text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target_type, None);
    }
}
