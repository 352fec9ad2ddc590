use anyhow::Context;
use legacyscan_domain::EffectiveConfig;
use legacyscan_domain::report::ScanTally;
use legacyscan_types::{LegacyscanReport, ReportEnvelope, SCHEMA_REPORT_V1, ScanData, ToolMeta};
use time::OffsetDateTime;

pub(crate) fn build_report(
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
    effective: &EffectiveConfig,
    tally: &ScanTally,
) -> LegacyscanReport {
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "legacyscan".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: tally.verdict(effective.fail_on),
        data: ScanData {
            profile: effective.profile.clone(),
            units_scanned: tally.units,
            findings_total: tally.findings,
            ambiguous_total: tally.ambiguous,
            by_category: tally.by_category.clone(),
            by_matcher: tally.by_matcher.clone(),
        },
    }
}

pub fn parse_report_json(text: &str) -> anyhow::Result<LegacyscanReport> {
    let report: LegacyscanReport = serde_json::from_str(text).context("parse report json")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {}", report.schema);
    }
    Ok(report)
}

pub fn serialize_report(report: &LegacyscanReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}
