//! The `scan` use case: detect deprecated usages in every unit and build a report.

use anyhow::Context;
use legacyscan_domain::report::ScanTally;
use legacyscan_domain::{Detector, format};
use legacyscan_settings::{Overrides, ResolvedConfig};
use legacyscan_types::{LegacyscanReport, Verdict};
use rayon::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::{config, report};

/// One input unit: a JSON object whose `code` is scanned. Every other key is opaque.
pub type Unit = serde_json::Map<String, Value>;

/// Input for the scan use case.
#[derive(Clone, Debug)]
pub struct ScanInput<'a> {
    pub units: Vec<Unit>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the scan use case.
#[derive(Clone, Debug)]
pub struct ScanOutput {
    /// Input units in input order, each with the usage-record array attached.
    pub units: Vec<Unit>,
    pub report: LegacyscanReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Parse a JSON array of unit objects.
pub fn parse_units(text: &str) -> anyhow::Result<Vec<Unit>> {
    let value: Value = serde_json::from_str(text).context("parse units json")?;
    let Value::Array(items) = value else {
        anyhow::bail!("expected a JSON array of unit objects");
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => Ok(map),
            _ => anyhow::bail!("unit {i} is not a JSON object"),
        })
        .collect()
}

pub fn serialize_units(units: &[Unit]) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(units).context("serialize units")
}

/// Run the scan use case: resolve config, build the detector, scan units in parallel,
/// attach usage records, produce a report.
pub fn run_scan(input: ScanInput<'_>) -> anyhow::Result<ScanOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = config::resolve(input.config_text, input.overrides.clone())?;
    let effective = &resolved.effective;
    let detector = Detector::new(Arc::new(resolved.catalog.clone()), effective);
    info!(
        profile = %effective.profile,
        units = input.units.len(),
        catalog = detector.catalog().len(),
        matchers = ?detector.matcher_ids(),
        "scan started"
    );

    let codes = input
        .units
        .iter()
        .enumerate()
        .map(|(i, unit)| unit_code(unit).with_context(|| format!("unit {i}")))
        .collect::<anyhow::Result<Vec<&str>>>()?;

    let scanned: Vec<_> = codes
        .par_iter()
        .map(|code| {
            let findings = detector.detect(code);
            let records = format::to_records(&findings, code);
            (findings, records)
        })
        .collect();

    let mut tally = ScanTally::default();
    let mut units = input.units;
    for (i, (unit, (findings, records))) in units.iter_mut().zip(scanned).enumerate() {
        debug!(
            unit = i,
            pgm_name = unit.get("pgm_name").and_then(serde_json::Value::as_str).unwrap_or(""),
            findings = findings.len(),
            "unit scanned"
        );
        tally.add_unit(&findings);
        let records = serde_json::to_value(&records).context("serialize usage records")?;
        unit.insert(effective.output_field.clone(), records);
    }

    let finished_at = OffsetDateTime::now_utc();
    let report = report::build_report(started_at, finished_at, effective, &tally);
    info!(
        units = tally.units,
        findings = tally.findings,
        ambiguous = tally.ambiguous,
        verdict = ?report.verdict,
        "scan finished"
    );

    Ok(ScanOutput {
        units,
        report,
        resolved_config: resolved,
    })
}

/// `code` of a unit; missing or null is empty.
fn unit_code(unit: &Unit) -> anyhow::Result<&str> {
    match unit.get("code") {
        None | Some(Value::Null) => Ok(""),
        Some(Value::String(code)) => Ok(code),
        Some(_) => anyhow::bail!("`code` must be a string or null"),
    }
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scan(units: Value, config_text: &str) -> ScanOutput {
        let units = parse_units(&units.to_string()).expect("parse units");
        run_scan(ScanInput {
            units,
            config_text,
            overrides: Overrides::default(),
        })
        .expect("run_scan")
    }

    #[test]
    fn attaches_records_and_keeps_metadata() {
        let out = scan(
            json!([
                {
                    "pgm_name": "ZCREDIT",
                    "inc_name": "ZCREDIT_F01",
                    "type": "PROG",
                    "start_line": 10,
                    "code": "SELECT * FROM S066 WHERE KUNNR = '1'."
                },
                { "pgm_name": "ZCLEAN", "inc_name": "ZCLEAN", "type": "PROG", "code": "WRITE: 'hello'." }
            ]),
            "",
        );

        assert_eq!(out.units.len(), 2);
        let first = &out.units[0];
        assert_eq!(first["pgm_name"], "ZCREDIT");
        assert_eq!(first["start_line"], 10);
        let records = first["mb_txn_usage"].as_array().expect("records");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["target_name"], "S066");
        assert_eq!(records[0]["target_type"], "TABLE");
        assert_eq!(records[0]["ambiguous"], false);
        assert!(records[0]["table"].is_null());

        assert_eq!(out.units[1]["mb_txn_usage"], json!([]));
        assert_eq!(out.report.data.units_scanned, 2);
        assert_eq!(out.report.data.findings_total, 1);
        assert_eq!(out.report.verdict, Verdict::Warn);
    }

    #[test]
    fn missing_or_null_code_is_empty() {
        let out = scan(json!([{ "pgm_name": "A" }, { "code": null }]), "");
        assert_eq!(out.units[0]["mb_txn_usage"], json!([]));
        assert_eq!(out.units[1]["mb_txn_usage"], json!([]));
        assert_eq!(out.report.verdict, Verdict::Pass);
    }

    #[test]
    fn non_string_code_is_an_error() {
        let units = parse_units(r#"[{"code": 1}]"#).expect("parse");
        let err = run_scan(ScanInput {
            units,
            config_text: "",
            overrides: Overrides::default(),
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("unit 0"));
    }

    #[test]
    fn config_controls_output_field_and_verdict() {
        let out = scan(
            json!([{ "code": "SUBMIT rvkred03." }]),
            "output_field = \"legacy\"\nfail_on = \"ambiguous\"\n",
        );
        assert!(out.units[0].contains_key("legacy"));
        assert!(!out.units[0].contains_key("mb_txn_usage"));
        assert_eq!(out.report.verdict, Verdict::Fail);
        assert_eq!(out.report.data.ambiguous_total, 1);
        assert_eq!(out.report.data.by_category.program, 1);
    }

    #[test]
    fn unit_order_is_preserved() {
        let units: Vec<Value> = (0..50)
            .map(|i| json!({ "n": i, "code": format!("CALL TRANSACTION 'VKM{}'.", 2 + i % 3) }))
            .collect();
        let out = scan(Value::Array(units), "");
        for (i, unit) in out.units.iter().enumerate() {
            assert_eq!(unit["n"], i);
        }
        assert_eq!(out.report.data.by_category.transaction, 34);
    }

    #[test]
    fn parse_units_rejects_non_arrays() {
        assert!(parse_units("{}").is_err());
        assert!(parse_units("[1]").is_err());
        assert!(parse_units("not json").is_err());
        assert!(parse_units("[]").expect("empty").is_empty());
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Warn), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
