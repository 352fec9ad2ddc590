//! Render use case: markdown from scanned units.

use anyhow::Context;
use legacyscan_domain::report::ScanTally;
use legacyscan_render::{
    RenderableData, RenderableReport, RenderableUnit, RenderableUsage, RenderableVerdict,
};
use legacyscan_settings::ResolvedConfig;
use legacyscan_types::{LegacyscanReport, UsageRecord, Verdict};
use serde_json::Value;

use crate::scan::Unit;

#[derive(Clone, Copy, Debug)]
pub struct MarkdownInput<'a> {
    /// Units as written by the scan use case.
    pub units: &'a [Unit],
    pub resolved: &'a ResolvedConfig,
    /// Report of the same scan. When absent, the summary is recomputed from the records.
    pub report: Option<&'a LegacyscanReport>,
}

pub fn run_markdown(input: MarkdownInput<'_>) -> anyhow::Result<String> {
    let renderable = to_renderable(input)?;
    Ok(legacyscan_render::render_markdown(&renderable))
}

pub fn to_renderable(input: MarkdownInput<'_>) -> anyhow::Result<RenderableReport> {
    let field = input.resolved.effective.output_field.as_str();

    let mut units = Vec::with_capacity(input.units.len());
    let mut tally = ScanTally::default();
    for (i, unit) in input.units.iter().enumerate() {
        let value = unit.get(field).with_context(|| {
            format!("unit {i} has no `{field}` array; was it produced by `legacyscan scan`?")
        })?;
        let records: Vec<UsageRecord> = serde_json::from_value(value.clone())
            .with_context(|| format!("parse `{field}` of unit {i}"))?;

        tally.units += 1;
        tally.findings += records.len() as u32;
        tally.ambiguous += records.iter().filter(|r| r.ambiguous).count() as u32;

        units.push(RenderableUnit {
            label: unit_label(unit, i),
            usages: records.into_iter().map(renderable_usage).collect(),
        });
    }

    let (verdict, profile) = match input.report {
        Some(report) => (report.verdict, report.data.profile.clone()),
        None => (
            tally.verdict(input.resolved.effective.fail_on),
            input.resolved.effective.profile.clone(),
        ),
    };

    Ok(RenderableReport {
        verdict: match verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Warn => RenderableVerdict::Warn,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        units,
        data: RenderableData {
            profile,
            units_scanned: tally.units,
            findings_total: tally.findings,
            ambiguous_total: tally.ambiguous,
        },
    })
}

fn renderable_usage(r: UsageRecord) -> RenderableUsage {
    RenderableUsage {
        target_name: r.target_name,
        matcher: (!r.matcher.is_empty()).then_some(r.matcher),
        ambiguous: r.ambiguous,
        suggestion: r.suggested_statement,
        snippet: r.snippet,
        start_char: r.start_char_in_unit,
        end_char: r.end_char_in_unit,
    }
}

/// `PGM / INCLUDE (name)`, with whatever parts the unit carries.
fn unit_label(unit: &Unit, index: usize) -> String {
    let text = |key: &str| {
        unit.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    };

    let mut label = match (text("pgm_name"), text("inc_name")) {
        (Some(p), Some(i)) if p != i => format!("{p} / {i}"),
        (Some(p), _) => p.to_string(),
        (None, Some(i)) => i.to_string(),
        (None, None) => format!("unit {index}"),
    };
    if let Some(name) = text("name") {
        label.push_str(&format!(" ({name})"));
    }
    label
}
