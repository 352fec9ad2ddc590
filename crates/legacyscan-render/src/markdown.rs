use crate::{RenderableReport, RenderableUsage, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Legacyscan report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Warn => "WARN",
        RenderableVerdict::Fail => "FAIL",
    };
    let d = &report.data;
    out.push_str(&format!(
        "- Verdict: **{}**\n- Profile: `{}`\n- Units scanned: {}\n- Usages: {} ({} without known replacement)\n\n",
        verdict, d.profile, d.units_scanned, d.findings_total, d.ambiguous_total
    ));

    if report.units.iter().all(|u| u.usages.is_empty()) {
        out.push_str("No deprecated objects used.\n");
        return out;
    }

    out.push_str("## Usages\n\n");

    for unit in report.units.iter().filter(|u| !u.usages.is_empty()) {
        out.push_str(&format!("### {}\n\n", unit.label));
        for u in &unit.usages {
            push_usage(&mut out, u);
        }
        out.push('\n');
    }

    out
}

fn push_usage(out: &mut String, u: &RenderableUsage) {
    let tag = if u.ambiguous { "OBSOLETE" } else { "REPLACE" };
    out.push_str(&format!(
        "- [{}] `{}` at {}..{}: {}\n",
        tag,
        u.target_name,
        u.start_char,
        u.end_char,
        inline_code(&u.snippet)
    ));
    match &u.suggestion {
        Some(s) => out.push_str(&format!("  - suggestion: {}\n", s)),
        None => out.push_str("  - suggestion: none known, review manually\n"),
    }
    if let Some(m) = &u.matcher {
        out.push_str(&format!("  - matcher: `{}`\n", m));
    }
}

/// Snippet as a single-line code span.
fn inline_code(snippet: &str) -> String {
    let flat = snippet.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.contains('`') {
        format!("`` {} ``", flat)
    } else {
        format!("`{}`", flat)
    }
}
