//! Developer tasks (schema generation, conformance, explain coverage).
//!
//! Kept separate from the end-user CLI.

use anyhow::{Context, bail};
use legacyscan_app::{ScanInput, parse_units, run_scan};
use legacyscan_settings::Overrides;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Project root (parent of the xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(legacyscan_types::LegacyscanReport)
}

fn generate_usage_record_schema() -> schemars::Schema {
    schema_for!(legacyscan_types::UsageRecord)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(legacyscan_settings::LegacyscanConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "legacyscan.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "legacyscan.usage_record.v1.json",
            generate: generate_usage_record_schema,
        },
        SchemaSpec {
            filename: "legacyscan.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn compile(schema: &schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("Failed to convert schema")?;
    jsonschema::validator_for(&value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

/// Scan the sample units and validate the report and every usage record against the
/// generated schemas.
fn conform() -> anyhow::Result<()> {
    let report_schema = compile(&generate_report_schema())?;
    let record_schema = compile(&generate_usage_record_schema())?;

    let units = parse_units(&legacyscan_test_util::sample_units().to_string())?;
    let output = run_scan(ScanInput {
        units,
        config_text: "",
        overrides: Overrides::default(),
    })?;
    let field = output.resolved_config.effective.output_field.clone();

    let mut errors = Vec::new();

    let report = serde_json::to_value(&output.report).context("serialize report")?;
    for err in report_schema.iter_errors(&report) {
        errors.push(format!("report: schema validation: {}", err));
    }

    let mut record_count = 0;
    for (i, unit) in output.units.iter().enumerate() {
        let Some(records) = unit.get(&field).and_then(|v| v.as_array()) else {
            errors.push(format!("unit[{i}]: missing `{field}` array"));
            continue;
        };
        for (j, record) in records.iter().enumerate() {
            record_count += 1;
            for err in record_schema.iter_errors(record) {
                errors.push(format!("unit[{i}].{field}[{j}]: schema validation: {}", err));
            }
            let ambiguous = record.get("ambiguous").and_then(|v| v.as_bool());
            let suggestion_missing = record
                .get("suggested_statement")
                .is_none_or(|v| v.is_null());
            if ambiguous != Some(suggestion_missing) {
                errors.push(format!(
                    "unit[{i}].{field}[{j}]: ambiguous must be true exactly when suggested_statement is null"
                ));
            }
        }
    }

    if errors.is_empty() {
        println!("✓ report validates against legacyscan.report.v1");
        println!("✓ {} usage records validate", record_count);
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

/// Every matcher id must have a complete explanation.
fn explain_coverage() -> anyhow::Result<()> {
    let ids = legacyscan_types::explain::all_matcher_ids();
    let mut errors = Vec::new();

    for id in ids {
        match legacyscan_types::explain::lookup_explanation(id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Matcher '{}' has empty title", id));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Matcher '{}' has empty description", id));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("Matcher '{}' has empty remediation", id));
                }
            }
            None => errors.push(format!("Matcher '{}' has no explanation", id)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} matcher ids have explanations", ids.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Scan sample units and validate output against the schemas");
    eprintln!("  explain-coverage  Validate all matcher IDs have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
