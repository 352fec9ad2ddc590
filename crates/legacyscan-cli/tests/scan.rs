//! End-to-end CLI tests: scan, scan-dir, md, explain and catalog.
//!
//! Every command runs inside a temp dir so no stray `legacyscan.toml` is picked up.

use assert_cmd::Command;
use legacyscan_test_util::{normalize_nondeterministic, sample_units};
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn legacyscan_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("legacyscan").expect("legacyscan binary not found");
    cmd.current_dir(dir);
    cmd
}

fn write_units(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("units.json");
    std::fs::write(&path, sample_units().to_string()).expect("write units");
    path
}

fn read_json(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).expect("read json");
    serde_json::from_str(&text).expect("parse json")
}

#[test]
fn scan_annotates_units_and_writes_artifacts() {
    let tmp = TempDir::new().expect("temp dir");
    let input = write_units(tmp.path());

    legacyscan_cmd(tmp.path())
        .args(["scan", "--input"])
        .arg(&input)
        .args([
            "--output",
            "out/units.json",
            "--report-out",
            "out/report.json",
            "--markdown-out",
            "out/comment.md",
        ])
        .assert()
        .success();

    let units = read_json(&tmp.path().join("out/units.json"));
    let units = units.as_array().expect("array");
    assert_eq!(units.len(), 3);

    let first: Vec<_> = units[0]["mb_txn_usage"]
        .as_array()
        .expect("records")
        .iter()
        .map(|r| r["target_name"].as_str().unwrap_or(""))
        .collect();
    assert_eq!(first, vec!["S066", "VKM2"]);

    let second = units[1]["mb_txn_usage"].as_array().expect("records");
    assert_eq!(second.len(), 3);
    assert_eq!(second[0]["target_name"], "RVKRED04");
    assert_eq!(second[0]["ambiguous"], true);
    assert!(second[0]["suggested_statement"].is_null());
    assert_eq!(units[2]["mb_txn_usage"], serde_json::json!([]));
    assert_eq!(units[2]["inc_name"], "ZCLEAN");

    let report = normalize_nondeterministic(read_json(&tmp.path().join("out/report.json")));
    assert_eq!(report["schema"], "legacyscan.report.v1");
    assert_eq!(report["tool"]["version"], "__VERSION__");
    assert_eq!(report["started_at"], "__TIMESTAMP__");
    assert_eq!(report["verdict"], "warn");
    assert_eq!(report["data"]["units_scanned"], 3);
    assert_eq!(report["data"]["findings_total"], 5);
    assert_eq!(report["data"]["ambiguous_total"], 1);
    assert_eq!(report["data"]["by_category"]["table"], 3);

    let md = std::fs::read_to_string(tmp.path().join("out/comment.md")).expect("read md");
    assert!(md.contains("Verdict: **WARN**"));
    assert!(md.contains("### ZCREDIT / ZCREDIT_F02"));
}

#[test]
fn scan_reads_stdin_and_prints_units() {
    let tmp = TempDir::new().expect("temp dir");

    legacyscan_cmd(tmp.path())
        .args(["scan", "--input", "-"])
        .write_stdin(r#"[{"code": "CALL TRANSACTION 'VKM5'."}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"target_name\": \"VKM5\""))
        .stdout(predicate::str::contains("UKM_CASE"));
}

#[test]
fn fail_on_ambiguous_exits_with_2() {
    let tmp = TempDir::new().expect("temp dir");
    let input = write_units(tmp.path());

    legacyscan_cmd(tmp.path())
        .args(["--fail-on", "ambiguous", "scan", "--input"])
        .arg(&input)
        .args(["--output", "units.json"])
        .assert()
        .code(2);
}

#[test]
fn config_file_is_picked_up() {
    let tmp = TempDir::new().expect("temp dir");
    let input = write_units(tmp.path());
    std::fs::write(
        tmp.path().join("legacyscan.toml"),
        "output_field = \"legacy\"\nfail_on = \"any\"\n",
    )
    .expect("write config");

    legacyscan_cmd(tmp.path())
        .args(["scan", "--input"])
        .arg(&input)
        .args(["--output", "units.json"])
        .assert()
        .code(2);

    let units = read_json(&tmp.path().join("units.json"));
    assert!(units[0].get("legacy").is_some());
    assert!(units[0].get("mb_txn_usage").is_none());
}

#[test]
fn invalid_config_is_a_runtime_error() {
    let tmp = TempDir::new().expect("temp dir");
    let input = write_units(tmp.path());
    std::fs::write(tmp.path().join("legacyscan.toml"), "overlap = \"fuzzy\"\n")
        .expect("write config");

    legacyscan_cmd(tmp.path())
        .args(["scan", "--input"])
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown overlap"));
}

#[test]
fn malformed_units_are_a_runtime_error() {
    let tmp = TempDir::new().expect("temp dir");

    legacyscan_cmd(tmp.path())
        .args(["scan", "--input", "-"])
        .write_stdin("{\"code\": \"x\"}")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON array"));
}

#[test]
fn scan_dir_builds_units_from_files() {
    let tmp = TempDir::new().expect("temp dir");
    let src = tmp.path().join("src");
    std::fs::create_dir_all(&src).expect("mkdir");
    std::fs::write(src.join("zcredit.abap"), "SUBMIT rvkred03.\n").expect("write");
    std::fs::write(src.join("notes.md"), "SUBMIT rvkred03.\n").expect("write");

    legacyscan_cmd(tmp.path())
        .args(["scan-dir", "--root", "src", "--output", "units.json"])
        .assert()
        .success();

    let units = read_json(&tmp.path().join("units.json"));
    let units = units.as_array().expect("array");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0]["pgm_name"], "ZCREDIT");
    assert_eq!(units[0]["type"], "FILE");
    assert_eq!(units[0]["mb_txn_usage"][0]["target_name"], "RVKRED03");
}

#[test]
fn md_renders_previous_results() {
    let tmp = TempDir::new().expect("temp dir");
    let input = write_units(tmp.path());

    legacyscan_cmd(tmp.path())
        .args(["scan", "--input"])
        .arg(&input)
        .args(["--output", "units.json"])
        .assert()
        .success();

    legacyscan_cmd(tmp.path())
        .args(["md", "--results", "units.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Legacyscan report"))
        .stdout(predicate::str::contains("[OBSOLETE] `RVKRED04`"));
}

#[test]
fn explain_matcher_and_identifier() {
    let tmp = TempDir::new().expect("temp dir");

    legacyscan_cmd(tmp.path())
        .args(["explain", "usage.submit_program"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Program Submit"));

    legacyscan_cmd(tmp.path())
        .args(["explain", "s067"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S067 (TABLE)"))
        .stdout(predicate::str::contains("UKM_ITEM"));
}

#[test]
fn explain_unknown_exits_with_1() {
    let tmp = TempDir::new().expect("temp dir");

    legacyscan_cmd(tmp.path())
        .args(["explain", "ZNOT_DEPRECATED"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Available matcher ids"));
}

#[test]
fn catalog_lists_builtins_as_text_and_json() {
    let tmp = TempDir::new().expect("temp dir");

    legacyscan_cmd(tmp.path())
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("SD_VKMLOG_SHOW"));

    let output = legacyscan_cmd(tmp.path())
        .args(["catalog", "--json"])
        .output()
        .expect("run catalog");
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value.as_array().map(Vec::len), Some(13));
}
