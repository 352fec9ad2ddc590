use std::process::Command;

fn xtask(arg: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_xtask"))
        .arg(arg)
        .output()
        .expect("run xtask")
}

#[test]
fn xtask_help_runs() {
    let output = xtask("help");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xtask commands"));
}

#[test]
fn xtask_conform_passes() {
    let output = xtask("conform");
    assert!(
        output.status.success(),
        "conform failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn xtask_explain_coverage_passes() {
    assert!(xtask("explain-coverage").status.success());
}

#[test]
fn xtask_unknown_command_fails() {
    assert!(!xtask("nope").status.success());
}
