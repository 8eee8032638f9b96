//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a throwaway data
//! directory and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against `data_dir` and return (stdout, stderr, code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "chronocat-cli", "--"])
        .args(args)
        .env("CHRONOCAT_DATA_DIR", data_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_target_set_and_show() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["target", "set", "2099-12-31"]);
    assert_eq!(code, 0, "target set failed: {stdout}");
    assert!(stdout.contains("TargetSet"));

    let (stdout, _, code) = run_cli(dir.path(), &["target", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("2099-12-31"));

    let (stdout, _, code) = run_cli(dir.path(), &["target", "clear"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("TargetCleared"));
}

#[test]
fn test_focus_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["focus", "start"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("SessionStarted"));

    let (stdout, _, code) = run_cli(dir.path(), &["focus", "pause"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("SessionPaused"));

    let (stdout, _, code) = run_cli(dir.path(), &["focus", "reset"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("SessionReset"));
}

#[test]
fn test_status_outputs_snapshot_json() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["status"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("status should print JSON");
    assert_eq!(parsed["type"], "StateSnapshot");
    assert_eq!(parsed["mode"], "target");
    assert_eq!(parsed["focus_status"], "idle");
}

#[test]
fn test_config_roundtrip_and_validation() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "color"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "#ff7700");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "color", "#123abc"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "color"]);
    assert_eq!(stdout.trim(), "#123abc");

    let (_, stderr, code) = run_cli(dir.path(), &["config", "set", "color", "red"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "focusDuration", "0"]);
    assert_eq!(code, 1);
}

#[test]
fn test_quote_prints_an_author() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["quote"]);
    assert_eq!(code, 0);
    assert!(stdout.contains('-'));
}
