//! Basic CLI E2E tests.
//!
//! Commands run via cargo against an isolated HOME so nothing touches the
//! real data directory.

use std::path::Path;
use std::process::Command;

fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "lifegrid-cli", "--"])
        .args(args)
        .env("HOME", home)
        .output()
        .expect("failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);
    (stdout, stderr, code)
}

#[test]
fn help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["--help"]);
    assert_eq!(code, 0);
    for command in ["profile", "grid", "goal", "task", "ai", "config"] {
        assert!(stdout.contains(command), "missing command: {command}");
    }
}

#[test]
fn onboarding_and_goal_flow() {
    let home = tempfile::tempdir().unwrap();

    let (_, _, code) = run_cli(
        home.path(),
        &["profile", "login", "Ada", "ada@example.com"],
    );
    assert_eq!(code, 0);

    let (_, _, code) = run_cli(
        home.path(),
        &["profile", "onboard", "1999-06-15", "--status", "STUDYING"],
    );
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(home.path(), &["goal", "set", "30", "12", "Ship it"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("30-12"));

    let (stdout, _, code) = run_cli(home.path(), &["goal", "list"]);
    assert_eq!(code, 0);
    let goals: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(goals["30-12"]["text"], "Ship it");
    assert_eq!(goals["30-12"]["isCompleted"], false);

    let (stdout, _, code) = run_cli(home.path(), &["goal", "toggle", "30-12"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("completed"));

    let (stdout, _, code) = run_cli(home.path(), &["goal", "link", "30-12"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("calendar.google.com"));
}

#[test]
fn oversized_goal_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    let long = "x".repeat(61);
    let (_, stderr, code) = run_cli(home.path(), &["goal", "set", "0", "1", &long]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn task_flow() {
    let home = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["task", "set", "60", "Deep work"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("10:00 - 10:10"));

    let (stdout, _, code) = run_cli(home.path(), &["task", "list"]);
    assert_eq!(code, 0);
    let tasks: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(tasks["60"]["timeRange"], "10:00 - 10:10");

    let (stdout, _, code) = run_cli(
        home.path(),
        &["task", "link", "60", "--date", "2026-03-01"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("20260301T100000/20260301T101000"));
}

#[test]
fn grid_status_is_json() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["grid", "status"]);
    assert_eq!(code, 0);
    let status: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    // No birth date on record: neutral zero state.
    assert_eq!(status["livedWeeks"], 0);
    assert_eq!(status["totalWeeks"], 4680);
    assert!(status["blockTimeRange"].as_str().unwrap().contains(" - "));
    assert!(!status["fact"].as_str().unwrap().is_empty());
}

#[test]
fn config_get_and_set() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "ui.fact_interval_secs"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "3");

    let (_, _, code) = run_cli(home.path(), &["config", "set", "ui.show_stages", "true"]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "ui.show_stages"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "true");

    let (_, _, code) = run_cli(home.path(), &["config", "get", "ui.nope"]);
    assert_eq!(code, 1);
}
