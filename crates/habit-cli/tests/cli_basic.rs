//! Basic CLI E2E tests.
//!
//! Tests invoke the built `habits` binary with an isolated HOME and verify outputs.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command against `home` and return (stdout, stderr, code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    run_cli_with_log(home, args, None)
}

/// Like `run_cli`, optionally setting RUST_LOG.
fn run_cli_with_log(home: &Path, args: &[&str], rust_log: Option<&str>) -> (String, String, i32) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_habits"));
    command
        .args(args)
        .env("HOME", home)
        .env_remove("HABIT_TRACKER_ENV")
        .env_remove("RUST_LOG");
    if let Some(filter) = rust_log {
        command.env("RUST_LOG", filter);
    }
    let output = command
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed: {:?}\n{}", args, stderr);
    stdout
}

fn habits_file(home: &Path) -> std::path::PathBuf {
    home.join(".config/habit-tracker/habits.json")
}

#[test]
fn test_add_and_list() {
    let home = TempDir::new().unwrap();
    let out = run_cli_success(home.path(), &["add", "read", "Read 20 pages"]);
    assert!(out.contains("Habit added: read"));

    let out = run_cli_success(home.path(), &["list"]);
    assert!(out.contains("read: Read 20 pages (0 days done)"));
    assert!(habits_file(home.path()).exists());
}

#[test]
fn test_list_empty() {
    let home = TempDir::new().unwrap();
    let out = run_cli_success(home.path(), &["list"]);
    assert!(out.contains("No habits found."));
}

#[test]
fn test_add_existing_requires_replace() {
    let home = TempDir::new().unwrap();
    run_cli_success(home.path(), &["add", "read"]);
    run_cli_success(home.path(), &["done", "read", "--date", "2024-01-01"]);

    let (_, stderr, code) = run_cli(home.path(), &["add", "read", "again"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("already exists"));

    run_cli_success(home.path(), &["add", "read", "again", "--replace"]);
    let out = run_cli_success(home.path(), &["list"]);
    assert!(out.contains("read: again (0 days done)"));
}

#[test]
fn test_done_and_report_json() {
    let home = TempDir::new().unwrap();
    run_cli_success(home.path(), &["add", "run"]);
    run_cli_success(home.path(), &["done", "run"]);
    run_cli_success(home.path(), &["done", "run"]);

    let out = run_cli_success(home.path(), &["report", "--json"]);
    let report: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(report["run"], 1);

    let out = run_cli_success(home.path(), &["report"]);
    assert!(out.contains("run: 1 day streak"));
}

#[test]
fn test_done_rejects_invalid_date() {
    let home = TempDir::new().unwrap();
    run_cli_success(home.path(), &["add", "run"]);

    let (_, stderr, code) = run_cli(home.path(), &["done", "run", "--date", "2024-02-30"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid date"));
}

#[test]
fn test_unknown_habit_is_tolerated() {
    let home = TempDir::new().unwrap();
    let out = run_cli_success(home.path(), &["done", "ghost"]);
    assert!(out.contains("No habit named 'ghost'."));
    let out = run_cli_success(home.path(), &["remove", "ghost"]);
    assert!(out.contains("No habit named 'ghost'."));
}

#[test]
fn test_list_json() {
    let home = TempDir::new().unwrap();
    run_cli_success(home.path(), &["add", "read", "Read"]);
    run_cli_success(home.path(), &["done", "read", "--date", "2020-05-01"]);

    let out = run_cli_success(home.path(), &["list", "--json"]);
    let habits: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(habits[0]["name"], "read");
    assert_eq!(habits[0]["entries"], 1);
    assert_eq!(habits[0]["streak"], 0);
    assert_eq!(habits[0]["last_done"], "2020-05-01");
}

#[test]
fn test_corrupt_file_is_an_error() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("habits.json");
    std::fs::write(&file, "{ broken").unwrap();

    let (_, stderr, code) = run_cli(home.path(), &["--file", file.to_str().unwrap(), "list"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Failed to parse habits"));
}

#[test]
fn test_merge_files() {
    let home = TempDir::new().unwrap();
    let mine = home.path().join("mine.json");
    let theirs = home.path().join("theirs.json");
    let mine_arg = mine.to_str().unwrap();
    let theirs_arg = theirs.to_str().unwrap();

    run_cli_success(home.path(), &["--file", mine_arg, "add", "x"]);
    run_cli_success(home.path(), &["--file", mine_arg, "done", "x", "--date", "2024-01-01"]);
    run_cli_success(home.path(), &["--file", theirs_arg, "add", "x"]);
    run_cli_success(home.path(), &["--file", theirs_arg, "done", "x", "--date", "2024-01-02"]);
    run_cli_success(home.path(), &["--file", theirs_arg, "add", "y"]);

    let out = run_cli_success(home.path(), &["--file", mine_arg, "merge", theirs_arg]);
    assert!(out.contains("2 habit(s) total"));

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&mine).unwrap()).unwrap();
    assert_eq!(doc["x"]["history"], serde_json::json!(["2024-01-01", "2024-01-02"]));
    assert!(doc.get("y").is_some());
}

#[test]
fn test_config_get_set() {
    let home = TempDir::new().unwrap();
    let out = run_cli_success(home.path(), &["config", "get", "report.hide_inactive"]);
    assert_eq!(out.trim(), "false");

    run_cli_success(home.path(), &["config", "set", "report.hide_inactive", "true"]);
    let out = run_cli_success(home.path(), &["config", "get", "report.hide_inactive"]);
    assert_eq!(out.trim(), "true");

    let (_, _, code) = run_cli(home.path(), &["config", "get", "report.nope"]);
    assert_ne!(code, 0);
}

#[test]
fn test_configured_habits_file() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("custom.json");
    run_cli_success(
        home.path(),
        &["config", "set", "storage.habits_file", custom.to_str().unwrap()],
    );
    run_cli_success(home.path(), &["add", "walk"]);
    assert!(custom.exists());
}

#[test]
fn test_hide_inactive_report() {
    let home = TempDir::new().unwrap();
    run_cli_success(home.path(), &["add", "idle"]);
    run_cli_success(home.path(), &["add", "active"]);
    run_cli_success(home.path(), &["done", "active"]);
    run_cli_success(home.path(), &["config", "set", "report.hide_inactive", "true"]);

    let out = run_cli_success(home.path(), &["report"]);
    assert!(out.contains("active: 1 day streak"));
    assert!(!out.contains("idle"));
}

#[test]
fn test_explicit_file_leaves_config_alone() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("habits.json");
    let file_arg = file.to_str().unwrap();

    run_cli_success(home.path(), &["--file", file_arg, "add", "read"]);
    run_cli_success(home.path(), &["--file", file_arg, "list"]);
    run_cli_success(home.path(), &["--file", file_arg, "report"]);

    assert!(!home.path().join(".config/habit-tracker/config.toml").exists());
}

#[test]
fn test_rust_log_overrides_default_level() {
    let home = TempDir::new().unwrap();
    run_cli_success(home.path(), &["add", "read"]);

    let (_, stderr, code) = run_cli(home.path(), &["add", "read", "--replace"]);
    assert_eq!(code, 0);
    assert!(stderr.contains("replaced existing habit"));

    let (_, stderr, code) =
        run_cli_with_log(home.path(), &["add", "read", "--replace"], Some("warn"));
    assert_eq!(code, 0);
    assert!(!stderr.contains("replaced existing habit"));
}
