//! CLI surface: help, version and startup validation.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with a clean environment: no project, no token, no user config.
fn rider(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gcp-rider"));
    cmd.env("NO_COLOR", "1")
        .env_remove("GCP_PROJECT_ID")
        .env_remove("GCP_RIDER_LOG_FILE")
        .env_remove("CLOUDSDK_AUTH_ACCESS_TOKEN")
        .env("GCP_RIDER_CONFIG", config_dir.path().join("config.yaml"));
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_help_flag_shows_commands() {
    let dir = TempDir::new().expect("temp dir");
    rider(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("pick"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("--project"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    let dir = TempDir::new().expect("temp dir");
    rider(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gcp-rider"));
}

#[test]
fn test_version_command_needs_no_project() {
    let dir = TempDir::new().expect("temp dir");
    rider(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("gcp-rider "));
}

#[test]
fn test_version_command_json() {
    let dir = TempDir::new().expect("temp dir");
    let output = rider(&dir)
        .args(["version", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_numeric_no_color_env_is_accepted() {
    let dir = TempDir::new().expect("temp dir");
    for value in ["1", "0", "true", ""] {
        rider(&dir)
            .env("NO_COLOR", value)
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("gcp-rider "));
    }
}

#[test]
fn test_no_color_flag_is_accepted() {
    let dir = TempDir::new().expect("temp dir");
    rider(&dir)
        .env_remove("NO_COLOR")
        .args(["--no-color", "version"])
        .assert()
        .success();
}

#[test]
fn test_unknown_command_is_usage_error() {
    let dir = TempDir::new().expect("temp dir");
    rider(&dir).arg("frobnicate").assert().code(2);
}

// --- Startup validation ---

#[test]
fn test_missing_project_fails_before_touching_terminal() {
    let dir = TempDir::new().expect("temp dir");
    rider(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: GCP_PROJECT_ID environment variable not set (or pass --project)",
        ));
}

#[test]
fn test_missing_project_fails_for_list_too() {
    let dir = TempDir::new().expect("temp dir");
    rider(&dir)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GCP_PROJECT_ID environment variable not set"));
}

#[test]
fn test_blank_project_counts_as_missing() {
    let dir = TempDir::new().expect("temp dir");
    rider(&dir)
        .env("GCP_PROJECT_ID", "   ")
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GCP_PROJECT_ID environment variable not set"));
}

#[test]
fn test_invalid_page_size_in_config_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("config.yaml"), "api:\n  page_size: 0\n").expect("write");
    rider(&dir)
        .args(["list", "--project", "demo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("page_size"));
}

#[test]
fn test_malformed_config_reports_path_and_reason() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("config.yaml");
    std::fs::write(&config, "api: [not, a, map\n").expect("write");
    rider(&dir)
        .args(["list", "--project", "demo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: cannot load config: cannot parse"))
        .stderr(predicate::str::contains(config.display().to_string()));
}
