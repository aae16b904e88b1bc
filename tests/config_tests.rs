//! Integration tests for the config command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::daylog_cmd;

#[test]
fn test_config_defaults_without_file() {
    let temp = TempDir::new().unwrap();

    daylog_cmd(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output = pretty"))
        .stdout(predicate::str::contains("timestamps = shared"));

    assert!(!temp.path().join("daylog.toml").exists());
}

#[test]
fn test_config_set_writes_file() {
    let temp = TempDir::new().unwrap();

    daylog_cmd(temp.path())
        .args(["config", "timestamps", "independent"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("daylog.toml")).unwrap();
    assert!(content.contains("timestamps = \"independent\""));

    daylog_cmd(temp.path())
        .args(["config", "timestamps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("independent"));
}

#[test]
fn test_config_path_flag() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf").join("custom.toml");

    daylog_cmd(temp.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "output", "compact"])
        .assert()
        .success();

    assert!(path.exists());
    assert!(!temp.path().join("daylog.toml").exists());
}

#[test]
fn test_config_env_variable() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("from-env.toml");
    fs::write(&path, "output = \"compact\"\n").unwrap();

    daylog_cmd(temp.path())
        .env("DAYLOG_CONFIG", &path)
        .args(["config", "output"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compact"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    daylog_cmd(temp.path())
        .args(["config", "editor"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key: 'editor'"))
        .stderr(predicate::str::contains("Valid keys: output, timestamps"));
}

#[test]
fn test_config_invalid_value_fails() {
    let temp = TempDir::new().unwrap();

    daylog_cmd(temp.path())
        .args(["config", "output", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid output format"));
}

#[test]
fn test_config_usage_without_key() {
    let temp = TempDir::new().unwrap();

    daylog_cmd(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: daylog config"));
}
