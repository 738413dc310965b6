//! End-to-end tests for the `buildstamp` binary.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn buildstamp() -> Command {
    Command::cargo_bin("buildstamp").expect("buildstamp binary")
}

fn empty_dir() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}

fn show_json(dir: &TempDir, extra: &[&str]) -> serde_json::Value {
    let out = buildstamp()
        .current_dir(dir.path())
        .args(["show", "--format", "json"])
        .args(extra)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("json output")
}

#[test]
fn test_show_text_lists_every_field() {
    let temp = empty_dir();

    buildstamp()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("timestamp: ")
                .and(predicate::str::contains("\nhostname: "))
                .and(predicate::str::contains("\nuser:"))
                .and(predicate::str::contains("\nrevision: "))
                .and(predicate::str::contains("\nstatus:")),
        );
}

#[test]
fn test_show_json_has_schema_and_five_keys() {
    let temp = empty_dir();
    let v = show_json(&temp, &[]);

    assert_eq!(v["schema"], "buildstamp.record.v1");
    assert_eq!(v["tool"]["name"], "buildstamp");

    let record = v["record"].as_object().expect("record object");
    let mut keys: Vec<_> = record.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["hostname", "revision", "status", "timestamp", "user"]);
    assert!(record["timestamp"].is_i64());
    assert!(!record["revision"].as_str().expect("revision").is_empty());
}

#[test]
fn test_show_redact_flags_accumulate() {
    let temp = empty_dir();
    let v = show_json(&temp, &["--redact", "hostname", "--redact", "user"]);

    assert_eq!(v["record"]["hostname"], "redacted");
    assert_eq!(v["record"]["user"], "redacted");
}

#[test]
fn test_show_redact_timestamp_reads_zero() {
    let temp = empty_dir();
    let v = show_json(&temp, &["--redact", "timestamp"]);
    assert_eq!(v["record"]["timestamp"], 0);
}

#[test]
fn test_show_rejects_unknown_field() {
    let temp = empty_dir();

    buildstamp()
        .current_dir(temp.path())
        .args(["show", "--redact", "branch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown build record field"));
}

#[test]
fn test_show_markdown() {
    let temp = empty_dir();

    buildstamp()
        .current_dir(temp.path())
        .args(["show", "--format", "markdown"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("# buildstamp record")
                .and(predicate::str::contains("| revision |")),
        );
}

#[test]
fn test_config_file_sets_format_and_redaction() {
    let temp = empty_dir();
    fs::write(
        temp.path().join("buildstamp.toml"),
        r#"
[output]
format = "json"

[redact]
fields = ["hostname"]
"#,
    )
    .unwrap();

    let out = buildstamp()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("config selects json");
    assert_eq!(v["record"]["hostname"], "redacted");
    assert_ne!(v["record"]["user"], "redacted");
}

#[test]
fn test_cli_format_overrides_config() {
    let temp = empty_dir();
    fs::write(
        temp.path().join("buildstamp.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    buildstamp()
        .current_dir(temp.path())
        .args(["show", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("timestamp: "));
}

#[test]
fn test_explicit_config_path() {
    let temp = empty_dir();
    let cfg = temp.path().join("custom.toml");
    fs::write(&cfg, "[redact]\nfields = [\"status\"]\n").unwrap();

    buildstamp()
        .current_dir(temp.path())
        .args(["field", "status", "--config"])
        .arg(&cfg)
        .assert()
        .success()
        .stdout("redacted\n");
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = empty_dir();

    buildstamp()
        .current_dir(temp.path())
        .args(["show", "--config", "nope.toml"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_invalid_config_fails() {
    let temp = empty_dir();
    fs::write(temp.path().join("buildstamp.toml"), "[output]\nformat = 7\n").unwrap();

    buildstamp()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("buildstamp.toml"));
}

#[test]
fn test_field_prints_single_raw_value() {
    let temp = empty_dir();
    let v = show_json(&temp, &[]);
    let revision = v["record"]["revision"].as_str().expect("revision").to_string();

    buildstamp()
        .current_dir(temp.path())
        .args(["field", "revision"])
        .assert()
        .success()
        .stdout(format!("{revision}\n"));
}

#[test]
fn test_field_timestamp_is_integer() {
    let temp = empty_dir();

    let out = buildstamp()
        .current_dir(temp.path())
        .args(["field", "timestamp"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let s = String::from_utf8(out).expect("utf8");
    s.trim().parse::<i32>().expect("integer timestamp");
}
