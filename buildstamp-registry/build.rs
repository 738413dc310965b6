//! Collects the build stamp and hands it to the crate as compile-time
//! environment variables (read back by `Stamp::compiled`).

use std::env;
use std::process::Command;

const KEYS: [&str; 5] = [
    "BUILD_TIMESTAMP",
    "BUILD_HOST",
    "BUILD_USER",
    "BUILD_SCM_REVISION",
    "BUILD_SCM_STATUS",
];

const UNKNOWN: &str = "unknown";

fn main() {
    for key in KEYS.iter().chain(&[
        "BUILDSTAMP_STAMP",
        "SOURCE_DATE_EPOCH",
        "HOSTNAME",
        "COMPUTERNAME",
        "USER",
        "USERNAME",
    ]) {
        println!("cargo:rerun-if-env-changed={key}");
    }

    if let Some(git_dir) = command_output("git", &["rev-parse", "--git-dir"]) {
        println!("cargo:rerun-if-changed={git_dir}/HEAD");
        println!("cargo:rerun-if-changed={git_dir}/index");
    } else {
        println!("cargo:rerun-if-changed=build.rs");
    }

    let values = if stamping_enabled() {
        [
            override_or("BUILD_TIMESTAMP", detect_timestamp),
            override_or("BUILD_HOST", detect_host),
            override_or("BUILD_USER", detect_user),
            override_or("BUILD_SCM_REVISION", detect_revision),
            override_or("BUILD_SCM_STATUS", detect_status),
        ]
    } else {
        // Unstamped build.
        [
            "0".to_string(),
            "redacted".to_string(),
            "redacted".to_string(),
            "0".to_string(),
            "redacted".to_string(),
        ]
    };

    let timestamp = &values[0];
    assert!(
        timestamp.parse::<i32>().is_ok(),
        "BUILD_TIMESTAMP must fit in a signed 32-bit integer, got '{timestamp}'"
    );

    for (key, value) in KEYS.iter().zip(values) {
        println!("cargo:rustc-env={key}={value}");
    }
}

fn stamping_enabled() -> bool {
    match env::var("BUILDSTAMP_STAMP") {
        Ok(v) => !matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        Err(_) => true,
    }
}

fn override_or(key: &str, detect: fn() -> String) -> String {
    env::var(key)
        .ok()
        .map(|v| single_line(&v))
        .filter(|v| !v.is_empty())
        .unwrap_or_else(detect)
}

fn detect_timestamp() -> String {
    let secs = match env::var("SOURCE_DATE_EPOCH") {
        Ok(v) => v
            .trim()
            .parse::<i64>()
            .expect("SOURCE_DATE_EPOCH must be an integer number of seconds"),
        Err(_) => chrono::Utc::now().timestamp(),
    };
    i32::try_from(secs)
        .expect("build timestamp does not fit in a signed 32-bit integer")
        .to_string()
}

fn detect_host() -> String {
    first_env(&["HOSTNAME", "COMPUTERNAME"])
        .or_else(|| command_output("hostname", &[]))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn detect_user() -> String {
    first_env(&["USER", "USERNAME"]).unwrap_or_else(|| UNKNOWN.to_string())
}

fn detect_revision() -> String {
    command_output("git", &["rev-parse", "HEAD"]).unwrap_or_else(|| UNKNOWN.to_string())
}

fn detect_status() -> String {
    let out = Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .ok()
        .filter(|o| o.status.success());
    match out {
        Some(o) if o.stdout.iter().all(u8::is_ascii_whitespace) => "clean".to_string(),
        Some(_) => "modified".to_string(),
        None => UNKNOWN.to_string(),
    }
}

fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|n| env::var(n).ok())
        .map(|v| single_line(&v))
        .find(|v| !v.is_empty())
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let out = Command::new(program).args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let s = single_line(&String::from_utf8_lossy(&out.stdout));
    (!s.is_empty()).then_some(s)
}

// rustc-env values cannot span lines.
fn single_line(s: &str) -> String {
    s.lines().next().unwrap_or_default().trim().to_string()
}
