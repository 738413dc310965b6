//! Human- and machine-readable renderings of a build record.

use anyhow::Context;
use buildstamp_types::{BuildRecord, Field, RecordReport};
use chrono::SecondsFormat;

fn timestamp_note(record: &BuildRecord) -> String {
    match record.built_at() {
        Some(at) => at.to_rfc3339_opts(SecondsFormat::Secs, true),
        None => "unstamped".to_string(),
    }
}

pub fn render_text(record: &BuildRecord) -> String {
    let mut out = String::new();
    for (field, value) in record.entries() {
        out.push_str(&format!("{:<9} {}", format!("{}:", field), value));
        if field == Field::Timestamp {
            out.push_str(&format!(" ({})", timestamp_note(record)));
        }
        out.push('\n');
    }
    out
}

pub fn render_md(record: &BuildRecord) -> String {
    let mut out = String::new();
    out.push_str("# buildstamp record\n\n");
    out.push_str("| Field | Value |\n");
    out.push_str("|---|---|\n");
    for (field, value) in record.entries() {
        let value = value.to_string();
        let value = if value.is_empty() {
            "_empty_".to_string()
        } else {
            format!("`{}`", value)
        };
        out.push_str(&format!("| {} | {} |\n", field, value));
    }
    out.push_str(&format!("\n- Built at: {}\n", timestamp_note(record)));
    out
}

pub fn render_json(report: &RecordReport) -> anyhow::Result<String> {
    let mut s = serde_json::to_string_pretty(report).context("serialize json")?;
    s.push('\n');
    Ok(s)
}
