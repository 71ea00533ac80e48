use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use cable_model::ValidationReport;

/// Serialized form of one run.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub input: &'a str,
    /// RFC 3339 UTC timestamp.
    pub generated_at: String,
    pub report: &'a ValidationReport,
}

impl<'a> JsonReport<'a> {
    pub fn new(input: &'a str, report: &'a ValidationReport) -> Self {
        Self {
            tool: "cablecheck",
            version: env!("CARGO_PKG_VERSION"),
            input,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            report,
        }
    }
}

pub fn render_json_report(report: &JsonReport<'_>) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize validation report")
}

pub fn write_json_report(path: &Path, input: &str, report: &ValidationReport) -> Result<()> {
    let json = render_json_report(&JsonReport::new(input, report))?;
    fs::write(path, json).with_context(|| format!("write report {}", path.display()))
}
