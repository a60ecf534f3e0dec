//! JSON rendering of the report.

use crate::models::Report;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize, Debug)]
struct JsonReport<'a> {
    generated_at: String,
    blocks: Vec<JsonBlock<'a>>,
}

#[derive(Serialize, Debug)]
struct JsonBlock<'a> {
    profile: &'a str,
    region: Option<&'a str>,
    status: String,
    content: String,
}

/// Render the report as a pretty printed JSON document.
///
/// # Arguments
/// * `report` - The report to render
/// * `generated_at` - Timestamp recorded in the document
pub fn render_report_json(
    report: &Report,
    generated_at: DateTime<Utc>,
) -> Result<String, Box<dyn Error>> {
    let doc = JsonReport {
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        blocks: report
            .blocks
            .iter()
            .map(|b| JsonBlock {
                profile: &b.profile,
                region: b.region.as_deref(),
                status: b.status.to_string(),
                content: b.content(),
            })
            .collect(),
    };
    let mut json =
        serde_json::to_string_pretty(&doc).map_err(|e| format!("Error serializing JSON: {e}"))?;
    json.push('\n');
    Ok(json)
}
