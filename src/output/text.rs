//! Plain text rendering of the report and the profile summary.

use crate::models::Report;
use crate::processing::ProfileSummary;

use super::terminal::pad_field;

/// Separator appended after every block.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Render the report as text: every block's content followed by a blank line.
///
/// Trailing newlines of a block are dropped before the separator so blocks
/// are always exactly one blank line apart.
pub fn render_report(report: &Report) -> String {
    let mut buffer = String::new();
    for block in &report.blocks {
        buffer.push_str(block.content().trim_end_matches(['\n', '\r']));
        buffer.push_str(BLOCK_SEPARATOR);
    }
    buffer
}

/// Render the profile summary as an aligned table.
pub fn render_profile_summary(rows: &[ProfileSummary]) -> String {
    if rows.is_empty() {
        return "No AWS profiles found.\n".to_string();
    }

    let headers = ["Profile", "Region", "Account ID"];
    let widths = [
        column_width(headers[0], rows.iter().map(|r| r.profile.as_str())),
        column_width(headers[1], rows.iter().map(|r| r.region.as_str())),
        column_width(headers[2], rows.iter().map(|r| r.account_id.as_str())),
    ];

    let line = |cells: [&str; 3]| {
        let cells: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(c, w)| pad_field(c, *w))
            .collect();
        format!("{}\n", cells.join("  ").trim_end())
    };

    let mut out = line(headers);
    out.push_str(&format!(
        "{}\n",
        "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1))
    ));
    for r in rows {
        out.push_str(&line([
            r.profile.as_str(),
            r.region.as_str(),
            r.account_id.as_str(),
        ]));
    }
    out
}

/// Widest cell of a column in characters, `pad_field` pads by characters too.
fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.chars().count())
}
