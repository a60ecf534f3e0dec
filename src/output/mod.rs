//! Output formatting for the fleet report.
//!
//! - [`text`] - Plain text report and profile summary
//! - [`json`] - JSON report
//! - [`terminal`] - Terminal helpers

mod json;
mod terminal;
mod text;

pub use json::render_report_json;
pub use terminal::{pad_field, write_stdout};
pub use text::{render_profile_summary, render_report, BLOCK_SEPARATOR};
