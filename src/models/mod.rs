//! Domain models for the EC2 fleet listing.
//!
//! - [`projection`] - Instance columns and the `--query` expression
//! - [`report`] - Per-profile blocks collected into a [`Report`]

mod projection;
mod report;

// Re-export public types
pub use projection::{instance_query, Column, COLUMNS};
pub use report::{no_region_message, BlockStatus, ProfileBlock, Report};
