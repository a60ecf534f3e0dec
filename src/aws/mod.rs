//! AWS CLI interaction.
//!
//! This module handles all AWS-related operations:
//! - [`cli`] - Process execution for the AWS CLI
//! - [`client`] - Configuration store and EC2 inventory calls
//! - [`error`] - Errors from external calls

mod cli;
mod client;
mod error;

// Re-export public types and functions
pub use cli::split_args;
pub use client::{AwsCli, AwsCliClient};
pub use error::AwsError;
