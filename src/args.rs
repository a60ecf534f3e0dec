//! Command line arguments.

use crate::aws::split_args;
use crate::config::{ListerConfig, DEFAULT_AWS_BIN, MAX_OUTPUT_BYTES};
use clap::{Parser, ValueEnum};

/// Report format written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// AWS CLI tables separated by blank lines
    Text,
    /// Structured blocks as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "aws-ec2-list")]
#[command(version, about = "List EC2 instances for one or more AWS CLI profiles")]
pub struct Args {
    /// AWS CLI profiles to list, in the given order
    pub profiles: Vec<String>,

    /// Also list every profile known to the AWS CLI
    #[arg(long)]
    pub all: bool,

    /// Print profile, region and account id instead of listing instances
    #[arg(long, conflicts_with_all = ["format", "strict"])]
    pub list_profiles: bool,

    /// Use this region for every profile instead of the configured one
    #[arg(short, long, env = "AWS_EC2_LIST_REGION")]
    pub region: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// AWS CLI executable
    #[arg(long, env = "AWS_EC2_LIST_AWS_BIN", default_value = DEFAULT_AWS_BIN)]
    pub aws_bin: String,

    /// Extra arguments for describe-instances, e.g. "--filters 'Name=instance-state-name,Values=running'"
    #[arg(long, env = "AWS_EC2_LIST_EXTRA_ARGS", allow_hyphen_values = true)]
    pub extra_args: Option<String>,

    /// Exit with status 2 when any profile failed
    #[arg(long)]
    pub strict: bool,

    /// Largest describe-instances output accepted per profile, in bytes; larger output fails that profile
    #[arg(long, env = "AWS_EC2_LIST_MAX_OUTPUT", value_name = "BYTES", default_value_t = MAX_OUTPUT_BYTES)]
    pub max_output: usize,
}

impl Args {
    /// True when nothing was asked for and only the usage message applies.
    pub fn needs_usage(&self) -> bool {
        self.profiles.is_empty() && !self.all && !self.list_profiles
    }

    pub fn to_config(&self) -> ListerConfig {
        ListerConfig {
            aws_bin: self.aws_bin.clone(),
            extra_args: self
                .extra_args
                .as_deref()
                .map(split_args)
                .unwrap_or_default(),
            max_output: self.max_output,
        }
    }
}

/// Usage line printed when no profile is given.
pub fn usage() -> String {
    format!(
        "Usage: {} <profile1> [profile2] [profile3] ...",
        env!("CARGO_PKG_NAME")
    )
}
