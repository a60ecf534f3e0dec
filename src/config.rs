//! Run configuration and constants.

/// Executable used when `--aws-bin` / `AWS_EC2_LIST_AWS_BIN` is not set.
pub const DEFAULT_AWS_BIN: &str = "aws";

/// Default upper bound for captured stdout of a single AWS CLI call.
pub const MAX_OUTPUT_BYTES: usize = 5_000_000;

/// Environment variable the AWS CLI reads its pager from.
pub const PAGER_ENV: &str = "AWS_PAGER";

/// Environment variable holding the log level used when no `log4rs.yml` is found.
pub const LOG_LEVEL_ENV: &str = "AWS_EC2_LIST_LOG";

/// Log configuration file looked up in the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Exit status for a normal run.
pub const EXIT_OK: i32 = 0;

/// Exit status when no profile was given.
pub const EXIT_USAGE: i32 = 1;

/// Exit status with `--strict` when at least one profile failed.
pub const EXIT_FAILED_PROFILES: i32 = 2;

/// Settings handed to the AWS client and the lister.
#[derive(Debug, Clone, PartialEq)]
pub struct ListerConfig {
    /// Path or name of the `aws` executable.
    pub aws_bin: String,
    /// Extra arguments appended to `describe-instances`.
    pub extra_args: Vec<String>,
    /// Limit for captured stdout per call.
    pub max_output: usize,
}

impl Default for ListerConfig {
    fn default() -> Self {
        ListerConfig {
            aws_bin: DEFAULT_AWS_BIN.to_string(),
            extra_args: vec![],
            max_output: MAX_OUTPUT_BYTES,
        }
    }
}

impl ListerConfig {
    /// Environment overrides for child processes, the pager is always off.
    pub fn child_env(&self) -> Vec<(&'static str, &'static str)> {
        vec![(PAGER_ENV, "")]
    }
}
