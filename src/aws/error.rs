//! Errors raised while talking to the AWS CLI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AwsError {
    #[error("failed to start {program}: {reason}")]
    Spawn { program: String, reason: String },

    #[error("{program} exited with {}: {stderr}", exit_status(.status))]
    CommandFailed {
        program: String,
        /// Exit code, `None` when the process was killed by a signal.
        status: Option<i32>,
        stderr: String,
    },

    #[error("response too large: {len} bytes (limit {limit})")]
    OutputTooLarge { len: usize, limit: usize },

    #[error("invalid UTF-8 in output: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

impl AwsError {
    /// `aws configure get` exits with status 1 and prints nothing when the key is unset.
    pub fn is_unset_key(&self) -> bool {
        matches!(
            self,
            AwsError::CommandFailed { status: Some(1), stderr, .. } if stderr.trim().is_empty()
        )
    }
}

fn exit_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_key_detection() {
        let unset = AwsError::CommandFailed {
            program: "aws".to_string(),
            status: Some(1),
            stderr: "\n".to_string(),
        };
        assert!(unset.is_unset_key());

        let missing_profile = AwsError::CommandFailed {
            program: "aws".to_string(),
            status: Some(255),
            stderr: "The config profile (nope) could not be found".to_string(),
        };
        assert!(!missing_profile.is_unset_key());

        let status_one_with_stderr = AwsError::CommandFailed {
            program: "aws".to_string(),
            status: Some(1),
            stderr: "boom".to_string(),
        };
        assert!(!status_one_with_stderr.is_unset_key());
    }

    #[test]
    fn test_display_includes_stderr() {
        let err = AwsError::CommandFailed {
            program: "aws".to_string(),
            status: Some(255),
            stderr: "ExpiredToken".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ExpiredToken"), "msg={msg}");
        assert!(msg.contains("255"), "msg={msg}");
    }
}
