//! AWS configuration store and EC2 inventory access.
//!
//! [`AwsCli`] is the seam the lister talks to. [`AwsCliClient`] implements it by
//! shelling out to the `aws` executable.

use super::{cli, AwsError};
use crate::config::ListerConfig;
use crate::models::instance_query;
use async_trait::async_trait;

#[async_trait]
pub trait AwsCli: Send + Sync {
    /// Read a configuration value for a profile. `Ok(None)` when unset.
    async fn configure_get(&self, profile: &str, key: &str) -> Result<Option<String>, AwsError>;

    /// Table text of the profile's instances in `region`.
    async fn describe_instances(&self, profile: &str, region: &str) -> Result<String, AwsError>;

    /// All profile names known to the CLI.
    async fn list_profiles(&self) -> Result<Vec<String>, AwsError>;

    /// Account id behind the profile's credentials.
    async fn caller_account(&self, profile: &str) -> Result<String, AwsError>;
}

/// [`AwsCli`] backed by the `aws` executable.
#[derive(Debug, Clone)]
pub struct AwsCliClient {
    config: ListerConfig,
}

impl AwsCliClient {
    pub fn new(config: ListerConfig) -> AwsCliClient {
        AwsCliClient { config }
    }

    pub fn config(&self) -> &ListerConfig {
        &self.config
    }

    async fn run(&self, args: Vec<String>) -> Result<String, AwsError> {
        let envs = self.config.child_env();
        cli::run(&self.config.aws_bin, &args, &envs, self.config.max_output).await
    }

    /// Arguments for `ec2 describe-instances`.
    pub fn describe_instances_args(&self, profile: &str, region: &str) -> Vec<String> {
        let mut args: Vec<String> = [
            "ec2",
            "describe-instances",
            "--profile",
            profile,
            "--region",
            region,
            "--query",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        args.push(instance_query());
        args.push("--output".to_string());
        args.push("table".to_string());
        args.extend(self.config.extra_args.iter().cloned());
        args
    }
}

#[async_trait]
impl AwsCli for AwsCliClient {
    async fn configure_get(&self, profile: &str, key: &str) -> Result<Option<String>, AwsError> {
        let args = vec![
            "configure".to_string(),
            "get".to_string(),
            key.to_string(),
            "--profile".to_string(),
            profile.to_string(),
        ];
        match self.run(args).await {
            Ok(out) => {
                let value = out.trim();
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
            Err(e) if e.is_unset_key() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn describe_instances(&self, profile: &str, region: &str) -> Result<String, AwsError> {
        self.run(self.describe_instances_args(profile, region)).await
    }

    async fn list_profiles(&self) -> Result<Vec<String>, AwsError> {
        let args = vec!["configure".to_string(), "list-profiles".to_string()];
        let out = self.run(args).await?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn caller_account(&self, profile: &str) -> Result<String, AwsError> {
        let args = vec![
            "sts".to_string(),
            "get-caller-identity".to_string(),
            "--profile".to_string(),
            profile.to_string(),
            "--query".to_string(),
            "Account".to_string(),
            "--output".to_string(),
            "text".to_string(),
        ];
        Ok(self.run(args).await?.trim().to_string())
    }
}
