//! In-memory [`AwsCli`] used by unit tests.

use crate::aws::{AwsCli, AwsError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeAws {
    regions: HashMap<String, String>,
    region_failures: HashMap<String, String>,
    describe_failures: HashMap<String, String>,
    accounts: HashMap<String, String>,
    profiles: Vec<String>,
    region_lookups: Mutex<Vec<String>>,
    describe_calls: Mutex<Vec<(String, String)>>,
}

fn failure(stderr: &str) -> AwsError {
    AwsError::CommandFailed {
        program: "aws".to_string(),
        status: Some(255),
        stderr: stderr.to_string(),
    }
}

impl FakeAws {
    pub fn new() -> FakeAws {
        FakeAws::default()
    }

    pub fn with_region(mut self, profile: &str, region: &str) -> FakeAws {
        self.regions.insert(profile.to_string(), region.to_string());
        self
    }

    pub fn failing_region(mut self, profile: &str, stderr: &str) -> FakeAws {
        self.region_failures
            .insert(profile.to_string(), stderr.to_string());
        self
    }

    pub fn failing_describe(mut self, profile: &str, stderr: &str) -> FakeAws {
        self.describe_failures
            .insert(profile.to_string(), stderr.to_string());
        self
    }

    pub fn with_account(mut self, profile: &str, account: &str) -> FakeAws {
        self.accounts.insert(profile.to_string(), account.to_string());
        self
    }

    pub fn with_profiles(mut self, profiles: &[&str]) -> FakeAws {
        self.profiles = profiles.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn region_lookups(&self) -> Vec<String> {
        self.region_lookups.lock().unwrap().clone()
    }

    pub fn describe_calls(&self) -> Vec<(String, String)> {
        self.describe_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AwsCli for FakeAws {
    async fn configure_get(&self, profile: &str, key: &str) -> Result<Option<String>, AwsError> {
        assert_eq!(key, "region");
        self.region_lookups.lock().unwrap().push(profile.to_string());
        if let Some(stderr) = self.region_failures.get(profile) {
            return Err(failure(stderr));
        }
        Ok(self.regions.get(profile).cloned())
    }

    async fn describe_instances(&self, profile: &str, region: &str) -> Result<String, AwsError> {
        self.describe_calls
            .lock()
            .unwrap()
            .push((profile.to_string(), region.to_string()));
        if let Some(stderr) = self.describe_failures.get(profile) {
            return Err(failure(stderr));
        }
        Ok(format!("table {profile} {region}"))
    }

    async fn list_profiles(&self) -> Result<Vec<String>, AwsError> {
        Ok(self.profiles.clone())
    }

    async fn caller_account(&self, profile: &str) -> Result<String, AwsError> {
        self.accounts
            .get(profile)
            .cloned()
            .ok_or_else(|| failure("InvalidClientTokenId"))
    }
}
