//! Profile enumeration and the profile summary.

use super::lister::resolve_region;
use crate::aws::{AwsCli, AwsError};
use itertools::Itertools;

/// Shown when a profile has no region configured.
pub const REGION_NOT_SET: &str = "Not set";

/// One row of the `--list-profiles` summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub profile: String,
    pub region: String,
    pub account_id: String,
}

/// Profiles to process: explicit ones first, then every known profile when `all` is set.
///
/// Duplicates are kept.
pub async fn collect_profiles<C: AwsCli + ?Sized>(
    client: &C,
    explicit: &[String],
    all: bool,
) -> Result<Vec<String>, AwsError> {
    let mut profiles = explicit.to_vec();
    if all {
        let known = client.list_profiles().await?;
        log::info!("found {} profile(s): {}", known.len(), known.iter().join(", "));
        profiles.extend(known);
    }
    Ok(profiles)
}

/// Region and account id for each profile, in order.
///
/// Lookup failures are reported in the row instead of aborting.
pub async fn summarize_profiles<C: AwsCli + ?Sized>(
    client: &C,
    profiles: &[String],
) -> Vec<ProfileSummary> {
    let mut rows = Vec::with_capacity(profiles.len());
    for profile in profiles {
        let region = match resolve_region(client, profile).await {
            Ok(Some(region)) => region,
            Ok(None) => REGION_NOT_SET.to_string(),
            Err(e) => format!("Error: {e}"),
        };
        let account_id = match client.caller_account(profile).await {
            Ok(account) => account,
            Err(e) => format!("Error: {e}"),
        };
        rows.push(ProfileSummary {
            profile: profile.clone(),
            region,
            account_id,
        });
    }
    rows
}
