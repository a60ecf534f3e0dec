//! Fleet listing across profiles.
//!
//! Profiles are handled strictly one after another; every profile yields
//! exactly one [`ProfileBlock`] in argument order.

use crate::aws::{AwsCli, AwsError};
use crate::models::{no_region_message, ProfileBlock, Report};
use colored::Colorize;

/// Look up the region configured for `profile`.
///
/// # Returns
/// * `Ok(Some(region))` - The configured region
/// * `Ok(None)` - No region set for this profile
/// * `Err` - The configuration store could not be queried
pub async fn resolve_region<C: AwsCli + ?Sized>(
    client: &C,
    profile: &str,
) -> Result<Option<String>, AwsError> {
    let region = client.configure_get(profile, "region").await?;
    log::debug!("profile {profile} region={region:?}");
    Ok(region)
}

/// List the instances of one profile.
///
/// A missing region is not an error: the block carries the diagnostic and no
/// listing call is made. Failures of either AWS call end up in a failed block.
///
/// # Arguments
/// * `client` - Configuration store and inventory access
/// * `profile` - Profile name
/// * `region_override` - Region to use instead of the configured one; blank means none
pub async fn list_instances<C: AwsCli + ?Sized>(
    client: &C,
    profile: &str,
    region_override: Option<&str>,
) -> ProfileBlock {
    let region_override = region_override.map(str::trim).filter(|r| !r.is_empty());
    let region = match region_override {
        Some(region) => Some(region.to_string()),
        None => match resolve_region(client, profile).await {
            Ok(region) => region,
            Err(e) => {
                log::warn!("region lookup {} for profile {profile}: {e}", "failed".on_red());
                return ProfileBlock::failed(profile, None, e.to_string());
            }
        },
    };

    let Some(region) = region else {
        log::warn!("{}", no_region_message(profile));
        return ProfileBlock::skipped(profile);
    };

    match client.describe_instances(profile, &region).await {
        Ok(table) => {
            log::info!(
                "profile {profile} region {region}: got {} bytes of table output",
                table.len()
            );
            ProfileBlock::listed(profile, &region, table)
        }
        Err(e) => {
            log::warn!(
                "describe-instances {} for profile {profile}: {e}",
                "failed".on_red()
            );
            ProfileBlock::failed(profile, Some(&region), e.to_string())
        }
    }
}

/// Process all profiles in order and collect the report.
///
/// # Returns
/// * `Ok(Report)` - One block per profile, in input order
/// * `Err` - When `profiles` is empty
pub async fn run<C: AwsCli + ?Sized>(
    client: &C,
    profiles: &[String],
    region_override: Option<&str>,
) -> Result<Report, Box<dyn std::error::Error>> {
    if profiles.is_empty() {
        return Err("no profiles given".into());
    }
    log::info!("#Start run() for {} profile(s)", profiles.len());

    let mut report = Report::new();
    for profile in profiles {
        report.push(list_instances(client, profile, region_override).await);
    }

    log::info!(
        "#End run() blocks={} failed={}",
        report.blocks.len(),
        report.failed_count()
    );
    Ok(report)
}
