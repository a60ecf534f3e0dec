//! List EC2 instances across AWS CLI profiles.
//!
//! - [`aws`] - AWS CLI execution and the [`aws::AwsCli`] seam
//! - [`models`] - Projection and report types
//! - [`processing`] - Per-profile listing loop and profile enumeration
//! - [`output`] - Text and JSON rendering

pub mod args;
pub mod aws;
pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use args::{usage, Args, OutputFormat};
use aws::{AwsCli, AwsCliClient};
use config::{EXIT_FAILED_PROFILES, EXIT_OK, EXIT_USAGE};
use std::error::Error;

/// Text to print and the process exit status.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub output: String,
    pub exit_code: i32,
}

/// Run the command line request against `client` and render the result.
///
/// Nothing is written here; the caller prints [`Outcome::output`] once.
pub async fn execute_with<C: AwsCli + ?Sized>(
    args: &Args,
    client: &C,
) -> Result<Outcome, Box<dyn Error>> {
    if args.needs_usage() {
        return Ok(Outcome {
            output: format!("{}\n", usage()),
            exit_code: EXIT_USAGE,
        });
    }

    let enumerate_all = args.all || (args.list_profiles && args.profiles.is_empty());
    let profiles = processing::collect_profiles(client, &args.profiles, enumerate_all).await?;

    if args.list_profiles {
        let rows = processing::summarize_profiles(client, &profiles).await;
        return Ok(Outcome {
            output: output::render_profile_summary(&rows),
            exit_code: EXIT_OK,
        });
    }

    if profiles.is_empty() {
        log::warn!("no AWS profiles found");
        return Ok(Outcome {
            output: format!("{}\n", usage()),
            exit_code: EXIT_USAGE,
        });
    }

    let report = processing::run(client, &profiles, args.region.as_deref()).await?;

    let output = match args.format {
        OutputFormat::Text => output::render_report(&report),
        OutputFormat::Json => output::render_report_json(&report, chrono::Utc::now())?,
    };
    let exit_code = if args.strict && report.failed_count() > 0 {
        EXIT_FAILED_PROFILES
    } else {
        EXIT_OK
    };

    Ok(Outcome { output, exit_code })
}

/// Run against the `aws` executable and print the result to stdout.
///
/// # Returns
/// * `Ok(exit_code)` - The status the process should exit with
pub async fn execute(args: &Args) -> Result<i32, Box<dyn Error>> {
    let client = AwsCliClient::new(args.to_config());
    log::debug!("config={:?}", client.config());

    let outcome = execute_with(args, &client).await?;
    output::write_stdout(&outcome.output)?;
    Ok(outcome.exit_code)
}
