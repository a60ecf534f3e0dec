//! Structured report built by the lister.

use std::fmt;

/// Outcome of processing one profile.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockStatus {
    /// Table text returned by `describe-instances`.
    Listed { table: String },
    /// The profile has no region configured.
    SkippedNoRegion,
    /// An AWS CLI call failed.
    Failed { cause: String },
}

/// Report block for a single profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileBlock {
    pub profile: String,
    pub region: Option<String>,
    pub status: BlockStatus,
}

impl ProfileBlock {
    pub fn listed(profile: &str, region: &str, table: String) -> ProfileBlock {
        ProfileBlock {
            profile: profile.to_string(),
            region: Some(region.to_string()),
            status: BlockStatus::Listed { table },
        }
    }

    pub fn skipped(profile: &str) -> ProfileBlock {
        ProfileBlock {
            profile: profile.to_string(),
            region: None,
            status: BlockStatus::SkippedNoRegion,
        }
    }

    pub fn failed(profile: &str, region: Option<&str>, cause: String) -> ProfileBlock {
        ProfileBlock {
            profile: profile.to_string(),
            region: region.map(str::to_string),
            status: BlockStatus::Failed { cause },
        }
    }

    /// Text shown in the report for this block.
    pub fn content(&self) -> String {
        match &self.status {
            BlockStatus::Listed { table } if table.trim().is_empty() => {
                no_instances_message(&self.profile)
            }
            BlockStatus::Listed { table } => table.clone(),
            BlockStatus::SkippedNoRegion => no_region_message(&self.profile),
            BlockStatus::Failed { cause } => {
                format!("Error listing instances for profile {}: {cause}", self.profile)
            }
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, BlockStatus::Failed { .. })
    }
}

/// Diagnostic for a profile without a configured region.
pub fn no_region_message(profile: &str) -> String {
    format!("No region specified for profile {profile}. Please configure a region.")
}

/// Placeholder for a profile whose listing returned no table.
fn no_instances_message(profile: &str) -> String {
    format!("No instances found for profile {profile}.")
}

/// Ordered report, one block per processed profile.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    pub blocks: Vec<ProfileBlock>,
}

impl Report {
    pub fn new() -> Report {
        Report { blocks: vec![] }
    }

    pub fn push(&mut self, block: ProfileBlock) {
        self.blocks.push(block);
    }

    pub fn failed_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_failed()).count()
    }
}

impl fmt::Display for BlockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            BlockStatus::Listed { .. } => "listed",
            BlockStatus::SkippedNoRegion => "skipped_no_region",
            BlockStatus::Failed { .. } => "failed",
        };
        write!(f, "{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_content_is_only_the_diagnostic() {
        let block = ProfileBlock::skipped("dev");
        assert_eq!(
            block.content(),
            "No region specified for profile dev. Please configure a region."
        );
        assert!(!block.is_failed());
    }

    #[test]
    fn test_empty_listing_shows_placeholder() {
        for table in ["", "\n", "  \r\n"] {
            let block = ProfileBlock::listed("idle", "us-east-1", table.to_string());
            assert_eq!(
                block.content(),
                "No instances found for profile idle.",
                "table {table:?} should render the placeholder"
            );
            assert!(!block.is_failed());
        }
    }

    #[test]
    fn test_failed_content_names_profile() {
        let block = ProfileBlock::failed("prod", Some("eu-west-1"), "ExpiredToken".to_string());
        assert_eq!(
            block.content(),
            "Error listing instances for profile prod: ExpiredToken"
        );
        assert!(block.is_failed());
    }

    #[test]
    fn test_failed_count() {
        let mut report = Report::new();
        report.push(ProfileBlock::listed("a", "us-east-1", "t".to_string()));
        report.push(ProfileBlock::failed("b", None, "x".to_string()));
        report.push(ProfileBlock::skipped("c"));
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.blocks.len(), 3);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(BlockStatus::SkippedNoRegion.to_string(), "skipped_no_region");
        assert_eq!(
            BlockStatus::Listed {
                table: String::new()
            }
            .to_string(),
            "listed"
        );
    }
}
