//! Fleet listing logic.
//!
//! - [`lister`] - Region resolution, instance listing and the per-profile loop
//! - [`profiles`] - Profile enumeration and summary

mod lister;
mod profiles;
#[cfg(test)]
pub(crate) mod testing;

// Re-export public functions
pub use lister::{list_instances, resolve_region, run};
pub use profiles::{collect_profiles, summarize_profiles, ProfileSummary, REGION_NOT_SET};
