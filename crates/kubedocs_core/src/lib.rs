//! Kubedocs core: pure scraping domain logic, no IO.
mod config;
mod links;
mod report;
mod result;
mod version;

pub use config::{Configuration, OverwritePolicy};
pub use links::is_section_link;
pub use report::format_summary;
pub use result::{FailedLink, FailureReason, ScrapingResult, SectionOutcome};
pub use version::{
    changelog_minor_range, changelog_url, parse_stable_version, StableVersion, VersionError,
    CHANGELOG_FLOOR_MINOR,
};
