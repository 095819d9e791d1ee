use std::path::PathBuf;

use kubedocs_core::{changelog_minor_range, changelog_url, parse_stable_version, Configuration, VersionError};
use scrape_logging::{scrape_info, scrape_warn};
use thiserror::Error;

use crate::compose::PAGE_SEPARATOR;
use crate::fetch::Fetcher;
use crate::persist::{FileWriter, PersistError};
use crate::types::FetchError;

#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("failed to fetch the stable version pointer: {0}")]
    Pointer(#[source] FetchError),
    #[error(transparent)]
    Version(#[from] VersionError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Builds `changelog.md`: version-specific changelog documents fetched
/// newest to oldest down to the floor minor, concatenated under a single
/// header. A version that fails to fetch is logged and skipped, never
/// embedded as error text.
pub async fn aggregate_changelog(
    config: &Configuration,
    fetcher: &dyn Fetcher,
    writer: &FileWriter,
) -> Result<Option<PathBuf>, ChangelogError> {
    let pointer = fetcher
        .fetch_text(&config.stable_version_url)
        .await
        .map_err(ChangelogError::Pointer)?;
    let version = parse_stable_version(&pointer.body)?;
    scrape_info!(
        "Latest version: {} (major: {}, minor: {})",
        version.short(),
        version.major,
        version.minor
    );

    let mut markdown = format!("# Kubernetes Changelog upto {}\n\n", version.short());
    for minor in changelog_minor_range(version.minor) {
        let url = changelog_url(&config.changelog_url_template, version.major, minor);
        scrape_info!("Downloading {}", url);
        match fetcher.fetch_text(&url).await {
            Ok(page) => {
                markdown.push_str(&page.body);
                markdown.push_str(&format!("\n\n{PAGE_SEPARATOR}\n\n"));
            }
            Err(err) => {
                scrape_warn!("Skipping changelog {}.{}: {}", version.major, minor, err);
            }
        }
    }

    Ok(writer.write_markdown("changelog", &markdown)?)
}
