//! Optional RON configuration file, overlaid on built-in defaults.

use std::fs;
use std::path::PathBuf;

use kubedocs_core::{Configuration, OverwritePolicy};
use serde::Deserialize;
use thiserror::Error;

/// On-disk surface of the configuration. Absent fields keep their
/// defaults. `max_links_per_section` uses `-1` for "process all",
/// matching the historical sentinel.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ConfigFile {
    docs_base_url: String,
    stable_version_url: String,
    changelog_url_template: String,
    output_dir: PathBuf,
    max_links_per_section: i64,
    sections: Vec<String>,
    skip_links: Vec<String>,
    overwrite: bool,
    fetch_changelog: bool,
    fetch_extras: bool,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let defaults = Configuration::default();
        Self {
            docs_base_url: defaults.docs_base_url,
            stable_version_url: defaults.stable_version_url,
            changelog_url_template: defaults.changelog_url_template,
            output_dir: defaults.output_dir,
            max_links_per_section: -1,
            sections: defaults.sections,
            skip_links: defaults.skip_links,
            overwrite: true,
            fetch_changelog: defaults.fetch_changelog,
            fetch_extras: defaults.fetch_extras,
        }
    }
}

impl From<ConfigFile> for Configuration {
    fn from(file: ConfigFile) -> Self {
        Self {
            docs_base_url: file.docs_base_url,
            stable_version_url: file.stable_version_url,
            changelog_url_template: file.changelog_url_template,
            output_dir: file.output_dir,
            max_links_per_section: if file.max_links_per_section < 0 {
                None
            } else {
                Some(file.max_links_per_section as usize)
            },
            sections: file.sections,
            skip_links: file.skip_links,
            overwrite: if file.overwrite {
                OverwritePolicy::Overwrite
            } else {
                OverwritePolicy::SkipExisting
            },
            fetch_changelog: file.fetch_changelog,
            fetch_extras: file.fetch_extras,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Loads the run configuration: defaults, optionally overlaid with the
/// RON file at `path`.
pub fn load(path: Option<String>) -> Result<Configuration, ConfigError> {
    let Some(path) = path else {
        return Ok(Configuration::default());
    };
    let path = PathBuf::from(path);

    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let file: ConfigFile = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;

    Ok(file.into())
}
