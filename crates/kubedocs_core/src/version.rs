use thiserror::Error;

/// Oldest minor version a changelog is aggregated for.
pub const CHANGELOG_FLOOR_MINOR: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StableVersion {
    pub major: u32,
    pub minor: u32,
}

impl StableVersion {
    /// `major.minor` rendering, e.g. `1.31`.
    pub fn short(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("malformed version pointer: {0:?}")]
    Malformed(String),
}

/// Parses the release pointer body (`v1.31.2` style, possibly with
/// surrounding whitespace) into its major/minor pair.
pub fn parse_stable_version(body: &str) -> Result<StableVersion, VersionError> {
    let trimmed = body.trim();
    let digits = trimmed.strip_prefix('v').unwrap_or(trimmed);
    let mut parts = digits.split('.');
    let major = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(|| VersionError::Malformed(body.to_string()))?;
    let minor = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(|| VersionError::Malformed(body.to_string()))?;
    Ok(StableVersion { major, minor })
}

/// Minor versions to aggregate, newest first, down to the fixed floor.
pub fn changelog_minor_range(latest_minor: u32) -> impl Iterator<Item = u32> {
    (CHANGELOG_FLOOR_MINOR..=latest_minor).rev()
}

/// Fills the `{major}`/`{minor}` placeholders of the changelog URL template.
pub fn changelog_url(template: &str, major: u32, minor: u32) -> String {
    template
        .replace("{major}", &major.to_string())
        .replace("{minor}", &minor.to_string())
}
