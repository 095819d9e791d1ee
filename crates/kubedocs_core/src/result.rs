use std::fmt;

/// Why a single link could not be turned into markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// Network error, timeout, or non-2xx status while fetching the page.
    Fetch,
    /// The page fetched fine but the expected content container was missing.
    MissingContent,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Fetch => write!(f, "fetch failed"),
            FailureReason::MissingContent => write!(f, "content container missing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedLink {
    pub url: String,
    pub reason: FailureReason,
}

/// Per-section result handed back by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionOutcome {
    pub links_processed: usize,
    pub failed_links: Vec<FailedLink>,
}

impl SectionOutcome {
    pub fn record_failure(&mut self, url: impl Into<String>, reason: FailureReason) {
        self.failed_links.push(FailedLink {
            url: url.into(),
            reason,
        });
    }
}

/// Accumulated result of one scraping run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrapingResult {
    pub links_processed: usize,
    pub failed_links: Vec<FailedLink>,
}

impl ScrapingResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, outcome: SectionOutcome) {
        self.links_processed += outcome.links_processed;
        self.failed_links.extend(outcome.failed_links);
    }
}
