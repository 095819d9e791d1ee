use std::fmt;

/// A successfully fetched and decoded text page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub body: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub encoding_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FetchFailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FetchFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FetchFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailureKind::InvalidUrl => write!(f, "invalid url"),
            FetchFailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FetchFailureKind::Timeout => write!(f, "timeout"),
            FetchFailureKind::Network => write!(f, "network error"),
            FetchFailureKind::Decode => write!(f, "decode error"),
        }
    }
}
