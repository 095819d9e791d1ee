use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, USER_AGENT};
use tokio::io::AsyncWriteExt;

use crate::decode::decode_text;
use crate::types::{FetchError, FetchFailureKind, FetchedPage};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: "KubeDocsHarvester/0.1".to_string(),
            accept: "text/html,application/xhtml+xml,application/xml".to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
        }
    }
}

/// Seam for the HTTP layer so orchestration can be tested without a server.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// GET a URL and decode the body as text. Any failure comes back as a
    /// value; call sites treat it as a failed link, never a panic.
    async fn fetch_text(&self, url: &str) -> Result<FetchedPage, FetchError>;

    /// GET a URL and stream the raw body into `path` chunk by chunk,
    /// returning the number of bytes written.
    async fn download_to_file(&self, url: &str, path: &Path) -> Result<u64, FetchError>;
}

/// Production fetcher: one shared `reqwest::Client` with fixed headers,
/// reused across every request of the run.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value(&settings.user_agent)?);
        headers.insert(ACCEPT, header_value(&settings.accept)?);
        headers.insert(ACCEPT_LANGUAGE, header_value(&settings.accept_language)?);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FetchFailureKind::Network, err.to_string()))?;

        Ok(Self { client })
    }

    async fn send_checked(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FetchFailureKind::InvalidUrl, err.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FetchFailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch_text(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self.send_checked(url).await?;

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let decoded = decode_text(&bytes, content_type.as_deref())
            .map_err(|err| FetchError::new(FetchFailureKind::Decode, err.to_string()))?;

        Ok(FetchedPage {
            body: decoded.text,
            final_url,
            content_type,
            encoding_label: decoded.encoding_label,
        })
    }

    async fn download_to_file(&self, url: &str, path: &Path) -> Result<u64, FetchError> {
        let response = self.send_checked(url).await?;

        let mut file = tokio::fs::File::create(path)
            .await
            .map_err(|err| FetchError::new(FetchFailureKind::Network, err.to_string()))?;

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            file.write_all(&chunk)
                .await
                .map_err(|err| FetchError::new(FetchFailureKind::Network, err.to_string()))?;
            written += chunk.len() as u64;
        }
        file.flush()
            .await
            .map_err(|err| FetchError::new(FetchFailureKind::Network, err.to_string()))?;

        Ok(written)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, FetchError> {
    HeaderValue::from_str(value)
        .map_err(|err| FetchError::new(FetchFailureKind::InvalidUrl, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FetchFailureKind::Timeout, err.to_string());
    }
    FetchError::new(FetchFailureKind::Network, err.to_string())
}
