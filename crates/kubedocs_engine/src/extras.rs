use std::path::PathBuf;

use scrape_logging::{scrape_error, scrape_info};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::compose::compose_page;
use crate::convert::{Converter, MarkdownConverter};
use crate::extract::{Extractor, ReadabilityExtractor};
use crate::fetch::Fetcher;
use crate::persist::{ensure_output_dir, FileWriter, PersistError};
use crate::types::FetchError;

#[derive(Debug, Error)]
pub enum ExtrasError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// A standalone documentation page without a reliably marked content
/// container, harvested with the readability heuristic.
#[derive(Debug, Clone)]
pub struct SinglePage {
    pub stem: String,
    pub url: String,
    pub heading: String,
}

impl SinglePage {
    pub fn kubectl_reference() -> Self {
        Self {
            stem: "kubectl".to_string(),
            url: "https://kubernetes.io/docs/reference/kubectl/".to_string(),
            heading: "Kubernetes kubectl Reference".to_string(),
        }
    }

    pub fn glossary() -> Self {
        Self {
            stem: "glossary".to_string(),
            url: "https://kubernetes.io/docs/reference/glossary/?all=true".to_string(),
            heading: "Kubernetes Glossary".to_string(),
        }
    }
}

/// Fetches one page, extracts its main content heuristically, and writes
/// it as `<stem>.md` under a level-1 heading.
pub async fn scrape_single_page(
    page: &SinglePage,
    fetcher: &dyn Fetcher,
    writer: &FileWriter,
) -> Result<Option<PathBuf>, ExtrasError> {
    scrape_info!("Fetching {} from {}", page.stem, page.url);
    let fetched = fetcher.fetch_text(&page.url).await?;

    // The readability extractor always finds something, falling back to
    // the whole document.
    let extracted = ReadabilityExtractor
        .extract(&fetched.body)
        .unwrap_or_else(|| crate::extract::ExtractedContent {
            title: None,
            content_html: fetched.body.clone(),
        });

    let markdown = MarkdownConverter.to_markdown(&extracted.content_html);
    let document = format!(
        "# {}\n\n{}",
        page.heading,
        compose_page(&page.url, &markdown)
    );
    Ok(writer.write_markdown(&page.stem, &document)?)
}

/// A binary guide streamed straight to disk.
#[derive(Debug, Clone)]
pub struct PdfGuide {
    pub url: String,
    pub filename: String,
}

impl PdfGuide {
    /// The two EKS guides fetched from the cloud-provider documentation host.
    pub fn eks_guides() -> Vec<Self> {
        vec![
            Self {
                url: "https://docs.aws.amazon.com/pdfs/eks/latest/best-practices/eks-bpg.pdf"
                    .to_string(),
                filename: "aws_eks_good_practice_guide.pdf".to_string(),
            },
            Self {
                url: "https://docs.aws.amazon.com/pdfs/eks/latest/userguide/eks-ug.pdf"
                    .to_string(),
                filename: "aws_eks_docs.pdf".to_string(),
            },
        ]
    }
}

/// Streams each guide into the writer's directory. A failed download is
/// logged and skipped; the rest continue.
pub async fn download_pdf_guides(
    guides: &[PdfGuide],
    fetcher: &dyn Fetcher,
    writer: &FileWriter,
) -> Result<Vec<PathBuf>, ExtrasError> {
    ensure_output_dir(writer.dir())?;

    let mut written = Vec::new();
    for guide in guides {
        scrape_info!("Downloading {} into {:?}", guide.url, writer.dir());

        let tmp = NamedTempFile::new_in(writer.dir()).map_err(PersistError::Io)?;
        match fetcher.download_to_file(&guide.url, tmp.path()).await {
            Ok(bytes) => {
                scrape_info!("Downloaded {} ({} bytes)", guide.filename, bytes);
                if let Some(path) = writer.promote(tmp, &guide.filename)? {
                    written.push(path);
                }
            }
            Err(err) => {
                scrape_error!("Failed to download {}: {}", guide.url, err);
            }
        }
    }
    Ok(written)
}
