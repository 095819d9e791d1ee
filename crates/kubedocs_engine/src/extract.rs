use scraper::{Html, Selector};
use thiserror::Error;

/// CSS selector of the main content region on documentation section pages.
const DOCS_CONTENT_SELECTOR: &str = ".td-content";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    pub title: Option<String>,
    pub content_html: String,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid content selector {selector:?}")]
    InvalidSelector { selector: String },
}

/// A strategy for locating the main content region of a fetched page.
///
/// `None` means the page carried no recognizable content; callers record
/// the link as failed and move on.
pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> Option<ExtractedContent>;
}

/// Fixed-selector extraction for pages whose content container is reliably
/// marked, like the `.td-content` region on documentation pages.
#[derive(Debug)]
pub struct SelectorExtractor {
    selector: Selector,
}

impl SelectorExtractor {
    pub fn new(selector: &str) -> Result<Self, ExtractError> {
        let parsed = Selector::parse(selector).map_err(|_| ExtractError::InvalidSelector {
            selector: selector.to_string(),
        })?;
        Ok(Self { selector: parsed })
    }

    /// Extractor for the documentation site's section pages.
    pub fn docs_content() -> Result<Self, ExtractError> {
        Self::new(DOCS_CONTENT_SELECTOR)
    }
}

impl Extractor for SelectorExtractor {
    fn extract(&self, html: &str) -> Option<ExtractedContent> {
        let doc = Html::parse_document(html);
        let container = doc.select(&self.selector).next()?;
        Some(ExtractedContent {
            title: page_title(&doc),
            content_html: container.inner_html(),
        })
    }
}

/// Heuristic extraction for pages without a reliably marked container:
/// `<article>`, then `<main>`, then `<body>`, then the whole document.
/// Never fails.
#[derive(Debug, Default)]
pub struct ReadabilityExtractor;

impl Extractor for ReadabilityExtractor {
    fn extract(&self, html: &str) -> Option<ExtractedContent> {
        let doc = Html::parse_document(html);

        let content_html = ["article", "main", "body"]
            .iter()
            .filter_map(|tag| Selector::parse(tag).ok())
            .find_map(|sel| doc.select(&sel).next().map(|node| node.inner_html()))
            .unwrap_or_else(|| doc.root_element().html());

        Some(ExtractedContent {
            title: page_title(&doc),
            content_html,
        })
    }
}

fn page_title(doc: &Html) -> Option<String> {
    let sel = Selector::parse("title").ok()?;
    doc.select(&sel)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}
