use kubedocs_core::{Configuration, FailureReason, ScrapingResult, SectionOutcome};
use scrape_logging::{scrape_debug, scrape_error, scrape_info};
use url::Url;

use crate::compose::{compose_page, compose_section_document};
use crate::convert::{Converter, MarkdownConverter};
use crate::extract::{ExtractError, Extractor, SelectorExtractor};
use crate::fetch::Fetcher;
use crate::links::extract_sidebar_links;
use crate::persist::{FileWriter, PersistError};

/// Sequential section orchestrator: discover sidebar links, fetch and
/// convert each page, write one aggregated file per section.
///
/// Per-link failures are accumulated, never propagated. Only persistence
/// problems (the output directory itself) abort the run.
pub struct SectionScraper<'a> {
    config: &'a Configuration,
    fetcher: &'a dyn Fetcher,
    extractor: SelectorExtractor,
    converter: MarkdownConverter,
    writer: &'a FileWriter,
}

impl<'a> SectionScraper<'a> {
    pub fn new(
        config: &'a Configuration,
        fetcher: &'a dyn Fetcher,
        writer: &'a FileWriter,
    ) -> Result<Self, ExtractError> {
        Ok(Self {
            config,
            fetcher,
            extractor: SelectorExtractor::docs_content()?,
            converter: MarkdownConverter,
            writer,
        })
    }

    pub async fn run(&self) -> Result<ScrapingResult, PersistError> {
        let mut result = ScrapingResult::new();
        for section in &self.config.sections {
            let outcome = self.scrape_section(section).await?;
            result.absorb(outcome);
        }
        Ok(result)
    }

    async fn scrape_section(&self, section: &str) -> Result<SectionOutcome, PersistError> {
        let index_url = self.config.section_index_url(section);
        scrape_info!("Scraping section: {} from {}", section, index_url);

        let mut outcome = SectionOutcome::default();
        let mut pages: Vec<String> = Vec::new();

        match self.fetch_section_pages(&index_url, &mut outcome).await {
            Some(fetched) => pages = fetched,
            None => {
                scrape_error!("Failed to fetch main page {}", index_url);
            }
        }

        // The section file is written even when the index page failed, so
        // every configured section leaves exactly one output file.
        let document = compose_section_document(section, &pages);
        self.writer.write_markdown(section, &document)?;

        scrape_info!(
            "Completed scraping section: {}. Processed {} links with {} failures.",
            section,
            outcome.links_processed,
            outcome.failed_links.len()
        );
        Ok(outcome)
    }

    /// Returns the composed page bodies, or `None` when the index page
    /// itself could not be fetched or its URL does not parse.
    async fn fetch_section_pages(
        &self,
        index_url: &str,
        outcome: &mut SectionOutcome,
    ) -> Option<Vec<String>> {
        let base = Url::parse(index_url).ok()?;
        let index = self.fetcher.fetch_text(index_url).await.ok()?;

        let links = extract_sidebar_links(&index.body, &base);
        let budget = self.config.link_budget(links.len());
        scrape_info!("Found {} links to process ({} discovered)", budget, links.len());

        let mut pages = Vec::new();
        for link in links.into_iter().take(budget) {
            let link_str = link.as_str();
            if self.config.is_skipped(link_str) {
                scrape_info!("Skipping configured link: {}", link_str);
                continue;
            }

            let page = match self.fetcher.fetch_text(link_str).await {
                Ok(page) => page,
                Err(err) => {
                    scrape_error!("Failed to download {}: {}", link_str, err);
                    outcome.record_failure(link_str, FailureReason::Fetch);
                    continue;
                }
            };

            let Some(extracted) = self.extractor.extract(&page.body) else {
                scrape_error!("No content container found in {}", link_str);
                outcome.record_failure(link_str, FailureReason::MissingContent);
                continue;
            };
            if let Some(title) = &extracted.title {
                scrape_debug!("Extracted {:?} from {}", title, link_str);
            }

            let markdown = self.converter.to_markdown(&extracted.content_html);
            pages.push(compose_page(link_str, &markdown));
            outcome.links_processed += 1;
        }

        Some(pages)
    }
}
