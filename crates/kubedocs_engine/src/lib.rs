//! Kubedocs engine: the IO pipeline behind the scraper.
//!
//! Fetching, charset decoding, content extraction, markdown conversion,
//! section orchestration, and file persistence all live here. The pure
//! decision logic (configuration, link filtering, result accounting) is
//! in `kubedocs_core`.
mod changelog;
mod compose;
mod convert;
mod decode;
mod extract;
mod extras;
mod fetch;
mod links;
mod persist;
mod scrape;
mod types;

pub use changelog::{aggregate_changelog, ChangelogError};
pub use compose::{compose_page, compose_section_document, DOCUMENT_DELIMITER, PAGE_SEPARATOR};
pub use convert::{rewrite_docs_links, Converter, MarkdownConverter};
pub use decode::{decode_text, DecodeError, DecodedText};
pub use extract::{ExtractError, ExtractedContent, Extractor, ReadabilityExtractor, SelectorExtractor};
pub use extras::{download_pdf_guides, scrape_single_page, ExtrasError, PdfGuide, SinglePage};
pub use fetch::{Fetcher, FetchSettings, ReqwestFetcher};
pub use links::extract_sidebar_links;
pub use persist::{ensure_output_dir, FileWriter, PersistError};
pub use scrape::SectionScraper;
pub use types::{FetchError, FetchFailureKind, FetchedPage};
