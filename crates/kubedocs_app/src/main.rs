mod config_file;
mod logging;
mod summary;

use std::process;

use chrono::Utc;
use kubedocs_core::{format_summary, Configuration, ScrapingResult};
use kubedocs_engine::{
    aggregate_changelog, download_pdf_guides, ensure_output_dir, scrape_single_page, ExtractError,
    FetchError, FetchSettings, FileWriter, PdfGuide, PersistError, ReqwestFetcher, SectionScraper,
    SinglePage,
};
use scrape_logging::{scrape_error, scrape_info};
use thiserror::Error;

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

fn main() {
    logging::initialize();

    let config = match config_file::load(std::env::args().nth(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    // The only unrecoverable filesystem condition: no output directory.
    if let Err(err) = ensure_output_dir(&config.output_dir) {
        scrape_error!("Cannot prepare output directory: {}", err);
        eprintln!("Error: cannot prepare output directory: {err}");
        process::exit(1);
    }

    scrape_info!("Starting scraping with configuration: {:?}", config);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Error: failed to start runtime: {err}");
            process::exit(1);
        }
    };

    let result = match runtime.block_on(run(&config)) {
        Ok(result) => result,
        Err(err) => {
            scrape_error!("Run aborted: {}", err);
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    report(&config, &result);

    // Partial failures are reported above; the process still exits cleanly.
    println!("Scraping complete.");
}

async fn run(config: &Configuration) -> Result<ScrapingResult, RunError> {
    let fetcher = ReqwestFetcher::new(FetchSettings::default())?;
    let writer = FileWriter::new(config.output_dir.clone(), config.overwrite);

    let scraper = SectionScraper::new(config, &fetcher, &writer)?;
    let result = scraper.run().await?;

    if config.fetch_changelog {
        if let Err(err) = aggregate_changelog(config, &fetcher, &writer).await {
            scrape_error!("Changelog aggregation failed: {}", err);
        }
    }

    if config.fetch_extras {
        for page in [SinglePage::kubectl_reference(), SinglePage::glossary()] {
            if let Err(err) = scrape_single_page(&page, &fetcher, &writer).await {
                scrape_error!("Failed to harvest {}: {}", page.stem, err);
            }
        }

        let provider_writer =
            FileWriter::new(config.output_dir.join("provider"), config.overwrite);
        if let Err(err) =
            download_pdf_guides(&PdfGuide::eks_guides(), &fetcher, &provider_writer).await
        {
            scrape_error!("Provider guide downloads failed: {}", err);
        }
    }

    Ok(result)
}

fn report(config: &Configuration, result: &ScrapingResult) {
    let rendered = format_summary(result);
    for line in rendered.lines() {
        scrape_info!("{}", line);
    }
    print!("{rendered}");

    // The summary describes this run, so it always replaces the previous one.
    let writer = FileWriter::new(
        config.output_dir.clone(),
        kubedocs_core::OverwritePolicy::Overwrite,
    );
    if let Err(err) = summary::write_run_summary(&writer, result, &Utc::now().to_rfc3339()) {
        scrape_error!("Failed to write run summary: {}", err);
    }
}
