//! Machine-readable run summary written next to the scraped output.

use kubedocs_engine::{FileWriter, PersistError};
use kubedocs_core::ScrapingResult;
use serde_json::json;

pub const SUMMARY_STEM: &str = "run_summary";

pub fn write_run_summary(
    writer: &FileWriter,
    result: &ScrapingResult,
    generated_utc: &str,
) -> Result<(), PersistError> {
    let manifest = json!({
        "generated_utc": generated_utc,
        "links_processed": result.links_processed,
        "failed_count": result.failed_links.len(),
        "failed_links": result
            .failed_links
            .iter()
            .map(|failed| {
                json!({
                    "url": failed.url,
                    "reason": failed.reason.to_string(),
                })
            })
            .collect::<Vec<_>>(),
    });

    writer.write_json(SUMMARY_STEM, &manifest.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubedocs_core::{FailureReason, OverwritePolicy, SectionOutcome};

    #[test]
    fn summary_lists_counts_and_failed_links() {
        let temp = tempfile::TempDir::new().unwrap();
        let writer = FileWriter::new(temp.path().to_path_buf(), OverwritePolicy::Overwrite);

        let mut result = ScrapingResult::new();
        let mut outcome = SectionOutcome {
            links_processed: 2,
            ..Default::default()
        };
        outcome.record_failure("https://kubernetes.io/docs/tasks/x/", FailureReason::Fetch);
        result.absorb(outcome);

        write_run_summary(&writer, &result, "2026-08-24T00:00:00Z").unwrap();

        let content =
            std::fs::read_to_string(temp.path().join("run_summary.json")).unwrap();
        assert!(content.contains("\"links_processed\":2"));
        assert!(content.contains("\"failed_count\":1"));
        assert!(content.contains("https://kubernetes.io/docs/tasks/x/"));
        assert!(content.contains("fetch failed"));
    }
}
