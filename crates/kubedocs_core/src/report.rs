use std::fmt::Write;

use crate::result::ScrapingResult;

/// Renders the end-of-run summary shown on the console and written to the log.
pub fn format_summary(result: &ScrapingResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total pages processed: {}", result.links_processed);
    let _ = writeln!(out, "Failed links: {}", result.failed_links.len());

    if !result.failed_links.is_empty() {
        let _ = writeln!(out, "\n=== Summary of failed links ===");
        for failed in &result.failed_links {
            let _ = writeln!(out, "  - {} ({})", failed.url, failed.reason);
        }
    }

    out
}
