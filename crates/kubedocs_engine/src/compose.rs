use crate::convert::rewrite_docs_links;

/// Horizontal-rule separator appended after each page body.
pub const PAGE_SEPARATOR: &str =
    "-------------------------------------------------------------------------------";

/// Literal delimiter written between concatenated documents in a section file.
pub const DOCUMENT_DELIMITER: &str =
    "+======================= NEW DOCUMENT =======================+";

/// Wraps converted page markdown with its source URL header and the
/// trailing separator. Deterministic: the same input always yields the
/// same bytes.
pub fn compose_page(url: &str, markdown: &str) -> String {
    let rewritten = rewrite_docs_links(markdown);
    format!("Page Source: {url}\n\n{rewritten}\n\n{PAGE_SEPARATOR}\n\n")
}

/// Assembles one section's output file: a level-1 heading followed by the
/// page bodies, separated by the document delimiter surrounded by blank
/// lines.
pub fn compose_section_document(section: &str, pages: &[String]) -> String {
    let mut out = format!("# Kubernetes Documentation: {section}\n\n");
    for (index, page) in pages.iter().enumerate() {
        if index > 0 {
            out.push_str("\n\n");
            out.push_str(DOCUMENT_DELIMITER);
            out.push_str("\n\n\n");
        }
        out.push_str(page);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_carries_source_header_and_separator() {
        let page = compose_page("https://kubernetes.io/docs/tasks/x/", "# Title\n\nBody");
        assert!(page.starts_with("Page Source: https://kubernetes.io/docs/tasks/x/\n\n"));
        assert!(page.ends_with(&format!("\n\n{PAGE_SEPARATOR}\n\n")));
        assert!(page.contains("# Title\n\nBody"));
    }

    #[test]
    fn composition_is_deterministic() {
        let first = compose_page("https://k/x", "body");
        let second = compose_page("https://k/x", "body");
        assert_eq!(first, second);
    }

    #[test]
    fn section_document_joins_pages_with_the_delimiter() {
        let pages = vec!["one\n".to_string(), "two\n".to_string()];
        let doc = compose_section_document("tasks", &pages);
        assert!(doc.starts_with("# Kubernetes Documentation: tasks\n\n"));
        assert_eq!(doc.matches(DOCUMENT_DELIMITER).count(), 1);
        assert!(doc.contains("one\n"));
        assert!(doc.contains("two\n"));
    }

    #[test]
    fn single_page_section_has_no_delimiter() {
        let doc = compose_section_document("setup", &["only\n".to_string()]);
        assert!(!doc.contains(DOCUMENT_DELIMITER));
    }
}
