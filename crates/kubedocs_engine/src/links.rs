use kubedocs_core::is_section_link;
use scraper::{Html, Selector};
use url::Url;

/// Marker class of sidebar navigation anchors on section index pages.
const SIDEBAR_LINK_SELECTOR: &str = "a.td-sidebar-link";

/// Pulls the section's sidebar links out of a fetched index page.
///
/// Anchors without an `href` are skipped; the rest are resolved against
/// `base` (relative, protocol-relative, and absolute hrefs all follow
/// standard URL resolution) and kept only when they stay on the same host
/// under the section's path prefix. Document order, duplicates preserved.
pub fn extract_sidebar_links(html: &str, base: &Url) -> Vec<Url> {
    let selector = match Selector::parse(SIDEBAR_LINK_SELECTOR) {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    let doc = Html::parse_document(html);
    let mut links = Vec::new();
    for anchor in doc.select(&selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Ok(resolved) = base.join(href) else {
            continue;
        };
        if is_section_link(&resolved, base) {
            links.push(resolved);
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://kubernetes.io/docs/tasks/";

    fn links_of(html: &str) -> Vec<String> {
        let base = Url::parse(BASE).unwrap();
        extract_sidebar_links(html, &base)
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn relative_hrefs_resolve_against_the_base() {
        let html = r#"<a class="td-sidebar-link" href="/docs/tasks/tools/">Tools</a>"#;
        assert_eq!(links_of(html), vec!["https://kubernetes.io/docs/tasks/tools/"]);
    }

    #[test]
    fn foreign_host_and_foreign_path_are_filtered_out() {
        let html = r#"
            <a class="td-sidebar-link" href="/docs/tasks/a/">A</a>
            <a class="td-sidebar-link" href="https://example.com/docs/tasks/b/">B</a>
            <a class="td-sidebar-link" href="/docs/concepts/c/">C</a>
        "#;
        assert_eq!(links_of(html), vec!["https://kubernetes.io/docs/tasks/a/"]);
    }

    #[test]
    fn anchors_without_href_are_skipped() {
        let html = r#"<a class="td-sidebar-link">No target</a>"#;
        assert!(links_of(html).is_empty());
    }

    #[test]
    fn non_sidebar_anchors_are_ignored() {
        let html = r#"<a href="/docs/tasks/hidden/">Nav chrome</a>"#;
        assert!(links_of(html).is_empty());
    }

    #[test]
    fn document_order_and_duplicates_are_preserved() {
        let html = r#"
            <a class="td-sidebar-link" href="/docs/tasks/b/">B</a>
            <a class="td-sidebar-link" href="/docs/tasks/a/">A</a>
            <a class="td-sidebar-link" href="/docs/tasks/b/">B again</a>
        "#;
        assert_eq!(
            links_of(html),
            vec![
                "https://kubernetes.io/docs/tasks/b/",
                "https://kubernetes.io/docs/tasks/a/",
                "https://kubernetes.io/docs/tasks/b/",
            ]
        );
    }
}
