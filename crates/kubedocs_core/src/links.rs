use url::Url;

/// Decides whether a resolved sidebar link belongs to the section rooted at
/// `base`: same host, and the candidate path starts with the base path.
///
/// The base path is normalized to carry a leading slash before the prefix
/// comparison, so a base built from a path without one still matches.
pub fn is_section_link(candidate: &Url, base: &Url) -> bool {
    if candidate.host_str() != base.host_str() {
        return false;
    }
    let mut prefix = base.path().to_string();
    if !prefix.starts_with('/') {
        prefix.insert(0, '/');
    }
    candidate.path().starts_with(&prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn accepts_links_under_the_section_path() {
        let base = url("https://kubernetes.io/docs/tasks/");
        assert!(is_section_link(
            &url("https://kubernetes.io/docs/tasks/configure-pod-container/"),
            &base
        ));
    }

    #[test]
    fn rejects_links_on_a_different_host() {
        let base = url("https://kubernetes.io/docs/tasks/");
        assert!(!is_section_link(
            &url("https://example.com/docs/tasks/whatever/"),
            &base
        ));
    }

    #[test]
    fn rejects_links_outside_the_section_path() {
        let base = url("https://kubernetes.io/docs/tasks/");
        assert!(!is_section_link(
            &url("https://kubernetes.io/docs/concepts/overview/"),
            &base
        ));
    }

    #[test]
    fn sibling_path_sharing_the_prefix_string_is_accepted() {
        // Prefix comparison is on the raw path string, matching the
        // section layout of the documentation site.
        let base = url("https://kubernetes.io/docs/tasks/");
        assert!(is_section_link(
            &url("https://kubernetes.io/docs/tasks/debug/debug-cluster/"),
            &base
        ));
    }
}
