use std::path::PathBuf;

/// What to do when a target file already exists in the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Replace the existing file. Default: scraping refreshes content.
    Overwrite,
    /// Leave the existing file untouched and log the skip.
    SkipExisting,
}

/// Immutable configuration for one scraping run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub docs_base_url: String,
    pub stable_version_url: String,
    pub changelog_url_template: String,
    pub output_dir: PathBuf,
    /// Maximum sidebar links processed per section; `None` processes all.
    pub max_links_per_section: Option<usize>,
    pub sections: Vec<String>,
    /// Links that must never be fetched, in absolute-URL form.
    pub skip_links: Vec<String>,
    pub overwrite: OverwritePolicy,
    pub fetch_changelog: bool,
    pub fetch_extras: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            docs_base_url: "https://kubernetes.io/docs".to_string(),
            stable_version_url: "https://dl.k8s.io/release/stable.txt".to_string(),
            changelog_url_template:
                "https://raw.githubusercontent.com/kubernetes/kubernetes/refs/heads/master/CHANGELOG/CHANGELOG-{major}.{minor}.md"
                    .to_string(),
            output_dir: PathBuf::from("./output"),
            max_links_per_section: None,
            sections: ["setup", "concepts", "tasks", "tutorials", "reference"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            skip_links: Vec::new(),
            overwrite: OverwritePolicy::Overwrite,
            fetch_changelog: true,
            fetch_extras: true,
        }
    }
}

impl Configuration {
    /// Index URL of a section: `<base>/<lowercased section>/`.
    pub fn section_index_url(&self, section: &str) -> String {
        let base = self.docs_base_url.trim_end_matches('/');
        format!("{}/{}/", base, section.to_lowercase())
    }

    pub fn is_skipped(&self, link: &str) -> bool {
        self.skip_links.iter().any(|s| s == link)
    }

    /// Number of links to process out of `found`, honoring the limit.
    pub fn link_budget(&self, found: usize) -> usize {
        match self.max_links_per_section {
            Some(max) => found.min(max),
            None => found,
        }
    }
}
