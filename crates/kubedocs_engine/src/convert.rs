/// Root-relative documentation links are rewritten to point back at the
/// site so extracted documents stay navigable outside it.
const DOCS_LINK_PREFIX: &str = "](/docs";
const DOCS_LINK_ABSOLUTE: &str = "](https://kubernetes.io/docs";

pub trait Converter: Send + Sync {
    fn to_markdown(&self, html: &str) -> String;
}

/// `html2md` conversion with the heading style normalized to ATX form.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownConverter;

impl Converter for MarkdownConverter {
    fn to_markdown(&self, html: &str) -> String {
        normalize_atx_headings(&html2md::parse_html(html))
    }
}

/// Rewrites every markdown link target starting with `/docs` to the
/// absolute documentation URL, line by line.
pub fn rewrite_docs_links(markdown: &str) -> String {
    let lines: Vec<String> = markdown
        .lines()
        .map(|line| {
            if line.contains(DOCS_LINK_PREFIX) {
                line.replace(DOCS_LINK_PREFIX, DOCS_LINK_ABSOLUTE)
            } else {
                line.to_string()
            }
        })
        .collect();
    lines.join("\n")
}

/// Turns setext headings (`Title` underlined with `===` or `---`) into the
/// `#`-prefixed ATX form. An underline only counts when the preceding line
/// has text, so thematic breaks after a blank line are left alone.
fn normalize_atx_headings(markdown: &str) -> String {
    let lines: Vec<&str> = markdown.lines().collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];
        let heading_level = lines.get(index + 1).and_then(|next| {
            if line.trim().is_empty() {
                None
            } else if is_underline_of(next, '=') {
                Some("#")
            } else if is_underline_of(next, '-') {
                Some("##")
            } else {
                None
            }
        });

        match heading_level {
            Some(marker) => {
                out.push(format!("{} {}", marker, line.trim()));
                index += 2;
            }
            None => {
                out.push(line.to_string());
                index += 1;
            }
        }
    }

    out.join("\n")
}

fn is_underline_of(line: &str, ch: char) -> bool {
    let trimmed = line.trim_end();
    trimmed.len() >= 2 && trimmed.chars().all(|c| c == ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setext_headings_become_atx() {
        let markdown = "Overview\n========\n\ntext\n\nDetails\n-------\nmore";
        assert_eq!(
            normalize_atx_headings(markdown),
            "# Overview\n\ntext\n\n## Details\nmore"
        );
    }

    #[test]
    fn thematic_break_after_blank_line_is_preserved() {
        let markdown = "para\n\n---\n\nnext";
        assert_eq!(normalize_atx_headings(markdown), markdown);
    }

    #[test]
    fn docs_links_are_rewritten_to_absolute() {
        let markdown = "See [Pods](/docs/concepts/workloads/pods/) for details.";
        assert_eq!(
            rewrite_docs_links(markdown),
            "See [Pods](https://kubernetes.io/docs/concepts/workloads/pods/) for details."
        );
    }

    #[test]
    fn non_docs_links_are_untouched() {
        let markdown = "See [site](https://example.com/docs/) instead.";
        assert_eq!(rewrite_docs_links(markdown), markdown);
    }
}
