use std::collections::{HashMap, HashSet};

/// Render topic content to sanitized HTML.
///
/// Content blobs are often authored inside indented literals, so the common leading
/// indentation is removed first; otherwise every line would parse as a code block.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let source = normalize_markdown(&dedent(input));

    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(&source, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "del", "code", "pre", "blockquote",
        "ul", "ol", "li", "a", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "table", "thead",
        "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    attributes.insert("ol", ["start"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

/// Strip the indentation shared by all non-blank lines.
#[must_use]
pub fn dedent(input: &str) -> String {
    let indent = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    input
        .lines()
        .map(|line| line.get(indent..).unwrap_or_else(|| line.trim_start()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn normalize_markdown(input: &str) -> String {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = Vec::new();
    let mut blank_streak = 0usize;

    for line in normalized.trim_start_matches('\n').split('\n') {
        let trimmed = line.trim_end_matches([' ', '\t']).to_string();
        if trimmed.is_empty() {
            blank_streak += 1;
            if blank_streak > 1 {
                continue;
            }
        } else {
            blank_streak = 0;
        }
        lines.push(trimmed);
    }

    let mut output = lines.join("\n");
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::{dedent, markdown_to_html, normalize_markdown};

    #[test]
    fn dedent_removes_shared_indentation() {
        let input = "\n    ## Title\n\n    - one\n      - nested\n";
        assert_eq!(dedent(input), "\n## Title\n\n- one\n  - nested");
    }

    #[test]
    fn indented_content_renders_as_headings_not_code() {
        let html = markdown_to_html("\n    ## Candidiasis\n    - Fluconazole\n");
        assert!(html.contains("<h2>Candidiasis</h2>"), "{html}");
        assert!(html.contains("<li>Fluconazole</li>"), "{html}");
        assert!(!html.contains("<pre>"), "{html}");
    }

    #[test]
    fn normalize_markdown_trims_and_collapses_blank_lines() {
        let input = "Line one  \r\n\r\n\r\nLine two\t\r\n\r\n";
        let output = normalize_markdown(input);
        assert_eq!(output, "Line one\n\nLine two\n");
    }

    #[test]
    fn markdown_to_html_sanitizes_links_and_scripts() {
        let html = markdown_to_html("[Link](javascript:alert(1))\n\n<script>alert(1)</script>");
        assert!(html.contains("Link"));
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn persian_text_survives_rendering() {
        let html = markdown_to_html("### درمان\n- Fluconazole (اولین خط)");
        assert!(html.contains("درمان"));
        assert!(html.contains("اولین خط"));
    }
}
