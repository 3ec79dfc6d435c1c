//! Markdown to HTML rendering with pulldown-cmark.
//!
//! Produces the [`RenderedRegion`] shown on the page and handed to the PDF
//! exporter. Pure Rust, no external processes.
//!
//! Raw HTML in the markdown is emitted as escaped text, never as markup.

use pulldown_cmark::{html, Event, Options, Parser};

use crate::domain::notes::RenderedRegion;
use crate::ports::RegionRenderer;

/// Renders generated markdown into an HTML fragment.
///
/// Fenced code blocks keep their info string as a `language-*` class so the
/// page and the PDF can style them.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer {
    smart_punctuation: bool,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn straight quotes and dashes into typographic ones.
    pub fn with_smart_punctuation(mut self) -> Self {
        self.smart_punctuation = true;
        self
    }

    fn options(&self) -> Options {
        let mut options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;
        if self.smart_punctuation {
            options |= Options::ENABLE_SMART_PUNCTUATION;
        }
        options
    }

}

impl RegionRenderer for MarkdownRenderer {
    /// Render markdown to a region. Empty markdown gives an empty region.
    fn render(&self, markdown: &str) -> RenderedRegion {
        let parser = Parser::new_ext(markdown, self.options()).map(|event| match event {
            Event::Html(raw) => Event::Text(raw),
            other => other,
        });
        let mut body = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut body, parser);
        RenderedRegion::new(body)
    }
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> String {
        MarkdownRenderer::new().render(markdown).html().to_string()
    }

    #[test]
    fn renders_headings_and_paragraphs() {
        let html = render("# Binary Search\n\nDivide and conquer.");
        assert!(html.contains("<h1>Binary Search</h1>"));
        assert!(html.contains("<p>Divide and conquer.</p>"));
    }

    #[test]
    fn fenced_code_keeps_language_class() {
        let html = render("```python\nprint('hi')\n```");
        assert!(html.contains(r#"<code class="language-python">"#));
    }

    #[test]
    fn renders_tables() {
        let html = render("| Join | Keeps |\n|---|---|\n| LEFT | all left rows |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>Join</th>"));
        assert!(html.contains("<td>LEFT</td>"));
    }

    #[test]
    fn renders_task_lists_and_strikethrough() {
        let html = render("- [x] Done\n- [ ] ~~Dropped~~");
        assert!(html.contains("type=\"checkbox\""));
        assert!(html.contains("<del>Dropped</del>"));
    }

    #[test]
    fn empty_markdown_gives_empty_region() {
        assert!(MarkdownRenderer::new().render("").is_empty());
    }

    #[test]
    fn block_html_is_escaped() {
        let html = render("<script>fetch('/clear', {method: 'POST'})</script>");
        assert!(!html.contains("<script"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn inline_html_is_escaped() {
        let html = render("See <iframe src=\"file:///etc/passwd\"></iframe> here");
        assert!(!html.contains("<iframe"));
        assert!(html.contains("&lt;iframe"));
        assert!(html.starts_with("<p>See "));
    }

    #[test]
    fn html_inside_code_stays_code() {
        let html = render("`<b>`\n\n```html\n<b>bold</b>\n```");
        assert!(html.contains("<code>&lt;b&gt;</code>"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn smart_punctuation_is_opt_in() {
        assert!(render("\"quoted\"").contains("&quot;quoted&quot;"));
        let smart = MarkdownRenderer::new()
            .with_smart_punctuation()
            .render("\"quoted\"");
        assert!(smart.html().contains('\u{201c}'));
    }

    #[test]
    fn html_escape_escapes_special_chars() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("it's"), "it&#39;s");
    }
}
