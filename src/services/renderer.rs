use crate::types::RenderedArtifacts;
use pulldown_cmark::{html, Options, Parser};

const STYLE_SHEET: &str = r#"        body {
            font-family: Arial, sans-serif;
            line-height: 1.6;
            max-width: 1000px;
            margin: 0 auto;
            padding: 20px;
            color: #333;
        }
        h1, h2, h3, h4, h5, h6 {
            color: #2c3e50;
            margin-top: 24px;
            margin-bottom: 16px;
        }
        h1 {
            font-size: 2.5em;
            border-bottom: 1px solid #eaecef;
            padding-bottom: 0.3em;
        }
        h2 {
            font-size: 2em;
            border-bottom: 1px solid #eaecef;
            padding-bottom: 0.3em;
        }
        code, pre {
            font-family: Consolas, Monaco, 'Andale Mono', monospace;
            background-color: #f6f8fa;
            border-radius: 3px;
        }
        pre {
            padding: 16px;
            overflow: auto;
            line-height: 1.45;
        }
        code {
            padding: 0.2em 0.4em;
        }
        pre code {
            padding: 0;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            margin-bottom: 16px;
        }
        table, th, td {
            border: 1px solid #dfe2e5;
        }
        th, td {
            padding: 8px 16px;
            text-align: left;
        }
        th {
            background-color: #f6f8fa;
        }
        img {
            max-width: 100%;
            height: auto;
        }
        blockquote {
            padding: 0 1em;
            color: #6a737d;
            border-left: 0.25em solid #dfe2e5;
            margin: 0 0 16px 0;
        }
"#;

/// Markdown to standalone HTML with an inline style sheet.
pub struct HtmlRenderer {
    title: String,
}

impl HtmlRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    pub fn render(&self, markdown: &str) -> String {
        let body = Self::markdown_to_html(markdown);

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"utf-8\">\n    <title>{}</title>\n    <style>\n{}    </style>\n</head>\n<body>\n{}</body>\n</html>\n",
            escape_text(&self.title),
            STYLE_SHEET,
            body
        )
    }

    pub fn render_artifacts(&self, markdown: &str) -> RenderedArtifacts {
        RenderedArtifacts {
            markdown: markdown.to_string(),
            html: self.render(markdown),
        }
    }

    fn markdown_to_html(markdown: &str) -> String {
        // Fenced code blocks are part of CommonMark; tables need the extension
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);

        let parser = Parser::new_ext(markdown, options);
        let mut body = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut body, parser);
        body
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# Heading\n\n| Model | Price |\n|-------|-------|\n| A | 100 |\n\n```sql\nSELECT * FROM watches;\n```\n\n> quoted\n";

    #[test]
    fn test_renders_tables_and_fenced_code() {
        let html = HtmlRenderer::new("Doc").render(SAMPLE);

        assert!(html.contains("<table>"));
        assert!(html.contains("<th>Model</th>"));
        assert!(html.contains("<pre><code class=\"language-sql\">"));
        assert!(html.contains("SELECT * FROM watches;"));
        assert!(html.contains("<blockquote>"));
    }

    #[test]
    fn test_single_wrapper_across_repeated_renders() {
        let renderer = HtmlRenderer::new("Doc");
        let first = renderer.render(SAMPLE);
        let second = renderer.render(SAMPLE);

        assert_eq!(first, second);
        for tag in ["<html>", "</html>", "<head>", "<body>", "</body>", "<!DOCTYPE html>"] {
            assert_eq!(second.matches(tag).count(), 1, "tag {}", tag);
        }
    }

    #[test]
    fn test_template_carries_charset_title_and_styles() {
        let html = HtmlRenderer::new("Watches & <Prices>").render("text");

        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains("<title>Watches &amp; &lt;Prices&gt;</title>"));
        assert!(html.contains("border-left: 0.25em solid #dfe2e5;"));
        assert!(html.contains("max-width: 100%;"));
        assert!(!html.contains("<link"));
    }

    #[test]
    fn test_render_artifacts_keeps_markdown() {
        let artifacts = HtmlRenderer::new("Doc").render_artifacts("# A\n");
        assert_eq!(artifacts.markdown, "# A\n");
        assert!(artifacts.html.contains("<h1>A</h1>"));
    }
}
