//! Markdown to HTML with titled code blocks.
//!
//! Fenced blocks accept a `title` attribute after the language:
//!
//! ````markdown
//! ```javascript title="server.js"
//! app.listen(PORT);
//! ```
//! ````
//!
//! Titled blocks get a header bar with the title and a copy button that
//! targets the block's `<code>` element by id.

use std::fmt::Write;

use bn_nav::html::escape_html;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Result of rendering a markdown page.
#[derive(Clone, Debug, Default)]
pub struct Rendered {
    /// Rendered HTML.
    pub html: String,
    /// Text of the first H1 heading.
    pub title: Option<String>,
}

/// Parsed fence info string.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct FenceInfo {
    pub(crate) language: Option<String>,
    pub(crate) title: Option<String>,
}

/// Parse a fence info string such as `bash title="My Terminal"`.
///
/// The first bare word is the language. `title` may be quoted to include
/// spaces. Unknown attributes are ignored.
pub(crate) fn parse_fence_info(info: &str) -> FenceInfo {
    let info = info.trim();
    let mut result = FenceInfo::default();

    let rest = match info.split_once(char::is_whitespace) {
        Some((first, rest)) if !first.contains('=') => {
            result.language = Some(first.to_owned());
            rest
        }
        None if !info.is_empty() && !info.contains('=') => {
            result.language = Some(info.to_owned());
            ""
        }
        _ => info,
    };

    if let Some(pos) = rest.find("title=") {
        let value = &rest[pos + "title=".len()..];
        let title = if let Some(quoted) = value.strip_prefix('"') {
            quoted.split('"').next().unwrap_or_default()
        } else {
            value.split_whitespace().next().unwrap_or_default()
        };
        if !title.is_empty() {
            result.title = Some(title.to_owned());
        }
    }

    result
}

struct PendingCode {
    info: FenceInfo,
    content: String,
}

impl PendingCode {
    fn to_html(&self, index: usize) -> String {
        let content = self.content.strip_suffix('\n').unwrap_or(&self.content);
        let mut out = String::with_capacity(content.len() + 256);
        let id = format!("code-{index}");

        out.push_str(r#"<div class="code-block">"#);
        if let Some(title) = &self.info.title {
            write!(
                out,
                r#"<div class="code-block-header"><span class="code-block-title">{}</span><button type="button" class="code-copy" data-copy-target="{id}" title="Copy to clipboard">Copy</button></div>"#,
                escape_html(title)
            )
            .unwrap();
        }
        match &self.info.language {
            Some(lang) => write!(
                out,
                r#"<pre><code id="{id}" class="language-{}">{}</code></pre>"#,
                escape_html(lang),
                escape_html(content)
            ),
            None => write!(
                out,
                r#"<pre><code id="{id}">{}</code></pre>"#,
                escape_html(content)
            ),
        }
        .unwrap();
        out.push_str("</div>");
        out
    }
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

/// Render markdown to HTML, extracting the first H1 as the title.
///
/// The H1 is still rendered.
#[must_use]
pub fn render_markdown(markdown: &str) -> Rendered {
    let mut events = Vec::new();
    let mut title = None;
    let mut title_text = String::new();
    let mut in_title = false;
    let mut pending: Option<PendingCode> = None;
    let mut code_index = 0;

    for event in Parser::new_ext(markdown, parser_options()) {
        if let Some(block) = pending.as_mut() {
            match event {
                Event::Text(text) => block.content.push_str(&text),
                Event::End(TagEnd::CodeBlock) => {
                    let html = block.to_html(code_index);
                    code_index += 1;
                    pending = None;
                    events.push(Event::Html(html.into()));
                }
                _ => {}
            }
            continue;
        }

        match &event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let info = match kind {
                    CodeBlockKind::Fenced(info) => parse_fence_info(info),
                    CodeBlockKind::Indented => FenceInfo::default(),
                };
                pending = Some(PendingCode {
                    info,
                    content: String::new(),
                });
                continue;
            }
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if title.is_none() => in_title = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) if in_title => {
                in_title = false;
                title = Some(std::mem::take(&mut title_text));
            }
            Event::Text(text) | Event::Code(text) if in_title => title_text.push_str(text),
            _ => {}
        }
        events.push(event);
    }

    let mut html = String::with_capacity(markdown.len() * 2);
    pulldown_cmark::html::push_html(&mut html, events.into_iter());

    Rendered { html, title }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_fence_info_language_only() {
        assert_eq!(
            parse_fence_info("rust"),
            FenceInfo {
                language: Some("rust".to_owned()),
                title: None,
            }
        );
    }

    #[test]
    fn test_parse_fence_info_quoted_title() {
        assert_eq!(
            parse_fence_info(r#"javascript title="Middleware Example""#),
            FenceInfo {
                language: Some("javascript".to_owned()),
                title: Some("Middleware Example".to_owned()),
            }
        );
    }

    #[test]
    fn test_parse_fence_info_bare_title() {
        let info = parse_fence_info("env title=.env");
        assert_eq!(info.language.as_deref(), Some("env"));
        assert_eq!(info.title.as_deref(), Some(".env"));
    }

    #[test]
    fn test_parse_fence_info_title_without_language() {
        let info = parse_fence_info(r#"title="Terminal""#);
        assert_eq!(info.language, None);
        assert_eq!(info.title.as_deref(), Some("Terminal"));
    }

    #[test]
    fn test_parse_fence_info_empty() {
        assert_eq!(parse_fence_info(""), FenceInfo::default());
    }

    #[test]
    fn test_title_extracted_and_rendered() {
        let rendered = render_markdown("# Setup `Guide`\n\nBody text.\n");

        assert_eq!(rendered.title.as_deref(), Some("Setup Guide"));
        assert!(rendered.html.contains("<h1>Setup <code>Guide</code></h1>"));
        assert!(rendered.html.contains("<p>Body text.</p>"));
    }

    #[test]
    fn test_only_first_h1_is_title() {
        let rendered = render_markdown("# One\n\n# Two\n");
        assert_eq!(rendered.title.as_deref(), Some("One"));
    }

    #[test]
    fn test_no_title() {
        let rendered = render_markdown("## Section\n");
        assert_eq!(rendered.title, None);
    }

    #[test]
    fn test_titled_code_block() {
        let md = "```bash title=\"Terminal\"\nnpm install bootnode\n```\n";

        let rendered = render_markdown(md);

        assert_eq!(
            rendered.html.trim_end(),
            r#"<div class="code-block"><div class="code-block-header"><span class="code-block-title">Terminal</span><button type="button" class="code-copy" data-copy-target="code-0" title="Copy to clipboard">Copy</button></div><pre><code id="code-0" class="language-bash">npm install bootnode</code></pre></div>"#
        );
    }

    #[test]
    fn test_untitled_code_block_has_no_header() {
        let rendered = render_markdown("```\nplain\n```\n");

        assert!(!rendered.html.contains("code-block-header"));
        assert!(rendered.html.contains(r#"<pre><code id="code-0">plain</code></pre>"#));
    }

    #[test]
    fn test_code_blocks_numbered_in_order() {
        let rendered = render_markdown("```a\n1\n```\n\n```b\n2\n```\n");

        assert!(rendered.html.contains(r#"id="code-0" class="language-a""#));
        assert!(rendered.html.contains(r#"id="code-1" class="language-b""#));
    }

    #[test]
    fn test_code_content_escaped() {
        let rendered = render_markdown("```html\n<div>&</div>\n```\n");
        assert!(rendered.html.contains("&lt;div&gt;&amp;&lt;/div&gt;"));
    }

    #[test]
    fn test_heading_inside_code_not_title() {
        let rendered = render_markdown("```\n# not a heading\n```\n\n# Real\n");
        assert_eq!(rendered.title.as_deref(), Some("Real"));
    }

    #[test]
    fn test_gfm_alert() {
        let rendered = render_markdown("> [!WARNING]\n> Never commit secrets.\n");
        assert!(rendered.html.contains("markdown-alert-warning"));
        assert!(rendered.html.contains("Never commit secrets."));
    }

    #[test]
    fn test_table() {
        let rendered = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(rendered.html.contains("<table>"));
    }
}
