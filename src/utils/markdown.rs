//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection, query
//! highlighting, code block colouring and extraction of diagram blocks.
//! All behaviour is controlled by the [`RenderOptions`] passed to each call.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, TextMergeStream, html};
use regex::Regex;

use super::highlight::highlight_matches;
use super::syntax::CodeHighlighter;
use crate::config::diagram;

/// Fenced diagram blocks, e.g. ```` ```mermaid ... ``` ````.
static DIAGRAM_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?s)```{}(.*?)```", regex::escape(diagram::LANGUAGE)))
        .expect("diagram fence pattern is valid")
});

/// Rendering configuration for one call.
#[derive(Clone, Copy)]
pub struct RenderOptions<'a> {
    /// GitHub-style tables and strikethrough
    pub tables: bool,
    /// Render single newlines as line breaks
    pub hard_breaks: bool,
    /// Search query to mark in text (empty for none)
    pub query: &'a str,
    /// Colours fenced code blocks
    pub highlighter: &'a dyn CodeHighlighter,
}

impl<'a> RenderOptions<'a> {
    pub fn new(highlighter: &'a dyn CodeHighlighter) -> Self {
        Self {
            tables: true,
            hard_breaks: true,
            query: "",
            highlighter,
        }
    }

    pub fn with_query(self, query: &'a str) -> Self {
        Self { query, ..self }
    }

    fn parser_options(&self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        options
    }
}

/// A piece of a Markdown document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Ordinary Markdown
    Markup(&'a str),
    /// Diagram definition taken from a fenced diagram block
    Diagram(&'a str),
}

/// A rendered piece of a Markdown document.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DocumentBlock {
    /// Sanitized HTML
    Html(String),
    /// Diagram definition still to be rendered
    Diagram(String),
}

/// Split a document around its fenced diagram blocks, in order.
///
/// Diagram definitions are trimmed; markup segments are kept verbatim.
pub fn split_diagrams(markdown: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for caps in DIAGRAM_FENCE.captures_iter(markdown) {
        let (Some(whole), Some(body)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::Markup(&markdown[last..whole.start()]));
        }
        segments.push(Segment::Diagram(body.as_str().trim()));
        last = whole.end();
    }
    if last < markdown.len() {
        segments.push(Segment::Markup(&markdown[last..]));
    }
    segments
}

/// Render a document into HTML blocks and diagram blocks.
///
/// Whitespace-only markup between diagrams is dropped.
pub fn render_blocks(markdown: &str, options: &RenderOptions<'_>) -> Vec<DocumentBlock> {
    split_diagrams(markdown)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Diagram(definition) => Some(DocumentBlock::Diagram(definition.to_string())),
            Segment::Markup(text) if text.trim().is_empty() => None,
            Segment::Markup(text) => Some(DocumentBlock::Html(markdown_to_html(text, options))),
        })
        .collect()
}

/// Convert markdown content to sanitized HTML.
///
/// Fenced code blocks go through the configured highlighter; text outside
/// code and image alt text has query matches wrapped in `<mark>`.
/// Adjacent text events are merged first so a query can match across
/// characters the parser splits apart (`*`, `_`, `[`). The output is sanitized
/// using `ammonia` to prevent XSS attacks.
pub fn markdown_to_html(markdown: &str, options: &RenderOptions<'_>) -> String {
    let parser = TextMergeStream::new(Parser::new_ext(markdown, options.parser_options()));

    let mut events = Vec::new();
    // (language, code) of the fenced block being collected
    let mut code_block: Option<(String, String)> = None;
    // Alt text is written as an attribute value, so it must stay plain text
    let mut image_depth = 0usize;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().unwrap_or_default().to_string()
                    }
                    CodeBlockKind::Indented => String::new(),
                };
                code_block = Some((language, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((language, code)) = code_block.take() {
                    events.push(Event::Html(
                        render_code_block(&language, &code, options).into(),
                    ));
                }
            }
            Event::Start(Tag::Image { .. }) => {
                image_depth += 1;
                events.push(event);
            }
            Event::End(TagEnd::Image) => {
                image_depth = image_depth.saturating_sub(1);
                events.push(event);
            }
            Event::Text(text) => match code_block.as_mut() {
                Some((_, code)) => code.push_str(&text),
                None if image_depth > 0 || options.query.trim().is_empty() => {
                    events.push(Event::Text(text))
                }
                None => events.push(Event::InlineHtml(
                    highlight_matches(&text, options.query).into(),
                )),
            },
            Event::SoftBreak if options.hard_breaks => events.push(Event::HardBreak),
            other => events.push(other),
        }
    }

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());

    sanitize(&html_output)
}

fn render_code_block(language: &str, code: &str, options: &RenderOptions<'_>) -> String {
    let body = options
        .highlighter
        .highlight(code, language)
        .unwrap_or_else(|| ammonia::clean_text(code));

    let language: String = language
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+'))
        .collect();
    if language.is_empty() {
        format!("<pre><code>{}</code></pre>\n", body)
    } else {
        format!(
            "<pre><code class=\"language-{}\">{}</code></pre>\n",
            language, body
        )
    }
}

/// Sanitize HTML, keeping highlighter classes and search marks.
fn sanitize(html: &str) -> String {
    ammonia::Builder::default()
        .add_tags(&["mark"])
        .add_tag_attributes("code", &["class"])
        .add_tag_attributes("span", &["class"])
        .clean(html)
        .to_string()
}
