//! Markdown to HTML rendering for individual slides.

use crate::types::{RawSlide, RenderedSlide};
use pulldown_cmark::{html, Options, Parser};

/// Converts a slide's Markdown into an HTML fragment.
///
/// Rendering never fails: malformed Markdown produces best-effort HTML.
pub trait MarkdownRenderer: Send + Sync {
    /// Render a Markdown fragment to HTML.
    fn render(&self, markdown: &str) -> String;

    /// Render a raw slide, keeping its position.
    fn render_slide(&self, slide: &RawSlide) -> RenderedSlide {
        RenderedSlide::new(slide.index, self.render(&slide.markdown))
    }
}

/// CommonMark renderer backed by `pulldown-cmark`.
///
/// Enables the common extensions: tables, strikethrough, footnotes and
/// smart punctuation.
#[derive(Debug, Clone)]
pub struct CommonMarkRenderer {
    options: Options,
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_SMART_PUNCTUATION,
        }
    }
}

impl CommonMarkRenderer {
    /// Create a renderer with the common extensions enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with an explicit set of parser options.
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, parser);
        output
    }
}
