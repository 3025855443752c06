//! Domain types for slides and presentation settings.

use std::path::PathBuf;

/// Line that separates two slides (compared after trimming whitespace).
pub const SEPARATOR: &str = "---";

/// Horizontal distance between consecutive slides, in pixels.
pub const SLIDE_SPACING_PX: usize = 1000;

/// Stylesheet referenced when none is configured.
pub const DEFAULT_STYLESHEET: &str = "impress.css";

/// Script referenced when none is configured.
pub const DEFAULT_SCRIPT: &str = "impress.js";

/// Markdown source of a single slide, as cut from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSlide {
    /// 0-based position in the presentation.
    pub index: usize,

    /// Slide lines, each terminated by `\n`.
    pub markdown: String,
}

impl RawSlide {
    /// Create a raw slide at the given position.
    pub fn new(index: usize, markdown: impl Into<String>) -> Self {
        Self {
            index,
            markdown: markdown.into(),
        }
    }
}

/// HTML produced from a [`RawSlide`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSlide {
    /// 0-based position in the presentation, same as the source slide.
    pub index: usize,

    /// Rendered HTML fragment.
    pub html: String,
}

impl RenderedSlide {
    /// Create a rendered slide at the given position.
    pub fn new(index: usize, html: impl Into<String>) -> Self {
        Self {
            index,
            html: html.into(),
        }
    }

    /// Horizontal offset of this slide on the impress.js canvas.
    pub fn x_offset(&self) -> usize {
        self.index * SLIDE_SPACING_PX
    }
}

/// Stylesheet and script references placed in the output document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assets {
    /// Stylesheet path or URL.
    pub stylesheet: Option<String>,

    /// impress.js script path or URL.
    pub script: Option<String>,
}

impl Assets {
    /// Create asset settings with both references unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stylesheet reference.
    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.stylesheet = Some(stylesheet.into());
        self
    }

    /// Set the script reference.
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    /// Stylesheet to link, falling back to [`DEFAULT_STYLESHEET`] when unset or empty.
    pub fn stylesheet(&self) -> &str {
        non_empty_or(self.stylesheet.as_deref(), DEFAULT_STYLESHEET)
    }

    /// Script to load, falling back to [`DEFAULT_SCRIPT`] when unset or empty.
    pub fn script(&self) -> &str {
        non_empty_or(self.script.as_deref(), DEFAULT_SCRIPT)
    }
}

/// Process-wide settings, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Markdown file to read. `None` means standard input.
    pub input: Option<PathBuf>,

    /// Asset references for the output document.
    pub assets: Assets,
}

impl Config {
    /// Create a configuration that reads stdin and uses default assets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read Markdown from the given file instead of stdin.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Use the given asset references.
    pub fn with_assets(mut self, assets: Assets) -> Self {
        self.assets = assets;
        self
    }

    /// Asset references for the assembler.
    pub fn assets(&self) -> &Assets {
        &self.assets
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}
