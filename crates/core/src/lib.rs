//! Core slide splitting, Markdown rendering, and impress.js document assembly
//! for Markdown presentations.

pub mod error;
pub mod impress;
pub mod pipeline;
pub mod render;
pub mod splitter;
pub mod types;

pub use error::{Error, Result};
pub use impress::ImpressAssembler;
pub use pipeline::Pipeline;
pub use render::{CommonMarkRenderer, MarkdownRenderer};
pub use splitter::{split_str, SlideSplitter};
pub use types::{
    Assets, Config, RawSlide, RenderedSlide, DEFAULT_SCRIPT, DEFAULT_STYLESHEET, SEPARATOR,
    SLIDE_SPACING_PX,
};
