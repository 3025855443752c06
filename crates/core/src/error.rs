//! Error types for Markdown-to-presentation conversion.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a presentation.
///
/// All of them are fatal: the pipeline stops at the first one and the
/// document is not written.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the Markdown input.
    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),

    /// Failed to write the presentation document.
    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),

    /// A pipeline stage stopped without finishing its work.
    #[error("Pipeline stage failed: {0}")]
    Stage(String),
}
