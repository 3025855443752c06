//! Splitting Markdown input into slides.
//!
//! Slides are separated by a line whose trimmed content is `---`. Lines keep
//! their content (minus the line terminator) and are re-joined with `\n`.

use crate::error::Result;
use crate::types::{RawSlide, SEPARATOR};
use std::io::BufRead;

/// Lazy, single-pass iterator over the slides of a Markdown stream.
///
/// Buffers that hold nothing but whitespace are never emitted, so repeated
/// separators and a trailing separator do not produce empty slides.
///
/// # Example
/// ```
/// use impress_core::SlideSplitter;
///
/// let input = "# A\n---\n# B\n";
/// let slides: Vec<_> = SlideSplitter::new(input.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(slides.len(), 2);
/// assert_eq!(slides[1].markdown, "# B\n");
/// ```
pub struct SlideSplitter<R> {
    reader: R,
    buffer: String,
    line: String,
    next_index: usize,
    finished: bool,
}

impl<R: BufRead> SlideSplitter<R> {
    /// Create a splitter reading from the given input.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            line: String::new(),
            next_index: 0,
            finished: false,
        }
    }

    /// Number of slides emitted so far.
    pub fn emitted(&self) -> usize {
        self.next_index
    }

    /// Finalize the buffered lines as a slide, unless they are blank.
    fn take_slide(&mut self) -> Option<RawSlide> {
        if self.buffer.trim().is_empty() {
            self.buffer.clear();
            return None;
        }

        let slide = RawSlide::new(self.next_index, std::mem::take(&mut self.buffer));
        self.next_index += 1;
        log::debug!(
            "Split slide {} ({} bytes)",
            slide.index,
            slide.markdown.len()
        );
        Some(slide)
    }
}

impl<R: BufRead> Iterator for SlideSplitter<R> {
    type Item = Result<RawSlide>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => {
                    self.finished = true;
                    return self.take_slide().map(Ok);
                }
                Ok(_) => {
                    let content = strip_line_ending(&self.line);
                    if content.trim() == SEPARATOR {
                        if let Some(slide) = self.take_slide() {
                            return Some(Ok(slide));
                        }
                    } else {
                        self.buffer.push_str(content);
                        self.buffer.push('\n');
                    }
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }

        None
    }
}

/// Split an in-memory Markdown document into slides.
pub fn split_str(markdown: &str) -> Vec<RawSlide> {
    // Reading from a byte slice of valid UTF-8 cannot fail.
    SlideSplitter::new(markdown.as_bytes())
        .filter_map(|slide| slide.ok())
        .collect()
}

/// Remove a trailing `\n` or `\r\n` from a line.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
