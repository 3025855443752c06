//! Split → render → assemble pipeline.
//!
//! The splitter and renderer each run on their own scoped thread and hand
//! slides forward over rendezvous channels, so a stage blocks until the next
//! one has taken the previous slide. The assembler runs on the calling thread
//! and owns the output stream.

use crate::error::{Error, Result};
use crate::impress::ImpressAssembler;
use crate::render::{CommonMarkRenderer, MarkdownRenderer};
use crate::splitter::SlideSplitter;
use crate::types::{Assets, RawSlide, RenderedSlide};
use std::io::{BufRead, Write};
use std::sync::mpsc;
use std::thread;

/// Converts a Markdown stream into an impress.js document.
pub struct Pipeline {
    renderer: Box<dyn MarkdownRenderer>,
    assets: Assets,
}

impl Pipeline {
    /// Create a pipeline using the CommonMark renderer.
    pub fn new(assets: Assets) -> Self {
        Self {
            renderer: Box::new(CommonMarkRenderer::new()),
            assets,
        }
    }

    /// Replace the Markdown renderer.
    pub fn with_renderer(mut self, renderer: impl MarkdownRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Asset references written into the document.
    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    /// Run the threaded pipeline and return the number of slides written.
    ///
    /// Nothing is written to `output` unless the whole input was read
    /// successfully.
    pub fn run<R, W>(&self, input: R, output: &mut W) -> Result<usize>
    where
        R: BufRead + Send,
        W: Write,
    {
        let renderer: &dyn MarkdownRenderer = self.renderer.as_ref();

        thread::scope(|scope| {
            let (raw_tx, raw_rx) = mpsc::sync_channel::<RawSlide>(0);
            let (html_tx, html_rx) = mpsc::sync_channel::<RenderedSlide>(0);

            let split_stage = scope.spawn(move || -> Result<usize> {
                let mut splitter = SlideSplitter::new(input);
                for slide in &mut splitter {
                    raw_tx
                        .send(slide?)
                        .map_err(|_| Error::Stage("renderer stopped accepting slides".into()))?;
                }
                Ok(splitter.emitted())
            });

            let render_stage = scope.spawn(move || {
                for slide in raw_rx {
                    let rendered = renderer.render_slide(&slide);
                    log::debug!("Rendered slide {}", rendered.index);
                    if html_tx.send(rendered).is_err() {
                        break;
                    }
                }
            });

            let mut assembler = ImpressAssembler::new();
            for slide in html_rx {
                assembler.push(&slide.html);
            }

            let split = split_stage
                .join()
                .map_err(|_| Error::Stage("splitter panicked".into()))??;
            render_stage
                .join()
                .map_err(|_| Error::Stage("renderer panicked".into()))?;

            if split != assembler.len() {
                return Err(Error::Stage(format!(
                    "split {} slides but assembled {}",
                    split,
                    assembler.len()
                )));
            }

            assembler.finish(&self.assets, output)
        })
    }

    /// Run the same conversion as a single-threaded iterator chain.
    ///
    /// Produces output identical to [`Pipeline::run`].
    pub fn run_sequential<R, W>(&self, input: R, output: &mut W) -> Result<usize>
    where
        R: BufRead,
        W: Write,
    {
        let assembler = SlideSplitter::new(input)
            .map(|slide| slide.map(|raw| self.renderer.render_slide(&raw)))
            .try_fold(ImpressAssembler::new(), |mut assembler, slide| {
                assembler.push(&slide?.html);
                Ok::<_, Error>(assembler)
            })?;

        assembler.finish(&self.assets, output)
    }

    /// Convert an in-memory Markdown document to an HTML string.
    pub fn render_to_string(&self, markdown: &str) -> Result<String> {
        let mut out = Vec::with_capacity(markdown.len() * 2);
        self.run(markdown.as_bytes(), &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Assets::default())
    }
}
