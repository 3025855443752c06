//! impress.js document output.
//!
//! Each rendered slide becomes a `step` container placed 1000px to the right
//! of the previous one, and the containers are embedded in a fixed HTML shell
//! that loads the impress.js runtime.

use crate::error::{Error, Result};
use crate::types::{Assets, SLIDE_SPACING_PX};
use std::io::Write;

/// Everything up to the stylesheet reference.
const DOCUMENT_HEAD: &str = concat!(
    "\n",
    "<html>\n",
    "<head>\n",
    "\t<meta charset=\"utf-8\" />\n",
    "\t<meta name=\"viewport\" content=\"width=1024\" />\n",
    "\t<meta name=\"apple-mobile-web-app-capable\" content=\"yes\" />\n",
    "\t<title>Show</title>\n",
    "\n",
    "\t<link href=\"",
);

/// From the stylesheet reference to the slide containers.
const DOCUMENT_BODY_OPEN: &str = concat!(
    "\" rel=\"stylesheet\" />\n",
    "</head>\n",
    "<body class=\"impress-not-supported\">\n",
    "<div class=\"fallback-message\">\n",
    "\t<p>Your browser <b>doesn't support the features required</b> by impress.js, ",
    "so you are presented with a simplified version of this presentation.</p>\n",
    "\t<p>For the best experience please use the latest <b>Chrome</b>, ",
    "<b>Safari</b> or <b>Firefox</b> browser.</p>\n",
    "</div>\n",
    "<div id=\"impress\" data-transition-duration=\"250\">\n",
);

/// From the slide containers to the script reference.
const DOCUMENT_BODY_CLOSE: &str = concat!(
    "\n",
    "</div>\n",
    "<div class=\"hint\">\n",
    "\t<p>Use a spacebar or arrow keys to navigate</p>\n",
    "</div>\n",
    "<script>\n",
    "if (\"ontouchstart\" in document.documentElement) { \n",
    "\tdocument.querySelector(\".hint\").innerHTML = ",
    "\"<p>Tap on the left or right to navigate</p>\";\n",
    "}\n",
    "</script>\n",
    "<script src=\"",
);

/// Everything after the script reference.
const DOCUMENT_TAIL: &str = concat!(
    "\"></script>\n",
    "<script>impress().init();</script>\n",
    "</body>\n",
    "</html>\n",
);

/// Collects slide containers and writes the final impress.js document.
#[derive(Debug, Clone, Default)]
pub struct ImpressAssembler {
    /// Concatenated slide containers.
    content: String,

    /// Number of slides pushed so far.
    slides: usize,
}

impl ImpressAssembler {
    /// Create an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next slide's HTML.
    ///
    /// The slide is positioned after every slide pushed before it.
    pub fn push(&mut self, html: &str) {
        let x = self.slides * SLIDE_SPACING_PX;
        self.content.push_str(&slide_container(x, html));
        self.slides += 1;
    }

    /// Number of slides pushed so far.
    pub fn len(&self) -> usize {
        self.slides
    }

    /// Whether no slide has been pushed.
    pub fn is_empty(&self) -> bool {
        self.slides == 0
    }

    /// The concatenated slide containers.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the complete document and return the number of slides in it.
    pub fn finish<W: Write>(self, assets: &Assets, out: &mut W) -> Result<usize> {
        write_document(out, assets, &self.content)?;
        log::info!("Wrote presentation with {} slides", self.slides);
        Ok(self.slides)
    }
}

/// Wrap a slide's HTML in a step container at horizontal offset `x`.
pub fn slide_container(x: usize, html: &str) -> String {
    format!("\n<div class=\"slide step\" data-x=\"{}\">\n{}\n</div>\n", x, html)
}

/// Write the outer document around already assembled slide containers.
///
/// Asset references are inserted verbatim.
pub fn write_document<W: Write>(out: &mut W, assets: &Assets, content: &str) -> Result<()> {
    let parts = [
        DOCUMENT_HEAD,
        assets.stylesheet(),
        DOCUMENT_BODY_OPEN,
        content,
        DOCUMENT_BODY_CLOSE,
        assets.script(),
        DOCUMENT_TAIL,
    ];

    for part in parts {
        out.write_all(part.as_bytes()).map_err(Error::Write)?;
    }

    Ok(())
}
