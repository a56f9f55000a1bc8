//! Notebook display channels

use std::io::{self, Write};

use crate::error::HighlightError;

/// Somewhere rendered HTML can be shown
pub trait DisplayChannel {
    /// Show one HTML document
    fn display_html(&mut self, html: &str) -> Result<(), HighlightError>;
}

/// Rich output for the evcxr Jupyter kernel
///
/// The kernel picks up content written between `EVCXR_BEGIN_CONTENT` and
/// `EVCXR_END_CONTENT` markers on stdout.
pub struct EvcxrDisplay<W: Write> {
    writer: W,
}

impl EvcxrDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> EvcxrDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplayChannel for EvcxrDisplay<W> {
    fn display_html(&mut self, html: &str) -> Result<(), HighlightError> {
        write!(self.writer, "EVCXR_BEGIN_CONTENT text/html\n{}", html)?;
        if !html.ends_with('\n') {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "EVCXR_END_CONTENT")?;
        self.writer.flush()?;
        tracing::trace!(bytes = html.len(), "sent html to evcxr");
        Ok(())
    }
}

/// Keeps displayed documents in memory
#[derive(Debug, Default, Clone)]
pub struct CapturedDisplay {
    pub documents: Vec<String>,
}

impl CapturedDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently displayed document
    pub fn last(&self) -> Option<&str> {
        self.documents.last().map(String::as_str)
    }
}

impl DisplayChannel for CapturedDisplay {
    fn display_html(&mut self, html: &str) -> Result<(), HighlightError> {
        self.documents.push(html.to_string());
        Ok(())
    }
}
