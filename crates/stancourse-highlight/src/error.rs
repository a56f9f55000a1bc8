//! Error types for stancourse-highlight

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors rendering or displaying Stan source
#[derive(Error, Debug)]
pub enum HighlightError {
    /// Source file missing or unreadable
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Line ranges are 1-based
    #[error("Invalid line range {start}..={end}: line numbers start at 1")]
    InvalidLineRange { start: usize, end: usize },

    /// Writing to the display channel failed
    #[error("Display channel error: {0}")]
    Display(#[from] io::Error),
}
