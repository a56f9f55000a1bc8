//! Reading Stan source and selecting line ranges

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HighlightError;

/// Inclusive, 1-based range of lines
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<(usize, usize)> for LineRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

/// Keep lines `start..=end` of `code`, rejoined with `'\n'`
///
/// An `end` past the last line is clamped and `start > end` selects
/// nothing. Line 0 does not exist and is rejected.
pub fn select_lines(code: &str, range: LineRange) -> Result<String, HighlightError> {
    if range.start == 0 {
        return Err(HighlightError::InvalidLineRange {
            start: range.start,
            end: range.end,
        });
    }

    let lines: Vec<&str> = code.split('\n').collect();
    let start = range.start - 1;
    let end = range.end.min(lines.len());
    if start >= end {
        return Ok(String::new());
    }
    Ok(lines[start..end].join("\n"))
}

/// Read a source file, optionally narrowed to a line range
pub fn read_source(path: &Path, lines: Option<LineRange>) -> Result<String, HighlightError> {
    let code = fs::read_to_string(path).map_err(|source| HighlightError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match lines {
        Some(range) => select_lines(&code, range),
        None => Ok(code),
    }
}
