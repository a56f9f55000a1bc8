//! stancourse-highlight - Stan source display for notebooks
//!
//! Reads a Stan program (optionally a 1-based inclusive line range of it),
//! tokenizes it, renders the tokens as a standalone HTML document and pushes
//! the document to the notebook's display channel.
//!
//! # Pieces
//!
//! - **Lexer**: [`tokenize`] splits Stan text into classified tokens; it never
//!   fails and the tokens always concatenate back to the input
//! - **Formatter**: [`HtmlFormatter`] renders tokens with Pygments-compatible
//!   CSS classes and an embedded stylesheet
//! - **Display**: [`DisplayChannel`] implementations for the evcxr Jupyter
//!   kernel and for in-memory capture
//!
//! # Examples
//!
//! ```ignore
//! use stancourse_highlight::{show_stan_model, EvcxrDisplay, LineRange};
//!
//! let mut out = EvcxrDisplay::stdout();
//! show_stan_model(&mut out, "models/eight_schools.stan", None)?;
//! show_stan_model(&mut out, "models/eight_schools.stan", Some(LineRange::new(10, 18)))?;
//! ```

pub mod builtins;
pub mod display;
pub mod error;
pub mod html;
pub mod lexer;
pub mod source;
pub mod token;

pub use display::*;
pub use error::*;
pub use html::*;
pub use lexer::*;
pub use source::*;
pub use token::*;

use std::path::Path;

/// Highlight Stan source text as HTML
pub fn highlight(code: &str, formatter: &HtmlFormatter) -> String {
    formatter.format(&tokenize(code))
}

/// Read, slice and highlight a Stan file without displaying it
pub fn render_stan_file(
    path: impl AsRef<Path>,
    lines: Option<LineRange>,
    formatter: &HtmlFormatter,
) -> Result<String, HighlightError> {
    let path = path.as_ref();
    let code = read_source(path, lines)?;

    // Number from the first selected line
    let mut formatter = formatter.clone();
    if let Some(range) = lines {
        formatter.line_number_start = range.start;
    }

    let html = highlight(&code, &formatter);
    tracing::debug!(
        path = %path.display(),
        ?lines,
        bytes = html.len(),
        "rendered stan source"
    );
    Ok(html)
}

/// Show a Stan file with syntax highlighting in the notebook
///
/// Uses a full standalone document. Nothing reaches `display` if reading
/// or slicing the file fails.
pub fn show_stan_model<D>(
    display: &mut D,
    file_path: impl AsRef<Path>,
    lines: Option<LineRange>,
) -> Result<(), HighlightError>
where
    D: DisplayChannel + ?Sized,
{
    show_stan_model_with(display, file_path, lines, &HtmlFormatter::default())
}

/// [`show_stan_model`] with explicit formatter options
pub fn show_stan_model_with<D>(
    display: &mut D,
    file_path: impl AsRef<Path>,
    lines: Option<LineRange>,
    formatter: &HtmlFormatter,
) -> Result<(), HighlightError>
where
    D: DisplayChannel + ?Sized,
{
    let html = render_stan_file(file_path, lines, formatter)?;
    display.display_html(&html)
}
