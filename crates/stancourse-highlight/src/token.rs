//! Token kinds
//!
//! CSS class names follow Pygments' short token names so stylesheets
//! written for Pygments output apply unchanged.

use serde::{Deserialize, Serialize};

/// Classification of a lexed span
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Whitespace,
    /// `//` or `#` to end of line
    CommentSingle,
    /// `/* ... */`
    CommentMultiline,
    /// `#include ...`
    Preproc,
    Keyword,
    /// Program block header (`model`, `transformed data`, ...)
    Block,
    /// Variable type (`real`, `vector`, `cov_matrix`, ...)
    Type,
    /// Reserved word that cannot name a variable
    Reserved,
    /// Built-in function called by name
    Builtin,
    /// Distribution name after `~`
    Distribution,
    Integer,
    Float,
    /// Imaginary literal (`2.5i`)
    Imaginary,
    String,
    Operator,
    Punctuation,
    Name,
    /// Character the lexer does not recognise
    Error,
}

impl TokenKind {
    /// CSS class for the span, `None` for unstyled text
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            TokenKind::Whitespace => None,
            TokenKind::CommentSingle => Some("c1"),
            TokenKind::CommentMultiline => Some("cm"),
            TokenKind::Preproc => Some("cp"),
            TokenKind::Keyword => Some("k"),
            TokenKind::Block => Some("kn"),
            TokenKind::Type => Some("kt"),
            TokenKind::Reserved => Some("kr"),
            TokenKind::Builtin | TokenKind::Distribution => Some("nb"),
            TokenKind::Integer => Some("mi"),
            TokenKind::Float | TokenKind::Imaginary => Some("mf"),
            TokenKind::String => Some("s"),
            TokenKind::Operator => Some("o"),
            TokenKind::Punctuation => Some("p"),
            TokenKind::Name => Some("n"),
            TokenKind::Error => Some("err"),
        }
    }

    /// Whitespace and comments do not affect how the next word is read
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::CommentSingle | TokenKind::CommentMultiline
        )
    }
}

/// A classified slice of the input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}
