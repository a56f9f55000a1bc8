//! HTML formatter
//!
//! Output mirrors Pygments' `HtmlFormatter`: spans carry the short token
//! class names, code sits in `<div class="highlight"><pre>`, and a full
//! document embeds the stylesheet so it renders without external assets.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde::{Deserialize, Serialize};

use crate::token::{Token, TokenKind};

/// Pygments default style, as (token class, declarations)
const STYLE_RULES: &[(&str, &str)] = &[
    ("c1", "color: #3D7B7B; font-style: italic"),
    ("cm", "color: #3D7B7B; font-style: italic"),
    ("cp", "color: #9C6500"),
    ("k", "color: #008000; font-weight: bold"),
    ("kn", "color: #008000; font-weight: bold"),
    ("kr", "color: #008000; font-weight: bold"),
    ("kt", "color: #B00040"),
    ("nb", "color: #008000"),
    ("mi", "color: #666666"),
    ("mf", "color: #666666"),
    ("s", "color: #BA2121"),
    ("o", "color: #666666"),
    ("err", "border: 1px solid #FF0000"),
];

/// Renders tokens as highlighted HTML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlFormatter {
    /// Standalone document with embedded stylesheet, otherwise only the
    /// `<div>` fragment
    pub full: bool,
    /// Document title, also shown as a heading when non-empty
    pub title: String,
    /// Prefix each line with its number
    pub line_numbers: bool,
    /// Number of the first rendered line
    pub line_number_start: usize,
    /// Class of the wrapping `<div>`, also the stylesheet scope
    pub css_class: String,
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self {
            full: true,
            title: String::new(),
            line_numbers: false,
            line_number_start: 1,
            css_class: "highlight".to_string(),
        }
    }
}

impl HtmlFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter producing only the `<div>` fragment
    pub fn fragment() -> Self {
        Self {
            full: false,
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = class.into();
        self
    }

    /// Render `tokens`
    ///
    /// The code always ends with a newline, so text with and without a
    /// trailing newline renders the same.
    pub fn format(&self, tokens: &[Token<'_>]) -> String {
        let code = self.code_markup(tokens);
        if self.full {
            self.document_markup(code).into_string()
        } else {
            code.into_string()
        }
    }

    fn code_markup(&self, tokens: &[Token<'_>]) -> Markup {
        let lines = split_lines(tokens);
        let last_number = self.line_number_start + lines.len().saturating_sub(1);
        let width = last_number.to_string().len();

        html! {
            div class=(self.css_class) {
                pre {
                    span {}
                    @for (offset, line) in lines.iter().enumerate() {
                        @if self.line_numbers {
                            span class="linenos" {
                                (format!("{:>width$}", self.line_number_start + offset, width = width))
                            }
                        }
                        @for (kind, text) in line {
                            @match kind.css_class() {
                                Some(class) => { span class=(class) { (text) } },
                                None => { (text) },
                            }
                        }
                        "\n"
                    }
                }
            }
        }
    }

    fn document_markup(&self, code: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    title { (self.title) }
                    meta charset="utf-8";
                    style type="text/css" { (PreEscaped(stylesheet(&self.css_class))) }
                }
                body {
                    @if !self.title.is_empty() {
                        h2 { (self.title) }
                    }
                    (code)
                }
            }
        }
    }
}

/// Group token pieces into lines, splitting tokens that span newlines
fn split_lines<'a>(tokens: &[Token<'a>]) -> Vec<Vec<(TokenKind, &'a str)>> {
    let mut lines = Vec::new();
    let mut current = Vec::new();

    for token in tokens {
        for (i, piece) in token.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(std::mem::take(&mut current));
            }
            if !piece.is_empty() {
                current.push((token.kind, piece));
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// CSS rules for token classes, scoped to `.{css_class}`
pub fn stylesheet(css_class: &str) -> String {
    let mut rules = vec![
        format!(".{css_class} {{ background: #f8f8f8; }}"),
        format!(
            ".{css_class} .linenos {{ color: inherit; background-color: transparent; padding-left: 5px; padding-right: 5px; }}"
        ),
    ];
    rules.extend(
        STYLE_RULES
            .iter()
            .map(|(class, decl)| format!(".{css_class} .{class} {{ {decl} }}")),
    );
    rules.join("\n") + "\n"
}
