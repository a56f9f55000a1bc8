//! Stan lexer using nom
//!
//! Lexical classes:
//! ```text
//! whitespace := [ \t\r\n]+
//! comment    := '/*' .* '*/' | '//' [^\n]* | '#' [^\n]*
//! preproc    := '#include' [^\n]*
//! block      := ('functions' | 'data' | 'transformed' ws 'data' | 'parameters'
//!              | 'transformed' ws 'parameters' | 'model'
//!              | 'generated' ws 'quantities') followed by ws* '{'
//! number     := float | integer, optionally suffixed with 'i'
//! string     := '"' [^"\n]* '"'
//! word       := [A-Za-z_][A-Za-z0-9_]*
//! operator   := '<-' | '+=' | '==' | '.*' | ... | '~' | "'"
//! punct      := '{' | '}' | '[' | ']' | '(' | ')' | ',' | ';'
//! ```
//!
//! Words are classified after they are recognised, using the previous
//! significant token (for distributions after `~` and constraint keywords
//! after `<` or `,`) and the text that follows (for calls and blocks).

use crate::builtins::{
    is_distribution_function, BLOCKS, CONSTRAINTS, DISTRIBUTIONS, FUNCTIONS, KEYWORDS,
    RESERVED, TYPES,
};
use crate::token::{Token, TokenKind};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_until, take_while},
    character::complete::{
        char, digit0, digit1, multispace0, multispace1, not_line_ending, one_of, satisfy,
    },
    combinator::{map, not, opt, peek, recognize, rest, value},
    sequence::{pair, terminated, tuple},
    IResult,
};

/// Split Stan source into classified tokens
///
/// Never fails: text the lexer cannot classify becomes single-character
/// [`TokenKind::Error`] tokens, so concatenating the token texts always
/// reproduces `input`.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut remaining = input;
    let mut previous: Option<Token<'_>> = None;

    while !remaining.is_empty() {
        let (next, token) = match lex_token(remaining, previous) {
            Ok((next, token)) if next.len() < remaining.len() => (next, token),
            _ => error_char(remaining),
        };

        if !token.kind.is_trivia() {
            previous = Some(token);
        }
        tokens.push(token);
        remaining = next;
    }

    tracing::trace!(bytes = input.len(), tokens = tokens.len(), "tokenized stan source");
    tokens
}

/// Consume one character as an error token
fn error_char(input: &str) -> (&str, Token<'_>) {
    let width = input.chars().next().map_or(1, char::len_utf8);
    let (text, next) = input.split_at(width);
    (next, Token::new(TokenKind::Error, text))
}

fn lex_token<'a>(input: &'a str, previous: Option<Token<'a>>) -> IResult<&'a str, Token<'a>> {
    alt((
        map(multispace1, |s| Token::new(TokenKind::Whitespace, s)),
        comment,
        string_literal,
        block_header,
        number,
        |i: &'a str| word(i, previous),
        operator,
        map(recognize(one_of("{}[](),;")), |s| {
            Token::new(TokenKind::Punctuation, s)
        }),
    ))(input)
}

/// Parse comments and `#include` lines
fn comment(input: &str) -> IResult<&str, Token<'_>> {
    alt((
        map(
            recognize(tuple((tag("/*"), take_until("*/"), tag("*/")))),
            |s| Token::new(TokenKind::CommentMultiline, s),
        ),
        // Unterminated block comment runs to the end of input
        map(recognize(pair(tag("/*"), rest)), |s| {
            Token::new(TokenKind::CommentMultiline, s)
        }),
        map(recognize(pair(tag("#include"), not_line_ending)), |s| {
            Token::new(TokenKind::Preproc, s)
        }),
        map(
            recognize(pair(alt((tag("//"), tag("#"))), not_line_ending)),
            |s| Token::new(TokenKind::CommentSingle, s),
        ),
    ))(input)
}

/// Parse a string literal, unterminated strings stop at the end of the line
fn string_literal(input: &str) -> IResult<&str, Token<'_>> {
    map(
        recognize(tuple((
            char('"'),
            take_till(|c: char| c == '"' || c == '\n'),
            opt(char('"')),
        ))),
        |s| Token::new(TokenKind::String, s),
    )(input)
}

/// Parse a program block header, only when an opening brace follows
fn block_header(input: &str) -> IResult<&str, Token<'_>> {
    map(
        terminated(
            recognize(alt((
                recognize(tuple((tag("transformed"), multispace1, tag("data")))),
                recognize(tuple((tag("transformed"), multispace1, tag("parameters")))),
                recognize(tuple((tag("generated"), multispace1, tag("quantities")))),
                single_word_block,
            ))),
            pair(not(satisfy(is_word_char)), peek(pair(multispace0, char('{')))),
        ),
        |s| Token::new(TokenKind::Block, s),
    )(input)
}

fn single_word_block(input: &str) -> IResult<&str, &str> {
    let (after, word) = identifier(input)?;
    if BLOCKS.contains(&word) {
        Ok((after, word))
    } else {
        Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        )))
    }
}

fn exponent(input: &str) -> IResult<&str, &str> {
    recognize(tuple((one_of("eE"), opt(one_of("+-")), digit1)))(input)
}

fn float_literal(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(tuple((digit1, char('.'), digit0, opt(exponent)))),
        recognize(tuple((char('.'), digit1, opt(exponent)))),
        recognize(pair(digit1, exponent)),
    ))(input)
}

fn imaginary_suffix(input: &str) -> IResult<&str, char> {
    terminated(char('i'), not(satisfy(is_word_char)))(input)
}

/// Parse integer, real and imaginary literals
fn number(input: &str) -> IResult<&str, Token<'_>> {
    let (after, kind) = alt((
        value(TokenKind::Float, float_literal),
        value(TokenKind::Integer, digit1),
    ))(input)?;

    let (after, imaginary) = opt(imaginary_suffix)(after)?;
    let kind = if imaginary.is_some() {
        TokenKind::Imaginary
    } else {
        kind
    };

    let consumed = input.len() - after.len();
    Ok((after, Token::new(kind, &input[..consumed])))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(is_word_char),
    ))(input)
}

/// Parse an identifier and classify it in context
fn word<'a>(input: &'a str, previous: Option<Token<'a>>) -> IResult<&'a str, Token<'a>> {
    let (after, text) = identifier(input)?;

    Ok((after, Token::new(classify_word(text, after, previous), text)))
}

fn classify_word(text: &str, after: &str, previous: Option<Token<'_>>) -> TokenKind {
    let prev_text = previous.map(|t| t.text);

    if prev_text == Some("~") && DISTRIBUTIONS.contains(&text) {
        return TokenKind::Distribution;
    }

    if CONSTRAINTS.contains(&text)
        && matches!(prev_text, Some("<") | Some(","))
        && followed_by_assignment(after)
    {
        return TokenKind::Keyword;
    }

    // Truncation `T[lower, upper]`
    if text == "T" && followed_by(after, '[') {
        return TokenKind::Keyword;
    }

    if TYPES.contains(&text) {
        return TokenKind::Type;
    }
    if KEYWORDS.contains(&text) {
        return TokenKind::Keyword;
    }
    if RESERVED.contains(&text) || (text.ends_with("__") && text.len() > 2) {
        return TokenKind::Reserved;
    }
    if followed_by(after, '(') && (FUNCTIONS.contains(&text) || is_distribution_function(text)) {
        return TokenKind::Builtin;
    }
    TokenKind::Name
}

fn followed_by(after: &str, c: char) -> bool {
    after.trim_start().starts_with(c)
}

/// `=` but not `==`
fn followed_by_assignment(after: &str) -> bool {
    let after = after.trim_start();
    after.starts_with('=') && !after.starts_with("==")
}

/// Parse operators, longest first
fn operator(input: &str) -> IResult<&str, Token<'_>> {
    map(
        alt((
            alt((
                tag(".*="),
                tag("./="),
                tag("%/%"),
                tag("<-"),
                tag("+="),
                tag("-="),
                tag("*="),
                tag("/="),
                tag("=="),
                tag("!="),
                tag("<="),
                tag(">="),
                tag("&&"),
                tag("||"),
                tag(".*"),
                tag("./"),
                tag(".^"),
            )),
            recognize(one_of("+-*/%\\^'<>=!|?:~&")),
        )),
        |s| Token::new(TokenKind::Operator, s),
    )(input)
}
