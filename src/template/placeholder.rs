//! Placeholder tokenization for template strings
//!
//! Splits a string into literal runs and `{{identifier}}` /
//! `{{identifier.field}}` placeholders. Anything that does not form a valid
//! placeholder (including stray braces) stays literal.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// `{{name}}` or `{{name.field}}`
    #[regex(r"\{\{[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)?\}\}")]
    Placeholder,

    /// A run of anything that cannot start a placeholder
    #[regex(r"[^{]+")]
    Literal,

    /// A brace that did not open a valid placeholder
    #[token("{")]
    LoneBrace,
}

/// One piece of a tokenized template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Literal text, emitted unchanged
    Literal(&'a str),
    /// A placeholder with its identifier and optional dotted field
    Placeholder {
        raw: &'a str,
        ident: &'a str,
        field: Option<&'a str>,
    },
}

/// Tokenize a template string into pieces.
///
/// Adjacent literal runs are merged, so callers see at most one literal
/// piece between placeholders.
pub fn pieces(input: &str) -> Vec<Piece<'_>> {
    let mut lexer = Token::lexer(input);
    let mut out = Vec::new();
    let mut literal_start: Option<usize> = None;

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(Token::Placeholder) => {
                if let Some(start) = literal_start.take() {
                    out.push(Piece::Literal(&input[start..span.start]));
                }
                let raw = lexer.slice();
                let inner = &raw[2..raw.len() - 2];
                let (ident, field) = match inner.split_once('.') {
                    Some((ident, field)) => (ident, Some(field)),
                    None => (inner, None),
                };
                out.push(Piece::Placeholder { raw, ident, field });
            }
            Ok(Token::Literal) | Ok(Token::LoneBrace) | Err(_) => {
                literal_start.get_or_insert(span.start);
            }
        }
    }

    if let Some(start) = literal_start {
        out.push(Piece::Literal(&input[start..]));
    }

    out
}

/// Fast check for whether a string can contain placeholders at all.
pub fn has_placeholder(input: &str) -> bool {
    input.contains("{{")
}
