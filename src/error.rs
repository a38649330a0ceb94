/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use serde::Serialize;
use thiserror::Error;

/// Category of a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SyntaxErrorKind {
    /// The current token does not match what the grammar requires
    /// (missing `{`, missing `:`, unclosed `(`).
    UnexpectedToken,

    /// Recognized input the parser does not handle yet: hex colors,
    /// nested rules, multi-entry media queries, other at-rules. The
    /// source may well be valid SCSS.
    UnsupportedConstruct,

    /// A numeric token whose text does not convert to a number.
    MalformedLiteral,
}

/// A syntax error raised while parsing.
///
/// Parsing is fail-fast: the first error aborts the parse and is the
/// only value returned. The error carries the offending token's text
/// and position so callers can render a precise diagnostic with
/// [`DiagnosticPrinter`](crate::diagnostics::DiagnosticPrinter).
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{message} at {span}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,

    /// Stable error code (E0001, E0002, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Text of the offending token
    pub lexeme: String,

    /// Position of the offending token
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl SyntaxError {
    /// Generic constructor
    pub fn new(
        kind: SyntaxErrorKind,
        message: impl Into<String>,
        found: &Token,
    ) -> Self {
        let code = match kind {
            SyntaxErrorKind::UnexpectedToken => "E0001",
            SyntaxErrorKind::UnsupportedConstruct => "E0002",
            SyntaxErrorKind::MalformedLiteral => "E0003",
        };

        Self {
            kind,
            code,
            message: message.into(),
            lexeme: found.lexeme.clone(),
            span: found.span,
            help: None,
        }
    }

    /// `expected` was required but `found` was read.
    pub fn unexpected_token(expected: impl AsRef<str>, found: &Token) -> Self {
        Self::new(
            SyntaxErrorKind::UnexpectedToken,
            format!("expected {}, found {}", expected.as_ref(), describe(found)),
            found,
        )
    }

    /// `construct` is recognized but not implemented.
    pub fn unsupported(construct: impl AsRef<str>, found: &Token) -> Self {
        Self::new(
            SyntaxErrorKind::UnsupportedConstruct,
            format!("{} is not supported", construct.as_ref()),
            found,
        )
    }

    /// `found` claims to be numeric but does not convert.
    pub fn malformed_literal(found: &Token, reason: impl std::fmt::Display) -> Self {
        Self::new(
            SyntaxErrorKind::MalformedLiteral,
            format!("malformed number '{}': {}", found.lexeme, reason),
            found,
        )
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// `property name 'color'`, `';'`, or `end of input`.
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Eof => "end of input".to_string(),
        kind if kind.describe().starts_with('\'') => kind.describe().to_string(),
        kind => format!("{} '{}'", kind.describe(), token.lexeme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_token_names_both_sides() {
        let found = Token::new(TokenKind::Semicolon, ";", Span::new(2, 7));
        let err = SyntaxError::unexpected_token("'{'", &found);

        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
        assert_eq!(err.code, "E0001");
        assert_eq!(err.lexeme, ";");
        assert_eq!(err.to_string(), "expected '{', found ';' at 2:7");
    }

    #[test]
    fn eof_is_described_plainly() {
        let err = SyntaxError::unexpected_token("'}'", &Token::eof(Span::new(4, 1)));
        assert_eq!(err.message, "expected '}', found end of input");
    }

    #[test]
    fn help_is_attached() {
        let found = Token::new(TokenKind::HexColor, "#fff", Span::new(1, 10));
        let err = SyntaxError::unsupported("hex color literal", &found).with_help("use rgb()");
        assert_eq!(err.code, "E0002");
        assert_eq!(err.help.as_deref(), Some("use rgb()"));
    }
}
