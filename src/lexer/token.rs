/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token** in SCSS source.
///
/// The tokenizer is context-sensitive, so the same characters can yield
/// different kinds depending on where they appear: `#main` is an
/// `IdSelector` in a selector but `#fff` is a `HexColor` in a value.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → AST
/// ```
///
/// The enum is closed and every dispatch site in the parser matches it
/// exhaustively, so adding a kind forces each of those sites to be
/// revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /* ----------------------------- */
    /* WORDS & LITERALS              */
    /* ----------------------------- */

    /// A bare identifier in value position (`bold`, `sans-serif`), or
    /// the `url` keyword of an `@import`.
    Ident,

    /// An identifier immediately followed by `(` in value position.
    FunctionName,

    /// Integer literal: `42`
    Integer,

    /// Floating-point literal: `0.5`, `.25`
    Float,

    /// Double-quoted string. The lexeme excludes the quotes.
    QqString,

    /// Single-quoted string. The lexeme excludes the quotes.
    QString,

    /// `#fff`, `#a0b1c2` in value position.
    HexColor,

    /// The raw contents of `url(...)` after `@import`.
    Url,

    /* ----------------------------- */
    /* SELECTORS                     */
    /* ----------------------------- */

    TypeSelector,
    UniversalSelector,
    IdSelector,
    ClassSelector,
    ParentSelector,
    PseudoSelector,
    AdjacentSelector,
    ChildSelector,
    DescendantSelector,

    /// The language code of `:lang(xx)`.
    LangCode,

    /* ----------------------------- */
    /* PUNCTUATION                   */
    /* ----------------------------- */

    Colon,
    Comma,
    Semicolon,
    ParenStart,
    ParenEnd,
    BraceStart,
    BraceEnd,

    /// `#{`
    InterpolationStart,

    /// The `}` closing an interpolation.
    InterpolationEnd,

    /* ----------------------------- */
    /* OPERATORS                     */
    /* ----------------------------- */

    Plus,
    Minus,
    Mul,
    Div,

    /* ----------------------------- */
    /* UNITS                         */
    /* ----------------------------- */

    UnitPx,
    UnitPt,
    UnitCm,
    UnitEm,
    UnitMm,
    UnitRem,
    UnitDeg,
    UnitPercent,

    /* ----------------------------- */
    /* KEYWORDS                      */
    /* ----------------------------- */

    /// `@import`
    Import,

    /// Any other at-rule keyword (`@media`, `@mixin`, ...).
    AtKeyword,

    /// A media type word following an import target (`screen`, `print`).
    MediaType,

    /// The name on the left-hand side of a declaration.
    PropertyName,

    /* ----------------------------- */
    /* SPECIAL                       */
    /* ----------------------------- */

    /// Characters the tokenizer could not classify, or an unterminated
    /// string. The parser reports these as unexpected.
    Unknown,

    /// End-of-stream sentinel.
    ///
    /// Emitted exactly once by the tokenizer. Token sources keep
    /// returning it after the stream is exhausted.
    Eof,
}

impl TokenKind {
    /// Returns `true` for every kind that can appear in a selector
    /// sequence, combinators included.
    pub fn is_selector(self) -> bool {
        match self {
            TokenKind::TypeSelector
            | TokenKind::UniversalSelector
            | TokenKind::IdSelector
            | TokenKind::ClassSelector
            | TokenKind::ParentSelector
            | TokenKind::PseudoSelector
            | TokenKind::AdjacentSelector
            | TokenKind::ChildSelector
            | TokenKind::DescendantSelector => true,

            TokenKind::Ident
            | TokenKind::FunctionName
            | TokenKind::Integer
            | TokenKind::Float
            | TokenKind::QqString
            | TokenKind::QString
            | TokenKind::HexColor
            | TokenKind::Url
            | TokenKind::LangCode
            | TokenKind::Colon
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::ParenStart
            | TokenKind::ParenEnd
            | TokenKind::BraceStart
            | TokenKind::BraceEnd
            | TokenKind::InterpolationStart
            | TokenKind::InterpolationEnd
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Mul
            | TokenKind::Div
            | TokenKind::UnitPx
            | TokenKind::UnitPt
            | TokenKind::UnitCm
            | TokenKind::UnitEm
            | TokenKind::UnitMm
            | TokenKind::UnitRem
            | TokenKind::UnitDeg
            | TokenKind::UnitPercent
            | TokenKind::Import
            | TokenKind::AtKeyword
            | TokenKind::MediaType
            | TokenKind::PropertyName
            | TokenKind::Unknown
            | TokenKind::Eof => false,
        }
    }

    /// Returns `true` for single- and double-quoted strings.
    pub fn is_string(self) -> bool {
        matches!(self, TokenKind::QqString | TokenKind::QString)
    }

    /// Human-readable name used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::FunctionName => "function name",
            TokenKind::Integer => "integer",
            TokenKind::Float => "number",
            TokenKind::QqString | TokenKind::QString => "string",
            TokenKind::HexColor => "hex color",
            TokenKind::Url => "url",
            TokenKind::TypeSelector => "type selector",
            TokenKind::UniversalSelector => "'*'",
            TokenKind::IdSelector => "id selector",
            TokenKind::ClassSelector => "class selector",
            TokenKind::ParentSelector => "'&'",
            TokenKind::PseudoSelector => "pseudo selector",
            TokenKind::AdjacentSelector => "'+' combinator",
            TokenKind::ChildSelector => "'>' combinator",
            TokenKind::DescendantSelector => "descendant combinator",
            TokenKind::LangCode => "language code",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Semicolon => "';'",
            TokenKind::ParenStart => "'('",
            TokenKind::ParenEnd => "')'",
            TokenKind::BraceStart => "'{'",
            TokenKind::BraceEnd => "'}'",
            TokenKind::InterpolationStart => "'#{'",
            TokenKind::InterpolationEnd => "'}'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Mul => "'*'",
            TokenKind::Div => "'/'",
            TokenKind::UnitPx
            | TokenKind::UnitPt
            | TokenKind::UnitCm
            | TokenKind::UnitEm
            | TokenKind::UnitMm
            | TokenKind::UnitRem
            | TokenKind::UnitDeg
            | TokenKind::UnitPercent => "unit",
            TokenKind::Import => "'@import'",
            TokenKind::AtKeyword => "at-rule",
            TokenKind::MediaType => "media type",
            TokenKind::PropertyName => "property name",
            TokenKind::Unknown => "unrecognized input",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A **single lexical token** produced by the SCSS tokenizer.
///
/// # Example Tokens
/// ```text
/// .nav   →  { kind: ClassSelector, lexeme: "nav",   span: 1:1 }
/// color  →  { kind: PropertyName,  lexeme: "color", span: 1:8 }
/// 12     →  { kind: Integer,       lexeme: "12",    span: 1:15 }
/// px     →  { kind: UnitPx,        lexeme: "px",    span: 1:17 }
/// ```
///
/// Tokens are immutable once produced and are owned by the parser's
/// token buffer after they cross the channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The semantic text of the token. Sigils and quotes are stripped
    /// (`.nav` → `nav`, `"a.css"` → `a.css`).
    pub lexeme: String,

    /// Position of the token's first character.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Builds the end-of-stream sentinel at `span`.
    pub fn eof(span: Span) -> Self {
        Self::new(TokenKind::Eof, "", span)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    /// Prints the lexeme only; diagnostics show users what they wrote.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            write!(f, "end of input")
        } else {
            write!(f, "{}", self.lexeme)
        }
    }
}
