/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use serde::Serialize;
use std::fmt;

/// A 1-based source position (line and column) attached to every token.
///
/// The tokenizer stamps each token with the position of its first
/// character. Errors and diagnostics use the same span to point the
/// caret at the offending text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    /// 1-based line number.
    pub line: usize,

    /// 1-based column number, counted in characters.
    pub column: usize,
}

impl Span {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 && self.column == 0 {
            write!(f, "<unknown>")
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}
