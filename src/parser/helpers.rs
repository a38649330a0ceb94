/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use crate::error::SyntaxError;
use crate::lexer::source::TokenSource;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl<S: TokenSource> Parser<S> {
    /// Consumes the next token if it is of `kind`.
    ///
    /// On a mismatch the token is put back and `false` is returned.
    pub fn accept(&mut self, kind: TokenKind) -> bool {
        let token = self.buffer.next();
        if token.kind == kind {
            return true;
        }
        self.buffer.backup();
        false
    }

    /// Consumes and returns a required token.
    ///
    /// # Errors
    /// `UnexpectedToken` naming `kind` and the token actually found. The
    /// offending token is left unconsumed.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        self.expect_described(kind, kind.describe())
    }

    /// Like [`expect`](Self::expect), with a custom description of what
    /// was expected (`"',' or ')'"`).
    pub fn expect_described(&mut self, kind: TokenKind, expected: &str) -> Result<Token, SyntaxError> {
        let token = self.buffer.next();
        if token.kind == kind {
            return Ok(token);
        }
        self.buffer.backup();
        Err(SyntaxError::unexpected_token(expected, &token))
    }

    /// Consumes `kinds` in order, or nothing at all.
    ///
    /// If any token in the run mismatches, every token consumed by this
    /// call is put back.
    pub fn accept_sequence(&mut self, kinds: &[TokenKind]) -> bool {
        for (matched, kind) in kinds.iter().enumerate() {
            if !self.accept(*kind) {
                for _ in 0..matched {
                    self.buffer.backup();
                }
                return false;
            }
        }
        true
    }
}
