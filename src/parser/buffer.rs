/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use crate::lexer::source::TokenSource;
use crate::lexer::token::Token;
use tracing::warn;

/// Makes a one-directional [`TokenSource`] replayable.
///
/// Every token pulled from the source is appended to an internal list
/// and never dropped, so the parser can look ahead, step back and roll
/// back to a saved position even though the source itself only moves
/// forward. Memory grows with the input, which is acceptable for a
/// single-pass front end.
///
/// # Invariants
/// - `pos <= tokens.len()` at all times.
/// - Reading at `pos == tokens.len()` pulls exactly one token from the
///   source. Sources keep answering `Eof` once exhausted, so reading
///   past the end is safe and idempotent.
/// - Only `next`, `peek`, `peek_by` and `eof` may block (on the source);
///   `backup`, `remember` and `rollback` never do.
pub struct TokenBuffer<S: TokenSource> {
    source: S,
    tokens: Vec<Token>,
    pos: usize,

    /// Single saved position. Not a stack: `remember` overwrites it.
    checkpoint: usize,
}

impl<S: TokenSource> TokenBuffer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            pos: 0,
            checkpoint: 0,
        }
    }

    /// Pulls from the source until `index` is materialized.
    fn fill(&mut self, index: usize) {
        while self.tokens.len() <= index {
            let token = self.source.pull();
            self.tokens.push(token);
        }
    }

    /// Returns the token at the cursor and advances past it.
    pub fn next(&mut self) -> Token {
        self.fill(self.pos);
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        token
    }

    /// Steps the cursor back by one token.
    ///
    /// At position zero there is nothing to step back over; the call is
    /// ignored and logged.
    pub fn backup(&mut self) {
        if self.pos == 0 {
            warn!("backup() at the start of the token buffer ignored");
            return;
        }
        self.pos -= 1;
    }

    /// The token at the cursor, without moving.
    pub fn peek(&mut self) -> Token {
        self.peek_by(0)
    }

    /// The token `offset` positions past the cursor, without moving.
    /// `peek_by(0)` is `peek()`.
    pub fn peek_by(&mut self, offset: usize) -> Token {
        let index = self.pos + offset;
        self.fill(index);
        self.tokens[index].clone()
    }

    /// Saves the cursor as the rollback target.
    pub fn remember(&mut self) {
        self.checkpoint = self.pos;
    }

    /// Restores the cursor saved by the last `remember`.
    pub fn rollback(&mut self) {
        self.pos = self.checkpoint;
    }

    /// `true` iff the next token is the end-of-stream sentinel.
    pub fn eof(&mut self) -> bool {
        self.peek().is_eof()
    }

    /// Current cursor index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of tokens materialized so far.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::source::VecSource;
    use crate::lexer::token::TokenKind;
    use crate::span::Span;

    fn ident(name: &str, column: usize) -> Token {
        Token::new(TokenKind::Ident, name, Span::new(1, column))
    }

    fn buffer(names: &[&str]) -> TokenBuffer<VecSource> {
        let tokens = names
            .iter()
            .enumerate()
            .map(|(i, n)| ident(n, i + 1))
            .collect();
        TokenBuffer::new(VecSource::new(tokens))
    }

    /// Counts pulls so tests can see when the buffer touches its source.
    struct Counting {
        inner: VecSource,
        pulls: usize,
    }

    impl TokenSource for Counting {
        fn pull(&mut self) -> Token {
            self.pulls += 1;
            self.inner.pull()
        }
    }

    #[test]
    fn next_walks_the_stream_in_order() {
        let mut buf = buffer(&["a", "b"]);
        assert_eq!(buf.next().lexeme, "a");
        assert_eq!(buf.next().lexeme, "b");
        assert!(buf.next().is_eof());
    }

    #[test]
    fn peek_then_next_agree() {
        let mut buf = buffer(&["a", "b"]);
        let peeked = buf.peek();
        assert_eq!(buf.peek(), peeked);
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.next(), peeked);
    }

    #[test]
    fn backup_replays_the_last_token() {
        let mut buf = buffer(&["a", "b"]);
        buf.next();
        let b = buf.next();
        buf.backup();
        assert_eq!(buf.next(), b);
    }

    #[test]
    fn backup_at_start_is_a_no_op() {
        let mut buf = buffer(&["a"]);
        buf.backup();
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.next().lexeme, "a");
    }

    #[test]
    fn peek_by_looks_ahead_without_moving() {
        let mut buf = buffer(&["a", "b", "c"]);
        assert_eq!(buf.peek_by(2).lexeme, "c");
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.len(), 3);
        assert!(buf.peek_by(5).is_eof());
    }

    #[test]
    fn source_is_pulled_lazily() {
        let tokens = vec![ident("a", 1), ident("b", 2), ident("c", 3)];
        let mut buf = TokenBuffer::new(Counting {
            inner: VecSource::new(tokens),
            pulls: 0,
        });

        buf.peek();
        buf.peek();
        assert_eq!(buf.source.pulls, 1);

        buf.next();
        buf.backup();
        buf.next();
        assert_eq!(buf.source.pulls, 1);

        buf.peek_by(1);
        assert_eq!(buf.source.pulls, 3);
    }

    #[test]
    fn rollback_returns_to_checkpoint() {
        let mut buf = buffer(&["a", "b", "c"]);
        buf.next();
        buf.remember();
        buf.next();
        buf.next();
        buf.rollback();
        assert_eq!(buf.position(), 1);
        assert_eq!(buf.next().lexeme, "b");
    }

    #[test]
    fn remember_overwrites_previous_checkpoint() {
        let mut buf = buffer(&["a", "b", "c"]);
        buf.remember();
        buf.next();
        buf.remember();
        buf.next();
        buf.rollback();
        assert_eq!(buf.position(), 1);
    }

    #[test]
    fn eof_is_sticky() {
        let mut buf = buffer(&["a"]);
        buf.next();
        assert!(buf.eof());
        for _ in 0..3 {
            assert!(buf.next().is_eof());
            assert!(buf.eof());
        }
        assert!(buf.position() <= buf.len());
    }
}
