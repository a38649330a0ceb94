/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use crate::lexer::lexer::Lexer;
use crate::lexer::token::Token;
use crate::span::Span;
use std::sync::mpsc::Receiver;
use tracing::debug;

/// A one-directional supply of tokens.
///
/// Tokens are pulled one at a time and can never be pushed back; the
/// parser's token buffer is what makes the stream replayable.
///
/// # Contract
/// - Tokens come out in the order they were produced.
/// - After the `Eof` sentinel, every further `pull` returns `Eof` again
///   instead of blocking.
pub trait TokenSource {
    fn pull(&mut self) -> Token;
}

/// Consumer end of the producer/consumer pipeline.
///
/// `pull` blocks until the lexer thread has sent the next token. If the
/// producer goes away without sending `Eof` (it panicked, or was never
/// started), the source synthesizes the sentinel so the parser never
/// waits forever.
pub struct ChannelSource {
    receiver: Receiver<Token>,
    last_span: Span,
    exhausted: bool,
}

impl ChannelSource {
    pub fn new(receiver: Receiver<Token>) -> Self {
        Self {
            receiver,
            last_span: Span::default(),
            exhausted: false,
        }
    }
}

impl TokenSource for ChannelSource {
    fn pull(&mut self) -> Token {
        if self.exhausted {
            return Token::eof(self.last_span);
        }

        match self.receiver.recv() {
            Ok(token) => {
                self.last_span = token.span;
                if token.is_eof() {
                    self.exhausted = true;
                }
                token
            }
            Err(_) => {
                debug!("token channel closed without an end-of-input marker");
                self.exhausted = true;
                Token::eof(self.last_span)
            }
        }
    }
}

/// A source over an already materialized token list.
///
/// Used to drive the grammar directly from hand-built tokens. A missing
/// trailing `Eof` is supplied automatically.
pub struct VecSource {
    tokens: std::vec::IntoIter<Token>,
    last_span: Span,
    exhausted: bool,
}

impl VecSource {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            last_span: Span::default(),
            exhausted: false,
        }
    }
}

impl TokenSource for VecSource {
    fn pull(&mut self) -> Token {
        if self.exhausted {
            return Token::eof(self.last_span);
        }

        match self.tokens.next() {
            Some(token) => {
                self.last_span = token.span;
                if token.is_eof() {
                    self.exhausted = true;
                }
                token
            }
            None => {
                self.exhausted = true;
                Token::eof(self.last_span)
            }
        }
    }
}

/// Synchronous source: the parser drives the lexer on its own thread.
impl TokenSource for Lexer {
    fn pull(&mut self) -> Token {
        self.next_token()
    }
}
