/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

//! SCSS tokenizer and the producer side of the token pipeline.
//!
//! ```text
//! source text → Lexer (producer thread) → bounded channel → ChannelSource → parser
//! ```

/// Token kinds and the `Token` record.
pub mod token;

/// Unit suffix and media type tables.
pub mod keywords;

/// The context-sensitive scanner.
pub mod lexer;

/// The `TokenSource` seam and its implementations.
pub mod source;

pub use lexer::{tokenize, Lexer};
pub use source::{ChannelSource, TokenSource, VecSource};
pub use token::{Token, TokenKind};

use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Starts the lexer on its own thread and returns the consuming end.
///
/// Tokens travel over a `sync_channel` of `capacity` slots, so the
/// producer can run at most `capacity` tokens ahead of the parser
/// (`0` makes every hand-off a rendezvous). The producer sends `Eof`
/// exactly once and exits.
///
/// If the consumer drops its `ChannelSource` early (a syntax error
/// aborted the parse), the producer's next `send` fails and the thread
/// stops; the caller should then `join` the returned handle.
pub fn spawn_lexer(source: String, capacity: usize) -> (ChannelSource, JoinHandle<()>) {
    let (sender, receiver) = mpsc::sync_channel(capacity);

    let handle = thread::spawn(move || {
        let mut lexer = Lexer::new(&source);
        let mut sent = 0usize;

        loop {
            let token = lexer.next_token();
            let done = token.is_eof();

            if sender.send(token).is_err() {
                debug!(sent, "parser hung up, lexer stopping early");
                return;
            }
            sent += 1;

            if done {
                break;
            }
        }

        debug!(sent, "lexer finished");
    });

    (ChannelSource::new(receiver), handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn producer_delivers_tokens_in_order() {
        let (mut source, handle) = spawn_lexer("a { b: 1; }".to_string(), 1);

        let mut kinds = Vec::new();
        loop {
            let token = source.pull();
            let done = token.is_eof();
            kinds.push(token.kind);
            if done {
                break;
            }
        }
        handle.join().unwrap();

        assert_eq!(kinds, tokenize("a { b: 1; }").into_iter().map(|t| t.kind).collect::<Vec<_>>());
        assert!(source.pull().is_eof());
    }

    #[test]
    fn producer_stops_when_consumer_hangs_up() {
        let long = "a { b: 1; } ".repeat(1000);
        let (mut source, handle) = spawn_lexer(long, 1);
        assert_eq!(source.pull().kind, TokenKind::TypeSelector);
        drop(source);
        handle.join().unwrap();
    }
}
