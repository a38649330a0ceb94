/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use scssparse::lexer::{Token, TokenKind, VecSource};
use scssparse::parser::TokenBuffer;
use scssparse::span::Span;

fn buffer_over(count: usize) -> TokenBuffer<VecSource> {
    let tokens = (0..count)
        .map(|i| Token::new(TokenKind::Integer, i.to_string(), Span::new(1, i + 1)))
        .collect();
    TokenBuffer::new(VecSource::new(tokens))
}

#[test]
fn remember_rollback_restores_position_for_any_advance() {
    for advance in 0..6 {
        let mut buffer = buffer_over(4);
        buffer.next();
        buffer.remember();
        let expected = buffer.peek();

        for _ in 0..advance {
            buffer.next();
        }
        buffer.rollback();

        assert_eq!(buffer.position(), 1);
        assert_eq!(buffer.next(), expected, "after advancing {}", advance);
    }
}

#[test]
fn next_backup_next_yields_the_same_token() {
    let mut buffer = buffer_over(3);
    for _ in 0..5 {
        let first = buffer.next();
        buffer.backup();
        assert_eq!(buffer.next(), first);
    }
}

#[test]
fn position_never_exceeds_materialized_tokens() {
    let mut buffer = buffer_over(2);
    for _ in 0..10 {
        buffer.next();
        assert!(buffer.position() <= buffer.len());
    }
    buffer.peek_by(3);
    assert!(buffer.position() <= buffer.len());
}

#[test]
fn eof_stays_true_once_reached() {
    let mut buffer = buffer_over(1);
    assert!(!buffer.eof());
    buffer.next();

    for _ in 0..4 {
        assert!(buffer.eof());
        assert!(buffer.next().is_eof());
    }
}

#[test]
fn empty_stream_is_immediately_at_eof() {
    let mut buffer = buffer_over(0);
    assert!(buffer.eof());
    assert_eq!(buffer.position(), 0);
}

#[test]
fn backup_at_start_keeps_position() {
    let mut buffer = buffer_over(2);
    buffer.backup();
    assert_eq!(buffer.position(), 0);
    assert_eq!(buffer.next().lexeme, "0");
}
