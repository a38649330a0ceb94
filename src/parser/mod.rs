/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the `parse*` entry points
pub mod parser;

/// Replayable cursor over a token source.
pub mod buffer;

/// Statement-level parsing:
/// - `@import`
/// - rule sets and declaration blocks
pub mod statements;

/// Expression-level parsing:
/// - expression → term → factor
/// - numbers with units, function calls, interpolation
pub mod expressions;

/// Shared parser helpers:
/// - token matching
/// - lookahead checks
pub mod helpers;

pub use buffer::TokenBuffer;
pub use parser::{parse, parse_tokens, parse_with_config, Parser};
