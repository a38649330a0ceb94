/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */
//! SCSS front end.
//!
//! Source text is tokenized on a producer thread and streamed to a
//! recursive-descent parser, which builds a [`Stylesheet`] tree:
//!
//! ```text
//! Source → Lexer → channel → TokenBuffer → Parser → Stylesheet
//! ```
//!
//! The first syntax error aborts the parse and comes back as a
//! [`SyntaxError`] carrying the offending token and its position.

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod file_type;
pub mod lexer;
pub mod parser;
pub mod span;

pub use ast::Stylesheet;
pub use config::ParserConfig;
pub use error::{SyntaxError, SyntaxErrorKind};
pub use parser::{parse, parse_tokens, parse_with_config};
