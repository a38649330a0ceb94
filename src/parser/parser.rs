/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use crate::ast::{RuleSetId, Stylesheet};
use crate::config::ParserConfig;
use crate::error::SyntaxError;
use crate::lexer::{spawn_lexer, Token, TokenSource, VecSource};
use crate::parser::buffer::TokenBuffer;
use std::panic;
use tracing::debug;

/// The SCSS recursive-descent parser.
///
/// This structure maintains:
/// - The replayable token buffer over some [`TokenSource`]
/// - The counter that hands out [`RuleSetId`]s in parse order
///
/// The grammar itself lives in extension modules (`statements`,
/// `expressions`, `helpers`) via additional `impl Parser` blocks.
pub struct Parser<S: TokenSource> {
    pub buffer: TokenBuffer<S>,

    next_rule_set: usize,

    /// Current value nesting, bounded by `max_depth`.
    depth: usize,
    max_depth: usize,
}

/// Parses SCSS source with the default configuration.
///
/// # Pipeline
/// ```text
/// Source → Lexer (thread) → channel → TokenBuffer → Parser → Stylesheet
/// ```
///
/// # Example
/// ```rust
/// let sheet = scssparse::parse("a { color: red; }").unwrap();
/// assert_eq!(sheet.len(), 1);
/// ```
pub fn parse(source: &str) -> Result<Stylesheet, SyntaxError> {
    parse_with_config(source, &ParserConfig::default())
}

/// Parses SCSS source, running the lexer on its own thread.
///
/// The parser is dropped before the lexer thread is joined, so a parse
/// that fails early hangs up the channel and lets the producer exit
/// instead of blocking on a full buffer.
///
/// # Errors
/// The first [`SyntaxError`] encountered. No partial tree is returned.
pub fn parse_with_config(source: &str, config: &ParserConfig) -> Result<Stylesheet, SyntaxError> {
    let (tokens, lexer) = spawn_lexer(source.to_string(), config.channel_capacity);

    let mut parser = Parser::with_config(tokens, config);
    let result = parser.parse();
    drop(parser);

    // A lexer panic would otherwise look like a truncated stream.
    if let Err(payload) = lexer.join() {
        panic::resume_unwind(payload);
    }

    result
}

/// Parses an already tokenized stream.
///
/// A missing trailing `Eof` is implied.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Stylesheet, SyntaxError> {
    Parser::new(VecSource::new(tokens)).parse()
}

impl<S: TokenSource> Parser<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, &ParserConfig::default())
    }

    pub fn with_config(source: S, config: &ParserConfig) -> Self {
        Self {
            buffer: TokenBuffer::new(source),
            next_rule_set: 0,
            depth: 0,
            max_depth: config.max_nesting_depth,
        }
    }

    /// Parses the whole token stream into a stylesheet.
    ///
    /// Statements are parsed strictly left to right until `Eof`. A stray
    /// `;` between statements is skipped so the loop always advances.
    pub fn parse(&mut self) -> Result<Stylesheet, SyntaxError> {
        let mut sheet = Stylesheet::default();

        while !self.buffer.eof() {
            match self.statement(None)? {
                Some(statement) => sheet.push(statement),
                None => {
                    let skipped = self.buffer.next();
                    debug!(kind = ?skipped.kind, lexeme = %skipped.lexeme, span = %skipped.span, "skipping stray separator");
                }
            }
        }

        Ok(sheet)
    }

    /// Enters one level of value nesting. Every successful call must be
    /// paired with [`ascend`](Self::ascend).
    ///
    /// # Errors
    /// `UnsupportedConstruct` once the configured depth is reached, so
    /// pathological input fails instead of exhausting the stack.
    pub(crate) fn descend(&mut self) -> Result<(), SyntaxError> {
        if self.depth >= self.max_depth {
            let token = self.buffer.peek();
            return Err(
                SyntaxError::unsupported(format!("nesting deeper than {} levels", self.max_depth), &token)
                    .with_help("flatten the expression or raise max_nesting_depth"),
            );
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn ascend(&mut self) {
        self.depth -= 1;
    }

    pub(crate) fn allocate_rule_set_id(&mut self) -> RuleSetId {
        let id = RuleSetId(self.next_rule_set);
        self.next_rule_set += 1;
        id
    }
}
