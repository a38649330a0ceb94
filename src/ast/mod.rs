/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

//! Stylesheet syntax tree.
//!
//! Nodes are built once by the parser and never mutated afterwards.
//! Ownership is strictly tree-shaped; the only back-reference, from a
//! parent selector to its enclosing rule set, is a [`RuleSetId`] handle.

pub mod expr;
pub mod import;
pub mod selector;
pub mod stmt;

pub use expr::{Expression, FunctionCall, Ident, Number, NumberValue, Operator, Quote, QuotedString, Unit};
pub use import::{ImportStatement, Url};
pub use selector::{render_selectors, RuleSetId, Selector};
pub use stmt::{DeclarationBlock, FunctionDeclaration, MixinStatement, Property, RuleSet, Statement, Stylesheet};
