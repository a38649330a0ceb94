/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use crate::ast::expr::Expression;
use crate::ast::import::ImportStatement;
use crate::ast::selector::{RuleSetId, Selector};
use crate::span::Span;
use serde::Serialize;

/// `name: value, value ...;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub name: String,

    /// Top-level values in source order. Comma- and space-separated
    /// values both land here (`margin: 1px 2px`, `font-family: a, b`).
    pub values: Vec<Expression>,

    pub span: Span,
}

/// The `{ ... }` body of a rule set.
///
/// Declarations are kept in source order and never deduplicated. When a
/// name repeats, the later declaration is the one that takes effect.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DeclarationBlock {
    pub properties: Vec<Property>,
}

impl DeclarationBlock {
    pub fn push(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// The effective declaration for `name`: the last one written.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().rev().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// `selectors { declarations }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleSet {
    pub id: RuleSetId,
    pub selectors: Vec<Selector>,
    pub block: DeclarationBlock,
    pub span: Span,
}

/// `@mixin name { ... }`
///
/// Part of the tree model, but no grammar rule produces it yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixinStatement {
    pub name: String,
    pub block: DeclarationBlock,
}

/// `@function name(args) { ... }`
///
/// Part of the tree model, but no grammar rule produces it yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Vec<Statement>,
}

/// All top-level stylesheet statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    Import(ImportStatement),
    RuleSet(RuleSet),
    Mixin(MixinStatement),
    Function(FunctionDeclaration),
}

/// Root of a parsed stylesheet: its top-level statements in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Stylesheet {
    pub statements: Vec<Statement>,
}

impl Stylesheet {
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn rule_sets(&self) -> impl Iterator<Item = &RuleSet> {
        self.statements.iter().filter_map(|stmt| match stmt {
            Statement::RuleSet(rule_set) => Some(rule_set),
            _ => None,
        })
    }

    pub fn imports(&self) -> impl Iterator<Item = &ImportStatement> {
        self.statements.iter().filter_map(|stmt| match stmt {
            Statement::Import(import) => Some(import),
            _ => None,
        })
    }

    /// Resolves a parent-selector handle.
    pub fn rule_set(&self, id: RuleSetId) -> Option<&RuleSet> {
        self.rule_sets().find(|rule_set| rule_set.id == id)
    }
}
