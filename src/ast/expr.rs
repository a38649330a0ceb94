/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use crate::lexer::token::TokenKind;
use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Unit attached to a numeric literal.
///
/// `None` means the number is dimensionless (`line-height: 1.5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Unit {
    #[default]
    None,
    Px,
    Pt,
    Cm,
    Em,
    Mm,
    Rem,
    Deg,
    Percent,
}

impl Unit {
    /// Maps a unit token onto its unit, or `None` for any other kind.
    pub fn from_token_kind(kind: TokenKind) -> Option<Unit> {
        match kind {
            TokenKind::UnitPx => Some(Unit::Px),
            TokenKind::UnitPt => Some(Unit::Pt),
            TokenKind::UnitCm => Some(Unit::Cm),
            TokenKind::UnitEm => Some(Unit::Em),
            TokenKind::UnitMm => Some(Unit::Mm),
            TokenKind::UnitRem => Some(Unit::Rem),
            TokenKind::UnitDeg => Some(Unit::Deg),
            TokenKind::UnitPercent => Some(Unit::Percent),

            TokenKind::Ident
            | TokenKind::FunctionName
            | TokenKind::Integer
            | TokenKind::Float
            | TokenKind::QqString
            | TokenKind::QString
            | TokenKind::HexColor
            | TokenKind::Url
            | TokenKind::TypeSelector
            | TokenKind::UniversalSelector
            | TokenKind::IdSelector
            | TokenKind::ClassSelector
            | TokenKind::ParentSelector
            | TokenKind::PseudoSelector
            | TokenKind::AdjacentSelector
            | TokenKind::ChildSelector
            | TokenKind::DescendantSelector
            | TokenKind::LangCode
            | TokenKind::Colon
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::ParenStart
            | TokenKind::ParenEnd
            | TokenKind::BraceStart
            | TokenKind::BraceEnd
            | TokenKind::InterpolationStart
            | TokenKind::InterpolationEnd
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Mul
            | TokenKind::Div
            | TokenKind::Import
            | TokenKind::AtKeyword
            | TokenKind::MediaType
            | TokenKind::PropertyName
            | TokenKind::Unknown
            | TokenKind::Eof => None,
        }
    }

    /// The suffix as written in source (`""` for `Unit::None`).
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Px => "px",
            Unit::Pt => "pt",
            Unit::Cm => "cm",
            Unit::Em => "em",
            Unit::Mm => "mm",
            Unit::Rem => "rem",
            Unit::Deg => "deg",
            Unit::Percent => "%",
        }
    }
}

/// Magnitude of a numeric literal, kept in the form it was written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NumberValue {
    Integer(i64),
    Float(f64),
}

/// A numeric literal with an optional unit: `10`, `0.5em`, `50%`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Number {
    pub value: NumberValue,
    pub unit: Unit,
    pub span: Span,
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self.value {
            NumberValue::Integer(i) => i as f64,
            NumberValue::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            NumberValue::Integer(i) => write!(f, "{}{}", i, self.unit.suffix()),
            NumberValue::Float(v) => write!(f, "{}{}", v, self.unit.suffix()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Quote {
    Double,
    Single,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuotedString {
    /// Contents without the surrounding quotes.
    pub value: String,
    pub quote: Quote,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

/// `name(arg, arg, ...)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Vec<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

/// A property value expression.
///
/// The parser only builds these; evaluation (unit arithmetic, function
/// calls, interpolation) belongs to later passes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    Number(Number),
    QuotedString(QuotedString),
    Ident(Ident),
    FunctionCall(FunctionCall),

    /// `-x`, `+x`, or with `op: None` a pass-through wrapper around a
    /// term that had no additive operator.
    Unary {
        op: Option<Operator>,
        operand: Box<Expression>,
    },

    Binary {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    /// Looks through pass-through `Unary` wrappers.
    pub fn unwrap_pass_through(&self) -> &Expression {
        let mut expr = self;
        while let Expression::Unary { op: None, operand } = expr {
            expr = operand;
        }
        expr
    }

    /// The number this expression denotes directly, ignoring
    /// pass-through wrappers.
    pub fn as_number(&self) -> Option<&Number> {
        match self.unwrap_pass_through() {
            Expression::Number(number) => Some(number),
            _ => None,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(number) => write!(f, "{}", number),
            Expression::QuotedString(s) => match s.quote {
                Quote::Double => write!(f, "\"{}\"", s.value),
                Quote::Single => write!(f, "'{}'", s.value),
            },
            Expression::Ident(ident) => write!(f, "{}", ident.name),
            Expression::FunctionCall(call) => {
                write!(f, "{}(", call.name)?;
                for (i, arg) in call.arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Expression::Unary { op: Some(op), operand } => write!(f, "{}{}", op.symbol(), operand),
            Expression::Unary { op: None, operand } => write!(f, "{}", operand),
            Expression::Binary { op, left, right } => {
                write!(f, "{} {} {}", left, op.symbol(), right)
            }
        }
    }
}
