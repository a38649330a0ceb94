/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * Property value expressions.
 *
 *   expression → "#{" expression "}"
 *              | ( "+" | "-" ) expression
 *              | term ( ( "+" | "-" ) term )?
 *   term       → factor ( ( "*" | "/" ) factor )?
 *   factor     → "(" expression ")" | "#{" expression "}"
 *              | STRING | NUMBER UNIT? | FUNCTION "(" args? ")" | IDENT | URL
 *
 * Each binary level applies its operator at most once: `1 + 2 + 3`
 * reduces `1 + 2` and leaves `+ 3` for the caller, where it reads as a
 * separate unary value.
 *
 * ==========================================================================
 */

use crate::ast::{Expression, FunctionCall, Ident, Number, NumberValue, Operator, Quote, QuotedString, Unit};
use crate::error::SyntaxError;
use crate::lexer::source::TokenSource;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use tracing::trace;

/// `+` and `-` at the expression level.
fn additive(kind: TokenKind) -> Option<Operator> {
    match kind {
        TokenKind::Plus => Some(Operator::Add),
        TokenKind::Minus => Some(Operator::Sub),
        _ => None,
    }
}

impl<S: TokenSource> Parser<S> {
    pub fn expression(&mut self) -> Result<Expression, SyntaxError> {
        self.descend()?;
        let expr = self.bounded_expression();
        self.ascend();
        expr
    }

    fn bounded_expression(&mut self) -> Result<Expression, SyntaxError> {
        trace!(peek = %self.buffer.peek(), "expression");

        if self.accept(TokenKind::InterpolationStart) {
            let inner = self.expression()?;
            self.expect(TokenKind::InterpolationEnd)?;
            return Ok(inner);
        }

        if let Some(op) = additive(self.buffer.peek().kind) {
            self.buffer.next();
            let operand = self.expression()?;
            return Ok(Expression::Unary {
                op: Some(op),
                operand: Box::new(operand),
            });
        }

        let left = self.term()?;

        match additive(self.buffer.peek().kind) {
            Some(op) => {
                self.buffer.next();
                let right = self.term()?;
                Ok(Expression::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
            None => Ok(Expression::Unary {
                op: None,
                operand: Box::new(left),
            }),
        }
    }

    fn term(&mut self) -> Result<Expression, SyntaxError> {
        trace!(peek = %self.buffer.peek(), "term");

        let left = self.factor()?;

        let op = match self.buffer.peek().kind {
            TokenKind::Mul => Operator::Mul,
            TokenKind::Div => Operator::Div,
            _ => return Ok(left),
        };
        self.buffer.next();

        let right = self.factor()?;
        Ok(Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn factor(&mut self) -> Result<Expression, SyntaxError> {
        self.descend()?;
        let expr = self.bounded_factor();
        self.ascend();
        expr
    }

    fn bounded_factor(&mut self) -> Result<Expression, SyntaxError> {
        let token = self.buffer.peek();
        trace!(peek = %token, "factor");

        match token.kind {
            TokenKind::ParenStart => {
                self.buffer.next();
                let inner = self.expression()?;
                self.expect(TokenKind::ParenEnd)?;
                Ok(inner)
            }

            TokenKind::InterpolationStart => {
                self.buffer.next();
                let inner = self.expression()?;
                self.expect(TokenKind::InterpolationEnd)?;
                Ok(inner)
            }

            TokenKind::QqString | TokenKind::QString => {
                self.buffer.next();
                let quote = if token.kind == TokenKind::QqString {
                    Quote::Double
                } else {
                    Quote::Single
                };
                Ok(Expression::QuotedString(QuotedString {
                    value: token.lexeme,
                    quote,
                    span: token.span,
                }))
            }

            TokenKind::Integer | TokenKind::Float => self.number().map(Expression::Number),

            TokenKind::FunctionName => self.function_call().map(Expression::FunctionCall),

            TokenKind::Ident => self.ident().map(Expression::Ident),

            // Body of an unquoted `url(...)`, kept verbatim.
            TokenKind::Url => {
                self.buffer.next();
                Ok(Expression::Ident(Ident {
                    name: token.lexeme,
                    span: token.span,
                }))
            }

            TokenKind::HexColor => Err(SyntaxError::unsupported("hex color literal", &token)
                .with_help("write the color with rgb() instead")),

            TokenKind::TypeSelector
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
            | TokenKind::ParenEnd
            | TokenKind::BraceStart
            | TokenKind::BraceEnd
            | TokenKind::InterpolationEnd
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Mul
            | TokenKind::Div
            | TokenKind::UnitPx
            | TokenKind::UnitPt
            | TokenKind::UnitCm
            | TokenKind::UnitEm
            | TokenKind::UnitMm
            | TokenKind::UnitRem
            | TokenKind::UnitDeg
            | TokenKind::UnitPercent
            | TokenKind::Import
            | TokenKind::AtKeyword
            | TokenKind::MediaType
            | TokenKind::PropertyName
            | TokenKind::Unknown
            | TokenKind::Eof => Err(SyntaxError::unexpected_token("a value", &token)),
        }
    }

    /// NUMBER UNIT?
    ///
    /// The unit is taken only from the token immediately after the
    /// number; the lexer emits it there only when no whitespace
    /// separates them.
    fn number(&mut self) -> Result<Number, SyntaxError> {
        let token = self.buffer.next();
        trace!(lexeme = %token.lexeme, "number");

        let value = match token.kind {
            TokenKind::Integer => token
                .lexeme
                .parse::<i64>()
                .map(NumberValue::Integer)
                .map_err(|err| SyntaxError::malformed_literal(&token, err))?,
            TokenKind::Float => token
                .lexeme
                .parse::<f64>()
                .map(NumberValue::Float)
                .map_err(|err| SyntaxError::malformed_literal(&token, err))?,
            _ => return Err(SyntaxError::unexpected_token("a number", &token)),
        };

        let unit = match Unit::from_token_kind(self.buffer.peek().kind) {
            Some(unit) => {
                self.buffer.next();
                unit
            }
            None => Unit::None,
        };

        Ok(Number {
            value,
            unit,
            span: token.span,
        })
    }

    /// FUNCTION "(" ( factor ( "," factor )* )? ")"
    fn function_call(&mut self) -> Result<FunctionCall, SyntaxError> {
        let name = self.expect(TokenKind::FunctionName)?;
        trace!(name = %name.lexeme, "function call");

        self.expect(TokenKind::ParenStart)?;

        let mut arguments = Vec::new();
        if !self.accept(TokenKind::ParenEnd) {
            loop {
                arguments.push(self.factor()?);

                if self.accept(TokenKind::Comma) {
                    continue;
                }
                self.expect_described(TokenKind::ParenEnd, "',' or ')'")?;
                break;
            }
        }

        Ok(FunctionCall {
            name: name.lexeme,
            arguments,
            span: name.span,
        })
    }

    fn ident(&mut self) -> Result<Ident, SyntaxError> {
        let token = self.expect(TokenKind::Ident)?;
        Ok(Ident {
            name: token.lexeme,
            span: token.span,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::source::VecSource;
    use crate::lexer::token::Token;
    use crate::span::Span;

    fn parser(tokens: &[(TokenKind, &str)]) -> Parser<VecSource> {
        let tokens = tokens
            .iter()
            .enumerate()
            .map(|(i, (kind, lexeme))| Token::new(*kind, *lexeme, Span::new(1, i + 1)))
            .collect();
        Parser::new(VecSource::new(tokens))
    }

    #[test]
    fn unit_attaches_only_from_next_token() {
        let mut p = parser(&[(TokenKind::Integer, "10"), (TokenKind::UnitPx, "px")]);
        let number = p.number().unwrap();
        assert_eq!(number.value, NumberValue::Integer(10));
        assert_eq!(number.unit, Unit::Px);
        assert!(p.buffer.eof());

        let mut p = parser(&[(TokenKind::Float, "1.5"), (TokenKind::Ident, "px")]);
        let number = p.number().unwrap();
        assert_eq!(number.value, NumberValue::Float(1.5));
        assert_eq!(number.unit, Unit::None);
        assert!(p.buffer.peek().is(TokenKind::Ident));
    }

    #[test]
    fn term_applies_operator_once() {
        let mut p = parser(&[
            (TokenKind::Integer, "2"),
            (TokenKind::Mul, "*"),
            (TokenKind::Integer, "3"),
            (TokenKind::Mul, "*"),
            (TokenKind::Integer, "4"),
        ]);
        let expr = p.term().unwrap();
        assert_eq!(expr.to_string(), "2 * 3");
        assert!(p.buffer.peek().is(TokenKind::Mul));
    }

    #[test]
    fn unary_minus_recurses() {
        let mut p = parser(&[(TokenKind::Minus, "-"), (TokenKind::Minus, "-"), (TokenKind::Integer, "1")]);
        match p.expression().unwrap() {
            Expression::Unary {
                op: Some(Operator::Sub),
                operand,
            } => assert!(matches!(*operand, Expression::Unary { op: Some(Operator::Sub), .. })),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn interpolation_yields_inner_expression() {
        let mut p = parser(&[
            (TokenKind::InterpolationStart, "#{"),
            (TokenKind::Ident, "gap"),
            (TokenKind::InterpolationEnd, "}"),
        ]);
        let expr = p.expression().unwrap();
        assert_eq!(expr.unwrap_pass_through().to_string(), "gap");
    }

    #[test]
    fn function_call_with_no_arguments() {
        let mut p = parser(&[
            (TokenKind::FunctionName, "now"),
            (TokenKind::ParenStart, "("),
            (TokenKind::ParenEnd, ")"),
        ]);
        let call = p.function_call().unwrap();
        assert_eq!(call.name, "now");
        assert!(call.arguments.is_empty());
    }

    #[test]
    fn function_call_rejects_trailing_comma() {
        let mut p = parser(&[
            (TokenKind::FunctionName, "rgb"),
            (TokenKind::ParenStart, "("),
            (TokenKind::Integer, "1"),
            (TokenKind::Comma, ","),
            (TokenKind::ParenEnd, ")"),
        ]);
        let err = p.function_call().unwrap_err();
        assert_eq!(err.lexeme, ")");
    }

    #[test]
    fn integer_overflow_is_malformed() {
        let mut p = parser(&[(TokenKind::Integer, "99999999999999999999")]);
        let err = p.number().unwrap_err();
        assert_eq!(err.code, "E0003");
    }
}
