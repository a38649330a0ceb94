/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use crate::ast::{
    render_selectors, DeclarationBlock, Expression, ImportStatement, Property, RuleSet, RuleSetId, Selector,
    Statement, Url,
};
use crate::error::SyntaxError;
use crate::lexer::source::TokenSource;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use tracing::trace;

impl<S: TokenSource> Parser<S> {
    /// statement → import | rule_set
    ///
    /// `parent` is the rule set lexically enclosing this statement, used
    /// to link `&`. A stray `;` between statements yields `Ok(None)` and
    /// is left for the caller to skip; any other token that cannot start
    /// a statement is an error.
    pub fn statement(&mut self, parent: Option<RuleSetId>) -> Result<Option<Statement>, SyntaxError> {
        let token = self.buffer.peek();
        trace!(token = %token, span = %token.span, "statement");

        match token.kind {
            TokenKind::Import => self.import_statement().map(|import| Some(Statement::Import(import))),

            TokenKind::TypeSelector
            | TokenKind::UniversalSelector
            | TokenKind::IdSelector
            | TokenKind::ClassSelector
            | TokenKind::ParentSelector
            | TokenKind::PseudoSelector
            | TokenKind::AdjacentSelector
            | TokenKind::ChildSelector
            | TokenKind::DescendantSelector => self.rule_set(parent).map(|rule_set| Some(Statement::RuleSet(rule_set))),

            TokenKind::AtKeyword => Err(SyntaxError::unsupported(format!("the {} rule", token.lexeme), &token)),

            TokenKind::Semicolon | TokenKind::Eof => Ok(None),

            TokenKind::Unknown if token.lexeme == "%" && self.buffer.peek_by(1).kind.is_selector() => {
                Err(SyntaxError::unsupported("placeholder selector", &token)
                    .with_help("use a class selector instead of %placeholder"))
            }

            TokenKind::Ident
            | TokenKind::FunctionName
            | TokenKind::Integer
            | TokenKind::Float
            | TokenKind::QqString
            | TokenKind::QString
            | TokenKind::HexColor
            | TokenKind::Url
            | TokenKind::LangCode
            | TokenKind::Colon
            | TokenKind::Comma
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
            | TokenKind::UnitPx
            | TokenKind::UnitPt
            | TokenKind::UnitCm
            | TokenKind::UnitEm
            | TokenKind::UnitMm
            | TokenKind::UnitRem
            | TokenKind::UnitDeg
            | TokenKind::UnitPercent
            | TokenKind::MediaType
            | TokenKind::PropertyName
            | TokenKind::Unknown => Err(SyntaxError::unexpected_token("a selector or '@import'", &token)),
        }
    }

    /// import → "@import" ( "url" "(" URL ")" | STRING ) MEDIA_TYPE? ";"
    pub fn import_statement(&mut self) -> Result<ImportStatement, SyntaxError> {
        let keyword = self.expect(TokenKind::Import)?;
        let head = self.buffer.peek();

        let url = if head.lexeme == "url" && self.accept_sequence(&[TokenKind::Ident, TokenKind::ParenStart]) {
            let target = self.buffer.next();
            match target.kind {
                TokenKind::Url | TokenKind::QqString | TokenKind::QString => {}
                _ => return Err(SyntaxError::unexpected_token("an import url", &target)),
            }
            self.expect(TokenKind::ParenEnd)?;
            Url::classify(&target.lexeme)
        } else if head.kind.is_string() {
            self.buffer.next();
            Url::classify(&head.lexeme)
        } else {
            return Err(SyntaxError::unexpected_token("url(...) or a quoted string", &head));
        };

        let mut media = Vec::new();
        if self.buffer.peek().is(TokenKind::MediaType) {
            media.push(self.buffer.next().lexeme);
        }

        let end = self.buffer.peek();
        match end.kind {
            TokenKind::Semicolon => {
                self.buffer.next();
            }
            TokenKind::Comma | TokenKind::MediaType | TokenKind::Ident | TokenKind::ParenStart
                if !media.is_empty() =>
            {
                return Err(SyntaxError::unsupported("a media query with more than one entry", &end)
                    .with_help("import the stylesheet once per media type"));
            }
            _ => return Err(SyntaxError::unexpected_token("';'", &end)),
        }

        trace!(url = url.as_str(), ?media, "import");
        Ok(ImportStatement {
            url,
            media,
            span: keyword.span,
        })
    }

    /// rule_set → selector+ declaration_block
    pub fn rule_set(&mut self, parent: Option<RuleSetId>) -> Result<RuleSet, SyntaxError> {
        let id = self.allocate_rule_set_id();
        let span = self.buffer.peek().span;
        trace!(?id, ?parent, %span, "rule set");

        let mut selectors = Vec::new();
        loop {
            let token = self.buffer.next();

            let selector = match token.kind {
                TokenKind::TypeSelector => Selector::Type(token.lexeme),
                TokenKind::UniversalSelector => Selector::Universal,
                TokenKind::IdSelector => Selector::Id(token.lexeme),
                TokenKind::ClassSelector => Selector::Class(token.lexeme),
                TokenKind::ParentSelector => Selector::Parent(parent),
                TokenKind::PseudoSelector => {
                    let lang = if self.buffer.peek().is(TokenKind::LangCode) {
                        Some(self.buffer.next().lexeme)
                    } else {
                        None
                    };
                    Selector::Pseudo {
                        name: token.lexeme,
                        lang,
                    }
                }
                TokenKind::AdjacentSelector => Selector::Adjacent,
                TokenKind::ChildSelector => Selector::Child,
                TokenKind::DescendantSelector => Selector::Descendant,

                TokenKind::Ident
                | TokenKind::FunctionName
                | TokenKind::Integer
                | TokenKind::Float
                | TokenKind::QqString
                | TokenKind::QString
                | TokenKind::HexColor
                | TokenKind::Url
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
                | TokenKind::Eof => {
                    self.buffer.backup();
                    break;
                }
            };

            selectors.push(selector);
        }
        trace!(selectors = %render_selectors(&selectors), "selectors");

        let block = self.declaration_block()?;

        Ok(RuleSet {
            id,
            selectors,
            block,
            span,
        })
    }

    /// declaration_block → "{" ( PROPERTY ":" values )* "}"
    pub fn declaration_block(&mut self) -> Result<DeclarationBlock, SyntaxError> {
        self.expect(TokenKind::BraceStart)?;
        let mut block = DeclarationBlock::default();

        loop {
            let token = self.buffer.next();

            match token.kind {
                TokenKind::BraceEnd => break,

                TokenKind::PropertyName => {
                    self.expect(TokenKind::Colon)?;
                    let values = self.property_values()?;
                    block.push(Property {
                        name: token.lexeme,
                        values,
                        span: token.span,
                    });
                }

                TokenKind::TypeSelector
                | TokenKind::UniversalSelector
                | TokenKind::IdSelector
                | TokenKind::ClassSelector
                | TokenKind::ParentSelector
                | TokenKind::PseudoSelector
                | TokenKind::AdjacentSelector
                | TokenKind::ChildSelector
                | TokenKind::DescendantSelector => {
                    return Err(SyntaxError::unsupported("nested selector", &token)
                        .with_help("move the nested rule to the top level and repeat its parent selector"));
                }

                TokenKind::Import | TokenKind::AtKeyword => {
                    return Err(SyntaxError::unsupported(format!("{} inside a rule set", token.lexeme), &token));
                }

                TokenKind::Ident
                | TokenKind::FunctionName
                | TokenKind::Integer
                | TokenKind::Float
                | TokenKind::QqString
                | TokenKind::QString
                | TokenKind::HexColor
                | TokenKind::Url
                | TokenKind::LangCode
                | TokenKind::Colon
                | TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::ParenStart
                | TokenKind::ParenEnd
                | TokenKind::BraceStart
                | TokenKind::InterpolationStart
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
                | TokenKind::MediaType
                | TokenKind::Unknown
                | TokenKind::Eof => return Err(SyntaxError::unexpected_token("a property or '}'", &token)),
            }
        }

        Ok(block)
    }

    /// values → expression ( ","? expression )* ";"?
    ///
    /// Values may be separated by commas or by whitespace alone. The
    /// list ends at `;` (consumed) or at `}` (left for the block).
    pub fn property_values(&mut self) -> Result<Vec<Expression>, SyntaxError> {
        let mut values = Vec::new();

        loop {
            let token = self.buffer.peek();
            match token.kind {
                TokenKind::Semicolon => {
                    self.buffer.next();
                    break;
                }
                TokenKind::BraceEnd => break,
                TokenKind::Eof => return Err(SyntaxError::unexpected_token("';' or '}'", &token)),
                _ => {}
            }

            values.push(self.expression()?);
            self.accept(TokenKind::Comma);
        }

        Ok(values)
    }
}
