/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use scssparse::diagnostics::DiagnosticPrinter;
use scssparse::lexer::{Token, TokenKind};
use scssparse::span::Span;
use scssparse::{parse, parse_tokens, SyntaxErrorKind};

fn value_error(value: &str) -> scssparse::SyntaxError {
    parse(&format!("a {{ b: {}; }}", value)).unwrap_err()
}

#[test]
fn unterminated_block_is_unexpected_token() {
    let err = parse("a { color: red;").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
    assert_eq!(err.code, "E0001");
    assert!(err.message.contains("end of input"), "{}", err.message);
}

#[test]
fn unterminated_value_list_is_unexpected_token() {
    let err = parse("a { color: red").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
}

#[test]
fn missing_open_brace() {
    let err = parse("a color: red; }").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
    assert!(err.message.starts_with("expected '{'"), "{}", err.message);
}

#[test]
fn hex_color_is_unsupported() {
    let err = parse("a {\n  color: #fff;\n}").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnsupportedConstruct);
    assert_eq!(err.lexeme, "#fff");
    assert_eq!(err.span, Span::new(2, 10));
    assert!(err.help.is_some());
}

#[test]
fn nested_selector_is_unsupported() {
    let err = parse("nav { a:hover { color: red; } }").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnsupportedConstruct);
    assert!(err.message.contains("nested selector"), "{}", err.message);
    assert_eq!(err.lexeme, "a");
}

#[test]
fn multi_entry_media_query_is_unsupported() {
    let err = parse("@import 'print.css' screen, print;").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnsupportedConstruct);
}

#[test]
fn import_requires_semicolon() {
    let err = parse("@import 'a.css'\na {}").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
}

#[test]
fn other_at_rules_are_unsupported() {
    let err = parse("@media screen { a { b: 1; } }").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnsupportedConstruct);
    assert_eq!(err.lexeme, "@media");
}

#[test]
fn unclosed_parenthesis() {
    let err = parse("a { width: (1px + 2px; }").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
    assert_eq!(err.lexeme, ";");
}

#[test]
fn trailing_comma_in_call() {
    let err = parse("a { color: rgb(1, 2, ); }").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
    assert_eq!(err.lexeme, ")");
}

#[test]
fn malformed_number_literal() {
    let span = Span::new(1, 1);
    let tokens = vec![
        Token::new(TokenKind::TypeSelector, "a", span),
        Token::new(TokenKind::BraceStart, "{", span),
        Token::new(TokenKind::PropertyName, "width", span),
        Token::new(TokenKind::Colon, ":", span),
        Token::new(TokenKind::Float, "1.2.3", span),
        Token::new(TokenKind::Semicolon, ";", span),
        Token::new(TokenKind::BraceEnd, "}", span),
    ];

    let err = parse_tokens(tokens).unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::MalformedLiteral);
    assert_eq!(err.lexeme, "1.2.3");
}

#[test]
fn unknown_character_in_value() {
    let err = parse("a { width: 1px ? 2px; }").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
    assert_eq!(err.lexeme, "?");
}

#[test]
fn error_renders_as_diagnostic() {
    let source = "a {\n  color: #fff;\n}";
    let err = parse(source).unwrap_err();
    let rendered = DiagnosticPrinter::new("theme.scss", source).render(&err);

    assert!(rendered.starts_with("error[E0002]"), "{}", rendered);
    assert!(rendered.contains("--> theme.scss:2:10"), "{}", rendered);
    assert!(rendered.contains("^^^^"), "{}", rendered);
}

#[test]
fn placeholder_selector_is_unsupported() {
    let err = parse("%message { color: red; }").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnsupportedConstruct);
    assert_eq!(err.lexeme, "%");
    assert!(err.message.contains("placeholder selector"), "{}", err.message);
}

#[test]
fn unknown_tokens_between_statements_are_reported() {
    let err = parse("a { b: 1; } ? c { d: 2; }").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
    assert_eq!(err.lexeme, "?");

    let err = parse("a { b: 1; } \"open\nc { d: 2; }").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
    assert_eq!(err.lexeme, "\"open");
}

#[test]
fn stray_closing_brace_is_reported() {
    let err = parse("a { b: 1; } }").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
    assert_eq!(err.span, Span::new(1, 13));
}

#[test]
fn at_rule_inside_block_is_unsupported() {
    let err = parse("a { @include shadow; }").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnsupportedConstruct);
    assert_eq!(err.lexeme, "@include");
}

#[test]
fn unterminated_interpolation() {
    let err = parse("a { b: #{1; }").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
    assert_eq!(err.lexeme, ";");
}

#[test]
fn deep_unary_chain_is_refused() {
    let err = value_error(&"- ".repeat(10_000));
    assert_eq!(err.kind, SyntaxErrorKind::UnsupportedConstruct);
    assert!(err.message.contains("nesting"), "{}", err.message);
}

#[test]
fn deep_parentheses_are_refused() {
    let depth = 10_000;
    let err = value_error(&format!("{}1{}", "(".repeat(depth), ")".repeat(depth)));
    assert_eq!(err.kind, SyntaxErrorKind::UnsupportedConstruct);
}

#[test]
fn deep_call_arguments_are_refused() {
    let depth = 10_000;
    let err = value_error(&format!("{}1{}", "f(".repeat(depth), ")".repeat(depth)));
    assert_eq!(err.kind, SyntaxErrorKind::UnsupportedConstruct);
}
