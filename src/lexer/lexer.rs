/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use crate::lexer::keywords::{is_media_type, unit_kind};
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use regex::Regex;
use std::collections::VecDeque;
use std::sync::LazyLock;

/// Digits of a hex color after the `#`.
static HEX_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("valid hex color pattern"));

/// Scanning context. SCSS is not context-free at the character level:
/// `#main` is an id selector before a `{` and a hex color after a `:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Top level, or a nested rule header inside a block.
    Selector,

    /// Inside `{ ... }` at the start of an item.
    Block,

    /// After `property:` up to the closing `;` or `}`.
    Value,

    /// After `@import` up to the closing `;`.
    Import,
}

/// The SCSS tokenizer.
///
/// Unlike a batch lexer, this one is **pull-based**: `next_token` scans
/// only as far as needed to produce the next token, which lets the
/// producer thread hand tokens over one at a time while the parser is
/// already working.
///
/// The lexer never panics. Characters it cannot classify and
/// unterminated strings become `TokenKind::Unknown` tokens and the parser
/// reports them with their position.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
    mode: Mode,

    /// Open `{` blocks.
    depth: usize,

    /// Open `#{` groups inside a value.
    interpolation_depth: usize,

    /// Set after a simple selector, so whitespace that follows it can be
    /// turned into a descendant combinator.
    after_simple_selector: bool,

    /// Tokens scanned but not yet handed out. Some constructs (`10px`,
    /// `url(a.css)`) produce several tokens from one scan.
    pending: VecDeque<Token>,

    finished: bool,
    eof_returned: bool,
}

impl Lexer {
    /// Creates a lexer positioned at line 1, column 1 of `source`.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            column: 1,
            mode: Mode::Selector,
            depth: 0,
            interpolation_depth: 0,
            after_simple_selector: false,
            pending: VecDeque::new(),
            finished: false,
            eof_returned: false,
        }
    }

    /// Produces the next token.
    ///
    /// Once the source is exhausted this keeps returning the `Eof`
    /// sentinel.
    pub fn next_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token;
            }
            if self.finished {
                return Token::eof(self.here());
            }
            self.scan();
        }
    }

    /// Scans at least one token into `pending`, or the final `Eof`.
    fn scan(&mut self) {
        let skipped = self.skip_trivia();

        if self.is_at_end() {
            let span = self.here();
            self.push(TokenKind::Eof, "", span);
            self.finished = true;
            return;
        }

        match self.mode {
            Mode::Selector => self.scan_selector(skipped),
            Mode::Block => self.scan_block_item(),
            Mode::Value => self.scan_value(),
            Mode::Import => self.scan_import(),
        }
    }

    /* ----------------------------- */
    /* SELECTORS                     */
    /* ----------------------------- */

    fn scan_selector(&mut self, skipped_whitespace: bool) {
        let start = self.here();

        if skipped_whitespace && self.after_simple_selector && self.starts_simple_selector() {
            self.after_simple_selector = false;
            self.push(TokenKind::DescendantSelector, " ", start);
            return;
        }

        let ch = self.peek();
        match ch {
            '@' => self.at_keyword(),
            '{' => {
                self.advance();
                self.push(TokenKind::BraceStart, "{", start);
                self.depth += 1;
                self.mode = Mode::Block;
                self.after_simple_selector = false;
            }
            '}' => {
                self.advance();
                self.push(TokenKind::BraceEnd, "}", start);
                self.close_block();
            }
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '>' => self.single(TokenKind::ChildSelector),
            '+' => self.single(TokenKind::AdjacentSelector),
            '*' => {
                self.single(TokenKind::UniversalSelector);
                self.after_simple_selector = true;
            }
            '&' => {
                self.single(TokenKind::ParentSelector);
                self.after_simple_selector = true;
            }
            '.' | '#' => {
                self.advance();
                if self.starts_identifier() {
                    let name = self.read_name();
                    let kind = if ch == '.' {
                        TokenKind::ClassSelector
                    } else {
                        TokenKind::IdSelector
                    };
                    self.push(kind, name, start);
                    self.after_simple_selector = true;
                } else {
                    self.push(TokenKind::Unknown, ch.to_string(), start);
                    self.after_simple_selector = false;
                }
            }
            ':' => self.pseudo_selector(),
            '"' | '\'' => self.string(ch),
            _ if self.starts_identifier() => {
                let name = self.read_name();
                self.push(TokenKind::TypeSelector, name, start);
                self.after_simple_selector = true;
            }
            _ => {
                self.advance();
                self.push(TokenKind::Unknown, ch.to_string(), start);
                self.after_simple_selector = false;
            }
        }
    }

    /// Scans `:name`, `::name` and `:lang(code)`.
    fn pseudo_selector(&mut self) {
        let start = self.here();
        self.advance();
        if self.peek() == ':' {
            self.advance();
        }

        let name = self.read_name();
        if name.is_empty() {
            self.push(TokenKind::Unknown, ":", start);
            self.after_simple_selector = false;
            return;
        }

        let is_lang = name == "lang";
        self.push(TokenKind::PseudoSelector, name, start);
        self.after_simple_selector = true;

        if is_lang && self.peek() == '(' {
            self.advance();
            let code_start = self.here();
            let mut code = String::new();
            while !self.is_at_end() && !matches!(self.peek(), ')' | '{' | '\n') {
                code.push(self.advance());
            }
            self.match_char(')');
            self.push(TokenKind::LangCode, code.trim(), code_start);
        }
    }

    /* ----------------------------- */
    /* BLOCK ITEMS                   */
    /* ----------------------------- */

    /// Decides whether the item at the cursor is a declaration or a
    /// nested rule header, and scans its first token.
    fn scan_block_item(&mut self) {
        let start = self.here();
        let ch = self.peek();

        match ch {
            '}' => {
                self.advance();
                self.push(TokenKind::BraceEnd, "}", start);
                self.close_block();
            }
            ';' => self.single(TokenKind::Semicolon),
            '@' => self.at_keyword(),
            _ if self.item_opens_block() => {
                self.mode = Mode::Selector;
                self.after_simple_selector = false;
                self.scan_selector(false);
            }
            _ if self.starts_identifier() => {
                let name = self.read_name();
                self.push(TokenKind::PropertyName, name, start);

                self.skip_trivia();
                if self.peek() == ':' {
                    self.single(TokenKind::Colon);
                    self.mode = Mode::Value;
                }
            }
            _ => {
                self.advance();
                self.push(TokenKind::Unknown, ch.to_string(), start);
            }
        }
    }

    /// Looks ahead for the first structural character of the current
    /// item: a `{` means a nested rule, `;` or `}` a declaration.
    fn item_opens_block(&self) -> bool {
        let mut i = self.current;
        while i < self.chars.len() {
            match self.chars[i] {
                '#' if self.chars.get(i + 1) == Some(&'{') => {
                    i += 2;
                    while i < self.chars.len() && self.chars[i] != '}' {
                        i += 1;
                    }
                }
                quote @ ('"' | '\'') => {
                    i += 1;
                    while i < self.chars.len() && self.chars[i] != quote {
                        i += 1;
                    }
                }
                '{' => return true,
                ';' | '}' => return false,
                _ => {}
            }
            i += 1;
        }
        false
    }

    /* ----------------------------- */
    /* VALUES                        */
    /* ----------------------------- */

    fn scan_value(&mut self) {
        let start = self.here();
        let ch = self.peek();

        match ch {
            ';' => {
                self.single(TokenKind::Semicolon);
                self.mode = Mode::Block;
            }
            '}' => {
                self.advance();
                if self.interpolation_depth > 0 {
                    self.interpolation_depth -= 1;
                    self.push(TokenKind::InterpolationEnd, "}", start);
                } else {
                    self.push(TokenKind::BraceEnd, "}", start);
                    self.close_block();
                }
            }
            '#' => {
                self.advance();
                if self.match_char('{') {
                    self.interpolation_depth += 1;
                    self.push(TokenKind::InterpolationStart, "#{", start);
                } else {
                    let mut digits = String::new();
                    while self.peek().is_ascii_alphanumeric() {
                        digits.push(self.advance());
                    }
                    let kind = if HEX_DIGITS.is_match(&digits) {
                        TokenKind::HexColor
                    } else {
                        TokenKind::Unknown
                    };
                    self.push(kind, format!("#{}", digits), start);
                }
            }
            '0'..='9' => self.number(),
            '.' if self.peek_next().is_ascii_digit() => self.number(),
            '"' | '\'' => self.string(ch),
            '(' => self.single(TokenKind::ParenStart),
            ')' => self.single(TokenKind::ParenEnd),
            ',' => self.single(TokenKind::Comma),
            ':' => self.single(TokenKind::Colon),
            '+' => self.single(TokenKind::Plus),
            '*' => self.single(TokenKind::Mul),
            '/' => self.single(TokenKind::Div),
            '-' if !self.starts_identifier() => self.single(TokenKind::Minus),
            '!' => {
                self.advance();
                let word = self.read_name();
                self.push(TokenKind::Ident, format!("!{}", word), start);
            }
            _ if self.starts_identifier() => {
                let name = self.read_name();
                if self.peek() != '(' {
                    self.push(TokenKind::Ident, name, start);
                    return;
                }

                // An unquoted `url(...)` body is raw text: `//` in it is
                // not a comment.
                let raw_url = name.eq_ignore_ascii_case("url") && !self.quote_after_paren();
                self.push(TokenKind::FunctionName, name, start);
                if raw_url {
                    self.single(TokenKind::ParenStart);
                    self.url_body();
                }
            }
            _ => {
                self.advance();
                self.push(TokenKind::Unknown, ch.to_string(), start);
            }
        }
    }

    /// Scans an integer or float literal and a unit glued to it.
    ///
    /// The unit is only scanned when no whitespace separates it from the
    /// digits, so `10 px` yields `Integer` followed by `Ident`.
    fn number(&mut self) {
        let start = self.here();
        let mut text = String::new();
        let mut is_float = false;

        while self.peek().is_ascii_digit() {
            text.push(self.advance());
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            is_float = true;
            text.push(self.advance());
            while self.peek().is_ascii_digit() {
                text.push(self.advance());
            }
        }

        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        self.push(kind, text, start);

        let unit_start = self.here();
        if self.peek() == '%' {
            self.advance();
            self.push(TokenKind::UnitPercent, "%", unit_start);
            return;
        }

        let suffix = self.peek_letters();
        if let Some(unit) = unit_kind(&suffix) {
            for _ in 0..suffix.chars().count() {
                self.advance();
            }
            self.push(unit, suffix, unit_start);
        }
    }

    /* ----------------------------- */
    /* IMPORTS                       */
    /* ----------------------------- */

    fn scan_import(&mut self) {
        let start = self.here();
        let ch = self.peek();

        match ch {
            ';' => {
                self.single(TokenKind::Semicolon);
                self.mode = if self.depth > 0 {
                    Mode::Block
                } else {
                    Mode::Selector
                };
            }
            '"' | '\'' => self.string(ch),
            ',' => self.single(TokenKind::Comma),
            '(' => self.single(TokenKind::ParenStart),
            ')' => self.single(TokenKind::ParenEnd),
            ':' => self.single(TokenKind::Colon),
            _ if self.starts_identifier() => {
                let word = self.read_name();
                if word == "url" && self.peek() == '(' {
                    self.push(TokenKind::Ident, word, start);
                    self.single(TokenKind::ParenStart);
                    self.url_body();
                } else if is_media_type(&word) {
                    self.push(TokenKind::MediaType, word, start);
                } else {
                    self.push(TokenKind::Ident, word, start);
                }
            }
            _ => {
                self.advance();
                self.push(TokenKind::Unknown, ch.to_string(), start);
            }
        }
    }

    /// Scans the raw target of `url(...)`. Quotes around it are dropped.
    fn url_body(&mut self) {
        while matches!(self.peek(), ' ' | '\t') {
            self.advance();
        }

        let start = self.here();
        let mut raw = String::new();
        while !self.is_at_end() && !matches!(self.peek(), ')' | '\n') {
            raw.push(self.advance());
        }

        let trimmed = raw.trim_end();
        let url = match (trimmed.chars().next(), trimmed.chars().last()) {
            (Some(open @ ('"' | '\'')), Some(close)) if open == close && trimmed.len() >= 2 => {
                &trimmed[1..trimmed.len() - 1]
            }
            _ => trimmed,
        };
        self.push(TokenKind::Url, url, start);

        if self.peek() == ')' {
            self.single(TokenKind::ParenEnd);
        }
    }

    /* ----------------------------- */
    /* SHARED SCANNERS               */
    /* ----------------------------- */

    fn at_keyword(&mut self) {
        let start = self.here();
        self.advance();
        let word = self.read_name();

        if word == "import" {
            self.push(TokenKind::Import, "@import", start);
            self.mode = Mode::Import;
        } else {
            self.push(TokenKind::AtKeyword, format!("@{}", word), start);
        }
        self.after_simple_selector = false;
    }

    /// Scans a quoted string. A string left open at a newline or at the
    /// end of input becomes an `Unknown` token carrying the raw text.
    fn string(&mut self, delimiter: char) {
        let start = self.here();
        self.advance();

        let mut value = String::new();
        loop {
            if self.is_at_end() || self.peek() == '\n' {
                self.push(TokenKind::Unknown, format!("{}{}", delimiter, value), start);
                return;
            }

            let ch = self.advance();
            if ch == delimiter {
                break;
            }
            if ch == '\\' && !self.is_at_end() {
                value.push(ch);
                value.push(self.advance());
                continue;
            }
            value.push(ch);
        }

        let kind = if delimiter == '"' {
            TokenKind::QqString
        } else {
            TokenKind::QString
        };
        self.push(kind, value, start);
        self.after_simple_selector = false;
    }

    /// Consumes one character and emits it as a token of `kind`.
    fn single(&mut self, kind: TokenKind) {
        let start = self.here();
        let ch = self.advance();
        self.push(kind, ch.to_string(), start);
        if !matches!(kind, TokenKind::UniversalSelector | TokenKind::ParentSelector) {
            self.after_simple_selector = false;
        }
    }

    fn close_block(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.mode = if self.depth > 0 {
            Mode::Block
        } else {
            Mode::Selector
        };
        self.after_simple_selector = false;
    }

    /// Skips whitespace, `/* */` and `//` comments. Returns whether
    /// anything was skipped.
    fn skip_trivia(&mut self) -> bool {
        let mut skipped = false;
        loop {
            match self.peek() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                '/' if self.peek_next() == '*' => {
                    self.advance();
                    self.advance();
                    while !self.is_at_end() && !(self.peek() == '*' && self.peek_next() == '/') {
                        self.advance();
                    }
                    self.match_char('*');
                    self.match_char('/');
                }
                '/' if self.peek_next() == '/' => {
                    while !self.is_at_end() && self.peek() != '\n' {
                        self.advance();
                    }
                }
                _ => return skipped,
            }
            skipped = true;
        }
    }

    fn read_name(&mut self) -> String {
        let mut name = String::new();
        while is_name_char(self.peek()) {
            name.push(self.advance());
        }
        name
    }

    /// Whether the first non-blank character after the `(` at the
    /// cursor opens a string.
    fn quote_after_paren(&self) -> bool {
        self.chars[self.current + 1..]
            .iter()
            .find(|c| !matches!(c, ' ' | '\t'))
            .is_some_and(|c| matches!(c, '"' | '\''))
    }

    /// Letters at the cursor, without consuming them.
    fn peek_letters(&self) -> String {
        self.chars[self.current..]
            .iter()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect()
    }

    fn starts_identifier(&self) -> bool {
        let ch = self.peek();
        if ch == '-' {
            let next = self.peek_next();
            return next.is_alphabetic() || next == '_' || next == '-';
        }
        ch.is_alphabetic() || ch == '_'
    }

    fn starts_simple_selector(&self) -> bool {
        matches!(self.peek(), '.' | '#' | '*' | '&' | ':') || self.starts_identifier()
    }

    fn push(&mut self, kind: TokenKind, lexeme: impl Into<String>, span: Span) {
        self.pending.push_back(Token::new(kind, lexeme, span));
    }

    fn here(&self) -> Span {
        Span::new(self.line, self.column)
    }

    /// Conditionally consumes `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Consumes one character, keeping line and column in step.
    ///
    /// Callers check `is_at_end` (directly or through `peek`) first.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        ch
    }

    /// Returns `'\0'` at end of input.
    fn peek(&self) -> char {
        self.chars.get(self.current).copied().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        self.chars.get(self.current + 1).copied().unwrap_or('\0')
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to and including a single `Eof`.
    fn next(&mut self) -> Option<Token> {
        if self.eof_returned {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.eof_returned = true;
        }
        Some(token)
    }
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

/// Tokenizes `source` eagerly. Convenience for tests and tooling; the
/// parser itself consumes the lexer through the producer thread.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    fn lexemes(source: &str) -> Vec<String> {
        tokenize(source).into_iter().map(|t| t.lexeme).collect()
    }

    #[test]
    fn rule_with_child_combinator() {
        assert_eq!(
            kinds(".a > .b { margin: 1, 2px; }"),
            vec![
                ClassSelector, ChildSelector, ClassSelector, BraceStart, PropertyName, Colon,
                Integer, Comma, Integer, UnitPx, Semicolon, BraceEnd, Eof
            ]
        );
        assert_eq!(lexemes(".a > .b {}")[..3], ["a", ">", "b"]);
    }

    #[test]
    fn whitespace_between_selectors_is_descendant() {
        assert_eq!(
            kinds("ul li a {}"),
            vec![
                TypeSelector, DescendantSelector, TypeSelector, DescendantSelector,
                TypeSelector, BraceStart, BraceEnd, Eof
            ]
        );
    }

    #[test]
    fn pseudo_selector_with_language_code() {
        let tokens = tokenize("p:lang(fr) {}");
        assert_eq!(tokens[0].kind, TypeSelector);
        assert_eq!(tokens[1].kind, PseudoSelector);
        assert_eq!(tokens[1].lexeme, "lang");
        assert_eq!(tokens[2].kind, LangCode);
        assert_eq!(tokens[2].lexeme, "fr");
        assert_eq!(tokens[3].kind, BraceStart);
    }

    #[test]
    fn unit_requires_no_whitespace() {
        assert_eq!(
            kinds("a { width: 10px 10 px 50%; }")[4..9],
            [Integer, UnitPx, Integer, Ident, Integer]
        );
    }

    #[test]
    fn hash_means_id_in_selectors_and_color_in_values() {
        assert_eq!(
            kinds("#main { color: #fff; }"),
            vec![IdSelector, BraceStart, PropertyName, Colon, HexColor, Semicolon, BraceEnd, Eof]
        );
    }

    #[test]
    fn interpolation_closes_before_block() {
        assert_eq!(
            kinds("a { width: #{1 + 2}; }")[4..9],
            [InterpolationStart, Integer, Plus, Integer, InterpolationEnd]
        );
    }

    #[test]
    fn import_with_url_and_media() {
        let tokens = tokenize("@import url(\"foo.css\") screen;");
        let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme.as_str())).collect();
        assert_eq!(
            got,
            vec![
                (Import, "@import"),
                (Ident, "url"),
                (ParenStart, "("),
                (Url, "foo.css"),
                (ParenEnd, ")"),
                (MediaType, "screen"),
                (Semicolon, ";"),
                (Eof, ""),
            ]
        );
    }

    #[test]
    fn function_names_and_idents() {
        assert_eq!(
            kinds("a { font: rgba(1, 2) sans-serif; }")[4..11],
            [FunctionName, ParenStart, Integer, Comma, Integer, ParenEnd, Ident]
        );
    }

    #[test]
    fn raw_url_keeps_double_slash() {
        let tokens = tokenize("a { background: url(http://x/a.png) no-repeat; }");
        let got: Vec<_> = tokens[4..9].iter().map(|t| (t.kind, t.lexeme.as_str())).collect();
        assert_eq!(
            got,
            [
                (FunctionName, "url"),
                (ParenStart, "("),
                (Url, "http://x/a.png"),
                (ParenEnd, ")"),
                (Ident, "no-repeat"),
            ]
        );
    }

    #[test]
    fn quoted_url_is_an_ordinary_call() {
        assert_eq!(
            kinds("a { b: url('//x/a.png'); }")[4..8],
            [FunctionName, ParenStart, QString, ParenEnd]
        );
    }

    #[test]
    fn line_comment_inside_value() {
        assert_eq!(
            kinds("a { color: red // note\n; }")[4..6],
            [Ident, Semicolon]
        );
    }

    #[test]
    fn nested_rule_header_lexes_as_selector() {
        assert_eq!(
            kinds("a { b:hover { } }")[2..5],
            [TypeSelector, PseudoSelector, BraceStart]
        );
    }

    #[test]
    fn unterminated_string_is_unknown() {
        let tokens = tokenize("a { content: \"open; }");
        assert_eq!(tokens[4].kind, Unknown);
        assert_eq!(tokens.last().map(|t| t.kind), Some(Eof));
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            kinds("/* head */ a { // note\n color: red; }"),
            vec![TypeSelector, BraceStart, PropertyName, Colon, Ident, Semicolon, BraceEnd, Eof]
        );
    }

    #[test]
    fn spans_track_lines_and_columns() {
        let tokens = tokenize("a {\n  color: red;\n}");
        assert_eq!(tokens[0].span, Span::new(1, 1));
        assert_eq!(tokens[2].span, Span::new(2, 3));
        assert_eq!(tokens[4].span, Span::new(2, 10));
        assert_eq!(tokens[6].span, Span::new(3, 1));
    }

    #[test]
    fn eof_is_repeated_after_exhaustion() {
        let mut lexer = Lexer::new("a");
        assert_eq!(lexer.next_token().kind, TypeSelector);
        assert!(lexer.next_token().is_eof());
        assert!(lexer.next_token().is_eof());
    }
}
