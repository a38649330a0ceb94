/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use crate::error::SyntaxError;
use crate::span::Span;

/// Renders human-friendly, compiler-style diagnostics for syntax errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is modeled on `rustc` diagnostics but stays readable
/// without color.
pub struct DiagnosticPrinter {
    /// Full source text of the stylesheet being parsed.
    source: String,

    /// Name of the source file, for display only.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source file.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Formats a diagnostic into a string.
    ///
    /// # Output Example
    /// ```text
    /// error[E0002]: hex color literal is not supported
    ///   --> theme.scss:3:10
    ///    |
    ///  3 |   color: #fff;
    ///    |          ^^^^
    /// help: write the color with rgb() instead
    /// ```
    pub fn render(&self, error: &SyntaxError) -> String {
        let Span { line, column } = error.span;

        // Lines are 1-indexed in diagnostics; `saturating_sub` keeps an
        // unknown span (0:0) on the first line.
        let src_line = self.source.lines().nth(line.saturating_sub(1)).unwrap_or("");

        let width = error.lexeme.chars().count().max(1);
        let underline = format!("{}{}", " ".repeat(column.saturating_sub(1)), "^".repeat(width));

        let mut out = format!(
            "error[{}]: {}\n  --> {}:{}:{}\n   |\n{:>3} | {}\n   | {}\n",
            error.code, error.message, self.file_name, line, column, line, src_line, underline
        );

        if let Some(help) = &error.help {
            out.push_str(&format!("help: {}\n", help));
        }

        out
    }

    /// Prints the rendered diagnostic to stderr.
    pub fn print(&self, error: &SyntaxError) {
        eprint!("{}", self.render(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::{Token, TokenKind};

    #[test]
    fn caret_points_at_offending_token() {
        let source = "a {\n  color: #fff;\n}\n";
        let found = Token::new(TokenKind::HexColor, "#fff", Span::new(2, 10));
        let error = SyntaxError::unsupported("hex color literal", &found)
            .with_help("write the color with rgb() instead");

        let rendered = DiagnosticPrinter::new("theme.scss", source).render(&error);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "error[E0002]: hex color literal is not supported");
        assert_eq!(lines[1], "  --> theme.scss:2:10");
        assert_eq!(lines[3], "  2 |   color: #fff;");
        assert_eq!(lines[4], "   |          ^^^^");
        assert_eq!(lines[5], "help: write the color with rgb() instead");
    }

    #[test]
    fn end_of_input_gets_single_caret() {
        let source = "a { color: red;";
        let error = SyntaxError::unexpected_token("'}'", &Token::eof(Span::new(1, 16)));
        let rendered = DiagnosticPrinter::new("x.scss", source).render(&error);
        assert!(rendered.contains("   |                ^\n"));
    }
}
