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

/// Maps a unit suffix glued to a numeric literal onto its token kind.
///
/// # Parameters
/// - `suffix`: The characters immediately following the digits.
///
/// # Returns
/// - `Some(kind)` for the supported letter units (`px`, `pt`, `cm`,
///   `em`, `mm`, `rem`, `deg`). `%` never reaches this table; the number
///   scanner handles it itself.
/// - `None` otherwise. Unknown suffixes are left for the identifier
///   scanner, so `10vh` lexes as `Integer` followed by `Ident`.
///
/// Matching is case-sensitive, as in CSS source.
pub fn unit_kind(suffix: &str) -> Option<TokenKind> {
    match suffix {
        "px" => Some(TokenKind::UnitPx),
        "pt" => Some(TokenKind::UnitPt),
        "cm" => Some(TokenKind::UnitCm),
        "em" => Some(TokenKind::UnitEm),
        "mm" => Some(TokenKind::UnitMm),
        "rem" => Some(TokenKind::UnitRem),
        "deg" => Some(TokenKind::UnitDeg),
        _ => None,
    }
}

/// Determines whether a word following an `@import` target is a CSS
/// media type.
///
/// ```text
/// @import url(print.css) print;   → "print" is a media type
/// @import "x.css" screen and ...  → "and" is not
/// ```
pub fn is_media_type(word: &str) -> bool {
    matches!(
        word,
        "all" |
        "screen" |
        "print" |
        "speech" |
        "aural" |
        "braille" |
        "embossed" |
        "handheld" |
        "projection" |
        "tty" |
        "tv"
    )
}
