/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use crate::span::Span;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// `scheme://...` or protocol-relative `//host/...`
static ABSOLUTE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-zA-Z][a-zA-Z0-9+.\-]*://|//)").expect("valid url pattern"));

/// Target of an `@import`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url")]
pub enum Url {
    Absolute(String),
    Relative(String),
}

impl Url {
    /// Classifies a raw import target.
    ///
    /// ```text
    /// https://cdn.example.com/a.css  → Absolute
    /// //cdn.example.com/a.css        → Absolute
    /// foo.css, ../base/_vars.scss    → Relative
    /// ```
    pub fn classify(raw: &str) -> Url {
        if ABSOLUTE_URL.is_match(raw) {
            Url::Absolute(raw.to_string())
        } else {
            Url::Relative(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Url::Absolute(url) | Url::Relative(url) => url,
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, Url::Absolute(_))
    }
}

/// `@import url(foo.css) screen;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportStatement {
    pub url: Url,

    /// Media types the import is restricted to. At most one entry.
    pub media: Vec<String>,

    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_urls() {
        assert!(Url::classify("https://cdn.example.com/a.css").is_absolute());
        assert!(Url::classify("//cdn.example.com/a.css").is_absolute());
        assert_eq!(Url::classify("foo.css"), Url::Relative("foo.css".into()));
        assert!(!Url::classify("../partials/_grid.scss").is_absolute());
    }
}
