/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use serde::Serialize;
use std::fmt;

/// Handle to a rule set within a parsed stylesheet.
///
/// Ids are handed out in parse order. A parent selector (`&`) stores
/// the id of its enclosing rule set rather than a reference to it, so
/// the tree never owns itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RuleSetId(pub usize);

/// One element of a selector sequence.
///
/// Simple selectors and combinators share a single ordered list:
/// `div > p` is `[Type("div"), Child, Type("p")]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Selector {
    /// `div`
    Type(String),

    /// `*`
    Universal,

    /// `#main` (name without the `#`)
    Id(String),

    /// `.nav` (name without the `.`)
    Class(String),

    /// `&`, linked to the lexically enclosing rule set. `None` at the
    /// top level.
    Parent(Option<RuleSetId>),

    /// `:hover`, `:lang(fr)`
    Pseudo { name: String, lang: Option<String> },

    /// `+`
    Adjacent,

    /// `>`
    Child,

    /// Whitespace between two compound selectors.
    Descendant,
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Type(name) => write!(f, "{}", name),
            Selector::Universal => write!(f, "*"),
            Selector::Id(name) => write!(f, "#{}", name),
            Selector::Class(name) => write!(f, ".{}", name),
            Selector::Parent(_) => write!(f, "&"),
            Selector::Pseudo { name, lang: Some(lang) } => write!(f, ":{}({})", name, lang),
            Selector::Pseudo { name, lang: None } => write!(f, ":{}", name),
            Selector::Adjacent => write!(f, " + "),
            Selector::Child => write!(f, " > "),
            Selector::Descendant => write!(f, " "),
        }
    }
}

/// Writes a selector sequence back out in CSS form.
pub fn render_selectors(selectors: &[Selector]) -> String {
    selectors.iter().map(ToString::to_string).collect()
}
