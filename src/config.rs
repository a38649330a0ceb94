/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Tuning knobs for a parse.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// { "channel_capacity": 16, "max_nesting_depth": 512 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Slots in the lexer → parser channel. `1` keeps a single token in
    /// flight; `0` makes each hand-off a rendezvous.
    pub channel_capacity: usize,

    /// How deep value expressions may nest (parentheses, interpolation,
    /// unary signs, call arguments) before the parse is refused.
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 1,
            max_nesting_depth: 256,
        }
    }
}

impl ParserConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }
}
