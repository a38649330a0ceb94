/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use std::path::Path;

/// Stylesheet dialect, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Scss,

    /// The indented syntax. Recognized so it can be refused clearly.
    Sass,

    Unknown,
}

impl FileType {
    pub fn from_path(path: impl AsRef<Path>) -> FileType {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("scss") => FileType::Scss,
            Some("sass") => FileType::Sass,
            _ => FileType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_extension() {
        assert_eq!(FileType::from_path("theme/site.scss"), FileType::Scss);
        assert_eq!(FileType::from_path("OLD.SASS"), FileType::Sass);
        assert_eq!(FileType::from_path("plain.css"), FileType::Unknown);
        assert_eq!(FileType::from_path("Makefile"), FileType::Unknown);
    }
}
