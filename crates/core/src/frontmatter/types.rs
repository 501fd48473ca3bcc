//! Front matter types and data structures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker bounding the front matter block.
pub const DELIMITER: &str = "---";

/// Errors that can occur while splitting a document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrontmatterParseError {
    #[error("document has fewer than two '---' delimiters")]
    Unparseable,
}

/// Name under which a tag list is stored.
///
/// Both spellings are recognised when reading or replacing an existing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKey {
    #[default]
    Tags,
    Topics,
}

impl TagKey {
    pub fn as_str(self) -> &'static str {
        match self {
            TagKey::Tags => "tags",
            TagKey::Topics => "topics",
        }
    }
}

impl std::fmt::Display for TagKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document split on its first two delimiters.
///
/// The front matter is kept as raw text: every field operation works on
/// this text so that lines nobody touched survive byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Text before the first delimiter (empty for well-formed documents).
    pub prefix: String,
    /// Raw text between the first and second delimiter, newlines included.
    pub front_matter: String,
    /// Everything after the second delimiter.
    pub body: String,
}

impl ParsedDocument {
    /// Replace the front matter text, keeping prefix and body.
    pub fn with_front_matter(self, front_matter: String) -> Self {
        Self { front_matter, ..self }
    }
}
