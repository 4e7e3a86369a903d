//! Parsed post entity

use serde::{Deserialize, Serialize};

/// One post candidate split out of the generated text
///
/// `id` is 1-based and dense within a single parse result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPost {
    pub id: usize,
    /// Style label (Storytelling, Data-Driven, ..., or "Variation N")
    pub style: String,
    /// Trimmed post text
    pub content: String,
}

impl ParsedPost {
    pub fn new(id: usize, style: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            style: style.into(),
            content: content.into(),
        }
    }

    /// Content length in characters
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}
