//! Free-text bounding - the only lossy transformation analyzers may apply.

use serde::{Deserialize, Serialize};

/// Appended to any free-text field cut at the truncation length.
pub const TRUNCATION_MARKER: &str = "… [truncated]";

/// Default maximum characters kept from one free-text field.
pub const DEFAULT_TRUNCATION_LENGTH: usize = 280;

/// Bounds applied to free-text fields during analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLimits {
    /// Maximum characters (Unicode scalar values) kept from one field.
    pub truncation_length: usize,
}

impl TextLimits {
    pub fn new(truncation_length: usize) -> Self {
        Self { truncation_length }
    }

    /// Returns `text` unchanged if it fits, otherwise its first
    /// `truncation_length` characters followed by [`TRUNCATION_MARKER`].
    pub fn truncate(&self, text: &str) -> String {
        match text.char_indices().nth(self.truncation_length) {
            None => text.to_string(),
            Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        }
    }

    /// Like [`Self::truncate`], but `None` for text that is blank after trimming.
    pub fn truncate_non_blank(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            None
        } else {
            Some(self.truncate(text))
        }
    }

    /// Returns true if `text` could have been produced by [`Self::truncate`].
    pub fn admits(&self, text: &str) -> bool {
        let kept = text.strip_suffix(TRUNCATION_MARKER).unwrap_or(text);
        kept.chars().count() <= self.truncation_length
    }
}

impl Default for TextLimits {
    fn default() -> Self {
        Self::new(DEFAULT_TRUNCATION_LENGTH)
    }
}
