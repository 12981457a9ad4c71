use serde::{Deserialize, Serialize};

/// Minimum number of characters accepted in `text`.
pub const MIN_TEXT_CHARS: usize = 50;

/// Sentence count used when the caller does not send `maxSentences`.
pub const DEFAULT_MAX_SENTENCES: u8 = 3;

/// Smallest accepted `maxSentences`.
pub const MIN_SENTENCES: u8 = 1;

/// Largest accepted `maxSentences`.
pub const MAX_SENTENCES: u8 = 5;

/// A request that passed validation and is ready to be forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeRequest {
    pub text: String,
    pub max_sentences: u8,
}

impl SummarizeRequest {
    /// Length of the input text, counted in Unicode scalar values.
    #[must_use]
    pub fn characters(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub meta: SummaryMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMeta {
    pub max_sentences: u8,
    pub model: String,
    pub characters: usize,
}
