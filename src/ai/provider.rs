use async_trait::async_trait;

use crate::errors::ProviderError;

/// The summarization capability the HTTP layer forwards to.
///
/// Implementations make exactly one attempt per call. An empty string is a
/// valid result.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `text` into `max_sentences` sentences.
    async fn summarize(&self, text: &str, max_sentences: u8) -> Result<String, ProviderError>;

    /// Identifier of the model reported in response metadata.
    fn model(&self) -> &str;
}
