//! LLM (Groq) API client module
//!
//! Encapsulates the chat-completions call used to generate summaries.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

use super::prompt_builder::{build_summary_prompt, estimate_tokens};
use super::provider::Summarizer;
use crate::core::config::AppConfig;
use crate::errors::ProviderError;

/// LLM API client for generating summaries
pub struct LlmClient {
    http: Client,
    api_key: String,
    base_url: String,
    model_name: String,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        api_key: String,
        base_url: &str,
        model_name: String,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            ProviderError::Http(format!("Failed to build provider HTTP client: {e}"))
        })?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_name,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ProviderError> {
        Self::new(
            config.groq_api_key.clone(),
            config.groq_base_url.as_str(),
            config.groq_model.clone(),
            config.provider_timeout,
        )
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Send `prompt` to the chat completions endpoint and return the first
    /// choice's content, or an empty string when the provider sent none.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the provider answers with a
    /// non-success status, or the body is not JSON.
    pub async fn generate_summary(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, ProviderError> {
        #[cfg(feature = "debug-logs")]
        info!("Using summary prompt:\n{:?}", prompt);

        let estimated_input_tokens = prompt
            .iter()
            .map(|msg| match &msg.content {
                Content::Text(text) => estimate_tokens(text),
                Content::ImageUrl(_) => 0,
            })
            .sum::<usize>();

        info!(
            model = %self.model_name,
            estimated_input_tokens,
            "Requesting summary from provider"
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": to_wire_messages(&prompt),
        });

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            debug!(%status, body = %error_text, "Provider returned an error response");
            return Err(ProviderError::Api(provider_error_message(
                status.as_u16(),
                &error_text,
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(extract_summary(&response_json))
    }
}

#[async_trait]
impl Summarizer for LlmClient {
    async fn summarize(&self, text: &str, max_sentences: u8) -> Result<String, ProviderError> {
        self.generate_summary(build_summary_prompt(text, max_sentences))
            .await
    }

    fn model(&self) -> &str {
        &self.model_name
    }
}

fn to_wire_messages(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter_map(|msg| {
            let role_str = match msg.role {
                MessageRole::system => "system",
                MessageRole::user => "user",
                MessageRole::assistant => "assistant",
                MessageRole::function => "function",
                MessageRole::tool => "tool",
            };

            match &msg.content {
                Content::Text(text) => Some(json!({
                    "role": role_str,
                    "content": text,
                })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}

/// First choice's message content; missing content is an empty summary.
fn extract_summary(response_json: &Value) -> String {
    response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Short, human-readable message for a failed provider response.
///
/// Only `error.message` is lifted out of the provider's error document; its
/// remaining structure is not passed on.
fn provider_error_message(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .map(ToString::to_string)
    });

    match detail {
        Some(message) => format!("status {status}: {message}"),
        None => format!("status {status}"),
    }
}
