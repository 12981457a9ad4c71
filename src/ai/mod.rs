//! All AI/LLM functionality

pub mod client;
pub mod prompt_builder;
pub mod provider;

// Re-export main types for convenience
pub use client::LlmClient;
pub use prompt_builder::{build_summary_prompt, estimate_tokens};
pub use provider::Summarizer;
