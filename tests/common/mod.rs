#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use sumarizar::ProviderError;
use sumarizar::ai::Summarizer;

pub const STUB_MODEL: &str = "stub-model";

/// 60 ASCII characters.
pub const LOREM_60: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit sed.";

pub enum Behavior {
    Reply(String),
    Fail(String),
    Panic,
}

/// Deterministic summarizer that records every call it receives.
pub struct StubSummarizer {
    behavior: Behavior,
    calls: Mutex<Vec<(String, u8)>>,
}

impl StubSummarizer {
    pub fn replying(summary: &str) -> Self {
        Self::with(Behavior::Reply(summary.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::with(Behavior::Fail(message.to_string()))
    }

    pub fn panicking() -> Self {
        Self::with(Behavior::Panic)
    }

    fn with(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, u8)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, text: &str, max_sentences: u8) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), max_sentences));

        match &self.behavior {
            Behavior::Reply(summary) => Ok(summary.clone()),
            Behavior::Fail(message) => Err(ProviderError::Http(message.clone())),
            Behavior::Panic => panic!("stub exploded"),
        }
    }

    fn model(&self) -> &str {
        STUB_MODEL
    }
}
