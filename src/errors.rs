use serde_json::{Value, json};
use thiserror::Error;

use crate::core::validation::ValidationError;

/// Label sent in the `error` field of every 500 response.
pub const INTERNAL_ERROR_LABEL: &str = "Internal server error";

/// Failure while talking to the summarization provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to reach summarization provider: {0}")]
    Http(String),

    #[error("Summarization provider returned an error: {0}")]
    Api(String),

    #[error("Failed to parse summarization provider response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        ProviderError::Http(error.to_string())
    }
}

/// Everything that can end a summarize request early.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl AppError {
    /// HTTP status code the error maps to.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) => 400,
            AppError::Provider(_) | AppError::Unexpected(_) => 500,
        }
    }

    /// JSON body sent back to the caller.
    ///
    /// Validation failures carry the full issue list; every other failure is
    /// reported with a generic label plus the error's message.
    #[must_use]
    pub fn to_body(&self) -> Value {
        match self {
            AppError::Validation(e) => json!({ "error": e.issues }),
            AppError::Provider(_) | AppError::Unexpected(_) => json!({
                "error": INTERNAL_ERROR_LABEL,
                "message": self.to_string(),
            }),
        }
    }
}
