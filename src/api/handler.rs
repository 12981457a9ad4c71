//! Summarize request handling, independent of the HTTP framework.
//!
//! Flow: decode body -> validate -> forward to the [`Summarizer`] -> map the
//! outcome to a status code and JSON body. Both the axum server and the
//! Lambda entry point go through [`respond`].

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use serde_json::Value;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use crate::ai::Summarizer;
use crate::core::models::{SummarizeResponse, SummaryMeta};
use crate::core::validation::{ValidationError, validate_summarize_request};
use crate::errors::AppError;

/// Validate `payload` and forward it to `summarizer`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] before any provider call if the payload
/// is invalid, or [`AppError::Provider`] if the single provider attempt fails.
pub async fn summarize(
    summarizer: &dyn Summarizer,
    payload: &Value,
) -> Result<SummarizeResponse, AppError> {
    let request = validate_summarize_request(payload)?;
    let characters = request.characters();

    info!(
        characters,
        max_sentences = request.max_sentences,
        "Forwarding summarize request"
    );

    let summary = summarizer
        .summarize(&request.text, request.max_sentences)
        .await?;

    if summary.is_empty() {
        warn!("Provider returned an empty summary");
    }

    Ok(SummarizeResponse {
        summary,
        meta: SummaryMeta {
            max_sentences: request.max_sentences,
            model: summarizer.model().to_string(),
            characters,
        },
    })
}

/// Decode a raw request body into JSON.
///
/// An empty body is treated as an empty object.
///
/// # Errors
///
/// Returns a single `invalid_json` issue if the body is not valid JSON.
pub fn parse_body(body: &[u8]) -> Result<Value, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(body).map_err(|e| ValidationError::invalid_json(&e.to_string()))
}

/// Handle one summarize request end to end and return `(status, body)`.
///
/// A panic raised while summarizing is caught and reported like any other
/// server-side failure.
pub async fn respond(summarizer: &dyn Summarizer, body: &[u8]) -> (u16, Value) {
    let request_id = Uuid::new_v4();
    let span = info_span!("summarize", %request_id);

    async move {
        let outcome = match parse_body(body) {
            Ok(payload) => AssertUnwindSafe(summarize(summarizer, &payload))
                .catch_unwind()
                .await
                .unwrap_or_else(|cause| Err(AppError::Unexpected(panic_message(&*cause)))),
            Err(e) => Err(AppError::from(e)),
        };

        match outcome {
            Ok(response) => {
                info!(summary_chars = response.summary.chars().count(), "Summary generated");
                match serde_json::to_value(&response) {
                    Ok(json) => (200, json),
                    Err(e) => error_response(&AppError::Unexpected(e.to_string())),
                }
            }
            Err(e) => error_response(&e),
        }
    }
    .instrument(span)
    .await
}

fn error_response(err: &AppError) -> (u16, Value) {
    match err {
        AppError::Validation(v) => {
            warn!(issues = v.issues.len(), "Rejected summarize request: {}", v);
        }
        AppError::Provider(_) | AppError::Unexpected(_) => {
            error!("Summarize request failed: {}", err);
        }
    }
    (err.status_code(), err.to_body())
}

fn panic_message(cause: &(dyn std::any::Any + Send)) -> String {
    cause
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| cause.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "summarizer panicked".to_string())
}
