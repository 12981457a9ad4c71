//! Structural validation of inbound summarize payloads.
//!
//! Works on an untyped `serde_json::Value` so every violated constraint can be
//! reported at once, instead of stopping at the first deserialization error.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::models::{
    DEFAULT_MAX_SENTENCES, MAX_SENTENCES, MIN_SENTENCES, MIN_TEXT_CHARS, SummarizeRequest,
};

const TEXT_FIELD: &str = "text";
const MAX_SENTENCES_FIELD: &str = "maxSentences";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidType,
    TooSmall,
    TooBig,
    InvalidJson,
}

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    fn at(field: &str, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            path: vec![field.to_string()],
            message: message.into(),
        }
    }

    fn root(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            path: Vec::new(),
            message: message.into(),
        }
    }
}

/// Ordered list of everything wrong with a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid summarize request: {}", describe(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    /// Error for a request body that could not be decoded as JSON at all.
    #[must_use]
    pub fn invalid_json(detail: &str) -> Self {
        Self {
            issues: vec![ValidationIssue::root(
                IssueCode::InvalidJson,
                format!("Malformed JSON body: {detail}"),
            )],
        }
    }

    /// Returns true if any issue points at `field`.
    #[must_use]
    pub fn mentions(&self, field: &str) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.path.first().is_some_and(|p| p == field))
    }
}

fn describe(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| {
            if issue.path.is_empty() {
                issue.message.clone()
            } else {
                format!("{}: {}", issue.path.join("."), issue.message)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a raw payload into a [`SummarizeRequest`].
///
/// Unknown fields are ignored. `maxSentences` falls back to
/// [`DEFAULT_MAX_SENTENCES`] when absent.
///
/// # Errors
///
/// Returns every violated constraint, in field order.
pub fn validate_summarize_request(payload: &Value) -> Result<SummarizeRequest, ValidationError> {
    let Some(fields) = payload.as_object() else {
        return Err(ValidationError {
            issues: vec![ValidationIssue::root(
                IssueCode::InvalidType,
                format!("Expected object, received {}", kind_of(payload)),
            )],
        });
    };

    let mut issues = Vec::new();
    let text = check_text(fields, &mut issues);
    let max_sentences = check_max_sentences(fields, &mut issues);

    match (text, max_sentences) {
        (Some(text), Some(max_sentences)) if issues.is_empty() => Ok(SummarizeRequest {
            text,
            max_sentences,
        }),
        _ => Err(ValidationError { issues }),
    }
}

fn check_text(fields: &Map<String, Value>, issues: &mut Vec<ValidationIssue>) -> Option<String> {
    match fields.get(TEXT_FIELD) {
        None => {
            issues.push(ValidationIssue::at(
                TEXT_FIELD,
                IssueCode::InvalidType,
                "Required",
            ));
            None
        }
        Some(Value::String(text)) if text.chars().count() < MIN_TEXT_CHARS => {
            issues.push(ValidationIssue::at(
                TEXT_FIELD,
                IssueCode::TooSmall,
                format!("Text must be at least {MIN_TEXT_CHARS} characters long"),
            ));
            None
        }
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => {
            issues.push(ValidationIssue::at(
                TEXT_FIELD,
                IssueCode::InvalidType,
                format!("Expected string, received {}", kind_of(other)),
            ));
            None
        }
    }
}

fn check_max_sentences(
    fields: &Map<String, Value>,
    issues: &mut Vec<ValidationIssue>,
) -> Option<u8> {
    let Some(value) = fields.get(MAX_SENTENCES_FIELD) else {
        return Some(DEFAULT_MAX_SENTENCES);
    };

    let Some(n) = as_integer(value) else {
        let received = match value {
            Value::Number(_) => "float",
            other => kind_of(other),
        };
        issues.push(ValidationIssue::at(
            MAX_SENTENCES_FIELD,
            IssueCode::InvalidType,
            format!("Expected integer, received {received}"),
        ));
        return None;
    };

    if n < i64::from(MIN_SENTENCES) {
        issues.push(ValidationIssue::at(
            MAX_SENTENCES_FIELD,
            IssueCode::TooSmall,
            format!("Number must be greater than or equal to {MIN_SENTENCES}"),
        ));
        return None;
    }

    if n > i64::from(MAX_SENTENCES) {
        issues.push(ValidationIssue::at(
            MAX_SENTENCES_FIELD,
            IssueCode::TooBig,
            format!("Number must be less than or equal to {MAX_SENTENCES}"),
        ));
        return None;
    }

    u8::try_from(n).ok()
}

/// Integer value of a JSON number, accepting floats with no fractional part.
fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };

    if let Some(n) = number.as_i64() {
        return Some(n);
    }
    if number.is_u64() {
        return Some(i64::MAX);
    }

    number
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .map(|f| f.clamp(i64::MIN as f64, i64::MAX as f64) as i64)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
