//! Routing for API Gateway / Lambda Function URL proxy events.
//!
//! Handles both payload format 1.0 (`path`, `httpMethod`) and 2.0
//! (`rawPath`, `requestContext.http.method`).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tracing::{error, info};

use super::{handler, helpers};
use crate::ai::{LlmClient, Summarizer};
use crate::core::config::AppConfig;
use crate::core::validation::ValidationError;
use crate::errors::AppError;

const ROUTE: &str = "/sumarizar";

fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"]).or_else(|| v_str(payload, &["path"]))
}

fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

fn is_summarize_route(path: &str) -> bool {
    path.ends_with(ROUTE) || path.ends_with(&format!("{ROUTE}/"))
}

fn extract_body(payload: &Value) -> Result<Vec<u8>, ValidationError> {
    let Some(body) = v_str(payload, &["body"]) else {
        return Ok(Vec::new());
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if encoded {
        STANDARD
            .decode(body)
            .map_err(|e| ValidationError::invalid_json(&format!("invalid base64 body: {e}")))
    } else {
        Ok(body.as_bytes().to_vec())
    }
}

fn error_response(err: &AppError) -> Value {
    helpers::json_response(err.status_code(), &err.to_body())
}

/// Build the provider client from `config` and route the event through it.
///
/// Configuration and client construction failures are answered with the
/// regular 500 envelope.
pub async fn handle_configured_event(
    config: Result<AppConfig, String>,
    payload: &Value,
) -> Value {
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            return error_response(&AppError::Unexpected(format!("Configuration error: {e}")));
        }
    };

    match LlmClient::from_config(&config) {
        Ok(client) => handle_event(&client, payload).await,
        Err(e) => {
            error!("Provider client error: {}", e);
            error_response(&AppError::from(e))
        }
    }
}

/// Route a proxy event and return the proxy response document.
///
/// Events without a recognizable HTTP method are rejected with 405.
pub async fn handle_event(summarizer: &dyn Summarizer, payload: &Value) -> Value {
    let path = request_path(payload).unwrap_or("/");
    let method = request_method(payload);
    info!(raw_path = %path, method = ?method, "Request path");

    if !is_summarize_route(path) {
        return helpers::err_response(404, "Not found");
    }

    if !method.is_some_and(|m| m.eq_ignore_ascii_case("POST")) {
        return helpers::err_response(405, "Method not allowed");
    }

    let body = match extract_body(payload) {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to decode request body: {}", e);
            return error_response(&AppError::from(e));
        }
    };

    let (status, body) = handler::respond(summarizer, &body).await;
    helpers::json_response(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_route_matching() {
        assert!(is_summarize_route("/sumarizar"));
        assert!(is_summarize_route("/sumarizar/"));
        assert!(is_summarize_route("/prod/sumarizar"));
        assert!(!is_summarize_route("/sumarizar/extra"));
        assert!(!is_summarize_route("/"));
    }

    #[test]
    fn test_method_prefers_v2_context() {
        let payload = json!({
            "httpMethod": "GET",
            "requestContext": { "http": { "method": "POST" } }
        });
        assert_eq!(request_method(&payload), Some("POST"));
        assert_eq!(request_method(&json!({ "httpMethod": "PUT" })), Some("PUT"));
    }

    #[test]
    fn test_extract_body_decodes_base64() {
        let payload = json!({ "body": STANDARD.encode(b"{\"a\":1}"), "isBase64Encoded": true });
        assert_eq!(extract_body(&payload).unwrap(), b"{\"a\":1}".to_vec());

        let bad = json!({ "body": "***", "isBase64Encoded": true });
        assert!(extract_body(&bad).is_err());

        assert!(extract_body(&json!({})).unwrap().is_empty());
    }
}
