/// sumarizar - an HTTP endpoint that shortens text with a hosted LLM.
///
/// `POST /sumarizar` accepts `{ "text": ..., "maxSentences"?: ... }`, validates
/// it, forwards it once to the Groq chat completions API and returns the
/// summary with request metadata.
///
/// # Architecture
///
/// The crate is split into:
/// - `core` for configuration, models and payload validation (pure)
/// - `ai` for the `Summarizer` capability and the Groq-backed `LlmClient`
/// - `api` for request handling, the axum router and the Lambda proxy adapter
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use sumarizar::ai::LlmClient;
/// use sumarizar::api::AppState;
/// use sumarizar::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     sumarizar::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let state = AppState::new(Arc::new(LlmClient::from_config(&config)?));
///
///     sumarizar::api::serve(state, config.port).await?;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;

pub use errors::{AppError, ProviderError};

/// Configure structured logging with JSON format.
///
/// Log level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless.
///
/// # Example
///
/// ```
/// // Initialize structured logging at startup
/// sumarizar::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
