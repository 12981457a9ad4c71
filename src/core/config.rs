use std::env;
use std::time::Duration;

use url::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub groq_api_key: String,
    pub groq_model: String,
    pub groq_base_url: Url,
    pub port: u16,
    pub provider_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a message naming the variable that is missing or malformed.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns a message naming the variable that is missing or malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let groq_api_key =
            non_empty("GROQ_API_KEY").ok_or_else(|| "GROQ_API_KEY: not set".to_string())?;

        let groq_model = non_empty("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let groq_base_url = non_empty("GROQ_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let groq_base_url =
            Url::parse(&groq_base_url).map_err(|e| format!("GROQ_BASE_URL: {}", e))?;

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("PORT: {}", e))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match non_empty("PROVIDER_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    format!("PROVIDER_TIMEOUT_SECS: expected a positive integer, got {raw:?}")
                })?,
            None => DEFAULT_PROVIDER_TIMEOUT_SECS,
        };

        Ok(Self {
            groq_api_key,
            groq_model,
            groq_base_url,
            port,
            provider_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
