// Sends one fixed prompt straight to the configured provider to confirm the
// API key, base URL and model are usable.

use anyhow::Context;
use sumarizar::ai::LlmClient;
use sumarizar::core::config::AppConfig;
use tracing::{error, info};

const PROBE_TEXT: &str = "Diga 'Conexão direta estabelecida'";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    sumarizar::setup_logging();

    let config = AppConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("failed to load configuration")?;
    let client = LlmClient::from_config(&config).context("failed to build provider client")?;

    info!(
        model = %client.model_name(),
        base_url = %config.groq_base_url,
        "Checking provider connectivity"
    );

    match client.generate_summary(sumarizar::ai::build_summary_prompt(PROBE_TEXT, 1)).await {
        Ok(text) => {
            info!(response = %text, "Provider reachable");
            Ok(())
        }
        Err(e) => {
            error!("Provider check failed: {}", e);
            Err(e.into())
        }
    }
}
