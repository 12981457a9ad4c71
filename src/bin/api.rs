use std::sync::Arc;

use sumarizar::ai::{LlmClient, Summarizer};
use sumarizar::api::AppState;
use sumarizar::core::config::AppConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    sumarizar::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        anyhow::anyhow!(e)
    })?;

    let client = LlmClient::from_config(&config).map_err(|e| {
        error!("Provider client error: {}", e);
        anyhow::Error::from(e)
    })?;
    info!(model = %client.model(), port = config.port, "Starting summarize API");

    sumarizar::api::serve(AppState::new(Arc::new(client)), config.port).await?;
    Ok(())
}
