// Lambda entry point for the summarize endpoint behind API Gateway or a
// Function URL.

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use sumarizar::api::gateway;
use sumarizar::core::config::AppConfig;

async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(gateway::handle_configured_event(AppConfig::from_env(), &event.payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    sumarizar::setup_logging();
    run(service_fn(function_handler)).await
}
