use std::error::Error;

use ai_chat_service::telemetry;
use api;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file.
    // Fails if .env file not found, not readable or invalid.
    dotenvy::dotenv()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,ai_chat_service=info"))
        .unwrap();

    tracing_subscriber::registry()
        .with(filter)
        .with(telemetry::layer())
        .init();

    api::start().await?;

    Ok(())
}
