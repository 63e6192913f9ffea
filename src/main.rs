use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use qa_backend::config::Config;
use qa_backend::routes;
use qa_backend::services::completion::OpenAiClient;
use qa_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qa_backend=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    if config.api_key.is_none() {
        error!("OpenAI API key is not set. Please add it to your .env file.");
    }

    let client = OpenAiClient::new(&config).context("failed to create completion client")?;
    let state = Arc::new(AppState::new(Arc::new(client)));

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, model = %config.model, "Question service listening");
    axum::serve(listener, app).await?;
    Ok(())
}
