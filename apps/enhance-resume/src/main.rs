mod config;
mod errors;
mod gateway;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::gateway::templates::PromptTemplates;
use crate::gateway::PromptGateway;
use crate::llm_client::{CompletionClient, GeminiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("enhance_resume={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting enhance-resume v{}", env!("CARGO_PKG_VERSION"));

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; every enhancement request will fail until it is");
    }

    let templates = PromptTemplates::load(config.prompt_templates_path.as_deref())?;
    info!("Prompt templates loaded (version: {})", templates.version);

    let client: Arc<dyn CompletionClient> = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_api_url.clone(),
        config.llm_timeout,
    )?);
    info!(
        "Completion client initialized (timeout: {}s)",
        config.llm_timeout.as_secs()
    );

    let state = AppState {
        gateway: PromptGateway::new(client, templates),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
