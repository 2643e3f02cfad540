mod config;
mod errors;
mod gateway;
mod llm_client;
mod models;
mod routes;
mod session;
mod state;
mod workflow;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::gateway::GeminiGateway;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::FileSessionStore;
use crate::state::AppState;
use crate::workflow::Workflow;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting career coach API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.gemini_api_base.clone())?;
    info!(
        "LLM client initialized (models: {}, {})",
        llm_client::PRO_MODEL,
        llm_client::FLASH_MODEL
    );
    let gateway = Arc::new(GeminiGateway::new(llm));

    let store = Arc::new(FileSessionStore::new(config.session_dir.clone()));
    info!("Session record at {}", store.path().display());

    let workflow = Arc::new(Workflow::new(gateway, store));

    // Pick up where the last run left off before accepting requests
    if let Err(e) = workflow.restore().await {
        warn!("Could not restore saved session: {e}");
    }

    let state = AppState { workflow };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
