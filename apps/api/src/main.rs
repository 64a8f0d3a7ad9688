mod config;
mod corpus;
mod errors;
mod llm_client;
mod matching;
mod models;
mod narrative;
mod recommendation;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::corpus::JobCorpus;
use crate::llm_client::AnthropicClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting DevPath API v{}", env!("CARGO_PKG_VERSION"));

    // Load the job corpus. A corpus that fails to load is fatal: refuse to
    // start rather than serve demo data.
    let corpus = Arc::new(JobCorpus::load(&config.job_data_path)?);
    info!(
        "Job corpus loaded: {} postings from {}",
        corpus.len(),
        config.job_data_path
    );

    // Initialize the narrative provider client
    let provider = Arc::new(AnthropicClient::new(
        config.anthropic_api_key.clone(),
        config.provider_timeout(),
    ));
    info!("Provider client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        corpus,
        provider,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
