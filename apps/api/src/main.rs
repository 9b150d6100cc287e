mod config;
mod db;
mod errors;
mod extract;
mod identity;
mod llm_client;
mod roast;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::roast::LlmRoaster;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting RoastRank API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite (schema is created idempotently)
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client. A missing key does not stop the service: pages
    // and the leaderboard still work, generation fails fast with a typed error.
    let llm = LlmClient::new(config.openai_api_key.clone());
    if llm.has_key() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("OPENAI_API_KEY not set — roast generation will fail until it is configured");
    }

    let roaster = Arc::new(LlmRoaster::new(llm.clone()));

    let state = AppState {
        db,
        llm,
        roaster,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
