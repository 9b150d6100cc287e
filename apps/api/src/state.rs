use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::roast::RoastEngine;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The database handle is opened once at startup and passed in explicitly;
/// nothing in the codebase reaches for an ambient global connection.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Raw LLM client, used directly only by the `/test-api` diagnostic.
    pub llm: LlmClient,
    /// Pluggable roast generator. Production wires `LlmRoaster`; tests swap in stubs.
    pub roaster: Arc<dyn RoastEngine>,
    pub config: Config,
}
