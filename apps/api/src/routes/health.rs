use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;
use crate::store;

/// GET /health
/// Returns a simple status object with service version and stored roast count.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let roasts = store::count(&state.db).await?;
    Ok(Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "roastrank-api",
        "roasts": roasts,
    })))
}
