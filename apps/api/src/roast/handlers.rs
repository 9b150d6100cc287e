//! HTTP handlers for the roast pipeline and leaderboard.

use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use bytes::Bytes;
use serde_json::{json, Value};
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client;
use crate::roast::pipeline::{run_pipeline, PipelineOutcome};
use crate::roast::RoastMode;
use crate::routes::pages;
use crate::state::AppState;
use crate::store;

/// How many records the leaderboard shows.
const LEADERBOARD_LIMIT: i64 = 50;

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(pages::index_page())
}

/// POST /upload — multipart form with a `file` field and an optional `mode`
/// field (defaults to quick).
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut mode = RoastMode::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
                file = Some((filename, data));
            }
            "mode" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read mode: {e}")))?;
                mode = RoastMode::parse(&value)
                    .ok_or_else(|| AppError::Validation(format!("unknown roast mode '{value}'")))?;
            }
            _ => {}
        }
    }

    let (filename, data) =
        file.ok_or_else(|| AppError::Validation("missing 'file' field".to_string()))?;

    match run_pipeline(&state.db, state.roaster.as_ref(), &filename, &data, mode).await? {
        PipelineOutcome::Roasted(record) => Ok(Html(pages::result_page(&record))),
        PipelineOutcome::Duplicate { candidate_name } => {
            Ok(Html(pages::duplicate_page(&candidate_name)))
        }
    }
}

/// GET /leaderboard
pub async fn handle_leaderboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let records = store::top(&state.db, LEADERBOARD_LIMIT).await?;
    Ok(Html(pages::leaderboard_page(&records)))
}

/// GET /test-api — diagnostic connectivity check against the LLM service.
/// Not part of the core pipeline; returns the failure category on error.
pub async fn handle_test_api(State(state): State<AppState>) -> Json<Value> {
    match state
        .llm
        .call("Say hi in five words.", "You are a connectivity test bot. Respond with JSON: {\"hi\": str}.")
        .await
    {
        Ok(response) => Json(json!({
            "ok": true,
            "model": llm_client::MODEL,
            "reply": response.text().unwrap_or_default(),
        })),
        Err(e) => {
            warn!("LLM connectivity check failed: {e}");
            Json(json!({
                "ok": false,
                "model": llm_client::MODEL,
                "error": e.to_string(),
            }))
        }
    }
}
