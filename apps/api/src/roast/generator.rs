//! Roast Generator — one LLM call per upload, parsed into a structured roast.
//!
//! The generator performs no scoring of its own: the score is whatever
//! integer the model returns, clamped into [1,100] if out of range. Transport
//! failures and unparseable responses surface as distinct typed errors; there
//! is no local fallback roast.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::llm_client::{LlmClient, LlmError};
use crate::roast::prompts::{ROAST_FULL_SYSTEM, ROAST_PROMPT_TEMPLATE, ROAST_QUICK_SYSTEM};
use crate::roast::RoastMode;

/// Safety cap on resume text sent to the model.
const MAX_RESUME_CHARS: usize = 15_000;

pub const MIN_SCORE: i64 = 1;
pub const MAX_SCORE: i64 = 100;

#[derive(Debug, Error)]
pub enum RoastError {
    #[error("generation failed: {0}")]
    GenerationFailed(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<LlmError> for RoastError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Parse(_) | LlmError::EmptyContent => {
                RoastError::MalformedResponse(e.to_string())
            }
            other => RoastError::GenerationFailed(other.to_string()),
        }
    }
}

/// A fully parsed roast, ready to persist.
/// Quick mode leaves `overview` and `detail` as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roast {
    pub headline: String,
    pub overview: Option<String>,
    pub detail: Option<String>,
    pub punchline: Option<String>,
    pub score: i64,
}

/// Raw response shape as returned by the model, before mode validation.
#[derive(Debug, Deserialize)]
struct RoastPayload {
    score: i64,
    #[serde(default)]
    headline: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    punchline: Option<String>,
}

impl Roast {
    /// Validates a raw payload against the requested mode.
    /// Missing required fields are a `MalformedResponse`, not a fallback.
    fn from_payload(payload: RoastPayload, mode: RoastMode) -> Result<Self, RoastError> {
        let headline = required_field(payload.headline, "headline")?;
        let punchline = required_field(payload.punchline, "punchline")?;

        let (overview, detail) = match mode {
            RoastMode::Quick => (None, None),
            RoastMode::Full => (
                Some(required_field(payload.overview, "overview")?),
                Some(required_field(payload.detail, "detail")?),
            ),
        };

        Ok(Roast {
            headline,
            overview,
            detail,
            punchline: Some(punchline),
            score: payload.score.clamp(MIN_SCORE, MAX_SCORE),
        })
    }
}

fn required_field(value: Option<String>, name: &str) -> Result<String, RoastError> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| RoastError::MalformedResponse(format!("missing field '{name}'")))
}

/// The roast engine seam. `AppState` carries an `Arc<dyn RoastEngine>` so the
/// upload pipeline can be exercised in tests without a network call.
#[async_trait]
pub trait RoastEngine: Send + Sync {
    async fn generate(&self, resume_text: &str, mode: RoastMode) -> Result<Roast, RoastError>;
}

/// Production engine: one chat-completions call through `LlmClient`.
pub struct LlmRoaster {
    llm: LlmClient,
}

impl LlmRoaster {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl RoastEngine for LlmRoaster {
    async fn generate(&self, resume_text: &str, mode: RoastMode) -> Result<Roast, RoastError> {
        let capped: String = resume_text.chars().take(MAX_RESUME_CHARS).collect();
        let prompt = ROAST_PROMPT_TEMPLATE.replace("{resume_text}", &capped);
        let system = match mode {
            RoastMode::Quick => ROAST_QUICK_SYSTEM,
            RoastMode::Full => ROAST_FULL_SYSTEM,
        };

        let payload: RoastPayload = self.llm.call_json(&prompt, system).await?;
        let roast = Roast::from_payload(payload, mode)?;

        info!(
            "Roast generated (mode: {}, score: {})",
            mode.as_str(),
            roast.score
        );
        Ok(roast)
    }
}
