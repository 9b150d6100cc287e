//! Roast Generator and the upload pipeline built around it.

pub mod generator;
pub mod handlers;
pub mod pipeline;
pub mod prompts;

use serde::{Deserialize, Serialize};

pub use generator::{LlmRoaster, Roast, RoastEngine, RoastError};

/// Selects the prompt template and response verbosity.
/// Quick: headline + punchline. Full: headline, overview, detail, punchline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastMode {
    #[default]
    Quick,
    Full,
}

impl RoastMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RoastMode::Quick => "quick",
            RoastMode::Full => "full",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quick" => Some(RoastMode::Quick),
            "full" => Some(RoastMode::Full),
            _ => None,
        }
    }
}
