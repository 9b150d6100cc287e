//! Upload pipeline — extract → resolve identity → duplicate check → generate
//! → persist.
//!
//! Each stage failure maps to its own `AppError` variant and user message.
//! Nothing is persisted unless a fully parsed roast exists, so a failure in
//! any stage leaves the store untouched. The `exists` + `insert` pair is not
//! atomic: two concurrent uploads with the same normalized name can both pass
//! the duplicate check. Accepted limitation for this system's accuracy bar.

use sqlx::SqlitePool;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_text, FileKind};
use crate::identity::resolve_candidate;
use crate::roast::{RoastEngine, RoastMode};
use crate::store::{self, NewRoast, RoastRecord};

/// Terminal outcome of a successful pipeline run.
#[derive(Debug)]
pub enum PipelineOutcome {
    Roasted(RoastRecord),
    Duplicate { candidate_name: String },
}

pub async fn run_pipeline(
    pool: &SqlitePool,
    engine: &dyn RoastEngine,
    filename: &str,
    bytes: &[u8],
    mode: RoastMode,
) -> Result<PipelineOutcome, AppError> {
    let kind = FileKind::from_filename(filename)?;
    let text = extract_text(bytes, kind)?;

    let identity = resolve_candidate(&text);
    if store::exists(pool, &identity.normalized).await? {
        info!(
            "Duplicate upload for '{}' (key '{}'), skipping generation",
            identity.display_name, identity.normalized
        );
        return Ok(PipelineOutcome::Duplicate {
            candidate_name: identity.display_name,
        });
    }

    let roast = engine.generate(&text, mode).await?;

    let id = store::insert(
        pool,
        &NewRoast {
            candidate_name: identity.display_name,
            normalized_name: identity.normalized,
            mode,
            roast,
        },
    )
    .await?;

    let record = store::get(pool, id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("roast {id} vanished after insert"))?;

    info!(
        "Roast persisted: id={}, candidate='{}', score={}",
        record.id, record.candidate_name, record.score
    );
    Ok(PipelineOutcome::Roasted(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::db::create_pool;
    use crate::roast::{Roast, RoastError};

    /// Deterministic engine for pipeline tests — no network.
    struct FixedRoaster {
        score: i64,
    }

    #[async_trait]
    impl RoastEngine for FixedRoaster {
        async fn generate(&self, _text: &str, mode: RoastMode) -> Result<Roast, RoastError> {
            let long = matches!(mode, RoastMode::Full);
            Ok(Roast {
                headline: "A resume with commitment issues.".to_string(),
                overview: long.then(|| "Lots of starts, few landings.".to_string()),
                detail: long.then(|| "Bullet points wander without metrics.".to_string()),
                punchline: Some("Hire them before they reformat again.".to_string()),
                score: self.score,
            })
        }
    }

    struct FailingRoaster;

    #[async_trait]
    impl RoastEngine for FailingRoaster {
        async fn generate(&self, _text: &str, _mode: RoastMode) -> Result<Roast, RoastError> {
            Err(RoastError::GenerationFailed("connection refused".to_string()))
        }
    }

    async fn memory_pool() -> SqlitePool {
        create_pool("sqlite::memory:").await.unwrap()
    }

    const RESUME: &[u8] = b"John Smith\nSenior Engineer\nBuilt things, shipped some of them.\n";

    #[tokio::test]
    async fn test_txt_upload_happy_path() {
        let pool = memory_pool().await;
        let engine = FixedRoaster { score: 77 };

        let outcome = run_pipeline(&pool, &engine, "resume.txt", RESUME, RoastMode::Quick)
            .await
            .unwrap();

        let record = match outcome {
            PipelineOutcome::Roasted(r) => r,
            other => panic!("expected roasted outcome, got {other:?}"),
        };
        assert_eq!(record.candidate_name, "John Smith");
        assert_eq!(record.roast_mode, "quick");
        assert!(!record.headline.is_empty());
        assert!((1..=100).contains(&record.score));
    }

    #[tokio::test]
    async fn test_second_upload_is_duplicate_without_insert() {
        let pool = memory_pool().await;
        let engine = FixedRoaster { score: 60 };

        run_pipeline(&pool, &engine, "resume.txt", RESUME, RoastMode::Quick)
            .await
            .unwrap();
        let outcome = run_pipeline(&pool, &engine, "resume.txt", RESUME, RoastMode::Full)
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            PipelineOutcome::Duplicate { ref candidate_name } if candidate_name == "John Smith"
        ));
        assert_eq!(store::count(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_zero_byte_upload_is_extraction_error_no_insert() {
        let pool = memory_pool().await;
        let engine = FixedRoaster { score: 60 };

        let err = run_pipeline(&pool, &engine, "resume.txt", b"", RoastMode::Quick)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
        assert_eq!(store::count(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_typed_error() {
        let pool = memory_pool().await;
        let engine = FixedRoaster { score: 60 };

        let err = run_pipeline(&pool, &engine, "resume.xlsx", RESUME, RoastMode::Quick)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn test_generation_failure_persists_nothing() {
        let pool = memory_pool().await;

        let err = run_pipeline(&pool, &FailingRoaster, "resume.txt", RESUME, RoastMode::Quick)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Generation(_)));
        assert_eq!(store::count(&pool).await.unwrap(), 0);

        // A later upload of the same resume is NOT a duplicate — nothing was stored.
        let outcome = run_pipeline(
            &pool,
            &FixedRoaster { score: 50 },
            "resume.txt",
            RESUME,
            RoastMode::Quick,
        )
        .await
        .unwrap();
        assert!(matches!(outcome, PipelineOutcome::Roasted(_)));
    }

    #[tokio::test]
    async fn test_anonymous_fallback_flows_through() {
        let pool = memory_pool().await;
        let engine = FixedRoaster { score: 42 };

        let outcome = run_pipeline(
            &pool,
            &engine,
            "resume.txt",
            b"objective: employment\n- did tasks\n",
            RoastMode::Quick,
        )
        .await
        .unwrap();

        match outcome {
            PipelineOutcome::Roasted(r) => {
                assert_eq!(r.candidate_name, "Anonymous");
                assert_eq!(r.normalized_name, "anonymous");
            }
            other => panic!("expected roasted outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_full_mode_persists_all_sections() {
        let pool = memory_pool().await;
        let engine = FixedRoaster { score: 88 };

        let outcome = run_pipeline(&pool, &engine, "resume.txt", RESUME, RoastMode::Full)
            .await
            .unwrap();
        match outcome {
            PipelineOutcome::Roasted(r) => {
                assert_eq!(r.roast_mode, "full");
                assert!(r.overview.is_some());
                assert!(r.detail.is_some());
                assert!(r.punchline.is_some());
            }
            other => panic!("expected roasted outcome, got {other:?}"),
        }
    }
}
