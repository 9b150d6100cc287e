//! Roast Store — the single `roasts` table and its queries.
//!
//! Records are insert-only: no update or delete paths exist anywhere in the
//! codebase, and `created_at` is set once at insert. The schema is created
//! idempotently when the pool is opened.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::roast::{Roast, RoastMode};

/// A persisted roast, one row of the `roasts` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoastRecord {
    pub id: i64,
    pub candidate_name: String,
    pub normalized_name: String,
    pub roast_mode: String,
    pub headline: String,
    pub overview: Option<String>,
    pub detail: Option<String>,
    pub punchline: Option<String>,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

/// Insert payload: everything except the id and timestamp, which the store assigns.
#[derive(Debug, Clone)]
pub struct NewRoast {
    pub candidate_name: String,
    pub normalized_name: String,
    pub mode: RoastMode,
    pub roast: Roast,
}

/// Creates the `roasts` table and its indexes if absent. Safe to call repeatedly.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS roasts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            candidate_name TEXT NOT NULL,
            normalized_name TEXT NOT NULL,
            roast_mode TEXT NOT NULL,
            headline TEXT NOT NULL,
            overview TEXT,
            detail TEXT,
            punchline TEXT,
            score INTEGER NOT NULL CHECK (score BETWEEN 1 AND 100),
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_roasts_normalized_name ON roasts (normalized_name)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_roasts_score ON roasts (score DESC, created_at ASC)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Duplicate check on the normalized name key. Case-insensitivity comes from
/// the key itself — callers pass keys produced by `identity::normalize_name`.
pub async fn exists(pool: &SqlitePool, normalized_name: &str) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> =
        sqlx::query_as("SELECT id FROM roasts WHERE normalized_name = ?1 LIMIT 1")
            .bind(normalized_name)
            .fetch_optional(pool)
            .await?;
    Ok(row.is_some())
}

/// Appends a record, assigning its id and `created_at`. Returns the new id.
pub async fn insert(pool: &SqlitePool, new: &NewRoast) -> Result<i64, sqlx::Error> {
    let created_at = Utc::now();
    let result = sqlx::query(
        r#"
        INSERT INTO roasts
            (candidate_name, normalized_name, roast_mode, headline,
             overview, detail, punchline, score, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
    )
    .bind(&new.candidate_name)
    .bind(&new.normalized_name)
    .bind(new.mode.as_str())
    .bind(&new.roast.headline)
    .bind(&new.roast.overview)
    .bind(&new.roast.detail)
    .bind(&new.roast.punchline)
    .bind(new.roast.score)
    .bind(created_at)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Fetches a single record by id.
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<RoastRecord>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM roasts WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Top `n` records by score descending. Ties break toward the earlier
/// `created_at`; the trailing `id` makes the ordering total, so the
/// leaderboard is reproducible even for same-instant inserts.
pub async fn top(pool: &SqlitePool, n: i64) -> Result<Vec<RoastRecord>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM roasts ORDER BY score DESC, created_at ASC, id ASC LIMIT ?1")
        .bind(n)
        .fetch_all(pool)
        .await
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM roasts")
        .fetch_one(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    async fn memory_pool() -> SqlitePool {
        create_pool("sqlite::memory:").await.unwrap()
    }

    fn roast(score: i64) -> Roast {
        Roast {
            headline: "Your resume reads like a changelog.".to_string(),
            overview: None,
            detail: None,
            punchline: Some("Ship v2.".to_string()),
            score,
        }
    }

    fn new_roast(name: &str, score: i64) -> NewRoast {
        NewRoast {
            candidate_name: name.to_string(),
            normalized_name: crate::identity::normalize_name(name),
            mode: RoastMode::Quick,
            roast: roast(score),
        }
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let pool = memory_pool().await;
        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_insert_assigns_monotonic_ids() {
        let pool = memory_pool().await;
        let a = insert(&pool, &new_roast("Ada Lovelace", 90)).await.unwrap();
        let b = insert(&pool, &new_roast("Alan Turing", 80)).await.unwrap();
        assert!(b > a);
    }

    #[tokio::test]
    async fn test_exists_is_idempotent() {
        let pool = memory_pool().await;
        assert!(!exists(&pool, "ada lovelace").await.unwrap());
        assert!(!exists(&pool, "ada lovelace").await.unwrap());

        insert(&pool, &new_roast("Ada Lovelace", 90)).await.unwrap();
        assert!(exists(&pool, "ada lovelace").await.unwrap());
        assert!(exists(&pool, "ada lovelace").await.unwrap());
    }

    #[tokio::test]
    async fn test_get_round_trips_fields() {
        let pool = memory_pool().await;
        let id = insert(&pool, &new_roast("Ada Lovelace", 73)).await.unwrap();
        let rec = get(&pool, id).await.unwrap().unwrap();
        assert_eq!(rec.candidate_name, "Ada Lovelace");
        assert_eq!(rec.normalized_name, "ada lovelace");
        assert_eq!(rec.roast_mode, "quick");
        assert_eq!(rec.score, 73);
        assert!(rec.overview.is_none());
    }

    #[tokio::test]
    async fn test_top_orders_by_score_then_insert_order() {
        let pool = memory_pool().await;
        // 90 inserted before the other 90 — must come back first.
        insert(&pool, &new_roast("First Ninety", 90)).await.unwrap();
        insert(&pool, &new_roast("Forty", 40)).await.unwrap();
        insert(&pool, &new_roast("Second Ninety", 90)).await.unwrap();

        let top2 = top(&pool, 2).await.unwrap();
        assert_eq!(top2.len(), 2);
        assert_eq!(top2[0].candidate_name, "First Ninety");
        assert_eq!(top2[1].candidate_name, "Second Ninety");
    }

    #[tokio::test]
    async fn test_top_zero_is_empty() {
        let pool = memory_pool().await;
        insert(&pool, &new_roast("Ada Lovelace", 90)).await.unwrap();
        assert!(top(&pool, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_top_beyond_count_returns_all() {
        let pool = memory_pool().await;
        insert(&pool, &new_roast("Ada Lovelace", 90)).await.unwrap();
        insert(&pool, &new_roast("Alan Turing", 50)).await.unwrap();
        assert_eq!(top(&pool, 50).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_out_of_range_score_rejected_by_schema() {
        let pool = memory_pool().await;
        // The generator clamps before this point; the CHECK constraint is the
        // last line of defense for the score invariant.
        let mut bad = new_roast("Ada Lovelace", 90);
        bad.roast.score = 0;
        assert!(insert(&pool, &bad).await.is_err());

        bad.roast.score = 101;
        assert!(insert(&pool, &bad).await.is_err());
    }

    #[tokio::test]
    async fn test_count_tracks_inserts() {
        let pool = memory_pool().await;
        assert_eq!(count(&pool).await.unwrap(), 0);
        insert(&pool, &new_roast("Ada Lovelace", 90)).await.unwrap();
        assert_eq!(count(&pool).await.unwrap(), 1);
    }
}
