use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::store;

/// Creates the SQLite connection pool and ensures the schema exists.
///
/// The pool is capped at a single connection: SQLite is single-writer, and
/// funneling every query through one connection serializes concurrent inserts
/// without any locking of our own. WAL mode plus a busy timeout covers the
/// file-backed case where another process holds the database.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Opening SQLite database at {database_url}");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    store::init_schema(&pool).await?;

    info!("SQLite pool established, schema ready");
    Ok(pool)
}
