//! Database module for corkboard.
//!
//! This module provides SQLite connectivity, migration management, and the
//! startup seed routine.

pub mod schema;
pub mod seed;

pub use schema::MIGRATIONS;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::{CorkboardError, Result};

/// Connection pool type used throughout the crate.
pub type DbPool = SqlitePool;

/// Open a connection pool for the database at the specified path.
///
/// If the database file doesn't exist, it will be created.
/// Migrations are automatically applied.
pub async fn connect(path: impl AsRef<Path>) -> Result<DbPool> {
    let path = path.as_ref();
    info!("Opening database at {:?}", path);

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        // WAL mode for better concurrent read performance
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| CorkboardError::DatabaseConnection(e.to_string()))?;

    migrate(&pool).await?;

    Ok(pool)
}

/// Open an in-memory database pool for testing.
///
/// The pool is capped at a single connection so every query sees the same
/// in-memory database.
pub async fn connect_in_memory() -> Result<DbPool> {
    debug!("Opening in-memory database");

    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|e| CorkboardError::DatabaseConnection(e.to_string()))?
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|e| CorkboardError::DatabaseConnection(e.to_string()))?;

    migrate(&pool).await?;

    Ok(pool)
}

/// Get the current schema version.
pub async fn schema_version(pool: &DbPool) -> Result<i64> {
    let table_exists: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_version')",
    )
    .fetch_one(pool)
    .await?;

    if !table_exists {
        return Ok(0);
    }

    let version: i64 = sqlx::query_scalar("SELECT COALESCE(MAX(version), 0) FROM schema_version")
        .fetch_one(pool)
        .await?;

    Ok(version)
}

/// Apply pending migrations.
pub async fn migrate(pool: &DbPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (datetime('now'))
        )",
    )
    .execute(pool)
    .await?;

    let current_version = schema_version(pool).await?;

    for (i, migration) in MIGRATIONS.iter().enumerate() {
        let version = (i as i64) + 1;
        if version <= current_version {
            continue;
        }

        debug!("Applying migration v{}", version);
        let mut tx = pool.begin().await?;
        sqlx::raw_sql(migration).execute(&mut *tx).await?;
        sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
            .bind(version)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
    }

    info!("Database schema at version {}", MIGRATIONS.len());
    Ok(())
}
