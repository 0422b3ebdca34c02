//! Startup seed data for corkboard.

use tracing::{debug, info};

use super::DbPool;
use crate::datetime::now_utc;
use crate::Result;

/// Static seed rows inserted into an empty boards table.
const SEED_BOARDS: &[(&str, &str)] = &[
    ("Title 1", "Content 1"),
    ("Title 2", "Content 2"),
    ("Title 3", "Content 3"),
];

/// Insert the seed boards.
///
/// Runs once at process start. Skips seeding when the boards table already
/// contains rows, so restarts do not duplicate the data.
pub async fn apply(pool: &DbPool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        debug!("Boards table already has {} rows, skipping seed", count);
        return Ok(());
    }

    let now = now_utc();
    let mut tx = pool.begin().await?;
    for (title, content) in SEED_BOARDS {
        sqlx::query(
            "INSERT INTO boards (title, content, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(title)
        .bind(content)
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    info!("Seeded {} boards", SEED_BOARDS.len());
    Ok(())
}
