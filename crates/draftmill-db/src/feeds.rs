//! Database operations for the `rss_feeds` registry.

use chrono::{DateTime, Utc};
use draftmill_core::FeedInfo;
use sqlx::PgPool;

use crate::DbError;

/// A row from the `rss_feeds` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FeedRow {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub category: Option<String>,
    pub active: bool,
    pub last_fetched_at: Option<DateTime<Utc>>,
    pub last_item_count: i32,
    pub last_error: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<FeedRow> for FeedInfo {
    fn from(row: FeedRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            url: row.url,
        }
    }
}

/// List active feeds in insertion order. Aggregation visits feeds in this
/// order, which also breaks ties between equally-dated items.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_active(pool: &PgPool) -> Result<Vec<FeedRow>, DbError> {
    let rows = sqlx::query_as::<_, FeedRow>(
        "SELECT id, name, url, category, active, last_fetched_at, last_item_count, \
                last_error, created_at \
         FROM rss_feeds \
         WHERE active = TRUE \
         ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// List all feeds, active or not.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<FeedRow>, DbError> {
    let rows = sqlx::query_as::<_, FeedRow>(
        "SELECT id, name, url, category, active, last_fetched_at, last_item_count, \
                last_error, created_at \
         FROM rss_feeds \
         ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Record a successful fetch: timestamp, item count, and a cleared error.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if the feed does not exist, or
/// [`DbError::Sqlx`] if the update fails.
pub async fn record_success(pool: &PgPool, feed_id: i64, item_count: i32) -> Result<(), DbError> {
    let result = sqlx::query(
        "UPDATE rss_feeds \
         SET last_fetched_at = now(), last_item_count = $2, last_error = NULL \
         WHERE id = $1",
    )
    .bind(feed_id)
    .bind(item_count)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }
    Ok(())
}

/// Record a failed fetch. The previous item count is kept.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if the feed does not exist, or
/// [`DbError::Sqlx`] if the update fails.
pub async fn record_error(pool: &PgPool, feed_id: i64, message: &str) -> Result<(), DbError> {
    let result = sqlx::query(
        "UPDATE rss_feeds \
         SET last_fetched_at = now(), last_error = $2 \
         WHERE id = $1",
    )
    .bind(feed_id)
    .bind(message)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }
    Ok(())
}
