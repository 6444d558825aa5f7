//! Database operations for the append-only `activity_log` table.

use chrono::{DateTime, Utc};
use draftmill_core::{ActivityEntry, NewActivityEntry};
use serde_json::Value;
use sqlx::PgPool;

use crate::DbError;

/// A row from the `activity_log` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityRow {
    pub id: i64,
    pub campaign_id: i64,
    pub action: String,
    pub status: String,
    pub message: String,
    pub data: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl From<ActivityRow> for ActivityEntry {
    fn from(row: ActivityRow) -> Self {
        Self {
            id: row.id,
            campaign_id: row.campaign_id,
            action: row.action,
            status: row.status,
            message: row.message,
            data: row.data,
            created_at: row.created_at,
        }
    }
}

/// Append an activity entry.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_activity(pool: &PgPool, entry: &NewActivityEntry) -> Result<i64, DbError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO activity_log (campaign_id, action, status, message, data) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id",
    )
    .bind(entry.campaign_id)
    .bind(&entry.action)
    .bind(entry.status.as_str())
    .bind(&entry.message)
    .bind(&entry.data)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// List the most recent activity entries, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<ActivityRow>, DbError> {
    let rows = sqlx::query_as::<_, ActivityRow>(
        "SELECT id, campaign_id, action, status, message, data, created_at \
         FROM activity_log \
         ORDER BY created_at DESC, id DESC \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
