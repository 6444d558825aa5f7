//! Database operations for the `campaigns` table.

use chrono::{DateTime, Utc};
use draftmill_core::Campaign;
use serde_json::Value;
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `campaigns` table. Keywords are stored as a
/// comma-separated list.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CampaignRow {
    pub id: i64,
    pub name: String,
    pub campaign_type: String,
    pub keywords: String,
    pub frequency: String,
    pub settings: Value,
    pub status: String,
    pub last_run_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<CampaignRow> for Campaign {
    fn from(row: CampaignRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            campaign_type: row.campaign_type,
            keywords: split_keywords(&row.keywords),
            frequency: row.frequency,
            settings: row.settings,
            status: row.status,
            last_run_at: row.last_run_at,
            created_at: row.created_at,
        }
    }
}

/// Split a stored comma-separated keyword list, dropping blank entries.
#[must_use]
pub fn split_keywords(stored: &str) -> Vec<String> {
    stored
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Join keywords back into the stored comma-separated form.
#[must_use]
pub fn join_keywords(keywords: &[String]) -> String {
    keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Insert a new campaign and return its generated id.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_campaign(
    pool: &PgPool,
    name: &str,
    campaign_type: &str,
    keywords: &[String],
    frequency: &str,
    settings: Value,
) -> Result<i64, DbError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO campaigns (name, campaign_type, keywords, frequency, settings) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id",
    )
    .bind(name)
    .bind(campaign_type)
    .bind(join_keywords(keywords))
    .bind(frequency)
    .bind(settings)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// List all campaigns, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_campaigns(pool: &PgPool) -> Result<Vec<CampaignRow>, DbError> {
    let rows = sqlx::query_as::<_, CampaignRow>(
        "SELECT id, name, campaign_type, keywords, frequency, settings, status, \
                last_run_at, created_at \
         FROM campaigns \
         ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// List campaigns with status `active`, oldest first so long-waiting
/// campaigns run earliest within a tick.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_active_campaigns(pool: &PgPool) -> Result<Vec<CampaignRow>, DbError> {
    let rows = sqlx::query_as::<_, CampaignRow>(
        "SELECT id, name, campaign_type, keywords, frequency, settings, status, \
                last_run_at, created_at \
         FROM campaigns \
         WHERE status = 'active' \
         ORDER BY last_run_at ASC NULLS FIRST, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Advance a campaign's last-run timestamp.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if the campaign does not exist, or
/// [`DbError::Sqlx`] if the update fails.
pub async fn update_last_run(
    pool: &PgPool,
    campaign_id: i64,
    at: DateTime<Utc>,
) -> Result<(), DbError> {
    let result = sqlx::query("UPDATE campaigns SET last_run_at = $2 WHERE id = $1")
        .bind(campaign_id)
        .bind(at)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }
    Ok(())
}

/// Set a campaign's status (`active` or `paused`).
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if the campaign does not exist, or
/// [`DbError::Sqlx`] if the update fails.
pub async fn set_status(pool: &PgPool, campaign_id: i64, status: &str) -> Result<(), DbError> {
    let result = sqlx::query("UPDATE campaigns SET status = $2 WHERE id = $1")
        .bind(campaign_id)
        .bind(status)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }
    Ok(())
}
