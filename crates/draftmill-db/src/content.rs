//! Database operations for the `generated_content` table.

use chrono::{DateTime, Utc};
use draftmill_core::{GeneratedContent, NewGeneratedContent, SourceItem};
use serde_json::Value;
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `generated_content` table. Sources are stored as a JSONB
/// array of snapshot objects.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContentRow {
    pub id: i64,
    pub campaign_id: i64,
    pub post_id: Option<i64>,
    pub title: String,
    pub body: String,
    pub meta_description: String,
    pub keywords: String,
    pub sources: Value,
    pub ai_model: String,
    pub word_count: i32,
    pub status: String,
    pub quality_score: i16,
    pub humanization_applied: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl TryFrom<ContentRow> for GeneratedContent {
    type Error = DbError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        let sources: Vec<SourceItem> = serde_json::from_value(row.sources)?;
        Ok(Self {
            id: row.id,
            campaign_id: row.campaign_id,
            post_id: row.post_id,
            title: row.title,
            body: row.body,
            meta_description: row.meta_description,
            keywords: row.keywords,
            sources,
            ai_model: row.ai_model,
            word_count: row.word_count,
            status: row.status,
            quality_score: row.quality_score,
            humanization_applied: row.humanization_applied,
            created_at: row.created_at,
            published_at: row.published_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Insert a new content record with status `draft` and return its id.
///
/// # Errors
///
/// Returns [`DbError::Json`] if the source snapshot cannot be serialized,
/// or [`DbError::Sqlx`] if the insert fails.
pub async fn insert_content(pool: &PgPool, content: &NewGeneratedContent) -> Result<i64, DbError> {
    let sources = serde_json::to_value(&content.sources)?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO generated_content \
             (campaign_id, title, body, meta_description, keywords, sources, \
              ai_model, word_count, quality_score, humanization_applied) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
         RETURNING id",
    )
    .bind(content.campaign_id)
    .bind(&content.title)
    .bind(&content.body)
    .bind(&content.meta_description)
    .bind(&content.keywords)
    .bind(sources)
    .bind(&content.ai_model)
    .bind(content.word_count)
    .bind(content.quality_score)
    .bind(content.humanization_applied)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Fetch one content record by id, or `None` if it does not exist.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails, or [`DbError::Json`] if
/// the stored source snapshot is malformed.
pub async fn get_content(pool: &PgPool, content_id: i64) -> Result<Option<GeneratedContent>, DbError> {
    let row = sqlx::query_as::<_, ContentRow>(
        "SELECT id, campaign_id, post_id, title, body, meta_description, keywords, \
                sources, ai_model, word_count, status, quality_score, \
                humanization_applied, created_at, published_at \
         FROM generated_content \
         WHERE id = $1",
    )
    .bind(content_id)
    .fetch_optional(pool)
    .await?;

    row.map(GeneratedContent::try_from).transpose()
}

/// Transition a content record to `published`, attaching the external
/// document reference.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if the record does not exist, or
/// [`DbError::Sqlx`] if the update fails.
pub async fn mark_published(
    pool: &PgPool,
    content_id: i64,
    post_id: i64,
    at: DateTime<Utc>,
) -> Result<(), DbError> {
    let result = sqlx::query(
        "UPDATE generated_content \
         SET status = 'published', post_id = $2, published_at = $3 \
         WHERE id = $1",
    )
    .bind(content_id)
    .bind(post_id)
    .bind(at)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }
    Ok(())
}
