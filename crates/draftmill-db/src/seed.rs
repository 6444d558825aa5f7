//! Seed the feed registry from the feeds YAML file.

use draftmill_core::feeds::FeedConfig;
use sqlx::PgPool;

use crate::DbError;

/// Insert any feeds not already present, keyed by URL. Existing feeds are
/// left untouched, including their active flag and health columns.
///
/// Returns the number of feeds inserted. Runs in one transaction so a
/// partial seed never persists.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any statement fails.
pub async fn seed_feeds(pool: &PgPool, feeds: &[FeedConfig]) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0_usize;

    for feed in feeds {
        let result = sqlx::query(
            "INSERT INTO rss_feeds (name, url, category) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (url) DO NOTHING",
        )
        .bind(&feed.name)
        .bind(&feed.url)
        .bind(&feed.category)
        .execute(&mut *tx)
        .await?;

        inserted += usize::try_from(result.rows_affected()).unwrap_or(0);
    }

    tx.commit().await?;

    tracing::info!(inserted, total = feeds.len(), "seed: feed registry updated");
    Ok(inserted)
}
