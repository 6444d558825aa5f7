//! [`ContentStore`] implementation backed by the Postgres pool.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use draftmill_core::{
    ActivityEntry, Campaign, ContentStore, FeedInfo, GeneratedContent, NewActivityEntry,
    NewGeneratedContent, StoreError,
};
use sqlx::PgPool;

use crate::{activity, campaigns, content, feeds};

/// The production store. Cheap to clone; wraps the shared pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ContentStore for PgStore {
    async fn list_active_campaigns(&self) -> Result<Vec<Campaign>, StoreError> {
        let rows = campaigns::list_active_campaigns(&self.pool).await?;
        Ok(rows.into_iter().map(Campaign::from).collect())
    }

    async fn update_campaign_last_run(
        &self,
        campaign_id: i64,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        campaigns::update_last_run(&self.pool, campaign_id, at).await?;
        Ok(())
    }

    async fn insert_content(&self, new_content: &NewGeneratedContent) -> Result<i64, StoreError> {
        let id = content::insert_content(&self.pool, new_content).await?;
        Ok(id)
    }

    async fn get_content(&self, content_id: i64) -> Result<Option<GeneratedContent>, StoreError> {
        let record = content::get_content(&self.pool, content_id).await?;
        Ok(record)
    }

    async fn mark_content_published(
        &self,
        content_id: i64,
        post_id: i64,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        content::mark_published(&self.pool, content_id, post_id, at).await?;
        Ok(())
    }

    async fn log_activity(&self, entry: &NewActivityEntry) -> Result<(), StoreError> {
        activity::insert_activity(&self.pool, entry).await?;
        Ok(())
    }

    async fn list_recent_activity(&self, limit: i64) -> Result<Vec<ActivityEntry>, StoreError> {
        let rows = activity::list_recent(&self.pool, limit).await?;
        Ok(rows.into_iter().map(ActivityEntry::from).collect())
    }

    async fn list_active_feeds(&self) -> Result<Vec<FeedInfo>, StoreError> {
        let rows = feeds::list_active(&self.pool).await?;
        Ok(rows.into_iter().map(FeedInfo::from).collect())
    }

    async fn record_feed_success(&self, feed_id: i64, item_count: i32) -> Result<(), StoreError> {
        feeds::record_success(&self.pool, feed_id, item_count).await?;
        Ok(())
    }

    async fn record_feed_error(&self, feed_id: i64, message: &str) -> Result<(), StoreError> {
        feeds::record_error(&self.pool, feed_id, message).await?;
        Ok(())
    }
}
