//! Collaborator seams between the engine and its external dependencies.
//!
//! The scheduler and pipeline are constructed against these traits so the
//! engine can be exercised with in-memory fakes; `draftmill-db`,
//! `draftmill-ollama`, and `draftmill-cms` provide the production
//! implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{BackendError, PublishError, SourceError, StoreError};
use crate::types::{
    ActivityEntry, Campaign, FeedInfo, FetchedItem, GeneratedContent, NewActivityEntry,
    NewDocument, NewGeneratedContent, ResearchSummary, SourceItem,
};

/// Durable storage for campaigns, content, the activity log, and the feed
/// registry.
///
/// All writes are single-record; no multi-record transactions are required.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn list_active_campaigns(&self) -> Result<Vec<Campaign>, StoreError>;

    /// Advance the campaign's last-run timestamp. Must be called only after a
    /// pipeline attempt has concluded, success or failure.
    async fn update_campaign_last_run(
        &self,
        campaign_id: i64,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Insert a new content record with status `draft`, returning its id.
    async fn insert_content(&self, content: &NewGeneratedContent) -> Result<i64, StoreError>;

    async fn get_content(&self, content_id: i64) -> Result<Option<GeneratedContent>, StoreError>;

    /// Transition a content record to `published`, attaching the external
    /// document reference. The only mutation a content record ever sees.
    async fn mark_content_published(
        &self,
        content_id: i64,
        post_id: i64,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Append an activity log entry.
    async fn log_activity(&self, entry: &NewActivityEntry) -> Result<(), StoreError>;

    async fn list_recent_activity(&self, limit: i64) -> Result<Vec<ActivityEntry>, StoreError>;

    async fn list_active_feeds(&self) -> Result<Vec<FeedInfo>, StoreError>;

    async fn record_feed_success(&self, feed_id: i64, item_count: i32) -> Result<(), StoreError>;

    async fn record_feed_error(&self, feed_id: i64, message: &str) -> Result<(), StoreError>;
}

/// The generative-text capability, one method per pipeline task.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Name of the model answering requests, recorded on content records.
    fn model_name(&self) -> &str;

    /// Generate an article body about `topic`, optionally citing `sources`.
    async fn generate_article(
        &self,
        topic: &str,
        article_type: &str,
        word_count: u32,
        sources: &[SourceItem],
    ) -> Result<String, BackendError>;

    /// Generate candidate titles for a finished body, best first.
    async fn generate_titles(
        &self,
        body: &str,
        article_type: &str,
    ) -> Result<Vec<String>, BackendError>;

    async fn generate_meta_description(
        &self,
        body: &str,
        title: &str,
    ) -> Result<String, BackendError>;

    /// Extract up to `count` comma-separated SEO keywords from a body.
    async fn extract_keywords(&self, body: &str, count: usize) -> Result<String, BackendError>;

    /// Rewrite a body to read less machine-generated, preserving content.
    async fn humanize(&self, body: &str) -> Result<String, BackendError>;
}

/// The external content-management surface documents are published to.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Create a document on the target, returning its identifier.
    async fn create_document(&self, document: &NewDocument) -> Result<i64, PublishError>;
}

/// RSS/Atom retrieval, reduced to one fetch-and-parse call per feed URL.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch_items(&self, url: &str) -> Result<Vec<FetchedItem>, SourceError>;
}

/// Optional research capability for general-article campaigns.
///
/// Absence of a result degrades to an empty-source summary downstream; this
/// trait never surfaces errors.
#[async_trait]
pub trait ResearchProvider: Send + Sync {
    async fn research(&self, topic: &str) -> Option<ResearchSummary>;
}
