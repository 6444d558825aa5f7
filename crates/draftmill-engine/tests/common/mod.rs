//! In-memory fakes for exercising the engine without external services.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use draftmill_core::{
    ActivityEntry, BackendError, Campaign, ContentStore, FeedFetcher, FeedInfo, FetchedItem,
    GeneratedContent, GenerationBackend, NewActivityEntry, NewDocument, NewGeneratedContent,
    PublishError, Publisher, ResearchProvider, ResearchSummary, SourceError, SourceItem,
    StoreError,
};

pub fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap()
}

pub fn campaign(id: i64, campaign_type: &str, settings: serde_json::Value) -> Campaign {
    Campaign {
        id,
        name: format!("campaign-{id}"),
        campaign_type: campaign_type.to_string(),
        keywords: vec!["solar".to_string()],
        frequency: "hourly".to_string(),
        settings,
        status: "active".to_string(),
        last_run_at: None,
        created_at: at(0),
    }
}

#[derive(Default)]
struct StoreState {
    campaigns: Vec<Campaign>,
    content: Vec<GeneratedContent>,
    activity: Vec<ActivityEntry>,
    feeds: Vec<FeedInfo>,
    feed_successes: Vec<(i64, i32)>,
    feed_errors: Vec<(i64, String)>,
    next_id: i64,
}

/// In-memory [`ContentStore`].
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<StoreState>,
}

impl MemoryStore {
    pub fn with_campaigns(campaigns: Vec<Campaign>) -> Self {
        let store = Self::default();
        store.state.lock().unwrap().campaigns = campaigns;
        store
    }

    pub fn add_feed(&self, id: i64, name: &str, url: &str) {
        self.state.lock().unwrap().feeds.push(FeedInfo {
            id,
            name: name.to_string(),
            url: url.to_string(),
        });
    }

    pub fn content(&self) -> Vec<GeneratedContent> {
        self.state.lock().unwrap().content.clone()
    }

    pub fn activity(&self) -> Vec<ActivityEntry> {
        self.state.lock().unwrap().activity.clone()
    }

    pub fn campaigns(&self) -> Vec<Campaign> {
        self.state.lock().unwrap().campaigns.clone()
    }

    pub fn feed_successes(&self) -> Vec<(i64, i32)> {
        self.state.lock().unwrap().feed_successes.clone()
    }

    pub fn feed_errors(&self) -> Vec<(i64, String)> {
        self.state.lock().unwrap().feed_errors.clone()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn list_active_campaigns(&self) -> Result<Vec<Campaign>, StoreError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .campaigns
            .iter()
            .filter(|c| c.status == "active")
            .cloned()
            .collect())
    }

    async fn update_campaign_last_run(
        &self,
        campaign_id: i64,
        atime: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        let campaign = state
            .campaigns
            .iter_mut()
            .find(|c| c.id == campaign_id)
            .ok_or(StoreError::NotFound)?;
        campaign.last_run_at = Some(atime);
        Ok(())
    }

    async fn insert_content(&self, content: &NewGeneratedContent) -> Result<i64, StoreError> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        state.content.push(GeneratedContent {
            id,
            campaign_id: content.campaign_id,
            post_id: None,
            title: content.title.clone(),
            body: content.body.clone(),
            meta_description: content.meta_description.clone(),
            keywords: content.keywords.clone(),
            sources: content.sources.clone(),
            ai_model: content.ai_model.clone(),
            word_count: content.word_count,
            status: "draft".to_string(),
            quality_score: content.quality_score,
            humanization_applied: content.humanization_applied,
            created_at: Utc::now(),
            published_at: None,
        });
        Ok(id)
    }

    async fn get_content(&self, content_id: i64) -> Result<Option<GeneratedContent>, StoreError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .content
            .iter()
            .find(|c| c.id == content_id)
            .cloned())
    }

    async fn mark_content_published(
        &self,
        content_id: i64,
        post_id: i64,
        atime: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        let content = state
            .content
            .iter_mut()
            .find(|c| c.id == content_id)
            .ok_or(StoreError::NotFound)?;
        content.post_id = Some(post_id);
        content.status = "published".to_string();
        content.published_at = Some(atime);
        Ok(())
    }

    async fn log_activity(&self, entry: &NewActivityEntry) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        state.activity.push(ActivityEntry {
            id,
            campaign_id: entry.campaign_id,
            action: entry.action.clone(),
            status: entry.status.as_str().to_string(),
            message: entry.message.clone(),
            data: entry.data.clone(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn list_recent_activity(&self, limit: i64) -> Result<Vec<ActivityEntry>, StoreError> {
        let state = self.state.lock().unwrap();
        let mut entries = state.activity.clone();
        entries.reverse();
        entries.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(entries)
    }

    async fn list_active_feeds(&self) -> Result<Vec<FeedInfo>, StoreError> {
        Ok(self.state.lock().unwrap().feeds.clone())
    }

    async fn record_feed_success(&self, feed_id: i64, item_count: i32) -> Result<(), StoreError> {
        self.state
            .lock()
            .unwrap()
            .feed_successes
            .push((feed_id, item_count));
        Ok(())
    }

    async fn record_feed_error(&self, feed_id: i64, message: &str) -> Result<(), StoreError> {
        self.state
            .lock()
            .unwrap()
            .feed_errors
            .push((feed_id, message.to_string()));
        Ok(())
    }
}

/// Scripted [`GenerationBackend`]. A `None` script entry makes that call
/// fail; every call is recorded so tests can assert what ran.
pub struct MockBackend {
    pub model: String,
    pub article: Option<String>,
    pub titles: Vec<String>,
    pub meta: Option<String>,
    pub keywords: Option<String>,
    pub humanized: Option<String>,
    pub calls: Mutex<Vec<String>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            model: "test-model".to_string(),
            article: Some("<h2>Topic</h2><p>Generated body one.</p><p>Two.</p><p>Three.</p>".to_string()),
            titles: vec!["Generated Title".to_string()],
            meta: Some("A meta description.".to_string()),
            keywords: Some("solar, energy, panels".to_string()),
            humanized: Some("<h2>Topic</h2><p>Humanized body one.</p><p>Two.</p><p>Three.</p>".to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockBackend {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn scripted(value: &Option<String>, call: &str) -> Result<String, BackendError> {
        value
            .clone()
            .ok_or_else(|| BackendError::Unavailable(format!("scripted failure in {call}")))
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate_article(
        &self,
        topic: &str,
        article_type: &str,
        word_count: u32,
        sources: &[SourceItem],
    ) -> Result<String, BackendError> {
        self.record(format!(
            "article(topic={topic}, type={article_type}, words={word_count}, sources={})",
            sources.len()
        ));
        Self::scripted(&self.article, "generate_article")
    }

    async fn generate_titles(
        &self,
        _body: &str,
        article_type: &str,
    ) -> Result<Vec<String>, BackendError> {
        self.record(format!("titles(type={article_type})"));
        Ok(self.titles.clone())
    }

    async fn generate_meta_description(
        &self,
        _body: &str,
        _title: &str,
    ) -> Result<String, BackendError> {
        self.record("meta".to_string());
        Self::scripted(&self.meta, "generate_meta_description")
    }

    async fn extract_keywords(&self, _body: &str, count: usize) -> Result<String, BackendError> {
        self.record(format!("keywords(count={count})"));
        Self::scripted(&self.keywords, "extract_keywords")
    }

    async fn humanize(&self, _body: &str) -> Result<String, BackendError> {
        self.record("humanize".to_string());
        Self::scripted(&self.humanized, "humanize")
    }
}

/// [`FeedFetcher`] serving canned items per URL.
#[derive(Default)]
pub struct StaticFetcher {
    feeds: HashMap<String, Result<Vec<FetchedItem>, String>>,
}

impl StaticFetcher {
    pub fn with_items(url: &str, items: Vec<FetchedItem>) -> Self {
        let mut fetcher = Self::default();
        fetcher.feeds.insert(url.to_string(), Ok(items));
        fetcher
    }

    pub fn add_items(mut self, url: &str, items: Vec<FetchedItem>) -> Self {
        self.feeds.insert(url.to_string(), Ok(items));
        self
    }

    pub fn add_failure(mut self, url: &str, message: &str) -> Self {
        self.feeds
            .insert(url.to_string(), Err(message.to_string()));
        self
    }
}

#[async_trait]
impl FeedFetcher for StaticFetcher {
    async fn fetch_items(&self, url: &str) -> Result<Vec<FetchedItem>, SourceError> {
        match self.feeds.get(url) {
            Some(Ok(items)) => Ok(items.clone()),
            Some(Err(message)) => Err(SourceError::Http(message.clone())),
            None => Ok(Vec::new()),
        }
    }
}

pub fn feed_item(title: &str, published_at: Option<DateTime<Utc>>) -> FetchedItem {
    FetchedItem {
        title: title.to_string(),
        link: format!("https://news.example.com/{}", title.replace(' ', "-")),
        summary: String::new(),
        published_at,
    }
}

/// [`Publisher`] that captures created documents.
#[derive(Default)]
pub struct MockPublisher {
    pub fail_with: Option<String>,
    pub next_id: i64,
    created: Mutex<Vec<NewDocument>>,
}

impl MockPublisher {
    pub fn returning(next_id: i64) -> Self {
        Self {
            next_id,
            ..Self::default()
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<NewDocument> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for MockPublisher {
    async fn create_document(&self, document: &NewDocument) -> Result<i64, PublishError> {
        if let Some(message) = &self.fail_with {
            return Err(PublishError::Rejected(message.clone()));
        }
        self.created.lock().unwrap().push(document.clone());
        Ok(self.next_id)
    }
}

/// [`ResearchProvider`] with a fixed result.
pub struct StaticResearch {
    pub result: Option<ResearchSummary>,
}

#[async_trait]
impl ResearchProvider for StaticResearch {
    async fn research(&self, _topic: &str) -> Option<ResearchSummary> {
        self.result.clone()
    }
}
