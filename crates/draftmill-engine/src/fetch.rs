//! Production [`FeedFetcher`] backed by reqwest and feed-rs.

use std::time::Duration;

use async_trait::async_trait;
use draftmill_core::{FeedFetcher, FetchedItem, SourceError};
use reqwest::Client;

use crate::scorer::strip_html;

/// Fetches and parses RSS/Atom feeds over HTTP.
pub struct HttpFeedFetcher {
    client: Client,
}

impl HttpFeedFetcher {
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: u64) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("draftmill/0.1 (content-automation)")
            .build()
            .map_err(|e| SourceError::Http(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch_items(&self, url: &str) -> Result<Vec<FetchedItem>, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))?
            .error_for_status()
            .map_err(|e| SourceError::Http(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))?;

        let feed =
            feed_rs::parser::parse(&bytes[..]).map_err(|e| SourceError::Parse(e.to_string()))?;

        let items = feed
            .entries
            .into_iter()
            .map(|entry| FetchedItem {
                title: entry
                    .title
                    .map(|t| t.content.trim().to_string())
                    .unwrap_or_default(),
                link: entry
                    .links
                    .first()
                    .map(|l| l.href.clone())
                    .unwrap_or_default(),
                summary: entry
                    .summary
                    .map(|s| strip_html(&s.content).trim().to_string())
                    .unwrap_or_default(),
                published_at: entry.published.or(entry.updated),
            })
            .collect();

        Ok(items)
    }
}
