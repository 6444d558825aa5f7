//! HTTP client for the publishing target's post-creation endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use draftmill_core::{NewDocument, PublishError, Publisher};

use crate::error::CmsError;
use crate::types::{ApiErrorBody, CreatePostRequest, CreatePostResponse};

/// Client for a WordPress-style publishing target.
///
/// Use [`CmsClient::new`] for production or point `base_url` at a mock
/// server in tests. The optional bearer token is sent as an
/// `Authorization` header on every request.
pub struct CmsClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl CmsClient {
    /// Creates a new client for the given target base URL.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::InvalidBaseUrl`] if `base_url` is not an http(s)
    /// URL, or [`CmsError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(
        base_url: &str,
        auth_token: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, CmsError> {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CmsError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("draftmill/0.1 (content-automation)")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: auth_token.map(ToString::to_string),
        })
    }

    /// Creates a post on the target and returns its document id.
    ///
    /// # Errors
    ///
    /// - [`CmsError::Api`] if the target rejects the request (non-2xx); the
    ///   target's own error message is carried through when present.
    /// - [`CmsError::Http`] on network failure.
    /// - [`CmsError::Deserialize`] if the success body lacks an `id`.
    pub async fn create_post(&self, document: &NewDocument) -> Result<i64, CmsError> {
        let url = format!("{}/wp-json/wp/v2/posts", self.base_url);

        let request = CreatePostRequest {
            title: &document.title,
            content: &document.body,
            status: if document.publish_now {
                "publish"
            } else {
                "draft"
            },
            author: document.author_id,
            categories: document.category_ids.clone(),
            excerpt: document.meta_description.as_deref(),
            meta: document.metadata.clone(),
        };

        let mut builder = self.client.post(&url).json(&request);
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| body.clone());
            return Err(CmsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: CreatePostResponse =
            serde_json::from_str(&body).map_err(|e| CmsError::Deserialize {
                context: url,
                source: e,
            })?;

        Ok(parsed.id)
    }
}

#[async_trait]
impl Publisher for CmsClient {
    async fn create_document(&self, document: &NewDocument) -> Result<i64, PublishError> {
        let id = self.create_post(document).await?;
        Ok(id)
    }
}
