//! The per-campaign content pipeline: source gathering, generation,
//! enrichment, scoring, persistence, and optional publishing.

use std::sync::Arc;

use draftmill_core::{
    ActivityStatus, Campaign, CampaignSettings, CampaignType, ContentStore, FeedFetcher,
    GenerationBackend, NewActivityEntry, NewGeneratedContent, Publisher, ResearchProvider,
};

use crate::error::EngineError;
use crate::publish;
use crate::scorer::{self, QualityReport};
use crate::strategy;

/// What one successful pipeline run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub content_id: i64,
    pub title: String,
    /// External document reference when the run published.
    pub post_id: Option<i64>,
    pub published: bool,
    pub quality: QualityReport,
    pub humanization_applied: bool,
}

/// Runs the generation pipeline for one campaign at a time.
///
/// Collaborators are trait objects so the pipeline can be exercised with
/// in-memory fakes. The publisher and research provider are optional;
/// without a publisher, `auto_publish` campaigns still persist drafts.
pub struct ContentPipeline {
    pub(crate) store: Arc<dyn ContentStore>,
    pub(crate) backend: Arc<dyn GenerationBackend>,
    pub(crate) fetcher: Arc<dyn FeedFetcher>,
    pub(crate) publisher: Option<Arc<dyn Publisher>>,
    pub(crate) research: Option<Arc<dyn ResearchProvider>>,
}

impl ContentPipeline {
    pub fn new(
        store: Arc<dyn ContentStore>,
        backend: Arc<dyn GenerationBackend>,
        fetcher: Arc<dyn FeedFetcher>,
    ) -> Self {
        Self {
            store,
            backend,
            fetcher,
            publisher: None,
            research: None,
        }
    }

    #[must_use]
    pub fn with_publisher(mut self, publisher: Arc<dyn Publisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    #[must_use]
    pub fn with_research(mut self, research: Arc<dyn ResearchProvider>) -> Self {
        self.research = Some(research);
        self
    }

    /// Run the pipeline once for `campaign`.
    ///
    /// On success a content record exists; the outcome says whether it was
    /// also published. The enrichment steps degrade rather than fail: a
    /// meta-description or keyword failure stores an empty string, a
    /// humanization failure keeps the original body, and a publish failure
    /// leaves the record as a draft with an error logged. Only the article
    /// body itself is load-bearing.
    ///
    /// # Errors
    ///
    /// - [`EngineError::UnsupportedType`] for unknown campaign type tags.
    /// - [`EngineError::Configuration`] for malformed settings JSON.
    /// - [`EngineError::EmptySource`] when the campaign has no usable
    ///   keywords, or a news campaign matched no feed items.
    /// - [`EngineError::Generation`] if the body cannot be generated, and
    ///   [`EngineError::Persistence`] if the record cannot be stored.
    pub async fn run(&self, campaign: &Campaign) -> Result<RunOutcome, EngineError> {
        let campaign_type = CampaignType::parse(&campaign.campaign_type)
            .ok_or_else(|| EngineError::UnsupportedType(campaign.campaign_type.clone()))?;

        let settings = CampaignSettings::from_value(&campaign.settings)
            .map_err(|e| EngineError::Configuration(format!("invalid campaign settings: {e}")))?;

        let draft = strategy::build_draft(self, campaign, campaign_type, &settings).await?;

        let meta_description = match self
            .backend
            .generate_meta_description(&draft.body, &draft.title)
            .await
        {
            Ok(meta) => meta,
            Err(e) => {
                tracing::warn!(campaign = %campaign.name, error = %e, "pipeline: meta description failed, storing empty");
                String::new()
            }
        };
        let keywords = match self.backend.extract_keywords(&draft.body, 10).await {
            Ok(keywords) => keywords,
            Err(e) => {
                tracing::warn!(campaign = %campaign.name, error = %e, "pipeline: keyword extraction failed, storing empty");
                String::new()
            }
        };

        let mut body = draft.body;
        let mut humanization_applied = false;
        if settings.enable_humanization {
            match self.backend.humanize(&body).await {
                Ok(rewritten) => {
                    body = rewritten;
                    humanization_applied = true;
                }
                Err(e) => {
                    tracing::warn!(campaign = %campaign.name, error = %e, "pipeline: humanization failed, keeping original body");
                }
            }
        }

        let quality = scorer::score(&body);

        let content = NewGeneratedContent {
            campaign_id: campaign.id,
            title: draft.title.clone(),
            body,
            meta_description,
            keywords,
            sources: draft.sources,
            ai_model: self.backend.model_name().to_string(),
            word_count: i32::try_from(quality.word_count).unwrap_or(i32::MAX),
            quality_score: quality.score,
            humanization_applied,
        };
        let content_id = self.store.insert_content(&content).await?;

        tracing::info!(
            campaign = %campaign.name,
            content_id,
            quality = quality.score,
            words = quality.word_count,
            "pipeline: content persisted"
        );

        let mut post_id = None;
        if settings.auto_publish {
            if let Some(publisher) = &self.publisher {
                match publish::publish_content(
                    self.store.as_ref(),
                    publisher.as_ref(),
                    content_id,
                    &settings,
                    chrono::Utc::now(),
                )
                .await
                {
                    Ok(id) => post_id = Some(id),
                    Err(e) => {
                        // Generation already succeeded; the run stays a
                        // success and the record stays a draft.
                        tracing::warn!(
                            campaign = %campaign.name,
                            content_id,
                            error = %e,
                            "pipeline: publish failed, content remains draft"
                        );
                        let entry = NewActivityEntry {
                            campaign_id: campaign.id,
                            action: "publish".to_string(),
                            status: ActivityStatus::Error,
                            message: e.to_string(),
                            data: Some(serde_json::json!({ "content_id": content_id })),
                        };
                        if let Err(log_err) = self.store.log_activity(&entry).await {
                            tracing::warn!(
                                campaign_id = campaign.id,
                                error = %log_err,
                                "pipeline: failed to record publish error"
                            );
                        }
                    }
                }
            } else {
                tracing::warn!(
                    campaign = %campaign.name,
                    "pipeline: auto_publish set but no publisher configured, keeping draft"
                );
            }
        }

        Ok(RunOutcome {
            content_id,
            title: draft.title,
            post_id,
            published: post_id.is_some(),
            quality,
            humanization_applied,
        })
    }
}
