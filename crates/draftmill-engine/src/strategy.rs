//! Per-campaign-type draft construction.
//!
//! Each strategy produces a title, a body, and the source snapshot; the
//! pipeline applies the shared tail (meta description, keywords,
//! humanization, scoring, persistence) uniformly afterwards.

use draftmill_core::{Campaign, CampaignSettings, CampaignType, ResearchSummary, SourceItem};

use crate::error::EngineError;
use crate::pipeline::ContentPipeline;
use crate::sources;

const DEFAULT_WORDS_GENERAL: u32 = 800;
const DEFAULT_WORDS_NEWS: u32 = 600;
const DEFAULT_WORDS_VIDEO: u32 = 1000;
const DEFAULT_WORDS_PODCAST: u32 = 1200;

/// A generated draft before the shared enrichment tail.
pub(crate) struct Draft {
    pub title: String,
    pub body: String,
    pub sources: Vec<SourceItem>,
}

pub(crate) async fn build_draft(
    pipeline: &ContentPipeline,
    campaign: &Campaign,
    campaign_type: CampaignType,
    settings: &CampaignSettings,
) -> Result<Draft, EngineError> {
    match campaign_type {
        CampaignType::General => general(pipeline, campaign, settings).await,
        CampaignType::News => news(pipeline, campaign, settings).await,
        CampaignType::Video => video(pipeline, campaign, settings).await,
        CampaignType::Podcast => podcast(pipeline, campaign, settings).await,
    }
}

/// General articles are written about the primary keyword, citing whatever
/// the research provider found. Title comes from the backend, with a
/// deterministic fallback when title generation yields nothing usable.
async fn general(
    pipeline: &ContentPipeline,
    campaign: &Campaign,
    settings: &CampaignSettings,
) -> Result<Draft, EngineError> {
    let keyword = primary_keyword(campaign)?;

    let research = match &pipeline.research {
        Some(provider) => provider.research(keyword).await,
        None => None,
    }
    .unwrap_or_else(|| ResearchSummary {
        sources: Vec::new(),
        summary: format!("Research topic: {keyword}"),
    });

    let word_count = settings.word_count.unwrap_or(DEFAULT_WORDS_GENERAL);
    let body = pipeline
        .backend
        .generate_article(keyword, &settings.article_type, word_count, &research.sources)
        .await?;

    let title = match pipeline
        .backend
        .generate_titles(&body, &settings.article_type)
        .await
    {
        Ok(titles) => titles
            .into_iter()
            .map(|t| t.trim().to_string())
            .find(|t| !t.is_empty()),
        Err(e) => {
            tracing::warn!(campaign = %campaign.name, error = %e, "title generation failed, using fallback");
            None
        }
    }
    .unwrap_or_else(|| format!("{keyword} - Complete Guide"));

    Ok(Draft {
        title,
        body,
        sources: research.sources,
    })
}

/// News articles cover the newest feed item matching a campaign keyword.
/// Feed health is recorded per feed; a feed that fails to fetch never
/// aborts the run.
async fn news(
    pipeline: &ContentPipeline,
    campaign: &Campaign,
    settings: &CampaignSettings,
) -> Result<Draft, EngineError> {
    let feeds = pipeline.store.list_active_feeds().await?;
    let agg = sources::find_matches(pipeline.fetcher.as_ref(), &campaign.keywords, &feeds).await;

    for (feed_id, item_count) in &agg.fetched {
        if let Err(e) = pipeline.store.record_feed_success(*feed_id, *item_count).await {
            tracing::warn!(feed_id, error = %e, "failed to record feed success");
        }
    }
    for failure in &agg.failures {
        if let Err(e) = pipeline
            .store
            .record_feed_error(failure.feed_id, &failure.message)
            .await
        {
            tracing::warn!(feed_id = failure.feed_id, error = %e, "failed to record feed error");
        }
    }

    let Some(selected) = agg.matches.first().cloned() else {
        return Err(EngineError::EmptySource(
            "no feed items matched the campaign keywords".to_string(),
        ));
    };

    let word_count = settings.word_count.unwrap_or(DEFAULT_WORDS_NEWS);
    let body = pipeline
        .backend
        .generate_article(
            &selected.title,
            "news",
            word_count,
            std::slice::from_ref(&selected),
        )
        .await?;

    Ok(Draft {
        title: selected.title.clone(),
        body,
        sources: vec![selected],
    })
}

async fn video(
    pipeline: &ContentPipeline,
    campaign: &Campaign,
    settings: &CampaignSettings,
) -> Result<Draft, EngineError> {
    let keyword = primary_keyword(campaign)?;
    let topic = format!("{keyword}, written as a companion article for a video");
    let word_count = settings.word_count.unwrap_or(DEFAULT_WORDS_VIDEO);
    let body = pipeline
        .backend
        .generate_article(&topic, &settings.article_type, word_count, &[])
        .await?;

    Ok(Draft {
        title: format!("{keyword} - Video Guide"),
        body,
        sources: Vec::new(),
    })
}

async fn podcast(
    pipeline: &ContentPipeline,
    campaign: &Campaign,
    settings: &CampaignSettings,
) -> Result<Draft, EngineError> {
    let keyword = primary_keyword(campaign)?;
    let topic = format!("{keyword}, written as show notes and an article for a podcast episode");
    let word_count = settings.word_count.unwrap_or(DEFAULT_WORDS_PODCAST);
    let body = pipeline
        .backend
        .generate_article(&topic, &settings.article_type, word_count, &[])
        .await?;

    Ok(Draft {
        title: format!("{keyword} - Podcast Episode"),
        body,
        sources: Vec::new(),
    })
}

/// First non-blank keyword on the campaign.
fn primary_keyword(campaign: &Campaign) -> Result<&str, EngineError> {
    campaign
        .keywords
        .iter()
        .map(|k| k.trim())
        .find(|k| !k.is_empty())
        .ok_or_else(|| EngineError::EmptySource("campaign has no keywords".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn campaign_with_keywords(keywords: Vec<String>) -> Campaign {
        Campaign {
            id: 1,
            name: "t".to_string(),
            campaign_type: "general".to_string(),
            keywords,
            frequency: "hourly".to_string(),
            settings: serde_json::json!({}),
            status: "active".to_string(),
            last_run_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn primary_keyword_skips_blank_entries() {
        let campaign = campaign_with_keywords(vec![
            "  ".to_string(),
            String::new(),
            " solar ".to_string(),
        ]);
        assert_eq!(primary_keyword(&campaign).unwrap(), "solar");
    }

    #[test]
    fn primary_keyword_errors_when_all_blank() {
        let campaign = campaign_with_keywords(vec!["  ".to_string()]);
        assert!(matches!(
            primary_keyword(&campaign),
            Err(EngineError::EmptySource(_))
        ));
    }
}
