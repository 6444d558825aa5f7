//! Background tick scheduling.
//!
//! Wires the production collaborators into a [`CampaignScheduler`] and
//! registers a cron job that runs a tick on the configured cadence.

use std::sync::Arc;

use draftmill_cms::CmsClient;
use draftmill_core::AppConfig;
use draftmill_db::PgStore;
use draftmill_engine::{CampaignScheduler, ContentPipeline, HttpFeedFetcher};
use draftmill_ollama::OllamaClient;
use sqlx::PgPool;
use tokio_cron_scheduler::{Job, JobScheduler};

/// Builds the campaign scheduler against the production store, backend,
/// fetcher, and (when configured) publisher.
///
/// # Errors
///
/// Fails if the Ollama host, CMS base URL, or fetcher HTTP client is
/// invalid.
pub fn build_campaign_scheduler(
    pool: PgPool,
    config: &AppConfig,
) -> anyhow::Result<Arc<CampaignScheduler>> {
    let store = Arc::new(PgStore::new(pool));
    let backend = Arc::new(OllamaClient::new(
        &config.ollama_host,
        &config.model_name,
        config.generate_timeout_secs,
    )?);
    let fetcher = Arc::new(HttpFeedFetcher::new(config.feed_timeout_secs)?);

    let mut pipeline = ContentPipeline::new(
        Arc::clone(&store) as Arc<_>,
        backend as Arc<_>,
        fetcher as Arc<_>,
    );

    if let Some(base_url) = &config.cms_base_url {
        let publisher = CmsClient::new(base_url, config.cms_auth_token.as_deref(), 30)?;
        pipeline = pipeline.with_publisher(Arc::new(publisher) as Arc<_>);
    } else {
        tracing::info!("publishing target not configured, campaigns will only produce drafts");
    }

    Ok(Arc::new(CampaignScheduler::new(
        store as Arc<_>,
        pipeline,
        config.max_concurrent_campaigns,
    )))
}

/// Builds and starts the background job scheduler with the tick job
/// registered on `config.tick_cron`.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive for
/// the lifetime of the process. Dropping it shuts down all scheduled jobs.
///
/// # Errors
///
/// Fails if a collaborator cannot be built, the cron expression is invalid,
/// or the scheduler cannot start.
pub async fn build_scheduler(pool: PgPool, config: Arc<AppConfig>) -> anyhow::Result<JobScheduler> {
    let campaign_scheduler = build_campaign_scheduler(pool, &config)?;

    let job_scheduler = JobScheduler::new().await?;
    let job = Job::new_async(config.tick_cron.as_str(), move |_id, _scheduler| {
        let campaign_scheduler = Arc::clone(&campaign_scheduler);
        Box::pin(async move {
            match campaign_scheduler.tick(chrono::Utc::now()).await {
                Ok(report) if report.skipped => {}
                Ok(report) => {
                    tracing::info!(
                        due = report.due,
                        succeeded = report.succeeded,
                        failed = report.failed,
                        "scheduled tick complete"
                    );
                }
                Err(e) => tracing::error!(error = %e, "scheduled tick failed"),
            }
        })
    })?;
    job_scheduler.add(job).await?;
    job_scheduler.start().await?;

    tracing::info!(cron = %config.tick_cron, "tick job registered");
    Ok(job_scheduler)
}
