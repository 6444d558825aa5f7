//! `tick` and `test-connection` commands.

use std::sync::Arc;

use draftmill_cms::CmsClient;
use draftmill_core::AppConfig;
use draftmill_db::PgStore;
use draftmill_engine::{CampaignScheduler, ContentPipeline, HttpFeedFetcher};
use draftmill_ollama::OllamaClient;

/// Run one scheduler tick against the production collaborators.
pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let pool_config = draftmill_db::PoolConfig::from_app_config(config);
    let pool = draftmill_db::connect_pool(&config.database_url, pool_config).await?;
    draftmill_db::run_migrations(&pool).await?;

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
    }

    let scheduler = CampaignScheduler::new(store as Arc<_>, pipeline, config.max_concurrent_campaigns);
    let report = scheduler.tick(chrono::Utc::now()).await?;

    println!(
        "tick complete: {} examined, {} due, {} succeeded, {} failed",
        report.examined, report.due, report.succeeded, report.failed
    );
    Ok(())
}

/// Probe the generation backend and print its reply.
pub async fn test_connection(config: &AppConfig) -> anyhow::Result<()> {
    let backend = OllamaClient::new(
        &config.ollama_host,
        &config.model_name,
        config.generate_timeout_secs,
    )?;

    let reply = backend.test_connection().await?;
    println!("{} at {} replied: {reply}", config.model_name, config.ollama_host);
    Ok(())
}
