//! `campaigns list` and `campaigns create` commands.

use anyhow::Context;
use draftmill_core::{AppConfig, CampaignType, Frequency};

/// Print every campaign, newest first.
pub async fn list(config: &AppConfig) -> anyhow::Result<()> {
    let pool_config = draftmill_db::PoolConfig::from_app_config(config);
    let pool = draftmill_db::connect_pool(&config.database_url, pool_config).await?;

    let rows = draftmill_db::campaigns::list_campaigns(&pool).await?;
    if rows.is_empty() {
        println!("no campaigns");
        return Ok(());
    }

    for row in rows {
        let last_run = row
            .last_run_at
            .map_or_else(|| "never".to_string(), |t| t.to_rfc3339());
        println!(
            "#{} {} [{} / {} / {}] keywords: {} last run: {last_run}",
            row.id, row.name, row.campaign_type, row.frequency, row.status, row.keywords
        );
    }
    Ok(())
}

/// Create a campaign after validating its type, frequency, and settings.
pub async fn create(
    config: &AppConfig,
    name: &str,
    campaign_type: &str,
    keywords: &str,
    frequency: &str,
    settings: &str,
) -> anyhow::Result<()> {
    CampaignType::parse(campaign_type)
        .with_context(|| format!("unknown campaign type '{campaign_type}'"))?;
    Frequency::parse(frequency).with_context(|| format!("unknown frequency '{frequency}'"))?;

    let settings: serde_json::Value =
        serde_json::from_str(settings).context("settings must be a JSON object")?;
    anyhow::ensure!(settings.is_object(), "settings must be a JSON object");

    let keyword_list = draftmill_db::campaigns::split_keywords(keywords);
    anyhow::ensure!(!keyword_list.is_empty(), "at least one keyword is required");

    let pool_config = draftmill_db::PoolConfig::from_app_config(config);
    let pool = draftmill_db::connect_pool(&config.database_url, pool_config).await?;
    draftmill_db::run_migrations(&pool).await?;

    let id = draftmill_db::campaigns::insert_campaign(
        &pool,
        name,
        campaign_type,
        &keyword_list,
        frequency,
        settings,
    )
    .await?;

    println!("created campaign #{id} '{name}'");
    Ok(())
}
