//! `seed-feeds` command.

use draftmill_core::AppConfig;

/// Seed the feed registry from the configured YAML file.
pub async fn seed(config: &AppConfig) -> anyhow::Result<()> {
    let feeds_file = draftmill_core::load_feeds(&config.feeds_path)?;

    let pool_config = draftmill_db::PoolConfig::from_app_config(config);
    let pool = draftmill_db::connect_pool(&config.database_url, pool_config).await?;
    draftmill_db::run_migrations(&pool).await?;

    let inserted = draftmill_db::seed::seed_feeds(&pool, &feeds_file.feeds).await?;
    println!(
        "seeded {inserted} new feed(s) from {} ({} listed)",
        config.feeds_path.display(),
        feeds_file.feeds.len()
    );
    Ok(())
}
