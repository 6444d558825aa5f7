//! Offline unit tests for draftmill-db pool configuration and row types.
//! These tests do not require a live database connection.

use chrono::Utc;
use draftmill_core::{AppConfig, Environment};
use draftmill_db::campaigns::CampaignRow;
use draftmill_db::feeds::FeedRow;
use draftmill_db::PoolConfig;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        feeds_path: PathBuf::from("./config/feeds.yaml"),
        ollama_host: "http://localhost:11434".to_string(),
        model_name: "llama3:8b".to_string(),
        generate_timeout_secs: 300,
        feed_timeout_secs: 30,
        cms_base_url: None,
        cms_auth_token: None,
        tick_cron: "0 */15 * * * *".to_string(),
        max_concurrent_campaigns: 1,
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

/// Compile-time smoke test: confirm that [`CampaignRow`] has all expected
/// fields with the correct types. No database required.
#[test]
fn campaign_row_has_expected_fields() {
    let row = CampaignRow {
        id: 1_i64,
        name: "Solar coverage".to_string(),
        campaign_type: "news".to_string(),
        keywords: "solar, panels".to_string(),
        frequency: "hourly".to_string(),
        settings: serde_json::json!({}),
        status: "active".to_string(),
        last_run_at: None,
        created_at: Utc::now(),
    };

    assert_eq!(row.id, 1);
    assert_eq!(row.campaign_type, "news");
    assert!(row.last_run_at.is_none());
}

#[test]
fn feed_row_has_expected_fields() {
    let row = FeedRow {
        id: 3_i64,
        name: "BBC World".to_string(),
        url: "http://feeds.bbci.co.uk/news/world/rss.xml".to_string(),
        category: Some("world".to_string()),
        active: true,
        last_fetched_at: None,
        last_item_count: 0_i32,
        last_error: None,
        created_at: Utc::now(),
    };

    assert!(row.active);
    assert_eq!(row.last_item_count, 0);
    assert!(row.last_error.is_none());
}
