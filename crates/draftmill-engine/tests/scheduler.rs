//! Scheduler tick behavior against in-memory collaborators.

mod common;

use std::sync::Arc;

use chrono::Duration;
use draftmill_engine::{CampaignScheduler, ContentPipeline};

use common::{at, campaign, MemoryStore, MockBackend, StaticFetcher};

fn scheduler(store: &Arc<MemoryStore>, backend: MockBackend) -> CampaignScheduler {
    let pipeline = ContentPipeline::new(
        Arc::clone(store) as Arc<_>,
        Arc::new(backend),
        Arc::new(StaticFetcher::default()),
    );
    CampaignScheduler::new(Arc::clone(store) as Arc<_>, pipeline, 2)
}

#[tokio::test]
async fn tick_runs_only_due_campaigns() {
    let now = at(12);

    let due = campaign(1, "general", serde_json::json!({}));
    let mut not_due = campaign(2, "general", serde_json::json!({}));
    not_due.last_run_at = Some(now - Duration::seconds(60));
    let mut paused = campaign(3, "general", serde_json::json!({}));
    paused.status = "paused".to_string();

    let store = Arc::new(MemoryStore::with_campaigns(vec![due, not_due, paused]));
    let scheduler = scheduler(&store, MockBackend::default());

    let report = scheduler.tick(now).await.expect("tick should succeed");

    assert!(!report.skipped);
    assert_eq!(report.examined, 2, "paused campaign is never listed");
    assert_eq!(report.due, 1);
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 0);

    let campaigns = store.campaigns();
    assert_eq!(campaigns[0].last_run_at, Some(now));
    assert_eq!(
        campaigns[1].last_run_at,
        Some(now - Duration::seconds(60)),
        "not-due campaign keeps its timestamp"
    );
    assert_eq!(store.content().len(), 1);
}

#[tokio::test]
async fn successful_run_logs_activity_with_outcome_data() {
    let store = Arc::new(MemoryStore::with_campaigns(vec![campaign(
        1,
        "general",
        serde_json::json!({}),
    )]));
    let scheduler = scheduler(&store, MockBackend::default());

    scheduler.tick(at(12)).await.expect("tick should succeed");

    let activity = store.activity();
    assert_eq!(activity.len(), 1);
    let entry = &activity[0];
    assert_eq!(entry.campaign_id, 1);
    assert_eq!(entry.action, "generate");
    assert_eq!(entry.status, "success");
    assert!(entry.message.contains("Generated Title"));

    let data = entry.data.as_ref().expect("success entries carry data");
    assert!(data.get("content_id").is_some());
    assert_eq!(data.get("published"), Some(&serde_json::json!(false)));
}

#[tokio::test]
async fn failed_run_logs_error_and_still_advances_last_run() {
    let now = at(12);
    let store = Arc::new(MemoryStore::with_campaigns(vec![campaign(
        1,
        "general",
        serde_json::json!({}),
    )]));
    let scheduler = scheduler(
        &store,
        MockBackend {
            article: None,
            ..MockBackend::default()
        },
    );

    let report = scheduler.tick(now).await.expect("tick itself succeeds");

    assert_eq!(report.succeeded, 0);
    assert_eq!(report.failed, 1);

    let activity = store.activity();
    assert_eq!(activity[0].status, "error");
    assert!(activity[0].message.contains("generation failed"));
    assert!(activity[0].data.is_none());

    // Failing campaigns retry on their normal cadence, not every tick.
    assert_eq!(store.campaigns()[0].last_run_at, Some(now));
}

#[tokio::test]
async fn mixed_tick_counts_successes_and_failures() {
    let ok = campaign(1, "general", serde_json::json!({}));
    let mut bad = campaign(2, "general", serde_json::json!({}));
    bad.keywords.clear();

    let store = Arc::new(MemoryStore::with_campaigns(vec![ok, bad]));
    let scheduler = scheduler(&store, MockBackend::default());

    let report = scheduler.tick(at(12)).await.expect("tick should succeed");

    assert_eq!(report.due, 2);
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(store.activity().len(), 2);
    assert_eq!(store.content().len(), 1);
}

#[tokio::test]
async fn unknown_frequency_campaign_never_runs() {
    let mut odd = campaign(1, "general", serde_json::json!({}));
    odd.frequency = "fortnightly".to_string();

    let store = Arc::new(MemoryStore::with_campaigns(vec![odd]));
    let scheduler = scheduler(&store, MockBackend::default());

    let report = scheduler.tick(at(12)).await.expect("tick should succeed");

    assert_eq!(report.due, 0);
    assert!(store.content().is_empty());
    assert_eq!(store.campaigns()[0].last_run_at, None);
}

#[tokio::test]
async fn repeated_ticks_respect_the_frequency_window() {
    let store = Arc::new(MemoryStore::with_campaigns(vec![campaign(
        1,
        "general",
        serde_json::json!({}),
    )]));
    let scheduler = scheduler(&store, MockBackend::default());

    let first = at(12);
    scheduler.tick(first).await.expect("first tick");
    assert_eq!(store.content().len(), 1);

    // Fifteen minutes later an hourly campaign is not due again.
    let second = first + Duration::minutes(15);
    let report = scheduler.tick(second).await.expect("second tick");
    assert_eq!(report.due, 0);
    assert_eq!(store.content().len(), 1);

    // An hour later it is.
    let third = first + Duration::hours(1);
    let report = scheduler.tick(third).await.expect("third tick");
    assert_eq!(report.due, 1);
    assert_eq!(store.content().len(), 2);
}
