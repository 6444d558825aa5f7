//! The campaign scheduler: decides which campaigns are due on each tick and
//! drives the pipeline for them with bounded concurrency.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use draftmill_core::{ActivityStatus, Campaign, ContentStore, Frequency, NewActivityEntry};
use futures::stream::{self, StreamExt};
use tokio::sync::Mutex;

use crate::error::EngineError;
use crate::pipeline::ContentPipeline;

/// Counters for one scheduler tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickReport {
    /// A previous tick was still running; nothing was examined.
    pub skipped: bool,
    pub examined: usize,
    pub due: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Whether a campaign should run at `now`.
///
/// Never-run campaigns are due immediately. Inactive campaigns and
/// campaigns with an unrecognized frequency tag are never due.
#[must_use]
pub fn is_due(campaign: &Campaign, now: DateTime<Utc>) -> bool {
    if campaign.status != "active" {
        return false;
    }
    let Some(frequency) = Frequency::parse(&campaign.frequency) else {
        return false;
    };
    match campaign.last_run_at {
        None => true,
        Some(last) => (now - last).num_seconds() >= frequency.threshold_secs(),
    }
}

/// Runs due campaigns on each tick.
///
/// A tick that starts while another is still running skips itself instead
/// of overlapping. Every attempted campaign gets an activity log entry and
/// an advanced last-run timestamp, success or failure, so a persistently
/// failing campaign retries on its normal cadence rather than every tick.
pub struct CampaignScheduler {
    store: Arc<dyn ContentStore>,
    pipeline: ContentPipeline,
    max_concurrent: usize,
    tick_lock: Mutex<()>,
}

impl CampaignScheduler {
    pub fn new(
        store: Arc<dyn ContentStore>,
        pipeline: ContentPipeline,
        max_concurrent: usize,
    ) -> Self {
        Self {
            store,
            pipeline,
            max_concurrent: max_concurrent.max(1),
            tick_lock: Mutex::new(()),
        }
    }

    /// Run one tick at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Persistence`] only if the campaign list cannot
    /// be loaded; per-campaign failures are absorbed into the report.
    pub async fn tick(&self, now: DateTime<Utc>) -> Result<TickReport, EngineError> {
        let Ok(_guard) = self.tick_lock.try_lock() else {
            tracing::warn!("scheduler: previous tick still running, skipping");
            return Ok(TickReport {
                skipped: true,
                ..TickReport::default()
            });
        };

        let campaigns = self.store.list_active_campaigns().await?;
        let examined = campaigns.len();
        let due: Vec<Campaign> = campaigns.into_iter().filter(|c| is_due(c, now)).collect();
        let due_count = due.len();
        tracing::info!(examined, due = due_count, "scheduler: tick started");

        let results: Vec<bool> = stream::iter(due)
            .map(|campaign| self.run_campaign(campaign, now))
            .buffer_unordered(self.max_concurrent)
            .collect()
            .await;

        let succeeded = results.iter().filter(|ok| **ok).count();
        let report = TickReport {
            skipped: false,
            examined,
            due: due_count,
            succeeded,
            failed: due_count - succeeded,
        };
        tracing::info!(
            succeeded = report.succeeded,
            failed = report.failed,
            "scheduler: tick finished"
        );
        Ok(report)
    }

    async fn run_campaign(&self, campaign: Campaign, now: DateTime<Utc>) -> bool {
        tracing::info!(campaign = %campaign.name, id = campaign.id, "scheduler: running campaign");

        let result = self.pipeline.run(&campaign).await;

        let (entry, ok) = match &result {
            Ok(outcome) => (
                NewActivityEntry {
                    campaign_id: campaign.id,
                    action: "generate".to_string(),
                    status: ActivityStatus::Success,
                    message: format!("generated '{}'", outcome.title),
                    data: Some(serde_json::json!({
                        "content_id": outcome.content_id,
                        "post_id": outcome.post_id,
                        "published": outcome.published,
                        "quality_score": outcome.quality.score,
                        "humanization_applied": outcome.humanization_applied,
                    })),
                },
                true,
            ),
            Err(e) => {
                tracing::warn!(campaign = %campaign.name, error = %e, "scheduler: campaign run failed");
                (
                    NewActivityEntry {
                        campaign_id: campaign.id,
                        action: "generate".to_string(),
                        status: ActivityStatus::Error,
                        message: e.to_string(),
                        data: None,
                    },
                    false,
                )
            }
        };

        if let Err(e) = self.store.log_activity(&entry).await {
            tracing::warn!(campaign_id = campaign.id, error = %e, "scheduler: failed to record activity");
        }
        if let Err(e) = self.store.update_campaign_last_run(campaign.id, now).await {
            tracing::warn!(campaign_id = campaign.id, error = %e, "scheduler: failed to advance last run");
        }

        ok
    }
}
