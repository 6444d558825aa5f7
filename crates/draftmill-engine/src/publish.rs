//! The publish step: push a persisted content record to the publishing
//! target and record the resulting document reference.

use chrono::{DateTime, Utc};
use draftmill_core::{CampaignSettings, ContentStore, NewDocument, Publisher, StoreError};

use crate::error::EngineError;

/// Publish the content record `content_id` and mark it published.
///
/// The document carries provenance metadata (`draftmill_content_id`,
/// `draftmill_campaign_id`) so a target document can always be traced back
/// to the record that produced it. `content_mode` decides target-side
/// visibility: `"publish"` is immediately visible, anything else lands as a
/// target draft.
///
/// # Errors
///
/// - [`EngineError::Persistence`] if the record does not exist or the
///   published transition cannot be recorded.
/// - [`EngineError::Publish`] if the target rejects or is unreachable.
pub async fn publish_content(
    store: &dyn ContentStore,
    publisher: &dyn Publisher,
    content_id: i64,
    settings: &CampaignSettings,
    now: DateTime<Utc>,
) -> Result<i64, EngineError> {
    let content = store
        .get_content(content_id)
        .await?
        .ok_or(EngineError::Persistence(StoreError::NotFound))?;

    let mut metadata = serde_json::Map::new();
    metadata.insert(
        "draftmill_content_id".to_string(),
        serde_json::json!(content.id),
    );
    metadata.insert(
        "draftmill_campaign_id".to_string(),
        serde_json::json!(content.campaign_id),
    );

    let document = NewDocument {
        title: content.title,
        body: content.body,
        publish_now: settings.content_mode == "publish",
        author_id: settings.author_id,
        category_ids: settings.categories.clone(),
        meta_description: if content.meta_description.is_empty() {
            None
        } else {
            Some(content.meta_description)
        },
        metadata,
    };

    let post_id = publisher.create_document(&document).await?;
    store.mark_content_published(content_id, post_id, now).await?;

    tracing::info!(content_id, post_id, "publish: document created");

    Ok(post_id)
}
