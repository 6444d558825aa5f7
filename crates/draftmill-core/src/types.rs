use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four supported campaign types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignType {
    General,
    News,
    Video,
    Podcast,
}

impl CampaignType {
    /// Parse the stored type tag. Returns `None` for unrecognized tags so the
    /// pipeline can reject them without side effects.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "general" => Some(Self::General),
            "news" => Some(Self::News),
            "video" => Some(Self::Video),
            "podcast" => Some(Self::Podcast),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::News => "news",
            Self::Video => "video",
            Self::Podcast => "podcast",
        }
    }
}

impl std::fmt::Display for CampaignType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a campaign becomes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Every15Minutes,
    Every30Minutes,
    Hourly,
    Daily,
}

impl Frequency {
    /// Parse the stored frequency tag. Unrecognized tags return `None`, which
    /// the scheduler treats as never due (fail-safe).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "every_15_minutes" => Some(Self::Every15Minutes),
            "every_30_minutes" => Some(Self::Every30Minutes),
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            _ => None,
        }
    }

    /// Minimum elapsed seconds since the last run before the campaign is due.
    #[must_use]
    pub fn threshold_secs(self) -> i64 {
        match self {
            Self::Every15Minutes => 900,
            Self::Every30Minutes => 1800,
            Self::Hourly => 3600,
            Self::Daily => 86_400,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Every15Minutes => "every_15_minutes",
            Self::Every30Minutes => "every_30_minutes",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
        }
    }
}

/// A configured, recurring content-generation job.
///
/// `campaign_type` and `frequency` stay as stored tags: unknown values must
/// survive loading so the pipeline and scheduler can apply their fail-safe
/// policies instead of erroring at deserialization time.
#[derive(Debug, Clone)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    pub campaign_type: String,
    /// Ordered keyword list; the first entry is the primary keyword.
    pub keywords: Vec<String>,
    pub frequency: String,
    /// Raw settings JSON, parsed into [`CampaignSettings`] per run.
    pub settings: serde_json::Value,
    pub status: String,
    pub last_run_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Per-campaign generation settings, stored as JSON on the campaign row.
///
/// Every field is defaulted so a partially-filled settings object from the
/// admin surface parses cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignSettings {
    /// Target article length in words. `None` falls back to the per-type
    /// default (general 800, news 600, video 1000, podcast 1200).
    pub word_count: Option<u32>,
    pub article_type: String,
    pub enable_humanization: bool,
    pub auto_publish: bool,
    /// `"publish"` makes published documents immediately visible on the
    /// target; anything else lands them as a CMS draft.
    pub content_mode: String,
    pub author_id: Option<i64>,
    pub categories: Vec<i64>,
    /// Model override; `None` uses the configured default.
    pub model: Option<String>,
    pub tone: Option<String>,
}

impl Default for CampaignSettings {
    fn default() -> Self {
        Self {
            word_count: None,
            article_type: "standard".to_string(),
            enable_humanization: false,
            auto_publish: false,
            content_mode: "draft".to_string(),
            author_id: None,
            categories: Vec::new(),
            model: None,
            tone: None,
        }
    }
}

impl CampaignSettings {
    /// Parse settings from the raw JSON stored on the campaign row.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error if the value is not an object of
    /// the expected shape.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }
}

/// A candidate source item matched for a news campaign.
///
/// Ephemeral during aggregation; snapshotted into
/// [`GeneratedContent::sources`] on persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceItem {
    pub title: String,
    pub url: String,
    pub summary: String,
    pub published_at: Option<DateTime<Utc>>,
    pub source_name: String,
}

/// A parsed feed entry as returned by a [`crate::FeedFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedItem {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub published_at: Option<DateTime<Utc>>,
}

/// Research material gathered for a general-article run.
#[derive(Debug, Clone, Default)]
pub struct ResearchSummary {
    pub sources: Vec<SourceItem>,
    pub summary: String,
}

/// An active feed from the registry, as seen by the source aggregator.
#[derive(Debug, Clone)]
pub struct FeedInfo {
    pub id: i64,
    pub name: String,
    pub url: String,
}

/// A persisted generated-content record.
#[derive(Debug, Clone)]
pub struct GeneratedContent {
    pub id: i64,
    pub campaign_id: i64,
    /// External document reference; set iff `status == "published"`.
    pub post_id: Option<i64>,
    pub title: String,
    pub body: String,
    pub meta_description: String,
    pub keywords: String,
    pub sources: Vec<SourceItem>,
    pub ai_model: String,
    pub word_count: i32,
    pub status: String,
    pub quality_score: i16,
    pub humanization_applied: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Fields for inserting a new content record. Status is always `draft` at
/// insert time; only the publish step moves a record to `published`.
#[derive(Debug, Clone)]
pub struct NewGeneratedContent {
    pub campaign_id: i64,
    pub title: String,
    pub body: String,
    pub meta_description: String,
    pub keywords: String,
    pub sources: Vec<SourceItem>,
    pub ai_model: String,
    pub word_count: i32,
    pub quality_score: i16,
    pub humanization_applied: bool,
}

/// Outcome class of an activity log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Success,
    Error,
}

impl ActivityStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Fields for appending an activity log entry.
#[derive(Debug, Clone)]
pub struct NewActivityEntry {
    pub campaign_id: i64,
    pub action: String,
    pub status: ActivityStatus,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// A persisted activity log entry. Append-only; never mutated.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub id: i64,
    pub campaign_id: i64,
    pub action: String,
    pub status: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// A document to create on the publishing target.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub title: String,
    pub body: String,
    /// `true` maps to an immediately-visible document; `false` to a draft.
    pub publish_now: bool,
    pub author_id: Option<i64>,
    pub category_ids: Vec<i64>,
    pub meta_description: Option<String>,
    /// Provenance tags linking the document back to the content record.
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaign_type_parses_known_tags() {
        assert_eq!(CampaignType::parse("general"), Some(CampaignType::General));
        assert_eq!(CampaignType::parse("news"), Some(CampaignType::News));
        assert_eq!(CampaignType::parse("video"), Some(CampaignType::Video));
        assert_eq!(CampaignType::parse("podcast"), Some(CampaignType::Podcast));
    }

    #[test]
    fn campaign_type_rejects_unknown_tags() {
        assert_eq!(CampaignType::parse("trending"), None);
        assert_eq!(CampaignType::parse(""), None);
        assert_eq!(CampaignType::parse("General"), None);
    }

    #[test]
    fn frequency_thresholds_are_exact() {
        assert_eq!(Frequency::Every15Minutes.threshold_secs(), 900);
        assert_eq!(Frequency::Every30Minutes.threshold_secs(), 1800);
        assert_eq!(Frequency::Hourly.threshold_secs(), 3600);
        assert_eq!(Frequency::Daily.threshold_secs(), 86_400);
    }

    #[test]
    fn frequency_rejects_unknown_tags() {
        assert_eq!(Frequency::parse("weekly"), None);
        assert_eq!(Frequency::parse(""), None);
    }

    #[test]
    fn frequency_round_trips_through_tags() {
        for f in [
            Frequency::Every15Minutes,
            Frequency::Every30Minutes,
            Frequency::Hourly,
            Frequency::Daily,
        ] {
            assert_eq!(Frequency::parse(f.as_str()), Some(f));
        }
    }

    #[test]
    fn settings_parse_empty_object_with_defaults() {
        let settings = CampaignSettings::from_value(&serde_json::json!({}))
            .expect("empty object should parse");
        assert_eq!(settings.word_count, None);
        assert_eq!(settings.article_type, "standard");
        assert!(!settings.enable_humanization);
        assert!(!settings.auto_publish);
        assert_eq!(settings.content_mode, "draft");
        assert!(settings.categories.is_empty());
    }

    #[test]
    fn settings_parse_partial_object() {
        let settings = CampaignSettings::from_value(&serde_json::json!({
            "word_count": 1200,
            "enable_humanization": true,
            "content_mode": "publish",
            "categories": [3, 7]
        }))
        .expect("partial object should parse");
        assert_eq!(settings.word_count, Some(1200));
        assert!(settings.enable_humanization);
        assert_eq!(settings.content_mode, "publish");
        assert_eq!(settings.categories, vec![3, 7]);
        // Untouched fields keep their defaults.
        assert_eq!(settings.article_type, "standard");
        assert!(!settings.auto_publish);
    }

    #[test]
    fn settings_reject_non_object_json() {
        assert!(CampaignSettings::from_value(&serde_json::json!("not an object")).is_err());
        assert!(CampaignSettings::from_value(&serde_json::json!(42)).is_err());
    }
}
