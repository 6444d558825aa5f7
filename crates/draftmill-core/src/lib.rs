//! Shared domain types, collaborator traits, and configuration for draftmill.
//!
//! Everything the engine needs to orchestrate a campaign run lives here:
//! campaign/content/activity types, the `ContentStore` / `GenerationBackend` /
//! `Publisher` / `FeedFetcher` / `ResearchProvider` seams, the error taxonomy
//! those seams speak, and the env-driven application config.

pub mod app_config;
pub mod config;
pub mod error;
pub mod feeds;
pub mod traits;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{BackendError, ConfigError, PublishError, SourceError, StoreError};
pub use feeds::{load_feeds, FeedConfig, FeedsFile};
pub use traits::{ContentStore, FeedFetcher, GenerationBackend, Publisher, ResearchProvider};
pub use types::{
    ActivityEntry, ActivityStatus, Campaign, CampaignSettings, CampaignType, FeedInfo,
    FetchedItem, Frequency, GeneratedContent, NewActivityEntry, NewDocument,
    NewGeneratedContent, ResearchSummary, SourceItem,
};
