//! The draftmill engine: campaign scheduling, the content pipeline, source
//! aggregation, quality scoring, and the publish step.
//!
//! Everything here is written against the collaborator traits in
//! `draftmill-core`, so the whole engine runs against in-memory fakes in
//! tests and against Postgres, Ollama, and a CMS in production.

pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod publish;
pub mod scheduler;
pub mod scorer;
pub mod sources;
mod strategy;

pub use error::EngineError;
pub use fetch::HttpFeedFetcher;
pub use pipeline::{ContentPipeline, RunOutcome};
pub use publish::publish_content;
pub use scheduler::{is_due, CampaignScheduler, TickReport};
pub use scorer::{score, strip_html, QualityReport};
pub use sources::{find_matches, Aggregation, FeedFailure, MAX_MATCHES};
