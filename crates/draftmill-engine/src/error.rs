use draftmill_core::{BackendError, PublishError, StoreError};
use thiserror::Error;

/// Failures a single pipeline run or scheduler tick can surface.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("no source material: {0}")]
    EmptySource(String),

    #[error("generation failed: {0}")]
    Generation(#[from] BackendError),

    #[error("persistence failed: {0}")]
    Persistence(#[from] StoreError),

    #[error("publish failed: {0}")]
    Publish(#[from] PublishError),

    #[error("unsupported campaign type '{0}'")]
    UnsupportedType(String),
}
