use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read feeds file {path}: {source}")]
    FeedsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse feeds file: {0}")]
    FeedsFileParse(#[from] serde_yaml::Error),

    #[error("invalid feeds config: {0}")]
    InvalidFeeds(String),
}

/// Errors surfaced by [`crate::ContentStore`] implementations.
///
/// Store backends carry richer error types internally and flatten them into
/// these variants at the trait boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("store error: {0}")]
    Backend(String),
}

/// Errors surfaced by [`crate::GenerationBackend`] implementations.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("generation backend unreachable: {0}")]
    Unavailable(String),

    #[error("generation backend returned an empty response")]
    EmptyResponse,

    #[error("malformed backend response: {0}")]
    Malformed(String),
}

/// Errors surfaced by [`crate::Publisher`] implementations.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("publishing target unreachable: {0}")]
    Unreachable(String),

    #[error("publishing target rejected the document: {0}")]
    Rejected(String),
}

/// Errors surfaced by [`crate::FeedFetcher`] implementations.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("feed fetch failed: {0}")]
    Http(String),

    #[error("feed parse failed: {0}")]
    Parse(String),
}
