use draftmill_core::BackendError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OllamaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("deserialize error in {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("invalid Ollama host '{0}'")]
    InvalidHost(String),
}

impl From<OllamaError> for BackendError {
    fn from(e: OllamaError) -> Self {
        match e {
            OllamaError::Http(inner) => BackendError::Unavailable(inner.to_string()),
            OllamaError::Deserialize { context, source } => {
                BackendError::Malformed(format!("{context}: {source}"))
            }
            OllamaError::EmptyResponse => BackendError::EmptyResponse,
            OllamaError::InvalidHost(host) => BackendError::Unavailable(host),
        }
    }
}
