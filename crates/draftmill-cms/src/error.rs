use draftmill_core::PublishError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CmsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CMS rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("deserialize error in {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid CMS base URL '{0}'")]
    InvalidBaseUrl(String),
}

impl From<CmsError> for PublishError {
    fn from(e: CmsError) -> Self {
        match e {
            CmsError::Http(inner) => PublishError::Unreachable(inner.to_string()),
            CmsError::Api { status, message } => {
                PublishError::Rejected(format!("{status}: {message}"))
            }
            CmsError::Deserialize { context, source } => {
                PublishError::Rejected(format!("malformed response from {context}: {source}"))
            }
            CmsError::InvalidBaseUrl(url) => PublishError::Unreachable(url),
        }
    }
}
