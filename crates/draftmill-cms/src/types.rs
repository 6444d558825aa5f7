use serde::{Deserialize, Serialize};

/// Request body for creating a post on the target.
#[derive(Debug, Serialize)]
pub(crate) struct CreatePostRequest<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<&'a str>,
    pub meta: serde_json::Map<String, serde_json::Value>,
}

/// The subset of the create-post response we consume.
#[derive(Debug, Deserialize)]
pub(crate) struct CreatePostResponse {
    pub id: i64,
}

/// Structured error body the target returns on rejection.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: Option<String>,
}
