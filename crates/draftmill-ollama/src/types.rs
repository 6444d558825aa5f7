use serde::{Deserialize, Serialize};

/// Sampling options sent with a generate call.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerateOptions {
    pub temperature: f32,
    pub top_p: f32,
    /// Token budget for the completion (Ollama's `num_predict`).
    pub num_predict: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.8,
            num_predict: 4000,
        }
    }
}

/// Request body for `POST /api/generate`.
#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub system: &'a str,
    pub stream: bool,
    pub options: GenerateOptions,
}

/// The subset of the generate response the pipeline consumes.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    pub response: Option<String>,
    #[serde(default)]
    pub eval_count: u64,
    #[serde(default)]
    pub eval_duration: u64,
}

/// A completed generation with token/timing counters when reported.
#[derive(Debug, Clone)]
pub struct Generation {
    pub text: String,
    pub eval_count: u64,
    pub eval_duration: u64,
}
