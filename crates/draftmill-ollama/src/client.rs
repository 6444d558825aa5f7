//! HTTP client for the Ollama `/api/generate` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use draftmill_core::{BackendError, GenerationBackend, SourceItem};

use crate::error::OllamaError;
use crate::prompts;
use crate::types::{GenerateOptions, GenerateRequest, GenerateResponse, Generation};

/// Client for an Ollama-compatible generation backend.
///
/// Holds the HTTP client, host, and default model. Use [`OllamaClient::new`]
/// for production or point `host` at a mock server in tests. The request
/// timeout should be minutes-scale: model latency dominates.
pub struct OllamaClient {
    client: Client,
    host: String,
    model: String,
}

impl OllamaClient {
    /// Creates a new client for the given host (e.g. `http://localhost:11434`).
    ///
    /// # Errors
    ///
    /// Returns [`OllamaError::InvalidHost`] if the host is not an http(s) URL,
    /// or [`OllamaError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(host: &str, model: &str, timeout_secs: u64) -> Result<Self, OllamaError> {
        if !host.starts_with("http://") && !host.starts_with("https://") {
            return Err(OllamaError::InvalidHost(host.to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("draftmill/0.1 (content-automation)")
            .build()?;

        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    /// Sends one generate call and returns the completion.
    ///
    /// # Errors
    ///
    /// - [`OllamaError::Http`] on network failure or a non-2xx status.
    /// - [`OllamaError::Deserialize`] if the body is not the expected JSON.
    /// - [`OllamaError::EmptyResponse`] if the `response` field is missing
    ///   or blank.
    pub async fn generate(
        &self,
        prompt: &str,
        system: &str,
        options: GenerateOptions,
    ) -> Result<Generation, OllamaError> {
        let url = format!("{}/api/generate", self.host);
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            system,
            stream: false,
            options,
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| OllamaError::Deserialize {
                context: url.clone(),
                source: e,
            })?;

        match parsed.response {
            Some(text) if !text.trim().is_empty() => Ok(Generation {
                text,
                eval_count: parsed.eval_count,
                eval_duration: parsed.eval_duration,
            }),
            _ => Err(OllamaError::EmptyResponse),
        }
    }

    /// Round-trips a fixed probe prompt to verify the backend is reachable
    /// and the model responds. Returns the first 100 characters of the reply.
    ///
    /// # Errors
    ///
    /// Propagates any [`OllamaError`] from the underlying generate call.
    pub async fn test_connection(&self) -> Result<String, OllamaError> {
        let generation = self
            .generate(
                "Respond with \"AI connection successful\" if you can read this message.",
                "",
                GenerateOptions::default(),
            )
            .await?;
        Ok(prompts::truncate_chars(&generation.text, 100).to_string())
    }

    /// Word count of a body, used to size humanization token budgets.
    fn word_count(body: &str) -> u32 {
        u32::try_from(body.split_whitespace().count()).unwrap_or(u32::MAX)
    }
}

#[async_trait]
impl GenerationBackend for OllamaClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate_article(
        &self,
        topic: &str,
        article_type: &str,
        word_count: u32,
        sources: &[SourceItem],
    ) -> Result<String, BackendError> {
        let prompt = prompts::article_prompt(topic, article_type, word_count, sources);
        let options = GenerateOptions {
            temperature: 0.4,
            top_p: 0.9,
            num_predict: word_count.saturating_mul(2),
        };
        let generation = self
            .generate(&prompt, prompts::system_message(article_type), options)
            .await?;
        Ok(generation.text)
    }

    async fn generate_titles(
        &self,
        body: &str,
        article_type: &str,
    ) -> Result<Vec<String>, BackendError> {
        let prompt = prompts::title_prompt(body, article_type);
        let options = GenerateOptions {
            temperature: 0.6,
            num_predict: 200,
            ..GenerateOptions::default()
        };
        let generation = self.generate(&prompt, prompts::TITLE_SYSTEM, options).await?;
        let titles: Vec<String> = generation
            .text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect();
        if titles.is_empty() {
            return Err(BackendError::EmptyResponse);
        }
        Ok(titles)
    }

    async fn generate_meta_description(
        &self,
        body: &str,
        title: &str,
    ) -> Result<String, BackendError> {
        let prompt = prompts::meta_description_prompt(body, title);
        let options = GenerateOptions {
            temperature: 0.4,
            num_predict: 100,
            ..GenerateOptions::default()
        };
        let generation = self.generate(&prompt, prompts::META_SYSTEM, options).await?;
        Ok(generation.text.trim().to_string())
    }

    async fn extract_keywords(&self, body: &str, count: usize) -> Result<String, BackendError> {
        let prompt = prompts::keywords_prompt(body, count);
        let options = GenerateOptions {
            temperature: 0.2,
            num_predict: 200,
            ..GenerateOptions::default()
        };
        let generation = self
            .generate(&prompt, prompts::KEYWORDS_SYSTEM, options)
            .await?;
        Ok(generation.text.trim().to_string())
    }

    async fn humanize(&self, body: &str) -> Result<String, BackendError> {
        let prompt = prompts::humanize_prompt(body);
        let options = GenerateOptions {
            temperature: 0.5,
            top_p: 0.9,
            num_predict: Self::word_count(body).saturating_mul(2),
        };
        let generation = self
            .generate(&prompt, prompts::HUMANIZE_SYSTEM, options)
            .await?;
        Ok(generation.text)
    }
}
