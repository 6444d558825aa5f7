//! Client for Ollama-compatible generation backends.
//!
//! Wraps the `POST /api/generate` endpoint with typed request/response
//! structs and per-task prompt builders (article, titles, meta description,
//! keyword extraction, humanization). Implements
//! [`draftmill_core::GenerationBackend`] so the engine never sees HTTP.

pub mod client;
pub mod error;
pub mod prompts;
pub mod types;

pub use client::OllamaClient;
pub use error::OllamaError;
pub use types::{GenerateOptions, Generation};
