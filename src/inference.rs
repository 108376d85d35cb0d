// src/inference.rs
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Model invoked when the request does not select one via `model_config`.
pub const DEFAULT_MODEL: &str = "@cf/meta/llama-3.1-8b-instruct";

/// Raw text fields a generation model may return. Which of `response` and
/// `answer` is populated varies by model family, so callers fall back across
/// them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InferenceReply {
    pub response: Option<String>,
    pub answer: Option<String>,
    pub thinking: Option<String>,
}

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("{0}")]
    ModelError(String),
}

/// Text-generation capability behind the chat endpoint. Injected through
/// `AppState` so tests can substitute a scripted model.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Runs `model` over `prompt` once. No retries; a failure is surfaced to
    /// the caller as-is.
    async fn invoke(&self, model: &str, prompt: &str) -> Result<InferenceReply, InferenceError>;
}
