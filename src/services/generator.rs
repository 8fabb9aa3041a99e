// src/services/generator.rs
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single generation call.
///
/// The display strings are what the error classifier sees, so they keep the
/// upstream status line and message intact.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("[{status}] {message}")]
    Api { status: StatusCode, message: String },

    #[error("request to Gemini failed: {0}")]
    Transport(reqwest::Error),

    #[error("response was blocked: {0}")]
    Blocked(String),

    #[error("Gemini returned no text")]
    Empty,
}

impl From<reqwest::Error> for GenerateError {
    // The request URL would otherwise end up in the classified text.
    fn from(err: reqwest::Error) -> Self {
        GenerateError::Transport(err.without_url())
    }
}

/// Something that turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;

    /// Model identifier reported back to clients.
    fn model(&self) -> &str;
}
