// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the Gemini API. The `Display` text is what ends up
/// in the user-facing reply.
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("prompt was blocked: {0}")]
    Blocked(String),
}
