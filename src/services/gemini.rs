// src/services/gemini.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GeminiConfig;
use crate::error::GeminiError;
use crate::services::prompt::Content;

/// Outcome of a single model call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Text(String),
    Empty,
    Failed(String),
}

impl From<Result<Option<String>, GeminiError>> for Generation {
    fn from(result: Result<Option<String>, GeminiError>) -> Self {
        match result {
            Ok(Some(text)) if !text.trim().is_empty() => Generation::Text(text),
            Ok(_) => Generation::Empty,
            Err(e) => Generation::Failed(e.to_string()),
        }
    }
}

/// Anything that can turn a prompt into model output.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &[Content]) -> Generation;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate. A blocked prompt is an error.
    pub fn text(&self) -> Result<Option<String>, GeminiError> {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
        {
            return Err(GeminiError::Blocked(reason));
        }

        Ok(self
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(Content::text))
    }

    /// Why the first candidate stopped, e.g. `STOP` or `SAFETY`.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    pub async fn generate_content(
        &self,
        contents: &[Content],
    ) -> Result<GenerateContentResponse, GeminiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GeminiError::MissingApiKey)?;

        debug!(model = %self.config.model, turns = contents.len(), "calling Gemini");

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest { contents })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!(%status, "Gemini returned an error");
            return Err(GeminiError::Api { status, message });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, prompt: &[Content]) -> Generation {
        let result = self.generate_content(prompt).await.and_then(|resp| {
            let text = resp.text();
            if matches!(text, Ok(None)) {
                warn!(
                    finish_reason = resp.finish_reason().unwrap_or("none"),
                    "Gemini returned no text"
                );
            }
            text
        });
        Generation::from(result)
    }
}
