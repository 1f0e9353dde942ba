// src/services/responder.rs
use std::sync::Arc;

use tracing::{info, warn};

use crate::services::gemini::{Generation, Generator};
use crate::services::prompt::build_prompt;

pub const FALLBACK_REPLY: &str = "Sorry, I couldn't generate a reply right now.";
pub const ERROR_PREFIX: &str = "Error contacting Gemini API: ";

/// Owns the model call and turns every outcome into reply text.
#[derive(Clone)]
pub struct Responder {
    generator: Arc<dyn Generator>,
}

impl Responder {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }

    /// `user_msg` must already be trimmed, non-empty and non-emergency.
    pub async fn respond(&self, user_msg: &str) -> String {
        let prompt = build_prompt(user_msg);

        match self.generator.generate(&prompt).await {
            Generation::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    FALLBACK_REPLY.to_string()
                } else {
                    info!(reply_len = text.len(), "model replied");
                    text.to_string()
                }
            }
            Generation::Empty => {
                warn!("model returned no text");
                FALLBACK_REPLY.to_string()
            }
            Generation::Failed(description) => {
                warn!(error = %description, "model call failed");
                format!("{ERROR_PREFIX}{description}")
            }
        }
    }
}
