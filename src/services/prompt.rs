// src/services/prompt.rs
use serde::{Deserialize, Serialize};

pub const SYSTEM_PROMPT: &str = "\
You are Dr.Chat, a professional and friendly healthcare assistant. \
Provide responses in multiple short points. \
Use emojis where appropriate. \
Avoid long paragraphs, lists, bullets, or markdown. \
Always remind the user this is general guidance and not a substitute for a doctor's consultation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// One turn of a Gemini `contents` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some(Role::User),
            parts: vec![Part { text: Some(text.into()) }],
        }
    }

    /// Text parts joined together; `None` when there is no text at all.
    pub fn text(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

/// The persona instruction followed by the user's message.
pub fn build_prompt(user_msg: &str) -> Vec<Content> {
    vec![Content::user(SYSTEM_PROMPT), Content::user(user_msg)]
}
