#![allow(dead_code)]

use async_trait::async_trait;
use healthcare_chatbot::services::gemini::{Generation, Generator};
use healthcare_chatbot::services::prompt::Content;
use std::sync::{Arc, Mutex};

/// Returns a fixed outcome and records every prompt it receives.
pub struct MockGenerator {
    outcome: Generation,
    prompts: Mutex<Vec<Vec<Content>>>,
}

impl MockGenerator {
    pub fn new(outcome: Generation) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn text(text: &str) -> Arc<Self> {
        Self::new(Generation::Text(text.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<Vec<Content>> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(&self, prompt: &[Content]) -> Generation {
        self.prompts.lock().unwrap().push(prompt.to_vec());
        self.outcome.clone()
    }
}
