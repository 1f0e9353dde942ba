mod common;

use common::MockGenerator;
use healthcare_chatbot::services::gemini::Generation;
use healthcare_chatbot::services::prompt::{Role, SYSTEM_PROMPT};
use healthcare_chatbot::services::responder::{ERROR_PREFIX, FALLBACK_REPLY, Responder};

#[tokio::test]
async fn returns_trimmed_model_text() {
    let mock = MockGenerator::text("\n  Try resting 💤. Drink water 💧.  \n");
    let responder = Responder::new(mock.clone());

    let reply = responder.respond("I have a mild headache").await;

    assert_eq!(reply, "Try resting 💤. Drink water 💧.");
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn sends_persona_then_user_message() {
    let mock = MockGenerator::text("ok");
    let responder = Responder::new(mock.clone());

    responder.respond("Is ibuprofen safe with coffee?").await;

    let prompts = mock.prompts();
    assert_eq!(prompts.len(), 1);
    let prompt = &prompts[0];
    assert_eq!(prompt.len(), 2);
    assert_eq!(prompt[0].role, Some(Role::User));
    assert_eq!(prompt[0].text().as_deref(), Some(SYSTEM_PROMPT));
    assert_eq!(prompt[1].role, Some(Role::User));
    assert_eq!(prompt[1].text().as_deref(), Some("Is ibuprofen safe with coffee?"));
}

#[tokio::test]
async fn empty_generation_uses_fallback() {
    let responder = Responder::new(MockGenerator::new(Generation::Empty));
    assert_eq!(responder.respond("hello").await, FALLBACK_REPLY);
}

#[tokio::test]
async fn blank_text_uses_fallback() {
    let responder = Responder::new(MockGenerator::text("   \n "));
    assert_eq!(responder.respond("hello").await, FALLBACK_REPLY);
}

#[tokio::test]
async fn failure_is_embedded_in_reply() {
    let responder = Responder::new(MockGenerator::new(Generation::Failed(
        "403 Forbidden: API key not valid.".to_string(),
    )));

    let reply = responder.respond("hello").await;

    assert!(reply.starts_with(ERROR_PREFIX));
    assert_eq!(
        reply,
        "Error contacting Gemini API: 403 Forbidden: API key not valid."
    );
}
