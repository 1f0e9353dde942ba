use axum::{Json, body::Bytes, extract::State};
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::{
    message::{ChatRequest, ChatResponse},
    services::safety::{EMERGENCY_REPLY, detect_emergency},
    state::SharedState,
};

pub const EMPTY_MESSAGE_REPLY: &str = "Please enter a message.";

/// `POST /api/chat`. Always answers 200 with a `reply`; the body is read as
/// raw bytes so a missing or malformed payload still gets a reply.
pub async fn chat_handler(State(state): State<SharedState>, body: Bytes) -> Json<ChatResponse> {
    let request_id = Uuid::new_v4();
    let span = info_span!("chat", %request_id);

    async move {
        let payload = ChatRequest::from_body(&body);
        let message = payload.trimmed_message();

        if message.is_empty() {
            info!("empty message");
            return Json(ChatResponse::new(EMPTY_MESSAGE_REPLY));
        }

        if let Some(phrase) = detect_emergency(message) {
            warn!(phrase, "emergency phrase detected, skipping model");
            return Json(ChatResponse::new(EMERGENCY_REPLY));
        }

        info!(message_len = message.len(), "forwarding to model");
        let reply = state.responder.respond(message).await;
        Json(ChatResponse::new(reply))
    }
    .instrument(span)
    .await
}
