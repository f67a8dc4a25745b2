//! Chat request handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use tracing::debug;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatRequest, ChatResponse};

/// `POST /api/chat` — classify the message and return an empathetic reply.
///
/// The body is read as raw bytes rather than through the typed `Json`
/// extractor: malformed JSON must behave like an empty body, not reject
/// the request.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ChatResponse>> {
    let req = ChatRequest::from_body(&body);
    if req.text.is_empty() {
        return Err(AppError::Validation("No text provided.".into()));
    }

    let emotion = empath_core::classify(&req.text);
    let reply = empath_core::compose(&state.phrases, &req.text, emotion, &mut rand::rng());

    debug!(session_id = %req.session_id, %emotion, "composed reply");

    Ok(Json(ChatResponse {
        emotion,
        scores: serde_json::Map::new(),
        reply,
        history: Vec::new(),
    }))
}
