// src/routes/chat.rs
use axum::{Json, extract::State};

use crate::{
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

// A JSON `null` body counts as `{}`.
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<Option<ChatRequest>>,
) -> Json<ChatResponse> {
    let payload = payload.unwrap_or_default();
    Json(state.relay.handle_chat(&payload.message()).await)
}
