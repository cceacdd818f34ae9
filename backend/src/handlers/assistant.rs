//! HTTP handlers for the plant assistant

use axum::{extract::State, Json};
use shared::{AssistantReply, AssistantRequest, ChatMessage};

use crate::error::AppResult;
use crate::services::AssistantService;
use crate::AppState;

/// Opening message of a conversation
pub async fn get_greeting(State(state): State<AppState>) -> Json<ChatMessage> {
    let service = AssistantService::new(state.config.assistant.reply_delay());
    Json(service.greeting())
}

/// Send a message (text and/or photo) to the assistant
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<AssistantRequest>,
) -> AppResult<Json<AssistantReply>> {
    let service = AssistantService::new(state.config.assistant.reply_delay());
    let reply = service.reply(request).await?;
    Ok(Json(reply))
}
