// src/api/http/chat.rs

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::persona::Persona;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    /// The shipped client resolves its preset before sending, so this is
    /// normally populated; absent (or empty) falls back inside the relay.
    pub persona: Option<Persona>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
}

pub async fn chat_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    let result: ApiResult<_> = async {
        // Reject before any provider work; an empty utterance is a client
        // error, not a relay call.
        let message = request.message.as_deref().map(str::trim).unwrap_or("");
        if message.is_empty() {
            return Err(ApiError::bad_request("message is required"));
        }

        info!(
            "Chat request: {} chars, persona {}",
            message.len(),
            if request.persona.is_some() { "supplied" } else { "fallback" }
        );

        let text = app_state
            .relay
            .complete(message, request.persona.as_ref())
            .await?;

        Ok(Json(ChatResponse { text }))
    }
    .await;

    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}
