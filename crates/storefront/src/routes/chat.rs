//! Chatbot relay handler.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Error text for a missing, empty or unreadable message.
pub const NO_MESSAGE: &str = "No message provided";

/// `POST /chat` request body.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /chat` response body.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// `POST /chat`
///
/// Any body that does not carry a non-blank string `message` is a 400.
pub async fn chat(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>> {
    let message = match payload {
        Ok(Json(body)) => body.message,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable chat body");
            None
        }
    }
    .filter(|message| !message.trim().is_empty())
    .ok_or_else(|| AppError::BadRequest(NO_MESSAGE.to_string()))?;

    let reply = state.chat().reply(&message).await?;

    Ok(Json(ChatReply { reply }))
}
