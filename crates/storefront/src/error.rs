//! Unified error handling with Sentry integration.
//!
//! JSON routes return `Result<T, AppError>`; errors render as
//! `{"error": "<message>"}`. Provider failures are captured to Sentry before
//! responding.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::chat::ChatError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Chat completion provider failed.
    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Rate limited.
    #[error("Rate limited")]
    RateLimited,
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Chat(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    /// Client-facing message.
    fn message(&self) -> String {
        match self {
            // The chat widget shows provider errors verbatim
            Self::Chat(err) => err.to_string(),
            Self::BadRequest(msg) => msg.clone(),
            Self::RateLimited => {
                "Demasiados mensajes seguidos. Espera unos segundos e intenta de nuevo.".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let body = ErrorBody {
            error: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::RateLimited),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            get_status(AppError::Chat(ChatError::EmptyCompletion)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_chat_error_body_carries_error_text() {
        let err = AppError::Chat(ChatError::Api {
            status: 502,
            message: "upstream unavailable".to_string(),
        });
        let body = body_json(err.into_response()).await;
        assert_eq!(body["error"], "API error (502): upstream unavailable");
    }

    #[tokio::test]
    async fn test_bad_request_body() {
        let body = body_json(AppError::BadRequest("No message provided".to_string()).into_response())
            .await;
        assert_eq!(body, serde_json::json!({ "error": "No message provided" }));
    }
}
