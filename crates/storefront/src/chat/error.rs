//! Error types for the chat completion client.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when calling the completion provider.
#[derive(Debug, Error)]
pub enum ChatError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the provider's error body, or the raw body.
        message: String,
    },

    /// Token rejected by the provider.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limited by the provider.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Response body could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Provider answered without any completion text.
    #[error("completion contained no choices")]
    EmptyCompletion,

    /// Client could not be built from configuration.
    #[error("invalid chat client configuration: {0}")]
    Config(String),
}

/// Error body used by OpenAI-compatible providers.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Nested error details.
///
/// Some routers send `error` as a bare string; that shape is handled by
/// [`ApiErrorResponse::message_from`].
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

impl ApiErrorResponse {
    /// Best-effort message from an error body.
    #[must_use]
    pub fn message_from(body: &str) -> String {
        #[derive(Deserialize)]
        struct Flat {
            error: String,
        }

        if let Ok(parsed) = serde_json::from_str::<Self>(body) {
            return parsed.error.message;
        }
        serde_json::from_str::<Flat>(body).map_or_else(|_| body.to_string(), |flat| flat.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::RateLimited(30);
        assert_eq!(err.to_string(), "rate limited, retry after 30 seconds");

        let err = ChatError::Api {
            status: 503,
            message: "model overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "API error (503): model overloaded");
    }

    #[test]
    fn test_message_from_nested_body() {
        let body = r#"{"error":{"message":"Model not found","type":"invalid_request_error"}}"#;
        assert_eq!(ApiErrorResponse::message_from(body), "Model not found");
    }

    #[test]
    fn test_message_from_flat_body() {
        let body = r#"{"error":"Invalid credentials in Authorization header"}"#;
        assert_eq!(
            ApiErrorResponse::message_from(body),
            "Invalid credentials in Authorization header"
        );
    }

    #[test]
    fn test_message_from_plain_text() {
        assert_eq!(ApiErrorResponse::message_from("Bad Gateway"), "Bad Gateway");
    }
}
