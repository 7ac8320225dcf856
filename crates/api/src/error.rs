//! Unified error handling with Sentry integration.
//!
//! Every handler returns `Result<T, AppError>`. Errors render as JSON
//! `{"detail": "<message>"}` with the matching status code; server-side
//! failures are captured to Sentry before responding.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use vandari_core::StockError;

use crate::db::RepositoryError;

/// Message returned when a product id does not resolve.
pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";
/// Message returned when a cart line id does not resolve.
pub const CART_LINE_NOT_FOUND: &str = "Item no encontrado en el carrito";
/// Message returned when a cart quantity exceeds stock.
pub const INSUFFICIENT_STOCK: &str = "No hay suficiente stock disponible";
/// Message returned for an update payload with no fields.
pub const EMPTY_UPDATE: &str = "No hay campos para actualizar";

/// Application-level error type for the catalog API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Well-formed body that does not match the expected shape.
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),
}

impl AppError {
    /// Product lookup failed.
    #[must_use]
    pub fn product_not_found() -> Self {
        Self::NotFound(PRODUCT_NOT_FOUND.to_string())
    }

    /// Cart line lookup failed.
    #[must_use]
    pub fn cart_line_not_found() -> Self {
        Self::NotFound(CART_LINE_NOT_FOUND.to_string())
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Client-facing message.
    fn detail(&self) -> String {
        match self {
            Self::Database(err) => format!("Error interno de base de datos: {err}"),
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::UnprocessableEntity(msg) => {
                msg.clone()
            }
        }
    }
}

impl From<StockError> for AppError {
    fn from(err: StockError) -> Self {
        match err {
            StockError::Insufficient { .. } => Self::BadRequest(INSUFFICIENT_STOCK.to_string()),
            StockError::NonPositiveQuantity(_) => {
                Self::BadRequest("La cantidad debe ser mayor que cero".to_string())
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        // Missing fields and wrong types are 422; syntax and content-type are 400
        if rejection.status() == StatusCode::UNPROCESSABLE_ENTITY {
            Self::UnprocessableEntity(rejection.body_text())
        } else {
            Self::BadRequest(rejection.body_text())
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
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
            detail: self.detail(),
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
    fn test_app_error_display() {
        let err = AppError::NotFound("product-123".to_string());
        assert_eq!(err.to_string(), "Not found: product-123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::product_not_found()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::UnprocessableEntity("test".to_string())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            get_status(AppError::Database(RepositoryError::Database(
                sqlx::Error::RowNotFound
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_stock_errors_are_bad_requests() {
        let err = AppError::from(StockError::Insufficient {
            requested: 12,
            available: 10,
        });
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg == INSUFFICIENT_STOCK));

        let err = AppError::from(StockError::NonPositiveQuantity(0));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let body = body_json(AppError::cart_line_not_found().into_response()).await;
        assert_eq!(body["detail"], CART_LINE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_internal_body_carries_underlying_message() {
        let err = AppError::Database(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        let body = body_json(err.into_response()).await;
        let detail = body["detail"].as_str().expect("detail string");
        assert!(detail.starts_with("Error interno de base de datos"));
        assert!(detail.contains("pool timed out"));
    }
}
