//! HTTP route handlers for the catalog API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                          - Liveness
//! GET    /health/ready                    - Database connectivity
//!
//! # Products
//! GET    /api/productos                   - List (categoria, destacado, orden)
//! POST   /api/productos                   - Create
//! GET    /api/productos/{id}              - Detail
//! PUT    /api/productos/{id}              - Sparse update
//! DELETE /api/productos/{id}              - Delete
//!
//! # Cart
//! POST   /api/carrito                     - Add or increment
//! GET    /api/carrito/{usuario_id}        - Cart for a user
//! PUT    /api/carrito/{id}?cantidad=      - Overwrite line quantity
//! DELETE /api/carrito/{id}                - Remove line
//! DELETE /api/carrito/usuario/{usuario_id} - Clear a user's cart
//! ```
//!
//! `GET /api/carrito/{id}` reads a user id while `PUT` and `DELETE` on the same
//! path read a cart line id; they share one route entry.

pub mod cart;
pub mod products;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
};
use serde::Serialize;

use crate::state::AppState;

/// `{"mensaje": ...}` confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensaje: &'static str,
}

impl MessageResponse {
    #[must_use]
    pub const fn new(mensaje: &'static str) -> Self {
        Self { mensaje }
    }
}

/// Create the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route(
            "/api/productos",
            get(products::list).post(products::create),
        )
        .route(
            "/api/productos/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::delete),
        )
        .route("/api/carrito", post(cart::add))
        .route(
            "/api/carrito/{id}",
            get(cart::show)
                .put(cart::update_quantity)
                .delete(cart::remove),
        )
        .route("/api/carrito/usuario/{usuario_id}", delete(cart::clear))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
