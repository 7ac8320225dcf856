//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health         - Liveness
//!
//! # Pages
//! GET  /               - Home (also /index.html)
//! GET  /tienda.html    - Shop
//! GET  /camara.html    - Camera
//! GET  /gps.html       - Store location
//! GET  /login.html     - Login (client-side only)
//! GET  /registro.html  - Registration (client-side only)
//! GET  /carrito.html   - Cart
//! GET  /chatbot.html   - Chatbot
//!
//! # Chatbot (rate limited)
//! POST /chat           - {"message"} -> {"reply"}
//! ```

pub mod chat;
pub mod pages;

use axum::{
    Router,
    middleware,
    routing::{get, post},
};

use crate::middleware::{chat_rate_limiter, rate_limit_response_middleware};
use crate::state::AppState;

/// Create the storefront router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/", get(pages::index))
        .route("/index.html", get(pages::index))
        .route("/tienda.html", get(pages::shop))
        .route("/camara.html", get(pages::camera))
        .route("/gps.html", get(pages::gps))
        .route("/login.html", get(pages::login))
        .route("/registro.html", get(pages::register))
        .route("/carrito.html", get(pages::cart))
        .route("/chatbot.html", get(pages::chatbot))
        .merge(chat_routes())
}

/// Create the chatbot router.
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat::chat))
        .layer(chat_rate_limiter())
        .layer(middleware::from_fn(rate_limit_response_middleware))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
