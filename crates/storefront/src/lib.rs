//! Vandari storefront.
//!
//! Serves the public pages and static assets, and relays chatbot messages to
//! a hosted chat completion API. Catalog and cart data live in the separate
//! `vandari-api` service; pages talk to it from the browser.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod chat;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use state::AppState;

/// Build the storefront router with its middleware stack.
///
/// Sentry layers are added by the binary.
pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config().static_dir);

    routes::routes()
        .nest_service("/static", static_files)
        .fallback(routes::pages::not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
