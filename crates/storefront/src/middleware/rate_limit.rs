//! Rate limiting middleware using governor and `tower_governor`.
//!
//! Only the chatbot endpoint is limited: every message costs a completion
//! call against the provider quota.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request},
    http::{StatusCode, header::RETRY_AFTER},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{GovernorError, GovernorLayer, governor::GovernorConfigBuilder};

use crate::error::AppError;

/// Key extractor that prefers proxy headers and falls back to the peer
/// address.
///
/// Order: `CF-Connecting-IP`, first `X-Forwarded-For` hop, `X-Real-IP`, then
/// the socket peer from `ConnectInfo`. Requests with none of these share the
/// unspecified-address bucket.
#[derive(Clone, Copy)]
pub struct ClientIpKeyExtractor;

impl tower_governor::key_extractor::KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &axum::http::Request<T>) -> Result<Self::Key, GovernorError> {
        Ok(client_ip(req).unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)))
    }
}

/// Best-effort client IP for `req`.
fn client_ip<T>(req: &axum::http::Request<T>) -> Option<IpAddr> {
    let headers = req.headers();
    let header_ip = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split(',').next())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
    };

    header_ip("cf-connecting-ip")
        .or_else(|| header_ip("x-forwarded-for"))
        .or_else(|| header_ip("x-real-ip"))
        .or_else(|| {
            req.extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip())
        })
}

/// Rate limiter layer type for Axum.
pub type RateLimiterLayer =
    GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Create rate limiter for the chatbot: ~10 messages per minute per IP.
///
/// Configuration: 1 token every 6 seconds (replenish), burst of 5.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid positive
/// integers (`per_second(6)` and `burst_size(5)`), which are always accepted
/// by `GovernorConfigBuilder`.
#[must_use]
pub fn chat_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor)
        .per_second(6)
        .burst_size(5)
        .finish()
        .expect("rate limiter config with per_second(6) and burst_size(5) is valid");
    GovernorLayer::new(Arc::new(config))
}

/// Rewrite the limiter's plain-text 429 into the JSON error shape used by
/// `/chat`, keeping `Retry-After`.
pub async fn rate_limit_response_middleware(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if response.status() != StatusCode::TOO_MANY_REQUESTS {
        return response;
    }

    tracing::warn!("Chat rate limit exceeded");
    let retry_after = response.headers().get(RETRY_AFTER).cloned();
    let mut limited = AppError::RateLimited.into_response();
    if let Some(value) = retry_after {
        limited.headers_mut().insert(RETRY_AFTER, value);
    }
    limited
}
