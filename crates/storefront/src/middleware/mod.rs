//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, permissions policy)
//! 5. Rate limiting on `/chat` (governor), with JSON 429 bodies

pub mod rate_limit;
pub mod request_id;
pub mod security_headers;

pub use rate_limit::{chat_rate_limiter, rate_limit_response_middleware};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
