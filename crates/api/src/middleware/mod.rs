//! HTTP middleware stack for the catalog API.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (add unique ID to each request)
//! 4. CORS (any origin)

pub mod request_id;

pub use request_id::request_id_middleware;
