//! Security headers middleware for XSS, clickjacking, and isolation protection.
//!
//! Pages load scripts and styles from `/static` only and call the catalog
//! API from the browser, so `connect-src` names the API origin. The camera
//! and GPS pages need `camera` and `geolocation` for this origin.

use axum::{
    extract::{Request, State},
    http::{
        HeaderName, HeaderValue,
        header::{
            CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};
use url::Url;

use crate::state::AppState;

const PERMISSIONS_POLICY: &str = "accelerometer=(), \
     autoplay=(), \
     browsing-topics=(), \
     camera=(self), \
     display-capture=(), \
     geolocation=(self), \
     gyroscope=(), \
     magnetometer=(), \
     microphone=(), \
     payment=(), \
     usb=()";

/// Build the CSP for pages talking to `api_url`.
#[must_use]
pub fn content_security_policy(api_url: &Url) -> String {
    let api_origin = api_url.origin().ascii_serialization();
    format!(
        "default-src 'none'; \
         script-src 'self'; \
         style-src 'self'; \
         font-src 'self'; \
         img-src 'self' https: data:; \
         media-src 'self' blob: mediastream:; \
         connect-src 'self' {api_origin}; \
         frame-src https://www.openstreetmap.org; \
         object-src 'none'; \
         base-uri 'self'; \
         form-action 'self'; \
         frame-ancestors 'none'"
    )
}

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY` - Prevent clickjacking
/// - `X-Content-Type-Options: nosniff` - Prevent MIME sniffing
/// - `Referrer-Policy: no-referrer` - Zero referrer leakage
/// - `Content-Security-Policy` - See [`content_security_policy`]
/// - `Permissions-Policy` - Camera and geolocation for self, the rest denied
/// - `Cross-Origin-Opener-Policy: same-origin` - Process isolation
pub async fn security_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let csp = content_security_policy(&state.config().api_url);
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));

    if let Ok(value) = HeaderValue::from_str(&csp) {
        headers.insert(CONTENT_SECURITY_POLICY, value);
    }

    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(PERMISSIONS_POLICY),
    );

    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csp_allows_api_origin() {
        let url = Url::parse("http://localhost:8024/api").expect("url");
        let csp = content_security_policy(&url);
        assert!(csp.contains("connect-src 'self' http://localhost:8024;"));
        assert!(csp.contains("script-src 'self';"));
        assert!(!csp.contains("/api"));
        assert!(HeaderValue::from_str(&csp).is_ok());
    }

    #[test]
    fn test_permissions_policy_allows_camera_and_gps() {
        assert!(PERMISSIONS_POLICY.contains("camera=(self)"));
        assert!(PERMISSIONS_POLICY.contains("geolocation=(self)"));
        assert!(PERMISSIONS_POLICY.contains("microphone=()"));
    }
}
