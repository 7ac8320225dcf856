//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `HF_TOKEN` - Bearer token for the chat completion provider
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 5000)
//! - `STOREFRONT_API_URL` - Catalog API URL used by page scripts
//!   (default: <http://localhost:8024/api>)
//! - `STOREFRONT_STATIC_DIR` - Static asset directory (default: crates/storefront/static)
//! - `CHAT_BASE_URL` - OpenAI-compatible API base (default: <https://router.huggingface.co/v1>)
//! - `CHAT_MODEL` - Completion model (default: moonshotai/Kimi-K2-Instruct)
//! - `CHAT_TIMEOUT_SECS` - Completion request timeout (default: 60)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Trace sample rate, 0.0 to 1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Catalog API base URL handed to page scripts
    pub api_url: Url,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Chat completion provider configuration
    pub chat: ChatConfig,
    /// Sentry error tracking configuration
    pub sentry: SentryConfig,
}

/// Chat completion provider configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct ChatConfig {
    /// Bearer token (`HF_TOKEN`)
    pub api_token: SecretString,
    /// API base; requests go to `{base_url}/chat/completions`
    pub base_url: Url,
    /// Model identifier
    pub model: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_token", &"[REDACTED]")
            .field("base_url", &self.base_url.as_str())
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Sentry error tracking configuration.
#[derive(Debug, Clone, Default)]
pub struct SentryConfig {
    /// Sentry DSN; tracking is disabled when absent
    pub dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub environment: Option<String>,
    /// Error sample rate (0.0 to 1.0)
    pub sample_rate: f32,
    /// Traces sample rate for performance monitoring (0.0 to 1.0)
    pub traces_sample_rate: f32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup(env: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: parse_or_default(env, "STOREFRONT_HOST", "127.0.0.1")?,
            port: parse_or_default(env, "STOREFRONT_PORT", "5000")?,
            api_url: parse_url(env, "STOREFRONT_API_URL", "http://localhost:8024/api")?,
            static_dir: env("STOREFRONT_STATIC_DIR")
                .map_or_else(|| PathBuf::from("crates/storefront/static"), PathBuf::from),
            chat: ChatConfig::from_lookup(env)?,
            sentry: SentryConfig::from_lookup(env)?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Catalog API URL as page scripts should see it, without a trailing slash.
    #[must_use]
    pub fn api_url(&self) -> &str {
        self.api_url.as_str().trim_end_matches('/')
    }
}

impl ChatConfig {
    fn from_lookup(env: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_token = env("HF_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .map(SecretString::from)
            .ok_or_else(|| ConfigError::MissingEnvVar("HF_TOKEN".to_string()))?;

        Ok(Self {
            api_token,
            base_url: parse_url(env, "CHAT_BASE_URL", "https://router.huggingface.co/v1")?,
            model: env("CHAT_MODEL").unwrap_or_else(|| "moonshotai/Kimi-K2-Instruct".to_string()),
            timeout: Duration::from_secs(parse_or_default(env, "CHAT_TIMEOUT_SECS", "60")?),
        })
    }
}

impl SentryConfig {
    fn from_lookup(env: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            dsn: env("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            environment: env("SENTRY_ENVIRONMENT"),
            sample_rate: parse_or_default(env, "SENTRY_SAMPLE_RATE", "1.0")?,
            traces_sample_rate: parse_or_default(env, "SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }
}

/// Parse `key` from the environment, falling back to `default`.
fn parse_or_default<T>(
    env: &dyn Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env(key)
        .unwrap_or_else(|| default.to_string())
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse an absolute HTTP(S) URL from `key`, falling back to `default`.
fn parse_url(
    env: &dyn Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<Url, ConfigError> {
    let url: Url = parse_or_default(env, key, default)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme: {}", url.scheme()),
        ));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn test_defaults() {
        let config =
            StorefrontConfig::from_lookup(&lookup(&[("HF_TOKEN", "hf_test")])).expect("config");

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:5000");
        assert_eq!(config.api_url(), "http://localhost:8024/api");
        assert_eq!(config.static_dir, PathBuf::from("crates/storefront/static"));
        assert_eq!(config.chat.base_url.as_str(), "https://router.huggingface.co/v1");
        assert_eq!(config.chat.model, "moonshotai/Kimi-K2-Instruct");
        assert_eq!(config.chat.timeout, Duration::from_secs(60));
        assert_eq!(config.chat.api_token.expose_secret(), "hf_test");
        assert!(config.sentry.dsn.is_none());
    }

    #[test]
    fn test_missing_token() {
        let err = StorefrontConfig::from_lookup(&lookup(&[])).expect_err("token required");
        assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "HF_TOKEN"));

        let err =
            StorefrontConfig::from_lookup(&lookup(&[("HF_TOKEN", "  ")])).expect_err("blank");
        assert!(matches!(err, ConfigError::MissingEnvVar(_)));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = StorefrontConfig::from_lookup(&lookup(&[
            ("HF_TOKEN", "hf_test"),
            ("CHAT_BASE_URL", "not a url"),
        ]))
        .expect_err("invalid url");
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "CHAT_BASE_URL"));

        let err = StorefrontConfig::from_lookup(&lookup(&[
            ("HF_TOKEN", "hf_test"),
            ("CHAT_BASE_URL", "ftp://example.com"),
        ]))
        .expect_err("unsupported scheme");
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let config = StorefrontConfig::from_lookup(&lookup(&[
            ("HF_TOKEN", "hf_test"),
            ("STOREFRONT_API_URL", "https://api.vandari.co/api/"),
        ]))
        .expect("config");
        assert_eq!(config.api_url(), "https://api.vandari.co/api");
    }

    #[test]
    fn test_invalid_timeout() {
        let err = StorefrontConfig::from_lookup(&lookup(&[
            ("HF_TOKEN", "hf_test"),
            ("CHAT_TIMEOUT_SECS", "soon"),
        ]))
        .expect_err("invalid timeout");
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "CHAT_TIMEOUT_SECS"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = StorefrontConfig::from_lookup(&lookup(&[("HF_TOKEN", "hf_very_secret")]))
            .expect("config");
        let debug = format!("{config:?}");
        assert!(!debug.contains("hf_very_secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
