//! Subcommand implementations.

pub mod migrate;
pub mod seed;

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection or query error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Resolve the catalog database URL from the environment.
fn database_url(env: &dyn Fn(&str) -> Option<String>) -> Result<SecretString, CommandError> {
    env("API_DATABASE_URL")
        .or_else(|| env("DATABASE_URL"))
        .filter(|url| !url.is_empty())
        .map(SecretString::from)
        .ok_or(CommandError::MissingEnvVar("API_DATABASE_URL"))
}

/// Connect to the catalog database.
async fn connect() -> Result<PgPool, CommandError> {
    dotenvy::dotenv().ok();

    let url = database_url(&|key: &str| std::env::var(key).ok())?;

    tracing::info!("Connecting to catalog database...");
    Ok(PgPool::connect(url.expose_secret()).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_prefers_api_var() {
        let env = |key: &str| match key {
            "API_DATABASE_URL" => Some("postgres://api/db".to_string()),
            "DATABASE_URL" => Some("postgres://other/db".to_string()),
            _ => None,
        };
        let url = database_url(&env).expect("url");
        assert_eq!(url.expose_secret(), "postgres://api/db");
    }

    #[test]
    fn test_database_url_fallback_and_missing() {
        let env = |key: &str| (key == "DATABASE_URL").then(|| "postgres://other/db".to_string());
        assert_eq!(database_url(&env).expect("url").expose_secret(), "postgres://other/db");

        let err = database_url(&|_: &str| None).expect_err("missing");
        assert!(matches!(err, CommandError::MissingEnvVar("API_DATABASE_URL")));
    }
}
