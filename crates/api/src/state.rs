//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;
use sqlx::pool::PoolConnection;
use sqlx::postgres::Postgres;

use crate::config::ApiConfig;
use crate::db::RepositoryError;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    pool: PgPool,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ApiConfig, pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, pool }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Check a connection out of the pool for the current request.
    ///
    /// The connection returns to the pool when the guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if no connection can be acquired
    /// within the pool's acquire timeout.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, RepositoryError> {
        Ok(self.inner.pool.acquire().await?)
    }
}
