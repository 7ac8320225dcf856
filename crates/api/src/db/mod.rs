//! Database operations for the catalog `PostgreSQL` store.
//!
//! ## Tables
//!
//! - `products` - Product catalog (`stock >= 0`)
//! - `cart_lines` - Shopping cart rows, one per (product, user) pair
//!
//! # Connections
//!
//! Handlers check a connection out of the pool at the start of a request and
//! hand `&mut PgConnection` to the repositories. The connection goes back to
//! the pool when the guard drops, on success and error paths alike. Each
//! statement autocommits; no transaction spans a request.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p vandari-cli -- migrate
//! ```

pub mod cart;
pub mod products;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use cart::CartRepository;
pub use products::ProductRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a `PostgreSQL` connection pool.
///
/// Connections are opened lazily, so the API can start before the database
/// is reachable; `/health/ready` reports when it is.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection string cannot be parsed.
pub fn create_pool(
    database_url: &secrecy::SecretString,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy(database_url.expose_secret())
}
