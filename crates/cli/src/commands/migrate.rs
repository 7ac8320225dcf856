//! Database migration command.
//!
//! Applies the migrations in `crates/api/migrations/`, which are embedded at
//! compile time. Already-applied migrations are skipped.
//!
//! ```bash
//! vandari migrate
//! ```

use super::{CommandError, connect};

/// Run catalog database migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running catalog migrations...");
    sqlx::migrate!("../api/migrations").run(&pool).await?;

    tracing::info!("Catalog migrations complete!");
    Ok(())
}
