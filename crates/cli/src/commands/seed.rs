//! Seed the catalog with the launch inventory.
//!
//! Seeding is skipped when `products` already has rows, unless `--force` is
//! given, in which case the inventory is inserted again alongside them.

use sqlx::PgPool;
use tracing::info;

use vandari_core::{INVENTORY, InventoryItem};

use super::{CommandError, connect};

/// Whether seeding should insert rows given the current product count.
const fn should_seed(existing: i64, force: bool) -> bool {
    force || existing == 0
}

/// Seed the launch inventory.
///
/// Returns the number of products inserted.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run(force: bool) -> Result<usize, CommandError> {
    let pool = connect().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&pool)
        .await?;

    if !should_seed(existing, force) {
        info!(existing, "Catalog already has products, skipping (use --force to insert anyway)");
        return Ok(0);
    }

    let inserted = insert_all(&pool, INVENTORY).await?;
    info!(inserted, "Seeded launch inventory");
    Ok(inserted)
}

/// Insert every item in one transaction.
async fn insert_all(pool: &PgPool, items: &[InventoryItem]) -> Result<usize, CommandError> {
    let mut tx = pool.begin().await?;

    for item in items {
        sqlx::query(
            r"
            INSERT INTO products (name, category, price, featured, stock, image)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(item.name)
        .bind(item.category)
        .bind(item.price())
        .bind(item.featured)
        .bind(item.stock)
        .bind(item.image)
        .execute(&mut *tx)
        .await?;

        info!(name = item.name, stock = item.stock, "Inserted product");
    }

    tx.commit().await?;
    Ok(items.len())
}
