//! Cart repository for database operations.

use sqlx::PgConnection;
use tracing::instrument;

use vandari_core::{CartLineId, ProductId, UserId};

use super::RepositoryError;
use crate::models::{CartItem, CartLine};

/// Repository for cart line database operations.
pub struct CartRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> CartRepository<'c> {
    /// Create a new cart repository on a checked-out connection.
    #[must_use]
    pub const fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Get a user's cart lines joined with product details.
    ///
    /// Lines whose product no longer exists are not returned.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn items_for_user(&mut self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError> {
        let items = sqlx::query_as::<_, CartItem>(
            r"
            SELECT c.id, c.product_id, c.quantity, c.user_id,
                   p.name, p.price, p.image, p.stock
            FROM cart_lines c
            INNER JOIN products p ON c.product_id = p.id
            WHERE c.user_id = $1
            ORDER BY c.id
            ",
        )
        .bind(user_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(items)
    }

    /// Get a cart line by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn get(&mut self, id: CartLineId) -> Result<Option<CartLine>, RepositoryError> {
        let line = sqlx::query_as::<_, CartLine>(
            "SELECT id, product_id, quantity, user_id FROM cart_lines WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(line)
    }

    /// Find the line holding `product_id` for `user_id`.
    ///
    /// A `None` user matches the anonymous cart line for the product, so all
    /// anonymous adds of one product merge into a single line and are checked
    /// against stock on the running total. A plain `user_id = $2` comparison
    /// would never match NULL and would insert a fresh line per add, each
    /// checked against stock alone; that behavior is deliberately not kept.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn find_line(
        &mut self,
        product_id: ProductId,
        user_id: Option<UserId>,
    ) -> Result<Option<CartLine>, RepositoryError> {
        let line = sqlx::query_as::<_, CartLine>(
            r"
            SELECT id, product_id, quantity, user_id
            FROM cart_lines
            WHERE product_id = $1 AND user_id IS NOT DISTINCT FROM $2
            ORDER BY id
            LIMIT 1
            ",
        )
        .bind(product_id)
        .bind(user_id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(line)
    }

    /// Insert a new cart line.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self))]
    pub async fn insert(
        &mut self,
        product_id: ProductId,
        quantity: i32,
        user_id: Option<UserId>,
    ) -> Result<CartLine, RepositoryError> {
        let line = sqlx::query_as::<_, CartLine>(
            r"
            INSERT INTO cart_lines (product_id, quantity, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, product_id, quantity, user_id
            ",
        )
        .bind(product_id)
        .bind(quantity)
        .bind(user_id)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(line)
    }

    /// Overwrite a line's quantity.
    ///
    /// Returns whether a row was updated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    #[instrument(skip(self))]
    pub async fn set_quantity(
        &mut self,
        id: CartLineId,
        quantity: i32,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE cart_lines SET quantity = $2 WHERE id = $1")
            .bind(id)
            .bind(quantity)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a single cart line.
    ///
    /// Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: CartLineId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_lines WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every line in a user's cart.
    ///
    /// Returns the number of rows removed; zero is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    #[instrument(skip(self))]
    pub async fn clear_for_user(&mut self, user_id: UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_lines WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }
}
