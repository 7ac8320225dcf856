//! Product repository for database operations.
//!
//! Dynamic statements (list filters, sparse updates) are assembled with
//! `sqlx::QueryBuilder`; every value is bound, only fixed column names and
//! `ORDER BY` clauses are pushed as SQL text.

use sqlx::{PgConnection, Postgres, QueryBuilder};
use tracing::instrument;

use vandari_core::ProductId;

use super::RepositoryError;
use crate::models::{NewProduct, Product, ProductFilter, ProductUpdate};

const PRODUCT_COLUMNS: &str = "id, name, category, price, featured, date, stock, image";

/// Repository for product database operations.
pub struct ProductRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> ProductRepository<'c> {
    /// Create a new product repository on a checked-out connection.
    #[must_use]
    pub const fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// List products matching `filter`, without pagination.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn list(&mut self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError> {
        let mut query = list_query(filter);
        let products = query
            .build_query_as::<Product>()
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(products)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn get(&mut self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(product)
    }

    /// Check whether a product exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn exists(&mut self, id: ProductId) -> Result<bool, RepositoryError> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(row.0)
    }

    /// Get the current stock of a product.
    ///
    /// Returns `None` if the product does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn stock(&mut self, id: ProductId) -> Result<Option<i32>, RepositoryError> {
        let row: Option<(i32,)> = sqlx::query_as("SELECT stock FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(row.map(|(stock,)| stock))
    }

    /// Insert a product and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create(&mut self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let created = sqlx::query_as::<_, Product>(&format!(
            r"
            INSERT INTO products (name, category, price, featured, date, stock, image)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {PRODUCT_COLUMNS}
            "
        ))
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.featured)
        .bind(product.date)
        .bind(product.stock)
        .bind(&product.image)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(created)
    }

    /// Rewrite only the columns set in `changes` and return the refreshed row.
    ///
    /// Returns `Ok(None)` when there is nothing to write or no row has `id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    #[instrument(skip(self, changes))]
    pub async fn update(
        &mut self,
        id: ProductId,
        changes: &ProductUpdate,
    ) -> Result<Option<Product>, RepositoryError> {
        let Some(mut query) = update_query(id, changes) else {
            return Ok(None);
        };

        let updated = query
            .build_query_as::<Product>()
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(updated)
    }

    /// Delete a product.
    ///
    /// Cart lines that reference the product are left in place.
    /// Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Build the listing query for `filter`.
fn list_query(filter: &ProductFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE 1=1"));

    if let Some(category) = &filter.category {
        query.push(" AND category = ").push_bind(category.clone());
    }
    if let Some(featured) = filter.featured {
        query.push(" AND featured = ").push_bind(featured);
    }

    query.push(" ORDER BY ").push(filter.sort.order_by());
    query
}

/// Build the sparse `UPDATE` for `changes`, or `None` if no field is set.
fn update_query(id: ProductId, changes: &ProductUpdate) -> Option<QueryBuilder<'static, Postgres>> {
    if changes.is_empty() {
        return None;
    }

    let mut query = QueryBuilder::new("UPDATE products SET ");
    let mut set = query.separated(", ");

    if let Some(name) = &changes.name {
        set.push("name = ").push_bind_unseparated(name.clone());
    }
    if let Some(category) = &changes.category {
        set.push("category = ").push_bind_unseparated(category.clone());
    }
    if let Some(price) = changes.price {
        set.push("price = ").push_bind_unseparated(price);
    }
    if let Some(featured) = changes.featured {
        set.push("featured = ").push_bind_unseparated(featured);
    }
    if let Some(date) = changes.date {
        set.push("date = ").push_bind_unseparated(date);
    }
    if let Some(stock) = changes.stock {
        set.push("stock = ").push_bind_unseparated(stock);
    }
    if let Some(image) = &changes.image {
        set.push("image = ").push_bind_unseparated(image.clone());
    }

    query.push(" WHERE id = ").push_bind(id);
    query.push(" RETURNING ").push(PRODUCT_COLUMNS);
    Some(query)
}
