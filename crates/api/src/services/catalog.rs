//! Product catalog operations.

use sqlx::PgConnection;
use tracing::instrument;

use vandari_core::{Price, ProductId};

use crate::db::ProductRepository;
use crate::error::{AppError, EMPTY_UPDATE, Result};
use crate::models::{NewProduct, Product, ProductFilter, ProductUpdate};

/// List every product matching `filter`.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn list(conn: &mut PgConnection, filter: &ProductFilter) -> Result<Vec<Product>> {
    Ok(ProductRepository::new(conn).list(filter).await?)
}

/// Fetch one product.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no product has `id`.
pub async fn get(conn: &mut PgConnection, id: ProductId) -> Result<Product> {
    ProductRepository::new(conn)
        .get(id)
        .await?
        .ok_or_else(AppError::product_not_found)
}

/// Validate and insert a new product.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a negative price or stock.
#[instrument(skip(conn, product), fields(name = %product.name))]
pub async fn create(conn: &mut PgConnection, product: &NewProduct) -> Result<Product> {
    validate_price(product.price)?;
    validate_stock(product.stock)?;

    let created = ProductRepository::new(conn).create(product).await?;
    tracing::info!(product_id = %created.id, "Product created");
    Ok(created)
}

/// Apply a sparse update and return the refreshed product.
///
/// Existence is checked before the payload, so an empty update to a
/// missing product reports `NotFound`.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no product has `id`, or
/// `AppError::BadRequest` if `changes` is empty or invalid.
#[instrument(skip(conn, changes))]
pub async fn update(
    conn: &mut PgConnection,
    id: ProductId,
    changes: &ProductUpdate,
) -> Result<Product> {
    let mut products = ProductRepository::new(conn);

    if !products.exists(id).await? {
        return Err(AppError::product_not_found());
    }
    if changes.is_empty() {
        return Err(AppError::BadRequest(EMPTY_UPDATE.to_string()));
    }
    if let Some(price) = changes.price {
        validate_price(price)?;
    }
    if let Some(stock) = changes.stock {
        validate_stock(stock)?;
    }

    // Deleted between the two statements
    products
        .update(id, changes)
        .await?
        .ok_or_else(AppError::product_not_found)
}

/// Delete a product.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no product has `id`.
#[instrument(skip(conn))]
pub async fn delete(conn: &mut PgConnection, id: ProductId) -> Result<()> {
    if ProductRepository::new(conn).delete(id).await? {
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    } else {
        Err(AppError::product_not_found())
    }
}

fn validate_price(price: Price) -> Result<()> {
    if price.is_negative() {
        return Err(AppError::BadRequest(
            "El precio no puede ser negativo".to_string(),
        ));
    }
    Ok(())
}

fn validate_stock(stock: i32) -> Result<()> {
    if stock < 0 {
        return Err(AppError::BadRequest(
            "El stock no puede ser negativo".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Price::from_pesos(0)).is_ok());
        assert!(validate_price(Price::from_pesos(35_000)).is_ok());
        assert!(matches!(
            validate_price(Price::from_pesos(-1)),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(10).is_ok());
        assert!(matches!(validate_stock(-1), Err(AppError::BadRequest(_))));
    }
}
