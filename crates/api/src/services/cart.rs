//! Shopping cart operations.
//!
//! The stock ceiling is checked against the value read at the start of each
//! operation. Nothing locks the product row, so two concurrent adds can both
//! pass the check.

use sqlx::PgConnection;
use tracing::instrument;

use vandari_core::{CartLineId, UserId, check_add, check_set};

use crate::db::{CartRepository, ProductRepository};
use crate::error::{AppError, Result};
use crate::models::{AddToCart, CartItem};

/// A user's cart joined with product details.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn items(conn: &mut PgConnection, user_id: UserId) -> Result<Vec<CartItem>> {
    Ok(CartRepository::new(conn).items_for_user(user_id).await?)
}

/// Add a product to a cart, incrementing the existing line if there is one.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product does not exist, or
/// `AppError::BadRequest` if the resulting quantity exceeds stock.
#[instrument(skip(conn, request), fields(product_id = %request.product_id))]
pub async fn add(conn: &mut PgConnection, request: &AddToCart) -> Result<()> {
    let stock = ProductRepository::new(&mut *conn)
        .stock(request.product_id)
        .await?
        .ok_or_else(AppError::product_not_found)?;

    let mut cart = CartRepository::new(conn);
    let existing = cart.find_line(request.product_id, request.user_id).await?;
    let total = check_add(existing.as_ref().map(|line| line.quantity), request.quantity, stock)?;

    match existing {
        Some(line) => {
            cart.set_quantity(line.id, total).await?;
            tracing::debug!(line_id = %line.id, quantity = total, "Cart line incremented");
        }
        None => {
            let line = cart
                .insert(request.product_id, total, request.user_id)
                .await?;
            tracing::debug!(line_id = %line.id, quantity = total, "Cart line created");
        }
    }

    Ok(())
}

/// Overwrite the quantity of a cart line.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the line or its product is missing, or
/// `AppError::BadRequest` if `quantity` is not positive or exceeds stock.
#[instrument(skip(conn))]
pub async fn set_quantity(conn: &mut PgConnection, id: CartLineId, quantity: i32) -> Result<()> {
    let line = CartRepository::new(&mut *conn)
        .get(id)
        .await?
        .ok_or_else(AppError::cart_line_not_found)?;

    let stock = ProductRepository::new(&mut *conn)
        .stock(line.product_id)
        .await?
        .ok_or_else(AppError::product_not_found)?;

    let quantity = check_set(quantity, stock)?;

    if CartRepository::new(conn).set_quantity(id, quantity).await? {
        Ok(())
    } else {
        Err(AppError::cart_line_not_found())
    }
}

/// Remove one cart line.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the line does not exist.
#[instrument(skip(conn))]
pub async fn remove(conn: &mut PgConnection, id: CartLineId) -> Result<()> {
    if CartRepository::new(conn).delete(id).await? {
        Ok(())
    } else {
        Err(AppError::cart_line_not_found())
    }
}

/// Remove every line in a user's cart. An already empty cart is fine.
///
/// # Errors
///
/// Returns `AppError::Database` if the delete fails.
#[instrument(skip(conn))]
pub async fn clear(conn: &mut PgConnection, user_id: UserId) -> Result<u64> {
    let removed = CartRepository::new(conn).clear_for_user(user_id).await?;
    tracing::debug!(removed, "Cart cleared");
    Ok(removed)
}
