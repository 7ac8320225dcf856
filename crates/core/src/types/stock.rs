//! Stock ceiling rules for cart quantities.
//!
//! These checks are evaluated against the stock value read at the start of a
//! cart operation. They say nothing about concurrent writers.

use thiserror::Error;

/// Reasons a cart quantity is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StockError {
    /// Quantity must be at least one.
    #[error("quantity must be positive (got {0})")]
    NonPositiveQuantity(i32),

    /// Requested quantity exceeds available stock.
    #[error("insufficient stock: requested {requested}, available {available}")]
    Insufficient {
        /// Total quantity the line would hold.
        requested: i64,
        /// Stock available for the product.
        available: i32,
    },
}

/// Check an add-to-cart request and return the quantity the line should hold.
///
/// When the line already exists, the accumulated total (not just the
/// increment) is checked against `stock`.
///
/// # Errors
///
/// Returns [`StockError::NonPositiveQuantity`] if `requested < 1`, or
/// [`StockError::Insufficient`] if the resulting total exceeds `stock`.
pub fn check_add(existing: Option<i32>, requested: i32, stock: i32) -> Result<i32, StockError> {
    if requested < 1 {
        return Err(StockError::NonPositiveQuantity(requested));
    }

    let total = i64::from(existing.unwrap_or(0)) + i64::from(requested);
    if total > i64::from(stock) {
        return Err(StockError::Insufficient {
            requested: total,
            available: stock,
        });
    }

    // total <= stock, so it fits in i32
    i32::try_from(total).map_err(|_| StockError::Insufficient {
        requested: total,
        available: stock,
    })
}

/// Check an explicit quantity overwrite.
///
/// # Errors
///
/// Returns [`StockError::NonPositiveQuantity`] if `quantity < 1`, or
/// [`StockError::Insufficient`] if `quantity` exceeds `stock`.
pub fn check_set(quantity: i32, stock: i32) -> Result<i32, StockError> {
    if quantity < 1 {
        return Err(StockError::NonPositiveQuantity(quantity));
    }
    if quantity > stock {
        return Err(StockError::Insufficient {
            requested: i64::from(quantity),
            available: stock,
        });
    }
    Ok(quantity)
}
