//! Core types for Vandari.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod id;
pub mod price;
pub mod stock;

pub use catalog::ProductSort;
pub use id::*;
pub use price::Price;
pub use stock::{StockError, check_add, check_set};
