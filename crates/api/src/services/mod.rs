//! Business rules for the catalog API.
//!
//! Services sit between the HTTP handlers and the repositories. Each function
//! takes the request's checked-out connection, runs one or a few statements
//! through the repositories, and maps absence and rule violations to
//! [`AppError`](crate::error::AppError).
//!
//! - `catalog` - Product CRUD and payload validation
//! - `cart` - Cart lines with the stock ceiling on quantity

pub mod cart;
pub mod catalog;
