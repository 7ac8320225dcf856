//! Domain models for the catalog API.
//!
//! Rust field names are English; the JSON wire format keeps the Spanish keys
//! the storefront scripts use (`nombre`, `precio`, `cantidad`, ...).

pub mod cart;
pub mod product;

pub use cart::{AddToCart, CartItem, CartLine};
pub use product::{NewProduct, Product, ProductFilter, ProductUpdate};
