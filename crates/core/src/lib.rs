//! Vandari Core - Shared types library.
//!
//! This crate provides common types used across all Vandari components:
//! - `api` - Catalog and cart JSON API
//! - `storefront` - Public site pages and the chatbot relay
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure rules - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, catalog sort keys and stock rules
//! - [`inventory`] - The launch inventory shared by the chatbot and seeding

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod inventory;
pub mod types;

pub use inventory::{INVENTORY, InventoryItem};
pub use types::*;
