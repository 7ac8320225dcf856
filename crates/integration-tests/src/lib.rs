//! Integration tests for Vandari.
//!
//! These tests talk to running servers over HTTP and are `#[ignore]`d by
//! default.
//!
//! # Running Tests
//!
//! ```bash
//! # Prepare the database
//! cargo run -p vandari-cli -- migrate
//!
//! # Start the servers
//! cargo run -p vandari-api
//! HF_TOKEN=... cargo run -p vandari-storefront
//!
//! # Run the ignored tests
//! cargo test -p vandari-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL` - Catalog API root (default: <http://localhost:8024>)
//! - `STOREFRONT_BASE_URL` - Storefront root (default: <http://localhost:5000>)

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

use vandari_core::{ProductId, UserId};

/// Base URL for the catalog API.
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8024".to_string())
}

/// Base URL for the storefront.
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Create an HTTP client for the tests.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}

/// A product name that will not collide with other test runs.
#[must_use]
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix} {}", Uuid::new_v4().simple())
}

/// A user id unlikely to hold cart lines from another run.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn unique_user() -> UserId {
    let offset = (Uuid::new_v4().as_u128() % 1_000_000_000) as i32;
    UserId::new(offset + 1_000_000)
}

/// Create a product via the API and return its JSON.
///
/// # Panics
///
/// Panics if the request fails or the API does not answer 201.
pub async fn create_product(client: &Client, name: &str, price: u32, stock: i32) -> Value {
    let resp = client
        .post(format!("{}/api/productos", api_base_url()))
        .json(&json!({
            "nombre": name,
            "categoria": "ropa",
            "precio": price,
            "destacado": false,
            "fecha": "2026-03-01",
            "stock": stock,
            "imagen": "/static/img/test.jpg",
        }))
        .send()
        .await
        .expect("Failed to create product");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse product");
    body["producto"].clone()
}

/// The id of a product JSON object.
///
/// # Panics
///
/// Panics if the object has no integer `id`.
#[must_use]
pub fn product_id(product: &Value) -> ProductId {
    let id = product["id"].as_i64().expect("product id");
    ProductId::new(i32::try_from(id).expect("id fits i32"))
}

/// Delete a product, ignoring failures.
pub async fn delete_product(client: &Client, id: ProductId) {
    let _ = client
        .delete(format!("{}/api/productos/{id}", api_base_url()))
        .send()
        .await;
}

/// Fetch a user's cart lines.
///
/// # Panics
///
/// Panics if the request fails or the body is not a cart.
pub async fn cart_lines(client: &Client, user: UserId) -> Vec<Value> {
    let resp = client
        .get(format!("{}/api/carrito/{user}", api_base_url()))
        .send()
        .await
        .expect("Failed to get cart");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse cart");
    body["carrito"].as_array().cloned().expect("carrito array")
}

/// Empty a user's cart, ignoring failures.
pub async fn clear_cart(client: &Client, user: UserId) {
    let _ = client
        .delete(format!("{}/api/carrito/usuario/{user}", api_base_url()))
        .send()
        .await;
}
