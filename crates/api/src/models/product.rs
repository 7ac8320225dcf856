//! Product catalog models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use vandari_core::{Price, ProductId, ProductSort};

/// A catalog product as stored in `products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "precio")]
    pub price: Price,
    #[serde(rename = "destacado")]
    pub featured: bool,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    pub stock: i32,
    #[serde(rename = "imagen")]
    pub image: String,
}

/// A fully populated product payload for creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "precio")]
    pub price: Price,
    #[serde(rename = "destacado", default)]
    pub featured: bool,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    pub stock: i32,
    #[serde(rename = "imagen")]
    pub image: String,
}

/// A sparse product payload: only the fields that are `Some` get written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "precio", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(rename = "destacado", default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(rename = "fecha", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProductUpdate {
    /// Whether no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.featured.is_none()
            && self.date.is_none()
            && self.stock.is_none()
            && self.image.is_none()
    }
}

/// Filters and ordering for product listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// Featured flag match.
    pub featured: Option<bool>,
    /// Result ordering.
    pub sort: ProductSort,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_product_serializes_with_spanish_keys() {
        let product = Product {
            id: ProductId::new(1),
            name: "Camiseta Blanca".to_string(),
            category: "ropa".to_string(),
            price: Price::from_pesos(35_000),
            featured: true,
            date: NaiveDate::from_ymd_opt(2026, 3, 1).expect("date"),
            stock: 10,
            image: "img/camiseta.jpg".to_string(),
        };

        let value = serde_json::to_value(&product).expect("serialize");
        assert_eq!(value["id"], 1);
        assert_eq!(value["nombre"], "Camiseta Blanca");
        assert_eq!(value["categoria"], "ropa");
        assert_eq!(value["destacado"], true);
        assert_eq!(value["fecha"], "2026-03-01");
        assert_eq!(value["stock"], 10);
        assert_eq!(value["imagen"], "img/camiseta.jpg");
        assert!(value["precio"].is_number());
    }

    #[test]
    fn test_new_product_featured_defaults_to_false() {
        let payload = json!({
            "nombre": "Collar Dorado",
            "categoria": "accesorios",
            "precio": 45000,
            "fecha": "2026-02-14",
            "stock": 5,
            "imagen": "img/collar.jpg"
        });

        let product: NewProduct = serde_json::from_value(payload).expect("deserialize");
        assert!(!product.featured);
        assert_eq!(product.price, Price::from_pesos(45_000));
    }

    #[test]
    fn test_new_product_requires_all_fields() {
        let payload = json!({ "nombre": "Sin precio" });
        assert!(serde_json::from_value::<NewProduct>(payload).is_err());
    }

    #[test]
    fn test_update_empty_payload() {
        let update: ProductUpdate = serde_json::from_value(json!({})).expect("deserialize");
        assert!(update.is_empty());

        // Explicit nulls count as absent
        let update: ProductUpdate =
            serde_json::from_value(json!({ "nombre": null, "stock": null })).expect("nulls");
        assert!(update.is_empty());
    }

    #[test]
    fn test_update_partial_payload() {
        let update: ProductUpdate =
            serde_json::from_value(json!({ "stock": 3, "destacado": false })).expect("partial");
        assert!(!update.is_empty());
        assert_eq!(update.stock, Some(3));
        assert_eq!(update.featured, Some(false));
        assert!(update.name.is_none());
    }
}
