//! Shopping cart models.

use serde::{Deserialize, Serialize};

use vandari_core::{CartLineId, Price, ProductId, UserId};

/// A cart row as stored in `cart_lines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CartLine {
    pub id: CartLineId,
    #[serde(rename = "producto_id")]
    pub product_id: ProductId,
    #[serde(rename = "cantidad")]
    pub quantity: i32,
    #[serde(rename = "usuario_id")]
    pub user_id: Option<UserId>,
}

/// A cart row joined with the product details shown in the cart page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CartItem {
    pub id: CartLineId,
    #[serde(rename = "producto_id")]
    pub product_id: ProductId,
    #[serde(rename = "cantidad")]
    pub quantity: i32,
    #[serde(rename = "usuario_id")]
    pub user_id: Option<UserId>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: Price,
    #[serde(rename = "imagen")]
    pub image: String,
    pub stock: i32,
}

/// Add-to-cart request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCart {
    #[serde(rename = "producto_id")]
    pub product_id: ProductId,
    #[serde(rename = "cantidad")]
    pub quantity: i32,
    #[serde(rename = "usuario_id", default)]
    pub user_id: Option<UserId>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_add_to_cart_user_is_optional() {
        let body: AddToCart =
            serde_json::from_value(json!({ "producto_id": 4, "cantidad": 2 })).expect("anonymous");
        assert_eq!(body.product_id, ProductId::new(4));
        assert_eq!(body.quantity, 2);
        assert!(body.user_id.is_none());

        let body: AddToCart = serde_json::from_value(
            json!({ "producto_id": 4, "cantidad": 2, "usuario_id": 9 }),
        )
        .expect("with user");
        assert_eq!(body.user_id, Some(UserId::new(9)));
    }

    #[test]
    fn test_cart_item_wire_format() {
        let item = CartItem {
            id: CartLineId::new(3),
            product_id: ProductId::new(4),
            quantity: 2,
            user_id: Some(UserId::new(9)),
            name: "Chaqueta Negra".to_string(),
            price: Price::from_pesos(120_000),
            image: "img/chaqueta.jpg".to_string(),
            stock: 2,
        };

        let value = serde_json::to_value(&item).expect("serialize");
        assert_eq!(value["id"], 3);
        assert_eq!(value["producto_id"], 4);
        assert_eq!(value["cantidad"], 2);
        assert_eq!(value["usuario_id"], 9);
        assert_eq!(value["nombre"], "Chaqueta Negra");
        assert_eq!(value["stock"], 2);
    }
}
