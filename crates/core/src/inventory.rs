//! The store's launch inventory.
//!
//! The chatbot quotes these products in its system prompt and
//! `vandari seed` loads them into an empty catalog, so both sides describe
//! the same stock.

use crate::Price;

/// A product in the launch inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryItem {
    pub name: &'static str,
    pub category: &'static str,
    /// Price in whole pesos.
    pub pesos: i64,
    pub stock: i32,
    pub featured: bool,
    pub image: &'static str,
}

impl InventoryItem {
    /// Price of the item.
    #[must_use]
    pub fn price(&self) -> Price {
        Price::from_pesos(self.pesos)
    }

    /// Whether the item has run out.
    #[must_use]
    pub const fn is_sold_out(&self) -> bool {
        self.stock <= 0
    }
}

/// Launch inventory, in catalog order.
pub const INVENTORY: &[InventoryItem] = &[
    InventoryItem {
        name: "Camiseta Blanca",
        category: "ropa",
        pesos: 35_000,
        stock: 10,
        featured: true,
        image: "/static/img/camiseta-blanca.jpg",
    },
    InventoryItem {
        name: "Collar Dorado",
        category: "accesorios",
        pesos: 45_000,
        stock: 5,
        featured: true,
        image: "/static/img/collar-dorado.jpg",
    },
    InventoryItem {
        name: "Chaqueta Negra",
        category: "ropa",
        pesos: 120_000,
        stock: 2,
        featured: false,
        image: "/static/img/chaqueta-negra.jpg",
    },
    InventoryItem {
        name: "Collar Plateado",
        category: "accesorios",
        pesos: 40_000,
        stock: 0,
        featured: false,
        image: "/static/img/collar-plateado.jpg",
    },
];
