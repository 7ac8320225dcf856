//! Catalog listing options.

use serde::{Deserialize, Serialize};

/// Sort order for product listings.
///
/// Parsed from the `orden` query parameter. Unknown or missing keys fall back
/// to [`ProductSort::Newest`], so a typo never fails a listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProductSort {
    /// Most expensive first (`precio-alto`).
    PriceDesc,
    /// Cheapest first (`precio-bajo`).
    PriceAsc,
    /// Latest catalog date first (`recientes`).
    Recent,
    /// Most recently created first.
    #[default]
    Newest,
}

impl ProductSort {
    /// Parse the `orden` query value.
    #[must_use]
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("precio-alto") => Self::PriceDesc,
            Some("precio-bajo") => Self::PriceAsc,
            Some("recientes") => Self::Recent,
            _ => Self::Newest,
        }
    }

    /// The `ORDER BY` clause for this sort order.
    #[must_use]
    pub const fn order_by(self) -> &'static str {
        match self {
            Self::PriceDesc => "price DESC",
            Self::PriceAsc => "price ASC",
            Self::Recent => "date DESC",
            Self::Newest => "id DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_known_values() {
        assert_eq!(
            ProductSort::from_key(Some("precio-alto")),
            ProductSort::PriceDesc
        );
        assert_eq!(
            ProductSort::from_key(Some("precio-bajo")),
            ProductSort::PriceAsc
        );
        assert_eq!(ProductSort::from_key(Some("recientes")), ProductSort::Recent);
    }

    #[test]
    fn test_from_key_falls_back_to_newest() {
        assert_eq!(ProductSort::from_key(None), ProductSort::Newest);
        assert_eq!(ProductSort::from_key(Some("")), ProductSort::Newest);
        assert_eq!(ProductSort::from_key(Some("PRECIO-ALTO")), ProductSort::Newest);
    }

    #[test]
    fn test_order_by_clauses() {
        assert_eq!(ProductSort::PriceDesc.order_by(), "price DESC");
        assert_eq!(ProductSort::PriceAsc.order_by(), "price ASC");
        assert_eq!(ProductSort::Recent.order_by(), "date DESC");
        assert_eq!(ProductSort::default().order_by(), "id DESC");
    }
}
