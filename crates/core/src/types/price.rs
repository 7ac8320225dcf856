//! Decimal price type.
//!
//! Prices are stored as `NUMERIC(12, 2)` and travel over the wire as plain
//! JSON numbers, which is what the storefront scripts expect.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in Colombian pesos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of pesos.
    #[must_use]
    pub fn from_pesos(pesos: i64) -> Self {
        Self(Decimal::from(pesos))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Format for display using Colombian grouping (e.g. `$35.000`).
    ///
    /// Cents are rounded away; peso prices are never shown with decimals.
    #[must_use]
    pub fn display(&self) -> String {
        let whole = self.0.round().abs().normalize().to_string();

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, c) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        if self.is_negative() {
            format!("-${grouped}")
        } else {
            format!("${grouped}")
        }
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(feature = "postgres")]
impl ::sqlx::Type<::sqlx::Postgres> for Price {
    fn type_info() -> ::sqlx::postgres::PgTypeInfo {
        <Decimal as ::sqlx::Type<::sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for Price {
    fn decode(
        value: ::sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, ::sqlx::error::BoxDynError> {
        let amount = <Decimal as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
        Ok(Self(amount))
    }
}

#[cfg(feature = "postgres")]
impl ::sqlx::Encode<'_, ::sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut ::sqlx::postgres::PgArgumentBuffer,
    ) -> Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
        <Decimal as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
