use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One catalog row.
///
/// `name` identifies the product. The catalog does not enforce uniqueness, so
/// several rows may share a name; lookups by name always address all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Empty when not given.
    #[serde(default)]
    pub category: String,
    pub quantity: u64,
    pub unit_price: Decimal,
    /// Storage location in the warehouse. Empty when not given.
    #[serde(default)]
    pub location: String,
    /// Available-for-sale flag, only when the surface collects it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl Product {
    /// Stock value of this row (quantity × unit price), saturating at `Decimal::MAX`.
    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.quantity)
            .checked_mul(self.unit_price)
            .unwrap_or(Decimal::MAX)
    }

    pub fn is_low_stock(&self, threshold: u64) -> bool {
        self.quantity <= threshold
    }
}
