use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_inventory::Product;

/// Catalog-wide totals shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateTotals {
    /// Distinct names, not rows.
    pub distinct_product_count: usize,
    pub total_quantity: u64,
    /// Sum over rows of quantity × unit price.
    pub total_value: Decimal,
}

/// Totals never fail: quantity saturates at `u64::MAX`, value at `Decimal::MAX`.
pub fn aggregate_totals(products: &[Product]) -> AggregateTotals {
    let names: HashSet<&str> = products.iter().map(|p| p.name.as_str()).collect();

    AggregateTotals {
        distinct_product_count: names.len(),
        total_quantity: products
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.quantity)),
        total_value: products.iter().fold(Decimal::ZERO, |acc, p| {
            acc.checked_add(p.stock_value()).unwrap_or(Decimal::MAX)
        }),
    }
}

/// Dashboard view: totals for a non-empty catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub totals: AggregateTotals,
    /// `total_value` rounded to two decimals with thousands separators.
    pub formatted_value: String,
}

impl Dashboard {
    /// `None` when there is nothing to summarize.
    pub fn from_products(products: &[Product]) -> Option<Self> {
        if products.is_empty() {
            return None;
        }
        let totals = aggregate_totals(products);
        Some(Self {
            totals,
            formatted_value: format_money(totals.total_value),
        })
    }
}

fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let text = format!("{rounded:.2}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{frac_part}")
}
