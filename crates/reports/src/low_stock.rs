use stockroom_inventory::Product;

/// Quantity at or below which a product counts as low stock.
pub const LOW_STOCK_THRESHOLD: u64 = 5;

/// Products with `quantity <= threshold`, in catalog order.
pub fn low_stock(products: &[Product], threshold: u64) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.is_low_stock(threshold))
        .cloned()
        .collect()
}
