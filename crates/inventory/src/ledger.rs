use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

use crate::command::AddProduct;
use crate::movement::{MovementRecord, MovementType};
use crate::product::Product;

/// Read-only copy of the ledger, both collections in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub products: Vec<Product>,
    pub movements: Vec<MovementRecord>,
}

/// Session-scoped inventory ledger: product catalog plus movement log.
///
/// Each operation is a single synchronous mutation under `&mut self`. Failed
/// operations leave both collections untouched.
///
/// Duplicate names are kept as separate rows; `update_quantity` and
/// `remove_product` act on every row with the given name.
#[derive(Debug, Clone, Default)]
pub struct InventoryLedger {
    products: Vec<Product>,
    movements: Vec<MovementRecord>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new catalog row.
    ///
    /// Numeric ranges are the caller's concern; only the name is checked.
    pub fn add_product(&mut self, cmd: AddProduct) -> DomainResult<()> {
        if cmd.name.trim().is_empty() {
            tracing::warn!("rejected product without a name");
            return Err(DomainError::validation("product name is required"));
        }

        tracing::info!(
            product = %cmd.name,
            quantity = cmd.quantity,
            unit_price = %cmd.unit_price,
            "product added"
        );

        self.products.push(Product {
            name: cmd.name,
            category: cmd.category,
            quantity: cmd.quantity,
            unit_price: cmd.unit_price,
            location: cmd.location,
            available: cmd.available,
        });
        Ok(())
    }

    /// Set the absolute quantity of every row named `name` and log one movement.
    ///
    /// Returns the number of rows updated.
    pub fn update_quantity(
        &mut self,
        name: &str,
        new_quantity: u64,
        movement_type: MovementType,
        responsible: impl Into<String>,
    ) -> DomainResult<usize> {
        if !self.contains(name) {
            tracing::warn!(product = %name, "movement for unknown product");
            return Err(DomainError::not_found(format!("product '{name}'")));
        }

        let mut rows = 0;
        for product in self.products.iter_mut().filter(|p| p.name == name) {
            product.quantity = new_quantity;
            rows += 1;
        }

        let record = MovementRecord {
            product: name.to_string(),
            movement_type,
            quantity: new_quantity,
            responsible: responsible.into(),
        };
        tracing::info!(
            product = %record.product,
            movement = %record.movement_type,
            quantity = record.quantity,
            responsible = %record.responsible,
            rows,
            "movement recorded"
        );
        self.movements.push(record);

        Ok(rows)
    }

    /// Remove every row named `name`. Removing an absent name is a no-op.
    ///
    /// Movement history is left as is, even when it references `name`.
    pub fn remove_product(&mut self, name: &str) -> usize {
        let before = self.products.len();
        self.products.retain(|p| p.name != name);
        let removed = before - self.products.len();

        if removed == 0 {
            tracing::debug!(product = %name, "remove: no matching product");
        } else {
            tracing::info!(product = %name, rows = removed, "product removed");
        }
        removed
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            products: self.products.clone(),
            movements: self.movements.clone(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn movements(&self) -> &[MovementRecord] {
        &self.movements
    }

    pub fn contains(&self, name: &str) -> bool {
        self.products.iter().any(|p| p.name == name)
    }

    /// Catalog names in catalog order, one entry per row.
    pub fn product_names(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
