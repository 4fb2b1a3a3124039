//! Synchronous command dispatch.
//!
//! One command per user action, processed to completion against the ledger
//! before the next one. The outcome (or error) goes back to the surface that
//! issued it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::DomainResult;

use crate::ledger::{InventoryLedger, Snapshot};
use crate::movement::MovementType;

/// Command: AddProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProduct {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub quantity: u64,
    pub unit_price: Decimal,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub available: Option<bool>,
}

/// Command: UpdateQuantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateQuantity {
    pub name: String,
    /// Resulting absolute quantity.
    pub new_quantity: u64,
    pub movement_type: MovementType,
    #[serde(default)]
    pub responsible: String,
}

/// Command: RemoveProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveProduct {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerCommand {
    AddProduct(AddProduct),
    UpdateQuantity(UpdateQuantity),
    RemoveProduct(RemoveProduct),
    Query,
}

impl LedgerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            LedgerCommand::AddProduct(_) => "inventory.product.add",
            LedgerCommand::UpdateQuantity(_) => "inventory.product.update_quantity",
            LedgerCommand::RemoveProduct(_) => "inventory.product.remove",
            LedgerCommand::Query => "inventory.query",
        }
    }

    pub fn is_mutation(&self) -> bool {
        !matches!(self, LedgerCommand::Query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Added,
    Updated { rows: usize },
    Removed { rows: usize },
    Snapshot(Snapshot),
}

impl InventoryLedger {
    /// Run one command to completion.
    pub fn dispatch(&mut self, command: LedgerCommand) -> DomainResult<CommandOutcome> {
        let span = tracing::debug_span!(
            "dispatch",
            command = command.name(),
            mutation = command.is_mutation()
        );
        let _guard = span.enter();

        match command {
            LedgerCommand::AddProduct(cmd) => {
                self.add_product(cmd)?;
                Ok(CommandOutcome::Added)
            }
            LedgerCommand::UpdateQuantity(cmd) => {
                let rows = self.update_quantity(
                    &cmd.name,
                    cmd.new_quantity,
                    cmd.movement_type,
                    cmd.responsible,
                )?;
                Ok(CommandOutcome::Updated { rows })
            }
            LedgerCommand::RemoveProduct(cmd) => {
                let rows = self.remove_product(&cmd.name);
                Ok(CommandOutcome::Removed { rows })
            }
            LedgerCommand::Query => Ok(CommandOutcome::Snapshot(self.snapshot())),
        }
    }
}
