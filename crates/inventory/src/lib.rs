//! Inventory ledger (session-scoped, in-memory).
//!
//! Owns the product catalog and the movement log. All operations are synchronous
//! and deterministic; one ledger instance belongs to exactly one session.

pub mod command;
pub mod ledger;
pub mod movement;
pub mod product;

pub use command::{
    AddProduct, CommandOutcome, LedgerCommand, RemoveProduct, UpdateQuantity,
};
pub use ledger::{InventoryLedger, Snapshot};
pub use movement::{MovementRecord, MovementType};
pub use product::Product;
