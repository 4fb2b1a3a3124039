//! Static truth table for the requirements expression `P ∧ E ∧ L ∧ R`.
//!
//! - **P**: product registration
//! - **E**: stock updates
//! - **L**: location tracking
//! - **R**: reports
//!
//! Purely illustrative; it does not depend on ledger state.

use serde::{Deserialize, Serialize};

pub const REQUIREMENTS_EXPRESSION: &str = "P ∧ E ∧ L ∧ R";

/// One row of the truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequirementsRow {
    pub products: bool,
    pub stock: bool,
    pub location: bool,
    pub reports: bool,
}

impl RequirementsRow {
    const fn new(products: bool, stock: bool, location: bool, reports: bool) -> Self {
        Self {
            products,
            stock,
            location,
            reports,
        }
    }

    /// The complete solution holds only when every requirement does.
    pub fn complete(&self) -> bool {
        self.products && self.stock && self.location && self.reports
    }

    pub fn inputs(&self) -> [bool; 4] {
        [self.products, self.stock, self.location, self.reports]
    }
}

const TABLE: [RequirementsRow; 8] = [
    RequirementsRow::new(true, true, true, true),
    RequirementsRow::new(true, true, false, false),
    RequirementsRow::new(true, false, true, false),
    RequirementsRow::new(true, false, false, true),
    RequirementsRow::new(false, true, true, true),
    RequirementsRow::new(false, true, false, false),
    RequirementsRow::new(false, false, true, false),
    RequirementsRow::new(false, false, false, true),
];

pub fn requirements_truth_table() -> [RequirementsRow; 8] {
    TABLE
}

/// Which requirements this system actually satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementsStatus(pub RequirementsRow);

impl RequirementsStatus {
    /// Every requirement is implemented by the ledger and its reports.
    pub fn current() -> Self {
        Self(RequirementsRow::new(true, true, true, true))
    }

    pub fn complete(&self) -> bool {
        self.0.complete()
    }
}
