//! Derived, read-only views over a ledger snapshot.
//!
//! Everything here is a pure function of its input: no state, no side effects,
//! no failure modes. Views are recomputed on demand after each mutation.

pub mod low_stock;
pub mod totals;
pub mod truth_table;

pub use low_stock::{low_stock, LOW_STOCK_THRESHOLD};
pub use totals::{aggregate_totals, AggregateTotals, Dashboard};
pub use truth_table::{
    requirements_truth_table, RequirementsRow, RequirementsStatus, REQUIREMENTS_EXPRESSION,
};
