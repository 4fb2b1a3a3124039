//! Line-oriented form surface for the inventory ledger.
//!
//! Collects field input, validates it, dispatches one ledger command per user
//! action and renders the views derived from the latest snapshot.

pub mod config;
pub mod render;
pub mod session;
pub mod surface;

pub use config::Config;
pub use session::{Session, Step};
pub use surface::{parse_action, Action};
