//! `stockroom-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no presentation).

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
