//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances with
/// the same attributes are the same thing. Movement records are the canonical
/// example here; once appended to the log they never change.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Shelf {
///     aisle: u32,
///     bay: String,
/// }
///
/// impl ValueObject for Shelf {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
