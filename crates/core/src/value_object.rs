//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two value
/// objects with the same attribute values are equal. A cart, a line item and
/// an order-totals breakdown are all value objects in this engine: to
/// "modify" one, an operation produces a new value, which keeps every
/// operation safe under whatever concurrency model the hosting application
/// uses.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct OrderTotals {
///     subtotal: Decimal,
///     tax: Decimal,
///     total: Decimal,
/// }
///
/// impl ValueObject for OrderTotals {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
