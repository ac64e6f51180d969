//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values,
/// e.g. a `Price` of 12.50 equals any other `Price` of 12.50. They are immutable;
/// "changing" one means building a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
