//! Entity trait: identity + continuity across refreshes.

/// Entity marker + minimal interface.
///
/// Rows fetched from the hosted store are replaced wholesale on each refresh;
/// the identifier is what ties the old and new snapshot of a row together.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
