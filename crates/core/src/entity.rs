//! Entity trait: identity + continuity across state changes.

/// Minimal contract for identified domain entities.
///
/// Entities compare by identity, not by value: two vendor instances with the
/// same id refer to the same vendor even when their fields have diverged
/// (e.g. one side was edited in an admin session).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` refers to the same entity (identifier equality).
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
