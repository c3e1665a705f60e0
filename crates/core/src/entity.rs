//! Entity trait: identity that survives state changes.

/// Something identified by its id rather than its attribute values.
///
/// Two entities with the same id are the same entity even when their other
/// fields differ (e.g. before and after an update).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison, independent of the entity's current state.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
