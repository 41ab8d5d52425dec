//! Entity and aggregate-root traits: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display + Send + Sync;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Aggregate root marker.
///
/// Only aggregate roots are loaded and stored through a [`crate::Repository`];
/// everything reachable from the root is persisted with it.
pub trait AggregateRoot: Entity {
    /// Short, stable name used in errors and logs (e.g. `"Category"`).
    const NAME: &'static str;
}
