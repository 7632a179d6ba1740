//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Identifiers here are natural keys (usernames, item names) rather than
/// generated ids, so they are borrowed as `str`.
pub trait Entity {
    /// Returns the natural key that identifies this entity.
    fn key(&self) -> &str;
}
