use chrono::{DateTime, Utc};

/// Something that happened and was recorded, never edited afterwards.
///
/// `event_type` and `version` together name the payload shape; consumers
/// match on both.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Dotted identifier such as `"inventory.item.expired"`.
    fn event_type(&self) -> &'static str;

    fn version(&self) -> u32;

    /// Business time, taken from the caller's clock rather than read here.
    fn occurred_at(&self) -> DateTime<Utc>;
}
