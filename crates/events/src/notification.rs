use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Event;

/// Identifier of a notification.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Uses UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Expiration alert addressed to an account.
///
/// `recipient` is a username. It is not checked against the identity store
/// and may outlive the account it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    message: String,
    recipient: String,
    occurred_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        message: impl Into<String>,
        recipient: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            message: message.into(),
            recipient: recipient.into(),
            occurred_at,
        }
    }

    /// Alert raised when an item is already expired as it is received.
    pub fn item_expired(item_name: &str, owner: &str, occurred_at: DateTime<Utc>) -> Self {
        Self::new(format!("Your {item_name} is expired!"), owner, occurred_at)
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

impl Event for Notification {
    fn event_type(&self) -> &'static str {
        "inventory.item.expired"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn item_expired_message_names_the_item() {
        let n = Notification::item_expired("milk", "bob", Utc::now());
        assert_eq!(n.message(), "Your milk is expired!");
        assert_eq!(n.recipient(), "bob");
        assert_eq!(n.event_type(), "inventory.item.expired");
    }

    #[test]
    fn event_metadata_carries_the_callers_time() {
        let at = Utc.with_ymd_and_hms(2024, 3, 10, 9, 15, 0).unwrap();
        let n = Notification::item_expired("cheese", "bob", at);
        assert_eq!(n.occurred_at(), at);
        assert_eq!(n.version(), 1);
    }

    #[test]
    fn ids_are_unique_per_notification() {
        let now = Utc::now();
        let a = Notification::item_expired("milk", "bob", now);
        let b = Notification::item_expired("milk", "bob", now);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let n = Notification::new("hello", "cara", Utc::now());
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["message"], "hello");
        assert_eq!(json["recipient"], "cara");
        assert!(json["id"].is_string());
    }
}
