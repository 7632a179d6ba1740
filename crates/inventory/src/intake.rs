//! Receiving stock: the one operation that touches both the index and the
//! notification queue.

use chrono::{DateTime, Utc};

use shelflife_events::{Notification, NotificationQueue};

use crate::{FoodItem, InventoryIndex, expiry};

/// What happened when an item was received.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// `false` when the index dropped the item (tree backend, name taken).
    pub indexed: bool,
    /// `true` when an expiration alert was queued for the owner.
    pub notified: bool,
}

/// Register `item` in `index`, alerting its owner if it is already expired.
///
/// `now` is read once by the caller and used for the single expiry check.
/// The alert depends only on the item, not on whether the index kept it.
pub fn receive(
    index: &mut dyn InventoryIndex,
    queue: &mut NotificationQueue,
    item: FoodItem,
    now: DateTime<Utc>,
) -> Receipt {
    let notified = expiry::is_expired_at(item.shelf_life_days(), now);
    if notified {
        queue.enqueue(Notification::item_expired(item.name(), item.owner(), now));
    }

    let name = item.name().to_string();
    let owner = item.owner().to_string();
    let indexed = index.insert(item);
    tracing::info!(
        name = %name,
        owner = %owner,
        backend = %index.kind(),
        indexed,
        notified,
        "stock received"
    );

    Receipt { indexed, notified }
}
