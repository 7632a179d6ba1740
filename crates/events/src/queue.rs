//! FIFO holding area for pending notifications.

use std::collections::VecDeque;

use crate::{Event, Notification};

/// Pending notifications, oldest first.
///
/// There is no per-recipient dequeue: [`drain_all`](Self::drain_all) hands back
/// every pending notification whoever it is addressed to, and the caller decides
/// what to show.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the tail.
    pub fn enqueue(&mut self, notification: Notification) {
        tracing::debug!(
            event_type = notification.event_type(),
            version = notification.version(),
            occurred_at = %notification.occurred_at(),
            recipient = notification.recipient(),
            id = %notification.id(),
            "notification enqueued"
        );
        self.pending.push_back(notification);
    }

    /// Remove and return everything pending, head to tail.
    pub fn drain_all(&mut self) -> Vec<Notification> {
        let drained: Vec<Notification> = self.pending.drain(..).collect();
        if !drained.is_empty() {
            tracing::debug!(count = drained.len(), "notifications drained");
        }
        drained
    }

    /// Non-destructive view of what is pending.
    pub fn peek_all(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
