//! Events raised by inventory operations and the queue that holds them.

pub mod event;
pub mod notification;
pub mod queue;

pub use event::Event;
pub use notification::{Notification, NotificationId};
pub use queue::NotificationQueue;
