use shelflife_auth::{IdentityStore, Session};
use shelflife_core::{Clock, SystemClock};
use shelflife_events::NotificationQueue;
use shelflife_inventory::{BackendKind, InventoryIndex, new_index};

/// Everything one process run knows about.
///
/// Created at startup and dropped at exit; nothing is persisted. Operations
/// live in [`crate::services`].
#[derive(Debug)]
pub struct AppContext {
    pub(crate) identities: IdentityStore,
    pub(crate) inventory: Box<dyn InventoryIndex>,
    pub(crate) notifications: NotificationQueue,
    pub(crate) session: Session,
    pub(crate) clock: Box<dyn Clock>,
}

impl AppContext {
    pub fn new(backend: BackendKind) -> Self {
        Self::with_clock(backend, Box::new(SystemClock))
    }

    pub fn with_clock(backend: BackendKind, clock: Box<dyn Clock>) -> Self {
        Self {
            identities: IdentityStore::new(),
            inventory: new_index(backend),
            notifications: NotificationQueue::new(),
            session: Session::new(),
            clock,
        }
    }

    pub fn identities(&self) -> &IdentityStore {
        &self.identities
    }

    pub fn inventory(&self) -> &dyn InventoryIndex {
        self.inventory.as_ref()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
