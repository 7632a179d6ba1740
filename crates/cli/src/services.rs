//! Operations the menu delegates to, one per menu entry.
//!
//! Restricted operations pass the role gate first and only then touch the
//! index or the queue.

use shelflife_auth::{Capability, Identity, authorize};
use shelflife_core::{DomainError, DomainResult};
use shelflife_events::Notification;
use shelflife_inventory::{FoodItem, Receipt, receive};

use crate::AppContext;

impl AppContext {
    /// Fails with `DuplicateIdentity` if `username` is taken.
    ///
    /// The menu calls this right after reading the username, before asking
    /// for anything else.
    pub fn ensure_username_available(&self, username: &str) -> DomainResult<()> {
        if self.identities.contains(username) {
            return Err(DomainError::duplicate_identity(username));
        }
        Ok(())
    }

    pub fn signup(&mut self, username: &str, credential: &str, role: &str) -> DomainResult<()> {
        self.identities.register(username, credential, role)?;
        Ok(())
    }

    /// `false` on bad credentials; the session is left as it was.
    pub fn login(&mut self, username: &str, credential: &str) -> bool {
        self.session.login(&self.identities, username, credential)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// Role gate on its own, for callers that want to fail before prompting.
    pub fn require(&self, capability: Capability) -> DomainResult<&Identity> {
        authorize(&self.session, capability)
    }

    /// Register stock owned by the logged-in restaurant.
    pub fn add_food_item(
        &mut self,
        name: &str,
        quantity: i64,
        shelf_life_days: i64,
    ) -> DomainResult<Receipt> {
        let owner = authorize(&self.session, Capability::AddFoodItem)?
            .username()
            .to_string();
        let item = FoodItem::new(name, quantity, shelf_life_days, owner)?;
        let now = self.clock.now();
        Ok(receive(
            self.inventory.as_mut(),
            &mut self.notifications,
            item,
            now,
        ))
    }

    /// Items owned by the logged-in account.
    pub fn view_food_items(&self) -> DomainResult<Vec<&FoodItem>> {
        let me = authorize(&self.session, Capability::ViewFoodItems)?;
        Ok(self.inventory.query_by_owner(me.username()))
    }

    /// Items owned by the logged-in account that count as expired right now.
    pub fn view_expiring_items(&self) -> DomainResult<Vec<&FoodItem>> {
        let me = authorize(&self.session, Capability::ViewExpiringItems)?;
        Ok(self
            .inventory
            .query_expiring(me.username(), self.clock.now()))
    }

    /// Drain every pending notification, whoever it is addressed to.
    pub fn view_notifications(&mut self) -> DomainResult<Vec<Notification>> {
        authorize(&self.session, Capability::ViewNotifications)?;
        Ok(self.notifications.drain_all())
    }
}
