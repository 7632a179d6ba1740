/// An operation gated on the session's role.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Capability {
    AddFoodItem,
    ViewFoodItems,
    ViewExpiringItems,
    ViewNotifications,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::AddFoodItem,
        Capability::ViewFoodItems,
        Capability::ViewExpiringItems,
        Capability::ViewNotifications,
    ];

    /// Message shown when a logged-in account lacks this capability.
    pub fn denial_message(self) -> &'static str {
        match self {
            Capability::AddFoodItem => "Only restaurants can add food items.",
            Capability::ViewFoodItems => "Only people can view food items.",
            Capability::ViewExpiringItems => "Only people can view expiring items.",
            Capability::ViewNotifications => "Restaurants cannot view notifications.",
        }
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Capability::AddFoodItem => "inventory.add",
            Capability::ViewFoodItems => "inventory.read",
            Capability::ViewExpiringItems => "inventory.expiring",
            Capability::ViewNotifications => "notifications.read",
        };
        f.write_str(name)
    }
}
