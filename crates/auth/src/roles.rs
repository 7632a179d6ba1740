use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shelflife_core::DomainError;

use crate::Capability;

/// Account role.
///
/// Closed set: each variant carries the capabilities of its kind of account
/// and is matched on directly, never downcast.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// A consumer account. Wire name: `people`.
    #[serde(rename = "people")]
    Person,
    /// A supplier account that registers stock. Wire name: `restaurant`.
    #[serde(rename = "restaurant")]
    Restaurant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Person => "people",
            Role::Restaurant => "restaurant",
        }
    }

    /// Whether an account of this role may exercise `capability`.
    pub fn permits(self, capability: Capability) -> bool {
        match self {
            Role::Restaurant => matches!(capability, Capability::AddFoodItem),
            Role::Person => matches!(
                capability,
                Capability::ViewFoodItems
                    | Capability::ViewExpiringItems
                    | Capability::ViewNotifications
            ),
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    /// Exact, case-sensitive match on the wire names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "people" => Ok(Role::Person),
            "restaurant" => Ok(Role::Restaurant),
            other => Err(DomainError::invalid_role(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names_only() {
        assert_eq!("people".parse::<Role>(), Ok(Role::Person));
        assert_eq!("restaurant".parse::<Role>(), Ok(Role::Restaurant));
        assert_eq!(
            "Restaurant".parse::<Role>(),
            Err(DomainError::invalid_role("Restaurant"))
        );
        assert!("person".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn capabilities_are_disjoint() {
        for cap in Capability::ALL {
            assert_ne!(Role::Person.permits(cap), Role::Restaurant.permits(cap));
        }
    }

    #[test]
    fn serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Person).unwrap(), "\"people\"");
        let role: Role = serde_json::from_str("\"restaurant\"").unwrap();
        assert_eq!(role, Role::Restaurant);
    }
}
