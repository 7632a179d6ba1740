use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use shelflife_core::Entity;

use crate::Role;

/// A registered account. Immutable once created.
///
/// The credential is held as a [`SecretString`], so `Debug` output and
/// serialization never carry it.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    username: String,
    #[serde(skip)]
    credential: SecretString,
    role: Role,
}

impl Identity {
    pub fn new(username: impl Into<String>, credential: SecretString, role: Role) -> Self {
        Self {
            username: username.into(),
            credential,
            role,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub(crate) fn credential_matches(&self, candidate: &str) -> bool {
        self.credential.expose_secret() == candidate
    }
}

impl Entity for Identity {
    fn key(&self) -> &str {
        &self.username
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_the_credential() {
        let id = Identity::new("alice", SecretString::from("hunter2"), Role::Person);
        let dbg = format!("{id:?}");
        assert!(dbg.contains("alice"));
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("REDACTED"));
    }

    #[test]
    fn serialization_omits_the_credential() {
        let id = Identity::new("bob", SecretString::from("pw"), Role::Restaurant);
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json["username"], "bob");
        assert_eq!(json["role"], "restaurant");
        assert!(json.get("credential").is_none());
    }

    #[test]
    fn credential_match_is_case_sensitive() {
        let id = Identity::new("carol", SecretString::from("Secret"), Role::Person);
        assert!(id.credential_matches("Secret"));
        assert!(!id.credential_matches("secret"));
        assert_eq!(id.key(), "carol");
    }
}
