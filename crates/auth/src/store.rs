//! Registered accounts.

use secrecy::SecretString;

use shelflife_core::{DomainError, DomainResult, Entity};

use crate::{Identity, Role};

/// Registered identities, scanned linearly.
#[derive(Debug, Default)]
pub struct IdentityStore {
    identities: Vec<Identity>,
}

impl IdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.find(username).is_some()
    }

    pub fn find(&self, username: &str) -> Option<&Identity> {
        self.identities.iter().find(|i| i.key() == username)
    }

    /// Register a new account.
    ///
    /// Checks run in prompt order: the username must be free before the role
    /// string is even looked at.
    pub fn register(
        &mut self,
        username: &str,
        credential: &str,
        role: &str,
    ) -> DomainResult<&Identity> {
        if username.is_empty() {
            return Err(DomainError::invalid_input("Username cannot be empty."));
        }
        if self.contains(username) {
            return Err(DomainError::duplicate_identity(username));
        }
        let role: Role = role.parse()?;

        let identity = Identity::new(username, SecretString::from(credential), role);
        tracing::info!(username, %role, "identity registered");
        self.identities.push(identity);

        let idx = self.identities.len() - 1;
        Ok(&self.identities[idx])
    }

    /// Exact match on both username and credential.
    pub fn authenticate(&self, username: &str, credential: &str) -> DomainResult<&Identity> {
        self.identities
            .iter()
            .find(|i| i.key() == username && i.credential_matches(credential))
            .ok_or(DomainError::AuthenticationFailed)
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_then_authenticate() {
        let mut store = IdentityStore::new();
        let id = store.register("alice", "pw1", "people").unwrap();
        assert_eq!(id.username(), "alice");
        assert_eq!(id.role(), Role::Person);

        let found = store.authenticate("alice", "pw1").unwrap();
        assert_eq!(found.username(), "alice");
    }

    #[test]
    fn duplicate_username_is_rejected() {
        let mut store = IdentityStore::new();
        store.register("alice", "pw1", "people").unwrap();

        let err = store.register("alice", "other", "restaurant").unwrap_err();
        assert_eq!(err, DomainError::duplicate_identity("alice"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_is_reported_before_invalid_role() {
        let mut store = IdentityStore::new();
        store.register("alice", "pw1", "people").unwrap();

        let err = store.register("alice", "pw1", "chef").unwrap_err();
        assert!(matches!(err, DomainError::DuplicateIdentity(_)));
    }

    #[test]
    fn unknown_role_is_rejected() {
        let mut store = IdentityStore::new();
        let err = store.register("dan", "pw", "chef").unwrap_err();
        assert_eq!(err, DomainError::invalid_role("chef"));
        assert!(store.is_empty());
    }

    #[test]
    fn empty_username_is_rejected() {
        let mut store = IdentityStore::new();
        let err = store.register("", "pw", "people").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn wrong_credential_fails_authentication() {
        let mut store = IdentityStore::new();
        store.register("alice", "pw1", "people").unwrap();

        assert_eq!(
            store.authenticate("alice", "wrong").unwrap_err(),
            DomainError::AuthenticationFailed
        );
        assert_eq!(
            store.authenticate("ALICE", "pw1").unwrap_err(),
            DomainError::AuthenticationFailed
        );
        assert_eq!(
            store.authenticate("nobody", "pw1").unwrap_err(),
            DomainError::AuthenticationFailed
        );
    }
}
