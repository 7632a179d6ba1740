//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: the interactive loop reports it and returns
/// to the menu. Environment failures (closed stdin, broken stdout) are not
/// modelled here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Signup attempted with a username that is already registered.
    #[error("Username '{0}' is already in use. Please choose a different username.")]
    DuplicateIdentity(String),

    /// Signup attempted with a role string outside the recognized set.
    #[error("Invalid user type '{0}'. Please choose 'people' or 'restaurant'.")]
    InvalidRole(String),

    /// Username/credential pair did not match any registered identity.
    #[error("Login failed. Invalid username or password.")]
    AuthenticationFailed,

    /// A value failed validation before reaching a store.
    #[error("{0}")]
    InvalidInput(String),

    /// The current session may not perform the requested operation.
    #[error("{0}")]
    Unauthorized(String),
}

impl DomainError {
    pub fn duplicate_identity(username: impl Into<String>) -> Self {
        Self::DuplicateIdentity(username.into())
    }

    pub fn invalid_role(role: impl Into<String>) -> Self {
        Self::InvalidRole(role.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }
}
