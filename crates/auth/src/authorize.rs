use shelflife_core::{DomainError, DomainResult};

use crate::{Capability, Identity, Session};

/// Role gate checked before any restricted operation runs.
///
/// Returns the session's identity when its role permits `capability`.
/// - No IO
/// - No panics
pub fn authorize(session: &Session, capability: Capability) -> DomainResult<&Identity> {
    let Some(identity) = session.identity() else {
        tracing::info!(%capability, "denied: no active session");
        return Err(DomainError::unauthorized("You must be logged in."));
    };

    if identity.role().permits(capability) {
        Ok(identity)
    } else {
        tracing::info!(
            username = identity.username(),
            role = %identity.role(),
            %capability,
            "denied: role lacks capability"
        );
        Err(DomainError::unauthorized(capability.denial_message()))
    }
}
