//! `shelflife-auth`: accounts, roles and the single interactive session.
//!
//! This crate is decoupled from the terminal: the façade feeds it strings and
//! gets typed results back.

pub mod authorize;
pub mod identity;
pub mod permissions;
pub mod roles;
pub mod session;
pub mod store;

pub use authorize::authorize;
pub use identity::Identity;
pub use permissions::Capability;
pub use roles::Role;
pub use session::Session;
pub use store::IdentityStore;
