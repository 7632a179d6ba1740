//! `shelflife-core`: shared domain building blocks.
//!
//! This crate holds the error taxonomy, the entity contract and the clock
//! abstraction. It carries no IO and no storage.

pub mod clock;
pub mod entity;
pub mod error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
