//! Inventory domain module.
//!
//! Food items, the expiry rule, and the [`InventoryIndex`] contract with its
//! three storage backends. Pure in-memory logic (no IO, no clock reads: the
//! caller passes `now`).

pub mod expiry;
pub mod index;
pub mod intake;
pub mod item;
pub mod linked;
pub mod list;
pub mod tree;

pub use index::{BackendKind, InventoryIndex, new_index};
pub use intake::{Receipt, receive};
pub use item::{FoodItem, validate_name, validate_quantity, validate_shelf_life};
pub use linked::LinkedIndex;
pub use list::ListIndex;
pub use tree::TreeIndex;
