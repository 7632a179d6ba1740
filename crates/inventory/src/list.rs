//! Flat-list backend: append on insert, linear scan on query.

use crate::{BackendKind, FoodItem, InventoryIndex};

/// Unordered index; keeps duplicates, queries in insertion order.
#[derive(Debug, Default)]
pub struct ListIndex {
    items: Vec<FoodItem>,
}

impl ListIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InventoryIndex for ListIndex {
    fn kind(&self) -> BackendKind {
        BackendKind::List
    }

    fn insert(&mut self, item: FoodItem) -> bool {
        tracing::debug!(name = item.name(), owner = item.owner(), "item appended");
        self.items.push(item);
        true
    }

    fn items(&self) -> Box<dyn Iterator<Item = &FoodItem> + '_> {
        Box::new(self.items.iter())
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
