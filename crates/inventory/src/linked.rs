//! Singly-linked-list backend with head insertion.

use crate::{BackendKind, FoodItem, InventoryIndex};

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    item: FoodItem,
    next: Link,
}

/// Keeps duplicates; the newest item comes first.
#[derive(Debug, Default)]
pub struct LinkedIndex {
    head: Link,
    len: usize,
}

impl LinkedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl InventoryIndex for LinkedIndex {
    fn kind(&self) -> BackendKind {
        BackendKind::Linked
    }

    fn insert(&mut self, item: FoodItem) -> bool {
        tracing::debug!(name = item.name(), owner = item.owner(), "item pushed to head");
        let next = self.head.take();
        self.head = Some(Box::new(Node { item, next }));
        self.len += 1;
        true
    }

    fn items(&self) -> Box<dyn Iterator<Item = &FoodItem> + '_> {
        Box::new(self.iter())
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl Drop for LinkedIndex {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

/// Head-to-tail iterator.
#[derive(Debug)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a FoodItem;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.item)
    }
}
