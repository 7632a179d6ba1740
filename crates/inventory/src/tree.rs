//! Binary-search-tree backend keyed by item name.
//!
//! Unbalanced: shape follows insertion order, so inserting in sorted order
//! degenerates into a list of depth `n`. Insertion, traversal and drop are
//! all iterative and handle that case without deep recursion.

use core::cmp::Ordering;

use crate::{BackendKind, FoodItem, InventoryIndex};

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    item: FoodItem,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(item: FoodItem) -> Box<Self> {
        Box::new(Self {
            item,
            left: None,
            right: None,
        })
    }
}

/// Ordered index; at most one item per name.
#[derive(Debug, Default)]
pub struct TreeIndex {
    root: Link,
    len: usize,
}

impl TreeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// In-order (ascending name) iterator.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    /// Exact-name lookup.
    #[cfg(test)]
    fn get(&self, name: &str) -> Option<&FoodItem> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match name.cmp(node.item.name()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.item),
            };
        }
        None
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    #[cfg(test)]
    fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, d)) = stack.pop() {
            deepest = deepest.max(d);
            stack.extend(node.left.as_deref().map(|n| (n, d + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, d + 1)));
        }
        deepest
    }
}

impl InventoryIndex for TreeIndex {
    fn kind(&self) -> BackendKind {
        BackendKind::Tree
    }

    /// Descend left on strictly less, right on strictly greater. An equal name
    /// keeps the existing node and discards `item`.
    fn insert(&mut self, item: FoodItem) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match item.name().cmp(node.item.name()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    tracing::debug!(name = item.name(), "duplicate name dropped by tree index");
                    return false;
                }
            };
        }
        tracing::debug!(name = item.name(), owner = item.owner(), "item indexed");
        *link = Some(Node::leaf(item));
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

impl Drop for TreeIndex {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Left subtree, node, right subtree; driven by an explicit stack.
#[derive(Debug)]
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut cursor: Option<&'a Node>) {
        while let Some(node) = cursor {
            self.stack.push(node);
            cursor = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a FoodItem;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.item)
    }
}
