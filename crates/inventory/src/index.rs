//! The contract every inventory backend satisfies.

use core::str::FromStr;

use chrono::{DateTime, Utc};

use shelflife_core::DomainError;

use crate::{FoodItem, LinkedIndex, ListIndex, TreeIndex};

/// Store of food items answering owner-filtered queries.
///
/// Backends agree on the operations, not on ordering or duplicate handling:
///
/// | backend | query order | equal names |
/// |---|---|---|
/// | [`TreeIndex`] | ascending name | second insert dropped |
/// | [`ListIndex`] | insertion order | kept |
/// | [`LinkedIndex`] | reverse insertion order | kept |
///
/// Queries re-traverse the whole store on every call; no cursor survives
/// between calls.
pub trait InventoryIndex: core::fmt::Debug {
    fn kind(&self) -> BackendKind;

    /// Store `item`. Returns `false` when the backend dropped it; that is not
    /// an error and nothing else is reported.
    fn insert(&mut self, item: FoodItem) -> bool;

    /// Every stored item in the backend's natural order.
    fn items(&self) -> Box<dyn Iterator<Item = &FoodItem> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Items registered by `owner`.
    fn query_by_owner(&self, owner: &str) -> Vec<&FoodItem> {
        self.items().filter(|item| item.owner() == owner).collect()
    }

    /// Items registered by `owner` that satisfy the expiry predicate at `now`.
    ///
    /// See [`crate::expiry`]: with positive shelf lives this is always empty.
    fn query_expiring(&self, owner: &str, now: DateTime<Utc>) -> Vec<&FoodItem> {
        self.items()
            .filter(|item| item.owner() == owner && item.is_expired_at(now))
            .collect()
    }
}

/// Selectable storage backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum BackendKind {
    #[default]
    Tree,
    List,
    Linked,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Tree => "tree",
            BackendKind::List => "list",
            BackendKind::Linked => "linked",
        }
    }
}

impl core::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" => Ok(BackendKind::Tree),
            "list" => Ok(BackendKind::List),
            "linked" => Ok(BackendKind::Linked),
            other => Err(DomainError::invalid_input(format!(
                "unknown backend '{other}': expected one of tree, list, linked"
            ))),
        }
    }
}

/// Construct an empty index of the given kind.
pub fn new_index(kind: BackendKind) -> Box<dyn InventoryIndex> {
    match kind {
        BackendKind::Tree => Box::new(TreeIndex::new()),
        BackendKind::List => Box::new(ListIndex::new()),
        BackendKind::Linked => Box::new(LinkedIndex::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const ALL: [BackendKind; 3] = [BackendKind::Tree, BackendKind::List, BackendKind::Linked];

    fn item(name: &str, owner: &str) -> FoodItem {
        FoodItem::new(name, 1, 5, owner).unwrap()
    }

    fn names<'a>(items: impl IntoIterator<Item = &'a FoodItem>) -> Vec<&'a str> {
        items.into_iter().map(FoodItem::name).collect()
    }

    #[test]
    fn backend_kind_round_trips_through_str() {
        for kind in ALL {
            assert_eq!(kind.as_str().parse::<BackendKind>(), Ok(kind));
        }
        assert!("bst".parse::<BackendKind>().is_err());
        assert_eq!(BackendKind::default(), BackendKind::Tree);
    }

    #[test]
    fn constructed_index_reports_its_kind() {
        for kind in ALL {
            let index = new_index(kind);
            assert_eq!(index.kind(), kind);
            assert!(index.is_empty());
        }
    }

    #[test]
    fn every_backend_filters_by_owner() {
        for kind in ALL {
            let mut index = new_index(kind);
            index.insert(item("milk", "bob"));
            index.insert(item("eggs", "dan"));
            index.insert(item("bread", "bob"));

            let mut got = names(index.query_by_owner("bob"));
            got.sort_unstable();
            assert_eq!(got, vec!["bread", "milk"], "{kind}");
            assert!(index.query_by_owner("cara").is_empty(), "{kind}");
            assert_eq!(index.len(), 3, "{kind}");
        }
    }

    #[test]
    fn backends_differ_in_order() {
        let order = ["milk", "apple", "zucchini", "bread"];
        let mut results = Vec::new();
        for kind in ALL {
            let mut index = new_index(kind);
            for name in order {
                index.insert(item(name, "bob"));
            }
            results.push(
                names(index.query_by_owner("bob"))
                    .into_iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>(),
            );
        }
        assert_eq!(results[0], vec!["apple", "bread", "milk", "zucchini"]);
        assert_eq!(results[1], vec!["milk", "apple", "zucchini", "bread"]);
        assert_eq!(results[2], vec!["bread", "zucchini", "apple", "milk"]);
    }

    #[test]
    fn backends_differ_in_duplicate_policy() {
        for (kind, expected) in [
            (BackendKind::Tree, 1),
            (BackendKind::List, 2),
            (BackendKind::Linked, 2),
        ] {
            let mut index = new_index(kind);
            assert!(index.insert(item("milk", "bob")));
            let kept = index.insert(FoodItem::new("milk", 9, 9, "bob").unwrap());
            assert_eq!(kept, expected == 2, "{kind}");
            assert_eq!(index.query_by_owner("bob").len(), expected, "{kind}");
        }
    }

    #[test]
    fn query_expiring_is_empty_for_positive_shelf_life() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();
        for kind in ALL {
            let mut index = new_index(kind);
            index.insert(FoodItem::new("milk", 2, 1, "bob").unwrap());
            index.insert(FoodItem::new("cheese", 1, 90, "bob").unwrap());

            assert!(index.query_expiring("bob", now).is_empty(), "{kind}");
            let later = now + chrono::TimeDelta::days(400);
            assert!(index.query_expiring("bob", later).is_empty(), "{kind}");
        }
    }
}
