use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelflife_core::{DomainError, DomainResult, Entity};

use crate::expiry;

/// A batch of perishable stock registered by a restaurant.
///
/// Immutable once created. `owner` is the registering account's username,
/// stored by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    name: String,
    quantity: u32,
    shelf_life_days: u32,
    owner: String,
}

impl FoodItem {
    /// Validate raw input and build an item.
    ///
    /// Whether `owner` is allowed to register stock is the caller's concern.
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        shelf_life_days: i64,
        owner: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        let quantity = validate_quantity(quantity)?;
        let shelf_life_days = validate_shelf_life(shelf_life_days)?;

        Ok(Self {
            name,
            quantity,
            shelf_life_days,
            owner: owner.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn shelf_life_days(&self) -> u32 {
        self.shelf_life_days
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// See [`expiry::is_expired_at`].
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        expiry::is_expired_at(self.shelf_life_days, now)
    }
}

impl Entity for FoodItem {
    fn key(&self) -> &str {
        &self.name
    }
}

/// Names must contain something other than whitespace.
pub fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::invalid_input("Food item name cannot be empty."));
    }
    Ok(())
}

pub fn validate_quantity(quantity: i64) -> DomainResult<u32> {
    positive(
        quantity,
        "Quantity must be greater than 0.",
        "Quantity is too large.",
    )
}

pub fn validate_shelf_life(days: i64) -> DomainResult<u32> {
    positive(
        days,
        "Days to expiration must be greater than 0.",
        "Days to expiration is too large.",
    )
}

fn positive(value: i64, not_positive: &str, too_large: &str) -> DomainResult<u32> {
    if value <= 0 {
        return Err(DomainError::invalid_input(not_positive));
    }
    u32::try_from(value).map_err(|_| DomainError::invalid_input(too_large))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_item() {
        let item = FoodItem::new("milk", 2, 3, "bob").unwrap();
        assert_eq!(item.name(), "milk");
        assert_eq!(item.quantity(), 2);
        assert_eq!(item.shelf_life_days(), 3);
        assert_eq!(item.owner(), "bob");
        assert_eq!(item.key(), "milk");
    }

    #[test]
    fn empty_or_blank_name_rejected() {
        for name in ["", "   "] {
            assert_eq!(
                FoodItem::new(name, 1, 1, "bob").unwrap_err(),
                DomainError::invalid_input("Food item name cannot be empty.")
            );
        }
    }

    #[test]
    fn non_positive_quantity_rejected() {
        for q in [0, -1, i64::MIN] {
            assert_eq!(
                FoodItem::new("milk", q, 1, "bob").unwrap_err(),
                DomainError::invalid_input("Quantity must be greater than 0.")
            );
        }
    }

    #[test]
    fn non_positive_shelf_life_rejected() {
        assert_eq!(
            FoodItem::new("milk", 1, 0, "bob").unwrap_err(),
            DomainError::invalid_input("Days to expiration must be greater than 0.")
        );
    }

    #[test]
    fn name_is_checked_before_numbers() {
        let err = FoodItem::new("", 0, 0, "bob").unwrap_err();
        assert_eq!(err, DomainError::invalid_input("Food item name cannot be empty."));
    }

    #[test]
    fn oversized_values_rejected() {
        let too_big = i64::from(u32::MAX) + 1;
        assert!(FoodItem::new("milk", too_big, 1, "bob").is_err());
        assert!(FoodItem::new("milk", 1, too_big, "bob").is_err());
        assert!(FoodItem::new("milk", i64::from(u32::MAX), 1, "bob").is_ok());
    }
}
