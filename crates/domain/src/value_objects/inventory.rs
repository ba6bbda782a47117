//! Bounded, ordered, duplicate-free item collection.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::ItemName;

/// A player's inventory: insertion-ordered, unique items, bounded capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ItemName>", into = "Vec<ItemName>")]
pub struct Inventory {
    items: Vec<ItemName>,
}

impl Inventory {
    /// Maximum number of items an inventory can hold
    pub const MAX_SIZE: usize = 10;

    /// Create an empty inventory.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item to the end of the inventory.
    ///
    /// # Errors
    ///
    /// - `DomainError::DuplicateItem` if the item is already present
    ///   (checked before capacity, so duplicates are reported even when full)
    /// - `DomainError::InventoryFull` if the inventory is at capacity
    pub fn add(&mut self, item: ItemName) -> Result<(), DomainError> {
        if self.contains(item.as_str()) {
            return Err(DomainError::DuplicateItem(item.into()));
        }
        if self.is_full() {
            return Err(DomainError::inventory_full(
                self.items.len() as u32,
                Self::MAX_SIZE as u32,
            ));
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove an item by name, preserving the order of the remaining items.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ItemNotFound` if no item with this name is present.
    pub fn remove(&mut self, name: &str) -> Result<(), DomainError> {
        let index = self
            .items
            .iter()
            .position(|item| item.as_str() == name)
            .ok_or_else(|| DomainError::ItemNotFound(name.to_string()))?;
        self.items.remove(index);
        Ok(())
    }

    /// Whether an item with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.as_str() == name)
    }

    /// Whether the inventory is at capacity.
    pub fn is_full(&self) -> bool {
        self.items.len() == Self::MAX_SIZE
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in insertion order.
    pub fn items(&self) -> &[ItemName] {
        &self.items
    }
}

impl TryFrom<Vec<ItemName>> for Inventory {
    type Error = DomainError;

    fn try_from(items: Vec<ItemName>) -> Result<Self, Self::Error> {
        let mut inventory = Self::new();
        for item in items {
            inventory.add(item)?;
        }
        Ok(inventory)
    }
}

impl From<Inventory> for Vec<ItemName> {
    fn from(inventory: Inventory) -> Vec<ItemName> {
        inventory.items
    }
}
