//! Unified error type for the domain layer
//!
//! Every invariant violation in the entity model maps to one variant here,
//! so callers can match on the exact failure instead of parsing strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Player name is empty or contains non-alphabetic characters
    #[error("Invalid player name: {0}")]
    InvalidName(String),

    /// Health outside `[0, MAX_HEALTH]`
    #[error("Health must be between 0 and {max}, got {value}")]
    InvalidHealth { value: i32, max: i32 },

    /// Attack outside `[0, MAX_ATTACK]`
    #[error("Attack must be between 0 and {max}, got {value}")]
    InvalidAttack { value: i32, max: i32 },

    /// Defense outside `[0, MAX_DEFENSE]`
    #[error("Defense must be between 0 and {max}, got {value}")]
    InvalidDefense { value: i32, max: i32 },

    /// Coordinates outside the grid bounds
    #[error("Position ({x}, {y}) is outside the grid")]
    InvalidPosition { x: i32, y: i32 },

    /// Item name is empty or otherwise malformed
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Item is already present in the inventory
    #[error("Inventory already contains {0}")]
    DuplicateItem(String),

    /// Inventory is at capacity
    #[error("Inventory full: {current}/{max} items")]
    InventoryFull { current: u32, max: u32 },

    /// Item is not present in the inventory
    #[error("Item not found in inventory: {0}")]
    ItemNotFound(String),

    /// Damage amount below zero
    #[error("Damage cannot be negative, got {amount}")]
    NegativeDamage { amount: i32 },

    /// Damage applied to an already dead player
    #[error("Player is already dead")]
    AlreadyDead,
}

impl DomainError {
    /// Create an invalid name error
    pub fn invalid_name(msg: impl Into<String>) -> Self {
        Self::InvalidName(msg.into())
    }

    /// Create an invalid item error
    pub fn invalid_item(msg: impl Into<String>) -> Self {
        Self::InvalidItem(msg.into())
    }

    /// Create an inventory full error
    pub fn inventory_full(current: u32, max: u32) -> Self {
        Self::InventoryFull { current, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_name_error() {
        let err = DomainError::invalid_name("name cannot be empty");
        assert!(matches!(err, DomainError::InvalidName(_)));
        assert_eq!(err.to_string(), "Invalid player name: name cannot be empty");
    }

    #[test]
    fn invalid_health_error_message() {
        let err = DomainError::InvalidHealth {
            value: 120,
            max: 100,
        };
        assert_eq!(err.to_string(), "Health must be between 0 and 100, got 120");
    }

    #[test]
    fn invalid_position_error_message() {
        let err = DomainError::InvalidPosition { x: 11, y: 0 };
        assert_eq!(err.to_string(), "Position (11, 0) is outside the grid");
    }

    #[test]
    fn inventory_full_error() {
        let err = DomainError::inventory_full(10, 10);
        assert!(matches!(err, DomainError::InventoryFull { .. }));
        assert_eq!(err.to_string(), "Inventory full: 10/10 items");
    }

    #[test]
    fn already_dead_error_message() {
        assert_eq!(DomainError::AlreadyDead.to_string(), "Player is already dead");
    }
}
