//! Player entity - the character a caller owns and mutates
//!
//! All fields sit behind validated mutators. Name and position arrive as
//! value objects that are valid by construction; the numeric attributes are
//! range-checked on every write, not just at construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::value_objects::{Direction, Inventory, ItemName, PlayerName, Position};

/// A player on the grid: bounded attributes, bounded inventory, bounded position.
///
/// The player has an implicit two-state lifecycle: alive (`health > 0`) and
/// dead (`health == 0`). Death is terminal; there is no revive operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlayerRecord", into = "PlayerRecord")]
pub struct Player {
    name: PlayerName,
    health: i32,
    attack: i32,
    defense: i32,
    inventory: Inventory,
    position: Position,
}

impl Player {
    /// Maximum (and starting) health
    pub const MAX_HEALTH: i32 = 100;
    /// Maximum attack value
    pub const MAX_ATTACK: i32 = 10;
    /// Maximum defense value
    pub const MAX_DEFENSE: i32 = 50;

    /// Create a new player at full health with an empty inventory.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAttack` or `DomainError::InvalidDefense`
    /// when the attribute is outside its range. Name and position are already
    /// validated by their own types.
    pub fn new(
        name: PlayerName,
        attack: i32,
        defense: i32,
        position: Position,
    ) -> Result<Self, DomainError> {
        Self::check_attack(attack)?;
        Self::check_defense(defense)?;
        Ok(Self {
            name,
            health: Self::MAX_HEALTH,
            attack,
            defense,
            inventory: Inventory::new(),
            position,
        })
    }

    // Read-only accessors

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn attack(&self) -> i32 {
        self.attack
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn position(&self) -> Position {
        self.position
    }

    // Validated mutators

    /// Replace the player's name. `PlayerName` is valid by construction.
    pub fn set_name(&mut self, name: PlayerName) {
        self.name = name;
    }

    /// Set health, enforcing `0 <= health <= MAX_HEALTH`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHealth` when the value is out of range.
    pub fn set_health(&mut self, value: i32) -> Result<(), DomainError> {
        if value < 0 || value > Self::MAX_HEALTH {
            return Err(DomainError::InvalidHealth {
                value,
                max: Self::MAX_HEALTH,
            });
        }
        self.health = value;
        Ok(())
    }

    /// Set attack, enforcing `0 <= attack <= MAX_ATTACK`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAttack` when the value is out of range.
    pub fn set_attack(&mut self, value: i32) -> Result<(), DomainError> {
        Self::check_attack(value)?;
        self.attack = value;
        Ok(())
    }

    /// Set defense, enforcing `0 <= defense <= MAX_DEFENSE`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDefense` when the value is out of range.
    pub fn set_defense(&mut self, value: i32) -> Result<(), DomainError> {
        Self::check_defense(value)?;
        self.defense = value;
        Ok(())
    }

    /// Replace the player's position. `Position` is valid by construction.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    // Inventory operations

    /// Append an item to the inventory.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateItem` if the item is already held, or
    /// `DomainError::InventoryFull` if the inventory is at capacity.
    pub fn add_to_inventory(&mut self, item: ItemName) -> Result<(), DomainError> {
        self.inventory.add(item)
    }

    /// Remove an item by name, keeping the remaining items in order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ItemNotFound` if the item is not held.
    pub fn remove_from_inventory(&mut self, name: &str) -> Result<(), DomainError> {
        self.inventory.remove(name)
    }

    /// Whether the inventory is at capacity.
    pub fn inventory_is_full(&self) -> bool {
        self.inventory.is_full()
    }

    // Combat and movement

    /// Whether the player is alive (`health > 0`).
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply incoming damage, reduced by defense as a percentage.
    ///
    /// At least 1 point always lands; health clamps at 0. Returns the damage
    /// that was computed, which may exceed the health actually lost when the
    /// blow is fatal.
    ///
    /// # Errors
    ///
    /// - `DomainError::NegativeDamage` if `amount < 0`
    /// - `DomainError::AlreadyDead` if the player is already dead
    pub fn take_damage(&mut self, amount: i32) -> Result<i32, DomainError> {
        if amount < 0 {
            return Err(DomainError::NegativeDamage { amount });
        }
        if !self.is_alive() {
            return Err(DomainError::AlreadyDead);
        }
        // Full absorption. Not reachable while the defense cap is 50.
        if self.defense == 100 {
            return Ok(0);
        }
        // Widen before multiplying: amount near i32::MAX would overflow in i32
        let damage = (i64::from(amount) * i64::from(100 - self.defense) / 100).max(1);
        let remaining = (i64::from(self.health) - damage).max(0) as i32;
        self.set_health(remaining)?;
        // damage <= amount, so it fits back into i32
        Ok(damage as i32)
    }

    /// Try to move one step in a direction.
    ///
    /// Returns `true` and updates the position when the step stays on the
    /// grid; returns `false` and leaves the position unchanged when it would
    /// leave the grid. Hitting the edge is expected, so it is not an error.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.displacement();
        match self.position.translated(dx, dy) {
            Ok(position) => {
                self.position = position;
                true
            }
            Err(_) => false,
        }
    }

    /// One-line identity summary: name and combat attributes.
    pub fn summary(&self) -> String {
        format!(
            "{} (health {}, attack {}, defense {})",
            self.name, self.health, self.attack, self.defense
        )
    }

    fn check_attack(value: i32) -> Result<(), DomainError> {
        if value < 0 || value > Self::MAX_ATTACK {
            return Err(DomainError::InvalidAttack {
                value,
                max: Self::MAX_ATTACK,
            });
        }
        Ok(())
    }

    fn check_defense(value: i32) -> Result<(), DomainError> {
        if value < 0 || value > Self::MAX_DEFENSE {
            return Err(DomainError::InvalidDefense {
                value,
                max: Self::MAX_DEFENSE,
            });
        }
        Ok(())
    }
}

/// Multi-line status report: identity, attributes, and position.
impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player: {}", self.name)?;
        writeln!(f, "Health: {}", self.health)?;
        writeln!(f, "Attack: {}", self.attack)?;
        writeln!(f, "Defense: {}", self.defense)?;
        write!(f, "Position: {}", self.position)
    }
}

/// Plain serde shape for a stored player.
///
/// Deserialization goes through `TryFrom`, so a stored record with an
/// out-of-range attribute is rejected instead of producing an invalid entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerRecord {
    name: PlayerName,
    health: i32,
    attack: i32,
    defense: i32,
    inventory: Inventory,
    position: Position,
}

impl TryFrom<PlayerRecord> for Player {
    type Error = DomainError;

    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        let mut player = Player::new(
            record.name,
            record.attack,
            record.defense,
            record.position,
        )?;
        player.set_health(record.health)?;
        player.inventory = record.inventory;
        Ok(player)
    }
}

impl From<Player> for PlayerRecord {
    fn from(player: Player) -> PlayerRecord {
        PlayerRecord {
            name: player.name,
            health: player.health,
            attack: player.attack,
            defense: player.defense,
            inventory: player.inventory,
            position: player.position,
        }
    }
}
