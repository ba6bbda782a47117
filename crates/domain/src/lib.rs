//! Gridbound Domain - the character entity model
//!
//! A single validated entity ([`Player`]) plus the value objects it is built
//! from. Pure and synchronous: no I/O, no clocks, no shared state. Callers own
//! their `Player` and mutate it through validated operations only.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::Player;
pub use error::DomainError;
pub use value_objects::{Direction, Inventory, ItemName, PlayerName, Position};
