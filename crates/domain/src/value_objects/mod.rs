//! Value objects - Immutable objects defined by their attributes

mod direction;
mod inventory;
mod names;
mod position;

pub use direction::Direction;
pub use inventory::Inventory;
pub use names::{ItemName, PlayerName};
pub use position::Position;
