//! Grid position value object
//!
//! Coordinates are bounded to the playable grid. A `Position` outside the
//! grid cannot be constructed, so entity code never has to re-check bounds.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A validated position on the grid, `x` in `[0, MAX_X]`, `y` in `[0, MAX_Y]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Largest valid x coordinate
    pub const MAX_X: i32 = 10;
    /// Largest valid y coordinate
    pub const MAX_Y: i32 = 10;

    /// Create a new validated position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPosition` if either coordinate is
    /// negative or beyond the grid bound.
    pub fn new(x: i32, y: i32) -> Result<Self, DomainError> {
        if x < 0 || x > Self::MAX_X || y < 0 || y > Self::MAX_Y {
            return Err(DomainError::InvalidPosition { x, y });
        }
        Ok(Self { x, y })
    }

    /// The origin corner of the grid
    pub fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// The position reached by applying a displacement, if it stays on the grid.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPosition` when the candidate leaves the grid.
    pub fn translated(&self, dx: i32, dy: i32) -> Result<Self, DomainError> {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl TryFrom<(i32, i32)> for Position {
    type Error = DomainError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> (i32, i32) {
        (pos.x, pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_position() {
        let pos = Position::new(3, 7).unwrap();
        assert_eq!(pos.x(), 3);
        assert_eq!(pos.y(), 7);
    }

    #[test]
    fn corners_are_valid() {
        assert!(Position::new(0, 0).is_ok());
        assert!(Position::new(Position::MAX_X, Position::MAX_Y).is_ok());
    }

    #[test]
    fn negative_x_rejected() {
        let result = Position::new(-1, 0);
        assert_eq!(
            result.unwrap_err(),
            DomainError::InvalidPosition { x: -1, y: 0 }
        );
    }

    #[test]
    fn negative_y_rejected() {
        assert!(Position::new(0, -1).is_err());
    }

    #[test]
    fn x_beyond_grid_rejected() {
        assert!(Position::new(Position::MAX_X + 1, 0).is_err());
    }

    #[test]
    fn y_beyond_grid_rejected() {
        assert!(Position::new(0, Position::MAX_Y + 1).is_err());
    }

    #[test]
    fn translated_within_grid() {
        let pos = Position::new(5, 5).unwrap();
        let moved = pos.translated(1, 0).unwrap();
        assert_eq!((moved.x(), moved.y()), (6, 5));
        // The original is untouched
        assert_eq!((pos.x(), pos.y()), (5, 5));
    }

    #[test]
    fn translated_off_grid_rejected() {
        let pos = Position::origin();
        assert!(pos.translated(0, -1).is_err());
    }

    #[test]
    fn display_format() {
        let pos = Position::new(2, 9).unwrap();
        assert_eq!(pos.to_string(), "(2, 9)");
    }

    #[test]
    fn serde_roundtrip() {
        let pos = Position::new(4, 8).unwrap();
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, "[4,8]");
        let parsed: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pos);
    }

    #[test]
    fn serde_rejects_out_of_bounds() {
        let result: Result<Position, _> = serde_json::from_str("[11,0]");
        assert!(result.is_err());
    }
}
