//! Movement directions and their grid displacements.
//!
//! The enum is closed: every direction a player can move in is listed here,
//! so movement code can match exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal movement directions.
///
/// The y axis grows downward, matching screen coordinates: `Up` decreases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The unit displacement `(dx, dy)` this direction applies to a position.
    pub fn displacement(&self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// All four directions, in a stable order.
    pub fn all() -> [Direction; 4] {
        [Self::Up, Self::Down, Self::Left, Self::Right]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacements_are_unit_vectors() {
        assert_eq!(Direction::Up.displacement(), (0, -1));
        assert_eq!(Direction::Down.displacement(), (0, 1));
        assert_eq!(Direction::Left.displacement(), (-1, 0));
        assert_eq!(Direction::Right.displacement(), (1, 0));
    }

    #[test]
    fn all_lists_every_direction() {
        assert_eq!(
            Direction::all(),
            [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right
            ]
        );
    }

    #[test]
    fn from_str_parses_case_insensitively() {
        assert_eq!(Direction::from_str("up"), Ok(Direction::Up));
        assert_eq!(Direction::from_str("UP"), Ok(Direction::Up));
        assert_eq!(Direction::from_str("Right"), Ok(Direction::Right));
        assert_eq!(Direction::from_str("sideways"), Err(()));
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::Down.to_string(), "down");
    }

    #[test]
    fn serde_roundtrip() {
        let dir = Direction::Left;
        let json = serde_json::to_string(&dir).unwrap();
        assert_eq!(json, "\"left\"");
        let parsed: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dir);
    }
}
