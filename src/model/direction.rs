//! Direction: the four compass headings and how they rotate and project.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Position;

/// A compass heading.
///
/// Clockwise order is N → E → S → W → N. Serialized as the single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    E,
    S,
    W,
}

impl Direction {
    /// All headings in clockwise order, starting at north.
    pub const ALL: [Self; 4] = [Self::N, Self::E, Self::S, Self::W];

    /// Rotate one step counter-clockwise.
    #[must_use]
    pub const fn turn_left(self) -> Self {
        match self {
            Self::N => Self::W,
            Self::W => Self::S,
            Self::S => Self::E,
            Self::E => Self::N,
        }
    }

    /// Rotate one step clockwise.
    #[must_use]
    pub const fn turn_right(self) -> Self {
        match self {
            Self::N => Self::E,
            Self::E => Self::S,
            Self::S => Self::W,
            Self::W => Self::N,
        }
    }

    /// Unit displacement `(dx, dy)` for one step in this heading.
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::N => (0, 1),
            Self::E => (1, 0),
            Self::S => (0, -1),
            Self::W => (-1, 0),
        }
    }

    /// The cell one step ahead of `current`. No bounds checking.
    pub const fn next_position(self, current: Position) -> Position {
        let (dx, dy) = self.delta();
        current.translated(dx, dy)
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::N => 'N',
            Self::E => 'E',
            Self::S => 'S',
            Self::W => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Case-insensitive: `"n"` and `"N"` both parse to [`Direction::N`].
impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Self::N),
            "E" => Ok(Self::E),
            "S" => Ok(Self::S),
            "W" => Ok(Self::W),
            _ => Err(format!("unknown direction '{s}' (expected one of N, E, S, W)")),
        }
    }
}
