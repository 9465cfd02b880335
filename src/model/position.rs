//! Position: a plain integer coordinate on the plane.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An integer 2D coordinate.
///
/// Carries no range constraint of its own. Whether a position is legal
/// depends on the grid and obstacle map it is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by `(dx, dy)`.
    #[must_use]
    pub const fn translated(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses the CLI form `x,y` (whitespace around either number is ignored).
impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `x,y`, got '{s}'"))?;
        let x = x
            .trim()
            .parse()
            .map_err(|e| format!("invalid x coordinate '{}': {e}", x.trim()))?;
        let y = y
            .trim()
            .parse()
            .map_err(|e| format!("invalid y coordinate '{}': {e}", y.trim()))?;
        Ok(Self { x, y })
    }
}
