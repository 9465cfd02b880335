//! Obstacle map: the set of cells the rover may not enter.

use std::collections::HashSet;

use crate::model::Position;

/// A fixed set of blocked cells. Membership is exact coordinate equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleMap {
    blocked: HashSet<Position>,
}

impl ObstacleMap {
    /// Builds the map from any collection of positions. Duplicates collapse.
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        Self {
            blocked: positions.into_iter().collect(),
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        self.blocked.contains(&position)
    }

    /// Number of distinct blocked cells.
    pub fn len(&self) -> usize {
        self.blocked.len()
    }
}

impl FromIterator<Position> for ObstacleMap {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self::from_positions(iter)
    }
}
