//! Grid: the rectangular boundary of the world.

use crate::model::Position;

use super::WorldError;

/// A `width` × `height` rectangle anchored at the origin.
///
/// Cells run from `0` to `width - 1` on x and `0` to `height - 1` on y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i64,
    height: i64,
}

impl Grid {
    pub fn new(width: i64, height: i64) -> Result<Self, WorldError> {
        if width <= 0 || height <= 0 {
            return Err(WorldError::EmptyGrid { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// Whether `position` lies on the grid, edges included.
    pub fn contains(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_inside() {
        let grid = Grid::new(200, 200).unwrap();
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(199, 0)));
        assert!(grid.contains(Position::new(0, 199)));
        assert!(grid.contains(Position::new(199, 199)));
    }

    #[test]
    fn just_past_each_edge_is_outside() {
        let grid = Grid::new(200, 200).unwrap();
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(!grid.contains(Position::new(0, -1)));
        assert!(!grid.contains(Position::new(200, 0)));
        assert!(!grid.contains(Position::new(0, 200)));
    }

    #[test]
    fn axes_are_checked_independently() {
        let grid = Grid::new(3, 10).unwrap();
        assert!(grid.contains(Position::new(2, 9)));
        assert!(!grid.contains(Position::new(3, 2)));
        assert!(!grid.contains(Position::new(9, 2)));
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            WorldError::EmptyGrid {
                width: 0,
                height: 5
            }
        );
        assert!(Grid::new(5, -1).is_err());
    }
}
