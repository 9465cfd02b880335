//! Rover state: where the rover is and which way it faces.

use serde::{Deserialize, Serialize};

use super::{Direction, Position};

/// An immutable snapshot of the rover.
///
/// Updates go through `with_*` and produce a new snapshot.
/// Legality of the new state is checked by the processor, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverState {
    pub position: Position,
    pub direction: Direction,
}

impl RoverState {
    pub const fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    #[must_use]
    pub const fn with_position(self, position: Position) -> Self {
        Self { position, ..self }
    }

    #[must_use]
    pub const fn with_direction(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }
}
