//! Commands the rover understands.

/// A single rover instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `F`: move one cell in the current heading.
    Forward,
    /// `L`: rotate counter-clockwise in place.
    TurnLeft,
    /// `R`: rotate clockwise in place.
    TurnRight,
}

impl Command {
    /// Maps a command character. Only upper-case `F`, `L`, `R` are recognised.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'F' => Some(Self::Forward),
            'L' => Some(Self::TurnLeft),
            'R' => Some(Self::TurnRight),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
        }
    }
}
