//! Core data model for the rover.
//!
//! Plain value types: positions, headings, rover snapshots, commands,
//! and the report produced by a run. Nothing here mutates in place.

mod command;
mod direction;
mod position;
mod report;
mod state;

pub use command::Command;
pub use direction::Direction;
pub use position::Position;
pub use report::{ExecutionReport, ReportError};
pub use state::RoverState;
