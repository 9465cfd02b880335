//! The world a rover runs in: a bounded grid and the obstacles on it.
//!
//! Both pieces are built once per run and never change afterwards.

mod grid;
mod obstacles;

pub use grid::Grid;
pub use obstacles::ObstacleMap;

/// Errors that can occur while describing a world.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("grid dimensions must be positive (got {width}x{height})")]
    EmptyGrid { width: i64, height: i64 },
}
