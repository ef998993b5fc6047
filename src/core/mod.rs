mod coord;

pub use coord::{Coord, Direction};

use thiserror::Error;

use crate::progress::Interrupted;

/// Broken invariant of a grid, reported by construction and by start/end edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMazeError {
    #[error("Maze must not be empty")]
    Empty,
    #[error("Maze must be square; {rows} rows, but row {row} has {len} cells")]
    NotSquare { rows: usize, row: usize, len: usize },
    #[error("Cell {coord} has value {value}, expected 0 (open) or 1 (wall)")]
    InvalidCell { coord: Coord, value: u8 },
    #[error("Entrance {0} is outside of the maze")]
    StartOutOfBounds(Coord),
    #[error("Exit {0} is outside of the maze")]
    EndOutOfBounds(Coord),
    #[error("Entrance {0} must not be on a wall")]
    StartOnWall(Coord),
    #[error("Exit {0} must not be on a wall")]
    EndOnWall(Coord),
    #[error("Entrance and exit cannot be the same cell {0}")]
    StartIsEnd(Coord),
    #[error("Generated maze size must be odd and at least 3, got {0}")]
    InvalidSize(usize),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    InvalidMaze(#[from] InvalidMazeError),
    #[error("No movable cell left in the maze")]
    NoMovableCell,
    #[error("Interrupted by progress observer")]
    Interrupted,
    #[error("Invalid settings; {0}")]
    InvalidSettings(String),
}

impl From<Interrupted> for Error {
    fn from(_: Interrupted) -> Self {
        Error::Interrupted
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
