pub mod algorithms;
pub mod cell;
pub mod maze;
pub mod search;

pub use cell::Cell;
pub use maze::Maze;
pub use search::{Mode, Path};

/// All-open `size`×`size` grid in the raw form accepted by [`Maze::new`].
pub fn empty_cells(size: usize) -> Vec<Vec<u8>> {
    vec![vec![0; size]; size]
}
