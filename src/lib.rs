//! Square grid mazes: random perfect maze generation and breadth/depth first path search.
//!
//! Both algorithms work step by step and report every change to an optional
//! [`Observer`](progress::Observer), so a front end can animate them, pace them or stop them.
//!
//! ```
//! use gridmaze::{settings::Settings, maze::Mode};
//!
//! let settings = Settings::new().size(15).seed(1).mode(Mode::Breadth);
//! let mut maze = settings.generate(None).unwrap();
//! let path = maze.bfs().unwrap();
//! assert_eq!(path.first(), Some(&maze.start()));
//! ```

pub mod core;
pub mod helpers;
pub mod maze;
pub mod progress;
pub mod settings;

pub use crate::core::{Coord, Direction, Error, InvalidMazeError, Result};
pub use crate::maze::{Cell, Maze, Mode, Path};
