use std::time::Duration;

use rand::seq::SliceRandom as _;

use super::{MazeAlgorithm, Random};
use crate::core::*;
use crate::maze::Maze;
use crate::progress::{Observer, Reporter};

/// Randomized depth-first carver producing perfect mazes.
///
/// Rooms sit on odd coordinates and the cells in between are walls. Starting from the entrance,
/// every admitted room is linked to the room it was reached from by opening the single wall
/// cell between them. Rooms are admitted only while still movable, so each of them joins the tree
/// exactly once and no cycle can ever appear.
#[derive(Debug, Clone, Copy, Default)]
pub struct RndBacktracker;

impl RndBacktracker {
    /// Carves a lattice shaped `maze` in place and picks its exit.
    ///
    /// The exit is drawn uniformly from every open cell except the entrance, rooms and carved
    /// walls alike. The smallest maze, `3`×`3`, has no such cell and fails with
    /// [`Error::NoMovableCell`], leaving the grid carved but without an exit.
    pub fn carve(
        &self,
        maze: &mut Maze,
        rng: &mut Random,
        observer: Option<&mut dyn Observer>,
        delay: Duration,
    ) -> Result<()> {
        let size = maze.size();
        if size < 3 || size % 2 == 0 {
            return Err(InvalidMazeError::InvalidSize(size).into());
        }

        maze.reset();
        let mut reporter = Reporter::new(observer, delay);

        let mut stack: Vec<(Option<Coord>, Coord)> = vec![(None, maze.start())];
        while let Some((wall, curr)) = stack.pop() {
            if !maze.movable(curr) {
                continue;
            }

            maze.visited.insert(curr);
            if let Some(wall) = wall {
                maze.carve(wall);
                reporter.step(&[wall])?;
            }

            let mut candidates = Self::two_step_adjacent(curr);
            candidates.shuffle(rng);
            for (wall, far) in candidates {
                if maze.movable(far) {
                    stack.push((Some(wall), far));
                }
            }
        }

        let end = Self::pick_exit(maze, rng).map_err(|err| {
            log::warn!("No cell left for the exit of {0}x{0} maze", size);
            err
        })?;
        maze.set_end(Some(end))?;
        reporter.finish(&[end])?;

        Ok(())
    }

    /// Any open cell other than the entrance, the carving marks are dropped first.
    fn pick_exit(maze: &mut Maze, rng: &mut Random) -> Result<Coord> {
        maze.reset();
        maze.visited.insert(maze.start());
        let end = maze.random_movable(rng);
        maze.reset();
        end
    }

    /// Pairs of (wall in between, room behind it) in up, right, down, left order.
    fn two_step_adjacent(pos: Coord) -> [(Coord, Coord); 4] {
        Direction::get_in_order().map(|dir| (pos.offset(dir, 1), pos.offset(dir, 2)))
    }
}

impl MazeAlgorithm for RndBacktracker {
    fn generate(
        &self,
        size: usize,
        rng: &mut Random,
        observer: Option<&mut dyn Observer>,
        delay: Duration,
    ) -> Result<Maze> {
        let mut maze = Maze::lattice(size)?;
        self.carve(&mut maze, rng, observer, delay)?;

        log::debug!(
            "Generated {0}x{0} perfect maze, exit at {1:?}",
            size,
            maze.end()
        );

        Ok(maze)
    }
}
