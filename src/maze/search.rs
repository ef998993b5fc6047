use std::{collections::VecDeque, fmt, time::Duration};

use serde::{Deserialize, Serialize};

use crate::core::Coord;
use crate::maze::Maze;
use crate::progress::{Interrupted, Observer, Reporter};

/// Cells from the entrance to the exit, both included.
pub type Path = Vec<Coord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Level order, the first path found is a shortest one.
    #[default]
    Breadth,
    /// Stack order, neighbors are still tried up, right, down, left.
    Depth,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Breadth => write!(f, "breadth-first"),
            Mode::Depth => write!(f, "depth-first"),
        }
    }
}

impl Maze {
    pub fn bfs(&mut self) -> Option<Path> {
        self.search(Mode::Breadth)
    }

    pub fn dfs(&mut self) -> Option<Path> {
        self.search(Mode::Depth)
    }

    pub fn search(&mut self, mode: Mode) -> Option<Path> {
        // without an observer there is nobody to interrupt the run
        self.search_with(mode, None, Duration::ZERO)
            .unwrap_or_default()
    }

    /// Searches a path from the entrance to the exit, reporting every visited cell and finally
    /// the found path to `observer`.
    ///
    /// Returns `Ok(None)` when the exit is unreachable or not set at all. Scratch state of any
    /// previous run is cleared first; afterwards [`Maze::visited`] holds every expanded cell and
    /// [`Maze::found`] the returned path.
    pub fn search_with(
        &mut self,
        mode: Mode,
        observer: Option<&mut dyn Observer>,
        delay: Duration,
    ) -> Result<Option<Path>, Interrupted> {
        self.reset();
        let mut reporter = Reporter::new(observer, delay);

        log::debug!(
            "Starting {} search from {} to {:?}",
            mode,
            self.start,
            self.end
        );

        let mut paths: VecDeque<Path> = VecDeque::from([vec![self.start]]);

        loop {
            let path = match mode {
                Mode::Breadth => paths.pop_front(),
                Mode::Depth => paths.pop_back(),
            };
            let Some(path) = path else {
                break;
            };
            let Some(&curr) = path.last() else {
                continue;
            };

            if Some(curr) == self.end {
                reporter.finish(&path)?;
                self.found.extend(path.iter().copied());
                log::debug!(
                    "Found path of {} steps after visiting {} cells",
                    path.len() - 1,
                    self.visited.len()
                );
                return Ok(Some(path));
            }

            // the same cell can be queued by several paths before it gets visited
            if !self.movable(curr) {
                continue;
            }

            self.visited.insert(curr);
            log::trace!("Visiting {}", curr);
            reporter.step(&[curr])?;

            let mut adjacent = self.adjacent(curr);
            if mode == Mode::Depth {
                // popped from the same end, so reversed pushes keep the up-first preference
                adjacent.reverse();
            }

            for next in adjacent {
                if self.movable(next) {
                    let mut next_path = path.clone();
                    next_path.push(next);
                    paths.push_back(next_path);
                }
            }
        }

        log::debug!("No path found, visited {} cells", self.visited.len());
        Ok(None)
    }
}
