use std::{collections::HashSet, fmt};

use rand::Rng;

use crate::core::*;
use crate::helpers::{get_2d, get_2d_mut};
use crate::maze::cell::Cell;

/// Square grid of open and wall cells with an entrance, an optional exit and the scratch sets
/// used by the algorithms.
///
/// Every constructor and every start/end edit checks the invariants:
/// - the grid is non-empty and square,
/// - the entrance is inside and open,
/// - the exit, if any, is inside, open and different from the entrance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub(crate) cells: Vec<Vec<Cell>>,
    pub(crate) size: usize,
    pub(crate) start: Coord,
    pub(crate) end: Option<Coord>,
    pub(crate) visited: HashSet<Coord>,
    pub(crate) found: HashSet<Coord>,
}

impl Maze {
    /// Builds a maze from raw values, `0` is open, `1` is a wall.
    pub fn new(
        cells: Vec<Vec<u8>>,
        start: Coord,
        end: Option<Coord>,
    ) -> Result<Self, InvalidMazeError> {
        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(r, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(c, value)| {
                        Cell::try_from(value).map_err(|value| InvalidMazeError::InvalidCell {
                            coord: Coord::new(r as i32, c as i32),
                            value,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cells(cells, start, end)
    }

    pub fn from_cells(
        cells: Vec<Vec<Cell>>,
        start: Coord,
        end: Option<Coord>,
    ) -> Result<Self, InvalidMazeError> {
        let size = cells.len();
        if size == 0 {
            return Err(InvalidMazeError::Empty);
        }

        if let Some((row, r)) = cells.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(InvalidMazeError::NotSquare {
                rows: size,
                row,
                len: r.len(),
            });
        }

        let mut maze = Maze {
            cells,
            size,
            start,
            end: None,
            visited: HashSet::new(),
            found: HashSet::new(),
        };
        maze.check_start(start)?;
        if let Some(end) = end {
            maze.check_end(end)?;
        }
        maze.end = end;

        Ok(maze)
    }

    /// All-wall grid where only cells with both coordinates odd are open, entrance at `(1, 1)`.
    ///
    /// This is the starting point of perfect maze generation, see
    /// [`RndBacktracker`](crate::maze::algorithms::RndBacktracker).
    pub fn lattice(size: usize) -> Result<Self, InvalidMazeError> {
        if size < 3 || size % 2 == 0 {
            return Err(InvalidMazeError::InvalidSize(size));
        }

        let cells = (0..size)
            .map(|r| {
                (0..size)
                    .map(|c| {
                        if r % 2 == 1 && c % 2 == 1 {
                            Cell::Open
                        } else {
                            Cell::Wall
                        }
                    })
                    .collect()
            })
            .collect();

        Self::from_cells(cells, Coord::new(1, 1), None)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Copy of the grid in the raw `0`/`1` form accepted by [`Maze::new`].
    pub fn raw_cells(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_raw()).collect())
            .collect()
    }

    pub fn cell(&self, pos: Coord) -> Option<Cell> {
        get_2d(&self.cells, pos).copied()
    }

    pub fn visited(&self) -> &HashSet<Coord> {
        &self.visited
    }

    pub fn found(&self) -> &HashSet<Coord> {
        &self.found
    }

    pub fn is_in_bounds(&self, pos: Coord) -> bool {
        self.cell(pos).is_some()
    }

    pub fn is_open(&self, pos: Coord) -> bool {
        self.cell(pos).is_some_and(Cell::is_open)
    }

    /// In bounds, open and not yet visited during the current run.
    ///
    /// This is the only check both searching and generation use to admit a cell.
    pub fn movable(&self, pos: Coord) -> bool {
        self.is_open(pos) && !self.visited.contains(&pos)
    }

    /// Up, right, down and left neighbors of `pos`, bounds are not checked.
    pub fn adjacent(&self, pos: Coord) -> [Coord; 4] {
        pos.adjacent()
    }

    /// Forgets the state of the previous run, the grid and both endpoints are kept.
    pub fn reset(&mut self) {
        self.visited.clear();
        self.found.clear();
    }

    pub fn positions(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size as i32;
        (0..size).flat_map(move |r| (0..size).map(move |c| Coord::new(r, c)))
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.positions().filter(|&pos| self.is_open(pos))
    }

    /// Number of pairs of open cells sharing a side.
    pub fn passage_count(&self) -> usize {
        self.open_cells()
            .map(|pos| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&dir| self.is_open(pos.offset(dir, 1)))
                    .count()
            })
            .sum()
    }

    /// Uniformly random movable cell.
    ///
    /// Fails with [`Error::NoMovableCell`] instead of sampling forever when every cell is either
    /// a wall or already visited.
    pub fn random_movable<R: Rng>(&self, rng: &mut R) -> Result<Coord> {
        if !self.positions().any(|pos| self.movable(pos)) {
            return Err(Error::NoMovableCell);
        }

        let size = self.size as i32;
        loop {
            let pos = Coord::new(rng.gen_range(0..size), rng.gen_range(0..size));
            if self.movable(pos) {
                return Ok(pos);
            }
        }
    }

    /// Moves the entrance, the maze is left untouched if the new one breaks any invariant.
    pub fn set_start(&mut self, start: Coord) -> Result<(), InvalidMazeError> {
        self.check_start(start)?;
        self.start = start;
        Ok(())
    }

    /// Moves or removes the exit, the maze is left untouched if the new one breaks any invariant.
    pub fn set_end(&mut self, end: Option<Coord>) -> Result<(), InvalidMazeError> {
        if let Some(end) = end {
            self.check_end(end)?;
        }
        self.end = end;
        Ok(())
    }

    pub(crate) fn carve(&mut self, pos: Coord) {
        if let Some(cell) = get_2d_mut(&mut self.cells, pos) {
            *cell = Cell::Open;
        }
    }

    fn check_start(&self, start: Coord) -> Result<(), InvalidMazeError> {
        match self.cell(start) {
            None => Err(InvalidMazeError::StartOutOfBounds(start)),
            Some(Cell::Wall) => Err(InvalidMazeError::StartOnWall(start)),
            Some(Cell::Open) if self.end == Some(start) => {
                Err(InvalidMazeError::StartIsEnd(start))
            }
            Some(Cell::Open) => Ok(()),
        }
    }

    fn check_end(&self, end: Coord) -> Result<(), InvalidMazeError> {
        match self.cell(end) {
            None => Err(InvalidMazeError::EndOutOfBounds(end)),
            Some(Cell::Wall) => Err(InvalidMazeError::EndOnWall(end)),
            Some(Cell::Open) if self.start == end => Err(InvalidMazeError::StartIsEnd(end)),
            Some(Cell::Open) => Ok(()),
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size.saturating_sub(1).to_string().len();

        write!(f, "{:width$} ", "")?;
        for c in 0..self.size {
            write!(f, " {c:>width$}")?;
        }
        writeln!(f)?;

        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{r:>width$} ")?;
            for (c, cell) in row.iter().enumerate() {
                let pos = Coord::new(r as i32, c as i32);
                let ch = if pos == self.start {
                    'p'
                } else if Some(pos) == self.end {
                    'e'
                } else if self.found.contains(&pos) {
                    '*'
                } else if self.visited.contains(&pos) {
                    'v'
                } else if cell.is_open() {
                    '.'
                } else {
                    '#'
                };
                write!(f, " {ch:>width$}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::maze::{algorithms::Random, empty_cells};

    fn ring() -> Maze {
        Maze::new(
            vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]],
            Coord::new(0, 0),
            Some(Coord::new(2, 2)),
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            Maze::new(vec![], Coord::ZERO, None),
            Err(InvalidMazeError::Empty)
        );
    }

    #[test]
    fn rejects_non_square() {
        assert_eq!(
            Maze::new(vec![vec![0, 0, 0], vec![0, 0, 0]], Coord::ZERO, None),
            Err(InvalidMazeError::NotSquare {
                rows: 2,
                row: 0,
                len: 3
            })
        );
        assert_eq!(
            Maze::new(vec![vec![0, 0], vec![0]], Coord::ZERO, None),
            Err(InvalidMazeError::NotSquare {
                rows: 2,
                row: 1,
                len: 1
            })
        );
        assert_eq!(
            Maze::new(vec![vec![]], Coord::ZERO, None),
            Err(InvalidMazeError::NotSquare {
                rows: 1,
                row: 0,
                len: 0
            })
        );
    }

    #[test]
    fn rejects_unknown_values() {
        assert_eq!(
            Maze::new(vec![vec![0, 2], vec![0, 0]], Coord::ZERO, None),
            Err(InvalidMazeError::InvalidCell {
                coord: Coord::new(0, 1),
                value: 2
            })
        );
    }

    #[test]
    fn rejects_bad_endpoints() {
        let cells = || vec![vec![0, 1], vec![0, 0]];
        assert_eq!(
            Maze::new(cells(), Coord::new(0, 1), None),
            Err(InvalidMazeError::StartOnWall(Coord::new(0, 1)))
        );
        assert_eq!(
            Maze::new(cells(), Coord::ZERO, Some(Coord::new(0, 1))),
            Err(InvalidMazeError::EndOnWall(Coord::new(0, 1)))
        );
        assert_eq!(
            Maze::new(cells(), Coord::ZERO, Some(Coord::ZERO)),
            Err(InvalidMazeError::StartIsEnd(Coord::ZERO))
        );
        assert_eq!(
            Maze::new(cells(), Coord::new(2, 0), None),
            Err(InvalidMazeError::StartOutOfBounds(Coord::new(2, 0)))
        );
        assert_eq!(
            Maze::new(cells(), Coord::ZERO, Some(Coord::new(-1, 0))),
            Err(InvalidMazeError::EndOutOfBounds(Coord::new(-1, 0)))
        );
        assert!(Maze::new(cells(), Coord::ZERO, Some(Coord::new(1, 1))).is_ok());
    }

    #[test]
    fn movable() {
        let mut maze = ring();
        assert!(maze.movable(Coord::new(0, 1)));
        assert!(!maze.movable(Coord::new(1, 1)));
        assert!(!maze.movable(Coord::new(-1, 0)));
        assert!(!maze.movable(Coord::new(0, 3)));
        assert!(maze.is_in_bounds(Coord::new(1, 1)));
        assert!(!maze.is_in_bounds(Coord::new(0, 3)));
        assert!(!maze.is_in_bounds(Coord::new(-1, 2)));

        maze.visited.insert(Coord::new(0, 1));
        assert!(!maze.movable(Coord::new(0, 1)));
        assert!(maze.is_open(Coord::new(0, 1)));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut maze = ring();
        maze.visited.insert(Coord::new(0, 1));
        maze.found.insert(Coord::new(0, 2));
        let before = maze.raw_cells();

        maze.reset();
        let once = maze.clone();
        maze.reset();

        assert_eq!(maze, once);
        assert!(maze.visited().is_empty());
        assert!(maze.found().is_empty());
        assert_eq!(maze.raw_cells(), before);
        assert_eq!(maze.start(), Coord::new(0, 0));
        assert_eq!(maze.end(), Some(Coord::new(2, 2)));
    }

    #[test]
    fn lattice() {
        assert_eq!(Maze::lattice(4), Err(InvalidMazeError::InvalidSize(4)));
        assert_eq!(Maze::lattice(1), Err(InvalidMazeError::InvalidSize(1)));

        let maze = Maze::lattice(5).unwrap();
        assert_eq!(maze.start(), Coord::new(1, 1));
        assert_eq!(maze.end(), None);
        assert_eq!(maze.open_cells().count(), 4);
        assert_eq!(maze.passage_count(), 0);
        assert!(maze.open_cells().all(|c| c.row % 2 == 1 && c.col % 2 == 1));
    }

    #[test]
    fn passages() {
        assert_eq!(ring().passage_count(), 8);
        let open = Maze::new(empty_cells(3), Coord::ZERO, None).unwrap();
        assert_eq!(open.passage_count(), 12);
    }

    #[test]
    fn random_movable() {
        let mut rng = Random::seed_from_u64(7);
        let mut maze = ring();
        for _ in 0..50 {
            assert!(maze.movable(maze.random_movable(&mut rng).unwrap()));
        }

        let open: Vec<_> = maze.open_cells().collect();
        maze.visited.extend(open);
        assert_eq!(maze.random_movable(&mut rng), Err(Error::NoMovableCell));
    }

    #[test]
    fn edits_are_validated() {
        let mut maze = ring();

        assert_eq!(
            maze.set_start(Coord::new(1, 1)),
            Err(InvalidMazeError::StartOnWall(Coord::new(1, 1)))
        );
        assert_eq!(
            maze.set_start(Coord::new(2, 2)),
            Err(InvalidMazeError::StartIsEnd(Coord::new(2, 2)))
        );
        assert_eq!(
            maze.set_end(Some(Coord::new(0, 0))),
            Err(InvalidMazeError::StartIsEnd(Coord::new(0, 0)))
        );
        assert_eq!(
            maze.set_end(Some(Coord::new(5, 5))),
            Err(InvalidMazeError::EndOutOfBounds(Coord::new(5, 5)))
        );
        assert_eq!(maze.start(), Coord::new(0, 0));
        assert_eq!(maze.end(), Some(Coord::new(2, 2)));

        maze.set_start(Coord::new(1, 0)).unwrap();
        maze.set_end(None).unwrap();
        assert_eq!(maze.start(), Coord::new(1, 0));
        assert_eq!(maze.end(), None);
    }

    #[test]
    fn display() {
        let mut maze = ring();
        maze.visited.insert(Coord::new(0, 1));
        maze.found.insert(Coord::new(1, 0));

        let text = maze.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines, ["   0 1 2", "0  p v .", "1  * # .", "2  . . e"]);
    }
}
