use std::fmt;
use std::ops::Add;

/// Address of a single cell in the grid.
///
/// Coordinates carry no validity of their own, negative or too large values are perfectly fine
/// here and are only rejected when checked against a concrete [`Maze`](crate::maze::Maze).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const ZERO: Coord = Coord::new(0, 0);

    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    /// Neighbor `steps` cells away in the given direction.
    pub fn offset(self, dir: Direction, steps: i32) -> Self {
        let Coord { row, col } = dir.to_coord();
        Coord::new(self.row + row * steps, self.col + col * steps)
    }

    /// Up, right, down and left neighbors, in this order.
    pub fn adjacent(self) -> [Coord; 4] {
        Direction::get_in_order().map(|dir| self.offset(dir, 1))
    }

    pub fn manhattan(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }

    /// Row and column as indices, `None` if any of them is negative.
    pub fn to_index(self) -> Option<(usize, usize)> {
        Some((usize::try_from(self.row).ok()?, usize::try_from(self.col).ok()?))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Coord::new(row, col)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord::new(self.row + other.row, self.col + other.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Fixed exploration order, searches depend on it for tie-breaking.
    pub const fn get_in_order() -> [Direction; 4] {
        use Direction::*;
        [Up, Right, Down, Left]
    }

    pub const fn to_coord(self) -> Coord {
        match self {
            Direction::Up => Coord::new(-1, 0),
            Direction::Right => Coord::new(0, 1),
            Direction::Down => Coord::new(1, 0),
            Direction::Left => Coord::new(0, -1),
        }
    }

    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}
