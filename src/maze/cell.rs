/// Content of one grid cell, stored as `0` (open) or `1` (wall) in raw cell arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Open,
    #[default]
    Wall,
}

impl Cell {
    pub fn is_open(self) -> bool {
        self == Cell::Open
    }

    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    pub fn to_raw(self) -> u8 {
        match self {
            Cell::Open => 0,
            Cell::Wall => 1,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Open),
            1 => Ok(Cell::Wall),
            other => Err(other),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.to_raw()
    }
}
