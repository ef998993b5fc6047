use crate::core::Coord;

pub fn get_2d<T>(vec: &[Vec<T>], pos: Coord) -> Option<&T> {
    let (row, col) = pos.to_index()?;
    vec.get(row).and_then(|r| r.get(col))
}

pub fn get_2d_mut<T>(vec: &mut [Vec<T>], pos: Coord) -> Option<&mut T> {
    let (row, col) = pos.to_index()?;
    vec.get_mut(row).and_then(|r| r.get_mut(col))
}
