use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular collection of cells, addressable by `(row, col)` or by flat
/// index. The grid exclusively owns its cells; neighbor relationships are
/// derived from index arithmetic rather than stored links.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Allocates a `rows x cols` grid of inert cells. Dimensions must be
    /// positive; allocation failure is reported instead of aborting.
    pub fn build(rows: Coord, cols: Coord) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidConfiguration);
        }

        let total = mult(rows, cols) as usize;
        let mut cells: Vec<Cell> = Vec::new();
        cells
            .try_reserve_exact(total)
            .map_err(|_| GameError::OutOfMemory)?;
        cells.resize(total, Cell::default());

        let cells = Array2::from_shape_vec((rows as usize, cols as usize), cells)
            .expect("shape matches reserved length");
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (
            dim.0.try_into().expect("rows fit in Coord"),
            dim.1.try_into().expect("cols fit in Coord"),
        )
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn validate(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate(coords)?;
        Ok(self[coords])
    }

    pub(crate) fn get_mut(&mut self, coords: Coord2) -> Result<&mut Cell> {
        let coords = self.validate(coords)?;
        Ok(&mut self[coords])
    }

    /// In-bounds neighbors of `coords`, up to 8. The iterator captures only
    /// the board bounds, so it stays usable while cells are mutated.
    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn index_of(&self, coords: Coord2) -> FlatIndex {
        coords.0 as FlatIndex * self.cols() as FlatIndex + coords.1 as FlatIndex
    }

    pub fn coords_of(&self, index: FlatIndex) -> Coord2 {
        let cols = self.cols() as FlatIndex;
        ((index / cols) as Coord, (index % cols) as Coord)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_creates_inert_cells() {
        let grid = Grid::build(4, 7).unwrap();
        assert_eq!(grid.size(), (4, 7));
        assert_eq!(grid.total_cells(), 28);
        assert!(grid.cells().all(|&cell| cell == Cell::default()));
    }

    #[test]
    fn build_rejects_empty_dimensions() {
        assert_eq!(Grid::build(0, 5), Err(GameError::InvalidConfiguration));
        assert_eq!(Grid::build(5, 0), Err(GameError::InvalidConfiguration));
    }

    #[test]
    fn out_of_bounds_coords_are_rejected() {
        let grid = Grid::build(3, 3).unwrap();
        assert_eq!(grid.get((3, 0)), Err(GameError::OutOfBounds));
        assert_eq!(grid.get((0, 3)), Err(GameError::OutOfBounds));
        assert!(grid.get((2, 2)).is_ok());
    }

    #[test]
    fn flat_index_follows_row_major_order() {
        let grid = Grid::build(3, 5).unwrap();
        assert_eq!(grid.index_of((0, 0)), 0);
        assert_eq!(grid.index_of((1, 2)), 7);
        assert_eq!(grid.coords_of(7), (1, 2));
        assert_eq!(grid.coords_of(14), (2, 4));
    }

    #[test]
    fn neighbors_stay_inside_the_grid() {
        let grid = Grid::build(2, 2).unwrap();
        let neighbors: alloc::vec::Vec<_> = grid.neighbors((0, 0)).collect();
        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }
}
