use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Ground-truth content of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardCell {
    Mine,
    Count(u8),
}

impl BoardCell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl Default for BoardCell {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Fully generated minefield, immutable once built.
///
/// Every non-mine cell holds the exact number of mines among its neighbors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<BoardCell>,
    mine_count: CellCount,
}

impl Board {
    /// Builds a board from mine positions, counting adjacent mines for every safe cell.
    ///
    /// Duplicate positions are counted once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        if mine_coords.iter().any(|&coords| !in_bounds(coords, size)) {
            return Err(GameError::InvalidCoords);
        }
        Ok(Self::from_mines(size, mine_coords.iter().copied()))
    }

    /// Caller guarantees every position is within `size`.
    pub(crate) fn from_mines(size: Coord2, mines: impl IntoIterator<Item = Coord2>) -> Self {
        let mut cells: Array2<BoardCell> = Array2::default(size.to_nd_index());

        let mut mine_count: CellCount = 0;
        for coords in mines {
            let cell = &mut cells[coords.to_nd_index()];
            if !cell.is_mine() {
                *cell = BoardCell::Mine;
                mine_count += 1;
            }
        }

        for row in 0..size.0 {
            for column in 0..size.1 {
                let coords = (row, column);
                if !cells[coords.to_nd_index()].is_mine() {
                    continue;
                }
                for pos in neighbors(coords, size) {
                    if let BoardCell::Count(count) = &mut cells[pos.to_nd_index()] {
                        *count += 1;
                    }
                }
            }
        }

        Self { cells, mine_count }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.cells.dim();
        // dimensions come from a Coord2, so they always fit
        (rows as Coord, columns as Coord)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, columns) = self.size();
        mult(rows, columns)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|((row, column), _)| (row as Coord, column as Coord))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }
}

impl Index<Coord2> for Board {
    type Output = BoardCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
